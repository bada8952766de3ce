//! Two-pass layout of a binary tree.
//!
//! The layout assigns every node a row and a column:
//!
//! - **Pass A** walks the tree breadth-first from the root (depth 1). Each
//!   node gets an arena index in visitation order, its formatted label, the
//!   label width and its depth. Child links are recorded as arena indices,
//!   so later passes never compare node references.
//! - **Pass B** walks the tree in-order with an explicit stack and hands out
//!   left margins from a running cursor. After each node the cursor moves by
//!   `label_width - 1`, letting adjacent labels share one bracket column.
//!
//! Because Pass B is in-order, every node sits strictly to the right of its
//! left subtree and strictly to the left of its right subtree, so subtrees
//! never overlap.
//!
//! ## Performance Characteristics
//!
//! - O(n) time and memory; correlation between passes is a vector index.
//! - No recursion, so degenerate (list-shaped) trees cannot overflow the stack.

use crate::config::RenderConfig;
use crate::error::{LabelError, RenderError, Result};
use crate::format::LabelFormat;
use crate::tree::BinaryNode;
use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;
use unicode_width::UnicodeWidthStr;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Per-node result of the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct NodeMetadata {
    /// Formatted label text, without brackets.
    pub label: String,
    /// Display columns of the bracketed label.
    pub label_width: usize,
    /// 1-based row; the root is at depth 1.
    pub depth: usize,
    /// 0-based column of the left bracket.
    pub left_margin: usize,
    /// Arena index of the left child.
    pub left: Option<usize>,
    /// Arena index of the right child.
    pub right: Option<usize>,
}

impl NodeMetadata {
    /// Column under the visual center of the label, where the connector from
    /// the parent lands.
    pub fn anchor(&self) -> usize {
        self.left_margin + self.label_width / 2
    }

    /// Column just past the right bracket.
    pub fn right_edge(&self) -> usize {
        self.left_margin + self.label_width
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Metadata for every node reachable from a root.
///
/// Nodes are stored in breadth-first order, which is also ascending depth
/// and, within a depth, left to right. Index 0 is the root.
///
/// # Examples
///
/// ```
/// use ascii_bintree::{Layout, Node, Plain, RenderConfig};
///
/// let tree = Node::new(5).with_left(Node::new(2)).with_right(Node::new(10));
/// let layout = Layout::compute(Some(&tree), &Plain, &RenderConfig::default()).unwrap();
///
/// assert_eq!(layout.len(), 3);
/// assert_eq!(layout.height(), 2);
///
/// let margins: Vec<_> = layout.nodes().iter().map(|n| n.left_margin).collect();
/// assert_eq!(margins, vec![2, 0, 4]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Layout {
    nodes: Vec<NodeMetadata>,
}

impl Layout {
    /// Lay out the tree under `root`. An absent root yields an empty layout.
    ///
    /// Fails before producing anything if the tree exceeds
    /// [`RenderConfig::max_nodes`], a label exceeds
    /// [`RenderConfig::max_label_width`], or the formatter fails.
    pub fn compute<N, F>(root: Option<&N>, format: &F, config: &RenderConfig) -> Result<Self>
    where
        N: BinaryNode + ?Sized,
        F: LabelFormat<N::Label> + ?Sized,
    {
        let Some(root) = root else {
            return Ok(Self::default());
        };
        let _span = tracing::debug_span!("compute_layout").entered();

        let mut layout = Self::assign_depths(root, format, config)?;
        layout.assign_margins();

        tracing::debug!(
            nodes = layout.len(),
            height = layout.height(),
            width = layout.width(),
            "layout computed"
        );
        Ok(layout)
    }

    /// Pass A: breadth-first walk creating one record per node.
    fn assign_depths<N, F>(root: &N, format: &F, config: &RenderConfig) -> Result<Self>
    where
        N: BinaryNode + ?Sized,
        F: LabelFormat<N::Label> + ?Sized,
    {
        let mut nodes = Vec::new();
        let mut queue = Admission::new(config.max_nodes);

        queue.admit(root, 1)?;
        while let Some((node, depth)) = queue.pending.pop_front() {
            let label = format_label(node.label(), format, config)?;
            let left = node
                .left()
                .map(|child| queue.admit(child, depth + 1))
                .transpose()?;
            let right = node
                .right()
                .map(|child| queue.admit(child, depth + 1))
                .transpose()?;

            nodes.push(NodeMetadata {
                label_width: label.width + 2,
                label: label.text,
                depth,
                left_margin: 0,
                left,
                right,
            });
        }

        Ok(Self { nodes })
    }

    /// Pass B: in-order walk assigning left margins.
    fn assign_margins(&mut self) {
        let mut stack = Vec::new();
        let mut cursor = 0;
        let mut current = (!self.nodes.is_empty()).then_some(0);

        loop {
            while let Some(idx) = current {
                stack.push(idx);
                current = self.nodes[idx].left;
            }
            let Some(idx) = stack.pop() else {
                break;
            };
            let node = &mut self.nodes[idx];
            node.left_margin = cursor;
            cursor += node.label_width - 1;
            current = node.right;
        }
    }

    pub fn nodes(&self) -> &[NodeMetadata] {
        &self.nodes
    }

    pub fn get(&self, index: usize) -> Option<&NodeMetadata> {
        self.nodes.get(index)
    }

    pub fn root(&self) -> Option<&NodeMetadata> {
        self.nodes.first()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of label rows, i.e. the deepest depth. Zero when empty.
    pub fn height(&self) -> usize {
        self.nodes.last().map_or(0, |n| n.depth)
    }

    /// Column count of the widest row.
    pub fn width(&self) -> usize {
        self.nodes
            .iter()
            .map(NodeMetadata::right_edge)
            .max()
            .unwrap_or(0)
    }

    /// Nodes grouped by depth, shallowest first, each group left to right.
    pub fn levels(&self) -> impl Iterator<Item = &[NodeMetadata]> {
        self.nodes.chunk_by(|a, b| a.depth == b.depth)
    }

    /// Arena indices in in-order (left, node, right) sequence.
    pub fn in_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.nodes.len()).collect();
        order.sort_unstable_by_key(|&idx| self.nodes[idx].left_margin);
        order
    }

    /// Estimate the rendered size in bytes, for pre-allocating buffers.
    pub fn estimate_size(&self) -> usize {
        // Two rows per depth, `width` columns plus the line break.
        2 * self.height() * (self.width() + 1)
    }
}

/// Lay out the tree under `root`. See [`Layout::compute`].
pub fn compute_layout<N, F>(root: Option<&N>, format: &F, config: &RenderConfig) -> Result<Layout>
where
    N: BinaryNode + ?Sized,
    F: LabelFormat<N::Label> + ?Sized,
{
    Layout::compute(root, format, config)
}

/// Breadth-first work queue that hands out arena indices.
///
/// Indices are assigned at enqueue time, so they follow breadth-first order
/// and a parent learns its children's slots before they are visited.
struct Admission<'t, N: ?Sized> {
    pending: VecDeque<(&'t N, usize)>,
    admitted: usize,
    max_nodes: Option<usize>,
}

impl<'t, N: ?Sized> Admission<'t, N> {
    fn new(max_nodes: Option<usize>) -> Self {
        Self {
            pending: VecDeque::new(),
            admitted: 0,
            max_nodes,
        }
    }

    fn admit(&mut self, node: &'t N, depth: usize) -> Result<usize> {
        if let Some(max) = self.max_nodes {
            if self.admitted >= max {
                tracing::warn!(max, "node limit exceeded");
                return Err(RenderError::TooManyNodes { max });
            }
        }
        self.pending.push_back((node, depth));
        self.admitted += 1;
        Ok(self.admitted - 1)
    }
}

struct FormattedLabel {
    text: String,
    width: usize,
}

fn format_label<L, F>(label: &L, format: &F, config: &RenderConfig) -> Result<FormattedLabel>
where
    L: ?Sized,
    F: LabelFormat<L> + ?Sized,
{
    let mut text = String::new();
    format.write_label(label, &mut text)?;
    if text.contains(['\n', '\r']) {
        return Err(LabelError::LineBreak(text).into());
    }

    let width = text.width();
    if let Some(max) = config.max_label_width {
        if width > max {
            tracing::warn!(width, max, "label width limit exceeded");
            return Err(RenderError::LabelTooWide {
                label: text,
                width,
                max,
            });
        }
    }
    Ok(FormattedLabel { text, width })
}
