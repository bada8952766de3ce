//! # ascii-bintree
//!
//! Lightweight ASCII/Unicode renderer for binary trees: every label in
//! brackets, horizontal connectors out to the children and vertical
//! connectors down to the next row.
//!
//! ## Features
//!
//! - **Compact**: subtrees never overlap, adjacent labels share a column
//! - **Fast**: O(n) two-pass layout, no recursion
//! - **Generic**: any node type via [`BinaryNode`], any label via [`LabelFormat`]
//! - **Safe**: capacity ceilings are reported as errors, never truncated
//!
//! ## Quick Start
//!
//! ```rust
//! use ascii_bintree::{Node, Plain, render};
//!
//! let tree = Node::new(5)
//!     .with_left(Node::new(2))
//!     .with_right(Node::new(10).with_left(Node::new(5)));
//!
//! let diagram = render(Some(&tree), &Plain)?;
//! let expected = concat!(
//!     " _(5)___\n",
//!     " |      |\n",
//!     "(2)  _(10)\n",
//!     "     |\n",
//!     "    (5)\n",
//! );
//! assert_eq!(diagram, expected);
//! # Ok::<(), ascii_bintree::RenderError>(())
//! ```
//!
//! ## Printer API
//!
//! ```rust
//! use ascii_bintree::{Glyphs, Node, RenderConfig, Template, TreePrinter};
//!
//! let printer = TreePrinter::new(Template::parse("#{}")?)
//!     .with_config(RenderConfig::default().with_glyphs(Glyphs::UNICODE));
//!
//! let tree = Node::new(1).with_right(Node::new(2));
//! assert_eq!(printer.render(Some(&tree))?, "(#1)─\n     │\n   (#2)\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

extern crate alloc;

pub mod config;
pub mod error;
pub mod format;
pub mod layout;
pub mod render;
pub mod tree;

pub use config::{DEFAULT_MAX_LABEL_WIDTH, DEFAULT_MAX_NODES, Glyphs, RenderConfig};
pub use error::{LabelError, RenderError, Result};
pub use format::{Debugged, LabelFormat, Plain, Template};
pub use layout::{Layout, NodeMetadata, compute_layout};
pub use tree::{BinaryNode, Node};

use alloc::string::String;
use core::fmt;

/// A label formatter bundled with a [`RenderConfig`].
///
/// # Examples
///
/// ```
/// use ascii_bintree::{Node, Plain, TreePrinter};
///
/// let printer = TreePrinter::new(Plain);
/// let tree = Node::new("root").with_left(Node::new("leaf"));
///
/// let mut out = Vec::new();
/// printer.write_to(Some(&tree), &mut out).unwrap();
/// assert_eq!(out, b"   __(root)\n   |\n(leaf)\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TreePrinter<F> {
    format: F,
    config: RenderConfig,
}

impl<F> TreePrinter<F> {
    /// Create a printer with the default configuration.
    pub fn new(format: F) -> Self {
        Self {
            format,
            config: RenderConfig::default(),
        }
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn format(&self) -> &F {
        &self.format
    }

    /// Validate the configuration and lay out the tree.
    pub fn layout<N>(&self, root: Option<&N>) -> Result<Layout>
    where
        N: BinaryNode + ?Sized,
        F: LabelFormat<N::Label>,
    {
        self.config.validate()?;
        Layout::compute(root, &self.format, &self.config)
    }

    /// Render the tree to a string. An absent root renders as `""`.
    pub fn render<N>(&self, root: Option<&N>) -> Result<String>
    where
        N: BinaryNode + ?Sized,
        F: LabelFormat<N::Label>,
    {
        Ok(self.layout(root)?.render(&self.config.glyphs))
    }

    /// Render the tree into a [`fmt::Write`] sink.
    ///
    /// Layout and capacity errors are reported before anything is written.
    pub fn render_to<N, W>(&self, root: Option<&N>, out: &mut W) -> Result<()>
    where
        N: BinaryNode + ?Sized,
        F: LabelFormat<N::Label>,
        W: fmt::Write + ?Sized,
    {
        self.layout(root)?.render_to(&self.config.glyphs, out)
    }

    /// Render the tree into an [`io::Write`](std::io::Write) sink such as a file.
    ///
    /// Layout and capacity errors are reported before anything is written.
    pub fn write_to<N, W>(&self, root: Option<&N>, out: W) -> Result<()>
    where
        N: BinaryNode + ?Sized,
        F: LabelFormat<N::Label>,
        W: std::io::Write,
    {
        self.layout(root)?.write_to(&self.config.glyphs, out)
    }

    /// Render the tree to standard output.
    pub fn print<N>(&self, root: Option<&N>) -> Result<()>
    where
        N: BinaryNode + ?Sized,
        F: LabelFormat<N::Label>,
    {
        let stdout = std::io::stdout();
        self.write_to(root, stdout.lock())
    }
}

/// Render a tree with the default configuration.
///
/// # Examples
///
/// ```
/// use ascii_bintree::{Node, Plain, render};
///
/// assert_eq!(render(Some(&Node::new('x')), &Plain).unwrap(), "(x)\n");
/// assert_eq!(render(None::<&Node<char>>, &Plain).unwrap(), "");
/// ```
pub fn render<N, F>(root: Option<&N>, format: &F) -> Result<String>
where
    N: BinaryNode + ?Sized,
    F: LabelFormat<N::Label> + ?Sized,
{
    render_with(root, format, &RenderConfig::default())
}

/// Render a tree with an explicit configuration.
pub fn render_with<N, F>(root: Option<&N>, format: &F, config: &RenderConfig) -> Result<String>
where
    N: BinaryNode + ?Sized,
    F: LabelFormat<N::Label> + ?Sized,
{
    config.validate()?;
    Ok(Layout::compute(root, format, config)?.render(&config.glyphs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::fmt::Write as _;

    fn sample() -> Node<u32> {
        Node::new(5).with_left(Node::new(2)).with_right(Node::new(10))
    }

    #[test]
    fn test_empty_tree() {
        assert_eq!(render(None::<&Node<u32>>, &Plain).unwrap(), "");

        let mut out = Vec::new();
        TreePrinter::new(Plain)
            .write_to(None::<&Node<u32>>, &mut out)
            .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_render_is_idempotent() {
        let tree = sample();
        let first = render(Some(&tree), &Plain).unwrap();
        let second = render(Some(&tree), &Plain).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_printer_entry_points_agree() {
        let tree = sample();
        let printer = TreePrinter::new(Plain);
        let rendered = printer.render(Some(&tree)).unwrap();

        let mut text = String::new();
        printer.render_to(Some(&tree), &mut text).unwrap();

        let mut bytes = Vec::new();
        printer.write_to(Some(&tree), &mut bytes).unwrap();

        assert_eq!(rendered, " _(5)_\n |    |\n(2) (10)\n");
        assert_eq!(text, rendered);
        assert_eq!(bytes, rendered.as_bytes());
    }

    #[test]
    fn test_capacity_error_writes_nothing() {
        let tree = sample();
        let printer =
            TreePrinter::new(Plain).with_config(RenderConfig::default().with_max_nodes(Some(2)));

        let mut out = String::new();
        let err = printer.render_to(Some(&tree), &mut out).unwrap_err();
        assert!(err.is_capacity_exceeded());
        assert!(out.is_empty());
    }

    #[test]
    fn test_invalid_glyphs_rejected_before_layout() {
        let config = RenderConfig::default().with_glyphs(Glyphs {
            horizontal: '＿',
            ..Glyphs::ASCII
        });
        assert!(matches!(
            render_with(Some(&sample()), &Plain, &config),
            Err(RenderError::InvalidGlyph { role: "horizontal", .. })
        ));
        assert!(matches!(
            TreePrinter::new(Plain).with_config(config).layout(Some(&sample())),
            Err(RenderError::InvalidGlyph { .. })
        ));
    }

    #[test]
    fn test_formatter_failure_propagates() {
        let picky = format::from_fn(|v: &u32, out: &mut String| {
            if *v > 9 {
                return Err(LabelError::Rejected(alloc::format!("{v} has two digits")));
            }
            write!(out, "{v}")?;
            Ok(())
        });
        match render(Some(&sample()), &picky) {
            Err(RenderError::Label(LabelError::Rejected(msg))) => {
                assert_eq!(msg, "10 has two digits");
            }
            other => panic!("expected a label error, got {other:?}"),
        }
    }

    #[test]
    fn test_printer_accessors() {
        let config = RenderConfig::unbounded();
        let printer = TreePrinter::new(Plain).with_config(config);
        assert_eq!(printer.config(), &config);
        assert_eq!(printer.format(), &Plain);
    }
}
