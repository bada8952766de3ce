//! Row-synchronous renderer for a computed layout.
//!
//! Each depth produces a label row: spaces up to the left child's anchor,
//! horizontal glyphs up to the node, the bracketed label, then horizontal
//! glyphs out to the right child's anchor. The anchors recorded along the
//! way become the connector row underneath, one vertical glyph per child.

use crate::config::Glyphs;
use crate::error::{RenderError, Result};
use crate::layout::{Layout, NodeMetadata};
use alloc::{string::String, vec::Vec};
use core::convert::Infallible;
use core::fmt;

impl Layout {
    /// Render the diagram to a string.
    ///
    /// Glyphs are assumed to be one column wide (see
    /// [`RenderConfig::validate`](crate::RenderConfig::validate)).
    ///
    /// # Examples
    ///
    /// ```
    /// use ascii_bintree::{Glyphs, Layout, Node, Plain, RenderConfig};
    ///
    /// let tree = Node::new('a').with_right(Node::new('b'));
    /// let layout = Layout::compute(Some(&tree), &Plain, &RenderConfig::default()).unwrap();
    /// assert_eq!(layout.render(&Glyphs::ASCII), "(a)\n   |\n  (b)\n");
    /// ```
    pub fn render(&self, glyphs: &Glyphs) -> String {
        let mut buf = String::with_capacity(self.estimate_size());
        let Ok(()) = self.for_each_row::<Infallible>(glyphs, |row| {
            buf.push_str(row);
            Ok(())
        });
        buf
    }

    /// Render the diagram into any [`fmt::Write`] sink, one row at a time.
    pub fn render_to<W: fmt::Write + ?Sized>(&self, glyphs: &Glyphs, out: &mut W) -> Result<()> {
        self.for_each_row(glyphs, |row| out.write_str(row).map_err(RenderError::from))
    }

    /// Render the diagram into an [`io::Write`](std::io::Write) sink, one row
    /// at a time, then flush it. Rows written before a failure stay written.
    pub fn write_to<W: std::io::Write>(&self, glyphs: &Glyphs, mut out: W) -> Result<()> {
        self.for_each_row(glyphs, |row| {
            out.write_all(row.as_bytes()).map_err(RenderError::from)
        })?;
        out.flush()?;
        Ok(())
    }

    fn for_each_row<E>(
        &self,
        glyphs: &Glyphs,
        mut emit: impl FnMut(&str) -> core::result::Result<(), E>,
    ) -> core::result::Result<(), E> {
        let _span = tracing::debug_span!("render_rows", height = self.height()).entered();
        let mut row = String::with_capacity(self.width() + 1);
        let mut anchors = Vec::new();

        for level in self.levels() {
            row.clear();
            anchors.clear();
            self.label_row(level, glyphs, &mut row, &mut anchors);
            tracing::trace!(depth = level[0].depth, nodes = level.len(), "label row");
            emit(&row)?;

            // Only the deepest level has no children to connect to.
            if anchors.is_empty() {
                continue;
            }
            row.clear();
            connector_row(&anchors, glyphs.vertical, &mut row);
            emit(&row)?;
        }
        Ok(())
    }

    fn label_row(
        &self,
        level: &[NodeMetadata],
        glyphs: &Glyphs,
        row: &mut String,
        anchors: &mut Vec<usize>,
    ) {
        let nodes = self.nodes();
        let mut cursor = 0;

        for node in level {
            match node.left {
                Some(child) => {
                    let anchor = nodes[child].anchor();
                    pad(row, &mut cursor, anchor, ' ');
                    anchors.push(anchor);
                    pad(row, &mut cursor, node.left_margin, glyphs.horizontal);
                }
                None => pad(row, &mut cursor, node.left_margin, ' '),
            }

            row.push(glyphs.left_bracket);
            row.push_str(&node.label);
            row.push(glyphs.right_bracket);
            cursor += node.label_width;

            // The gap after a childless right side belongs to the next node's padding.
            if let Some(child) = node.right {
                let anchor = nodes[child].anchor();
                anchors.push(anchor);
                pad(row, &mut cursor, anchor, glyphs.horizontal);
            }
        }
        row.push('\n');
    }
}

fn connector_row(anchors: &[usize], vertical: char, row: &mut String) {
    let mut cursor = 0;
    for &anchor in anchors {
        pad(row, &mut cursor, anchor, ' ');
        row.push(vertical);
        cursor += 1;
    }
    row.push('\n');
}

#[inline]
fn pad(row: &mut String, cursor: &mut usize, to: usize, fill: char) {
    while *cursor < to {
        row.push(fill);
        *cursor += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use crate::format::{Plain, Template};
    use crate::tree::Node;
    use std::io;

    fn draw<T: fmt::Display>(tree: &Node<T>) -> String {
        Layout::compute(Some(tree), &Plain, &RenderConfig::default())
            .unwrap()
            .render(&Glyphs::ASCII)
    }

    fn five_two_ten() -> Node<i32> {
        Node::new(5).with_left(Node::new(2)).with_right(Node::new(10))
    }

    #[test]
    fn test_single_node() {
        assert_eq!(draw(&Node::new(5)), "(5)\n");
    }

    #[test]
    fn test_both_children() {
        assert_eq!(draw(&five_two_ten()), " _(5)_\n |    |\n(2) (10)\n");
    }

    #[test]
    fn test_left_chain() {
        let chain = Node::new(1).with_left(Node::new(2).with_left(Node::new(3)));
        assert_eq!(draw(&chain), "   _(1)\n   |\n _(2)\n |\n(3)\n");
    }

    #[test]
    fn test_right_chain() {
        let chain = Node::new(1).with_right(Node::new(2).with_right(Node::new(3)));
        assert_eq!(draw(&chain), "(1)\n   |\n  (2)\n     |\n    (3)\n");
    }

    #[test]
    fn test_siblings_without_children_keep_spacing() {
        // 1 -> (2, 3), 2 -> (_, 4), 3 -> (5, _)
        let tree = Node::new(1)
            .with_left(Node::new(2).with_right(Node::new(4)))
            .with_right(Node::new(3).with_left(Node::new(5)));
        assert_eq!(
            draw(&tree),
            " ___(1)__\n |       |\n(2)    _(3)\n   |   |\n  (4) (5)\n"
        );
    }

    #[test]
    fn test_empty_layout_renders_nothing() {
        let layout = Layout::default();
        assert_eq!(layout.render(&Glyphs::ASCII), "");

        let mut out = String::new();
        layout.render_to(&Glyphs::ASCII, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_unicode_glyphs() {
        let layout =
            Layout::compute(Some(&five_two_ten()), &Plain, &RenderConfig::default()).unwrap();
        assert_eq!(
            layout.render(&Glyphs::UNICODE),
            " ─(5)─\n │    │\n(2) (10)\n"
        );
    }

    #[test]
    fn test_custom_brackets_and_template() {
        let glyphs = Glyphs {
            left_bracket: '[',
            right_bracket: ']',
            ..Glyphs::ASCII
        };
        let template = Template::parse("#{}").unwrap();
        let layout =
            Layout::compute(Some(&five_two_ten()), &template, &RenderConfig::default()).unwrap();
        assert_eq!(layout.render(&glyphs), "  _[#5]_\n  |     |\n[#2]  [#10]\n");
    }

    #[test]
    fn test_wide_labels_align_by_columns() {
        let tree = Node::new("根").with_left(Node::new("a"));
        let rendered = draw(&tree);
        assert_eq!(rendered, " _(根)\n |\n(a)\n");
    }

    #[test]
    fn test_render_to_matches_render() {
        let layout =
            Layout::compute(Some(&five_two_ten()), &Plain, &RenderConfig::default()).unwrap();
        let mut out = String::new();
        layout.render_to(&Glyphs::ASCII, &mut out).unwrap();
        assert_eq!(out, layout.render(&Glyphs::ASCII));
    }

    #[test]
    fn test_write_to_io() {
        let layout =
            Layout::compute(Some(&five_two_ten()), &Plain, &RenderConfig::default()).unwrap();
        let mut bytes = Vec::new();
        layout.write_to(&Glyphs::ASCII, &mut bytes).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), " _(5)_\n |    |\n(2) (10)\n");
    }

    struct ClosesAfter {
        remaining: usize,
        written: Vec<u8>,
    }

    impl io::Write for ClosesAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.remaining == 0 {
                return Err(io::Error::other("sink closed"));
            }
            self.remaining -= 1;
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_io_failure_keeps_earlier_rows() {
        let layout =
            Layout::compute(Some(&five_two_ten()), &Plain, &RenderConfig::default()).unwrap();
        let mut sink = ClosesAfter {
            remaining: 1,
            written: Vec::new(),
        };
        let result = layout.write_to(&Glyphs::ASCII, &mut sink);
        assert!(matches!(result, Err(RenderError::Io(_))));
        assert_eq!(sink.written, b" _(5)_\n");
    }

    #[test]
    fn test_rows_alternate() {
        let tree = Node::new(1)
            .with_left(Node::new(2).with_left(Node::new(4)))
            .with_right(Node::new(3));
        let rendered = draw(&tree);
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 5);
        for (i, line) in lines.iter().enumerate() {
            let is_connector = line.chars().all(|c| c == ' ' || c == '|');
            assert_eq!(is_connector, i % 2 == 1, "line {i}: {line:?}");
        }
    }
}
