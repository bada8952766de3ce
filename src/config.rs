//! Rendering configuration: glyph set and capacity ceilings.
//!
//! The defaults reproduce the classic output (`(label)` nodes joined by
//! `_` and `|`) and keep the historical ceilings of 1024 nodes and 127
//! columns per label. Both ceilings can be lifted or tightened.

use crate::error::{RenderError, Result};
use unicode_width::UnicodeWidthChar;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default ceiling on the number of nodes reachable from the root.
pub const DEFAULT_MAX_NODES: usize = 1024;

/// Default ceiling on the display width of a formatted label (brackets excluded).
pub const DEFAULT_MAX_LABEL_WIDTH: usize = 127;

/// Characters used to draw the diagram.
///
/// Every glyph must occupy exactly one terminal column.
///
/// # Examples
///
/// ```
/// use ascii_bintree::Glyphs;
///
/// let glyphs = Glyphs { left_bracket: '[', right_bracket: ']', ..Glyphs::ASCII };
/// assert_eq!(glyphs.horizontal, '_');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Glyphs {
    pub left_bracket: char,
    pub right_bracket: char,
    /// Drawn on label rows between a parent and its children's anchors.
    pub horizontal: char,
    /// Drawn on connector rows above each child's anchor.
    pub vertical: char,
}

impl Glyphs {
    /// Plain ASCII: `(5)`, `_` and `|`.
    pub const ASCII: Glyphs = Glyphs {
        left_bracket: '(',
        right_bracket: ')',
        horizontal: '_',
        vertical: '|',
    };

    /// Box-drawing lines: `─` and `│`.
    pub const UNICODE: Glyphs = Glyphs {
        left_bracket: '(',
        right_bracket: ')',
        horizontal: '─',
        vertical: '│',
    };

    fn roles(&self) -> [(&'static str, char); 4] {
        [
            ("left bracket", self.left_bracket),
            ("right bracket", self.right_bracket),
            ("horizontal", self.horizontal),
            ("vertical", self.vertical),
        ]
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Glyphs::ASCII
    }
}

/// Glyphs plus the capacity ceilings checked during layout.
///
/// # Examples
///
/// ```
/// use ascii_bintree::{Glyphs, RenderConfig};
///
/// let config = RenderConfig::default()
///     .with_glyphs(Glyphs::UNICODE)
///     .with_max_nodes(Some(64));
/// assert_eq!(config.max_nodes, Some(64));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderConfig {
    pub glyphs: Glyphs,
    /// `None` means no ceiling.
    pub max_nodes: Option<usize>,
    /// Display columns of the formatted label text, brackets excluded. `None` means no ceiling.
    pub max_label_width: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            glyphs: Glyphs::default(),
            max_nodes: Some(DEFAULT_MAX_NODES),
            max_label_width: Some(DEFAULT_MAX_LABEL_WIDTH),
        }
    }
}

impl RenderConfig {
    /// Default glyphs without any capacity ceiling.
    pub fn unbounded() -> Self {
        Self {
            glyphs: Glyphs::default(),
            max_nodes: None,
            max_label_width: None,
        }
    }

    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn with_max_nodes(mut self, max_nodes: Option<usize>) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    pub fn with_max_label_width(mut self, max_label_width: Option<usize>) -> Self {
        self.max_label_width = max_label_width;
        self
    }

    /// Check that every glyph is exactly one display column wide.
    pub fn validate(&self) -> Result<()> {
        for (role, glyph) in self.glyphs.roles() {
            if glyph.width() != Some(1) {
                return Err(RenderError::InvalidGlyph { role, glyph });
            }
        }
        Ok(())
    }
}
