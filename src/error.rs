//! Error types shared by layout and rendering.

use alloc::string::String;
use core::fmt;

use thiserror::Error;

/// Result alias used by every fallible entry point of the crate.
pub type Result<T> = core::result::Result<T, RenderError>;

/// Errors surfaced while laying out or rendering a tree.
#[derive(Debug, Error)]
pub enum RenderError {
    /// More nodes are reachable from the root than the configured ceiling allows.
    #[error("tree has more than {max} nodes")]
    TooManyNodes { max: usize },

    /// A formatted label is wider than the configured ceiling.
    #[error("label `{label}` is {width} columns wide, limit is {max}")]
    LabelTooWide {
        label: String,
        width: usize,
        max: usize,
    },

    #[error("label formatting failed: {0}")]
    Label(#[from] LabelError),

    /// Glyphs must occupy exactly one display column or the columns drift.
    #[error("{role} glyph {glyph:?} must be exactly one column wide")]
    InvalidGlyph { role: &'static str, glyph: char },

    #[error("failed to write diagram: {0}")]
    Fmt(#[from] fmt::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RenderError {
    /// True for the capacity class of errors (node count or label width).
    ///
    /// # Examples
    ///
    /// ```
    /// use ascii_bintree::{Node, Plain, RenderConfig, render_with};
    ///
    /// let tree = Node::new(1).with_left(Node::new(2));
    /// let config = RenderConfig::default().with_max_nodes(Some(1));
    /// let err = render_with(Some(&tree), &Plain, &config).unwrap_err();
    /// assert!(err.is_capacity_exceeded());
    /// ```
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(
            self,
            RenderError::TooManyNodes { .. } | RenderError::LabelTooWide { .. }
        )
    }
}

/// Errors produced by a [`LabelFormat`](crate::LabelFormat) implementation.
#[derive(Debug, Error)]
pub enum LabelError {
    /// The template does not contain exactly one `{}` placeholder.
    #[error("template `{0}` must contain exactly one `{{}}` placeholder")]
    Template(String),

    /// Labels are rendered on a single row.
    #[error("label `{0}` contains a line break")]
    LineBreak(String),

    #[error(transparent)]
    Fmt(#[from] fmt::Error),

    /// The formatter refused the label (e.g. the value is not of the kind it expects).
    #[error("{0}")]
    Rejected(String),
}
