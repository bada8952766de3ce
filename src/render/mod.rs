//! Text rendering of a computed [`Layout`](crate::Layout).
//!
//! The diagram alternates label rows and connector rows, one pair per
//! depth, with the connector row after the deepest level omitted.

pub mod ascii;
