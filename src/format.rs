//! Label formatter capability.
//!
//! A [`LabelFormat`] turns a node's label into the text shown between the
//! brackets. The same text is used to measure the label during layout and
//! to draw it, so a formatter only runs once per node.

use crate::error::LabelError;
use alloc::string::{String, ToString};
use core::fmt::{self, Debug, Display, Write};

/// Turns a label of type `L` into display text.
pub trait LabelFormat<L: ?Sized> {
    /// Append the text for `label` to `out`.
    fn write_label(&self, label: &L, out: &mut String) -> Result<(), LabelError>;
}

impl<L: ?Sized, F: LabelFormat<L> + ?Sized> LabelFormat<L> for &F {
    fn write_label(&self, label: &L, out: &mut String) -> Result<(), LabelError> {
        (**self).write_label(label, out)
    }
}

/// Formats labels with their [`Display`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Plain;

impl<L: Display + ?Sized> LabelFormat<L> for Plain {
    fn write_label(&self, label: &L, out: &mut String) -> Result<(), LabelError> {
        write!(out, "{label}")?;
        Ok(())
    }
}

/// Formats labels with their [`Debug`] implementation.
///
/// Handy for `Option`s, tuples and anything else without `Display`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Debugged;

impl<L: Debug + ?Sized> LabelFormat<L> for Debugged {
    fn write_label(&self, label: &L, out: &mut String) -> Result<(), LabelError> {
        write!(out, "{label:?}")?;
        Ok(())
    }
}

/// Wraps the [`Display`] text of a label in a fixed prefix and suffix.
///
/// The template holds exactly one `{}` placeholder; `{{` and `}}` stand for
/// literal braces.
///
/// # Examples
///
/// ```
/// use ascii_bintree::{LabelFormat, Template};
///
/// let template = Template::parse("#{}").unwrap();
/// let mut out = String::new();
/// template.write_label(&42, &mut out).unwrap();
/// assert_eq!(out, "#42");
///
/// assert!(Template::parse("no placeholder").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    prefix: String,
    suffix: String,
}

impl Template {
    pub fn parse(template: &str) -> Result<Self, LabelError> {
        let mismatch = || LabelError::Template(template.to_string());
        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut seen_placeholder = false;
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            let next = chars.peek().copied();
            let literal = match (c, next) {
                ('{', Some('{')) | ('}', Some('}')) => {
                    chars.next();
                    c
                }
                ('{', Some('}')) => {
                    if seen_placeholder {
                        return Err(mismatch());
                    }
                    chars.next();
                    seen_placeholder = true;
                    continue;
                }
                ('{', _) | ('}', _) => return Err(mismatch()),
                (c, _) => c,
            };
            if seen_placeholder {
                suffix.push(literal);
            } else {
                prefix.push(literal);
            }
        }

        if !seen_placeholder {
            return Err(mismatch());
        }
        Ok(Self { prefix, suffix })
    }
}

impl<L: Display + ?Sized> LabelFormat<L> for Template {
    fn write_label(&self, label: &L, out: &mut String) -> Result<(), LabelError> {
        out.push_str(&self.prefix);
        write!(out, "{label}")?;
        out.push_str(&self.suffix);
        Ok(())
    }
}

/// Closure-backed formatter, see [`from_fn`].
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// Build a formatter from a closure.
///
/// The closure may return any error convertible into [`LabelError`], so the
/// result of `write!` can be returned as is.
///
/// # Examples
///
/// ```
/// use ascii_bintree::{Node, format::from_fn, render};
/// use std::fmt::Write;
///
/// let tree = Node::new(3.14159_f64);
/// let two_places = from_fn(|v: &f64, out: &mut String| write!(out, "{v:.2}"));
/// assert_eq!(render(Some(&tree), &two_places).unwrap(), "(3.14)\n");
/// ```
pub fn from_fn<L, F, E>(f: F) -> FromFn<F>
where
    L: ?Sized,
    F: Fn(&L, &mut String) -> Result<(), E>,
    E: Into<LabelError>,
{
    FromFn(f)
}

impl<L, F, E> LabelFormat<L> for FromFn<F>
where
    L: ?Sized,
    F: Fn(&L, &mut String) -> Result<(), E>,
    E: Into<LabelError>,
{
    fn write_label(&self, label: &L, out: &mut String) -> Result<(), LabelError> {
        (self.0)(label, out).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text<L: ?Sized>(format: &impl LabelFormat<L>, label: &L) -> String {
        let mut out = String::new();
        format.write_label(label, &mut out).unwrap();
        out
    }

    #[test]
    fn test_plain() {
        assert_eq!(text(&Plain, &5), "5");
        assert_eq!(text(&Plain, "Amy"), "Amy");
        assert_eq!(text(&Plain, &'x'), "x");
    }

    #[test]
    fn test_debugged() {
        assert_eq!(text(&Debugged, "Amy"), "\"Amy\"");
        assert_eq!(text(&Debugged, &Some(1)), "Some(1)");
    }

    #[test]
    fn test_template() {
        let template = Template::parse("<{}>").unwrap();
        assert_eq!(text(&template, &12), "<12>");

        let braces = Template::parse("{{{}}}").unwrap();
        assert_eq!(text(&braces, "k"), "{k}");
    }

    #[test]
    fn test_template_mismatch() {
        for bad in ["", "plain", "{}{}", "{", "}", "{x}", "{} }"] {
            match Template::parse(bad) {
                Err(LabelError::Template(t)) => assert_eq!(t, bad),
                other => panic!("{bad:?} should be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_from_fn_error_propagates() {
        let even_only = from_fn(|v: &u8, out: &mut String| {
            if v % 2 == 1 {
                return Err(LabelError::Rejected("odd".into()));
            }
            write!(out, "{v}")?;
            Ok(())
        });
        assert_eq!(text(&even_only, &4u8), "4");

        let mut out = String::new();
        assert!(matches!(
            even_only.write_label(&3u8, &mut out),
            Err(LabelError::Rejected(msg)) if msg == "odd"
        ));
    }

    #[test]
    fn test_reference_forwarding() {
        let template = Template::parse("{}!").unwrap();
        let by_ref: &dyn LabelFormat<i32> = &template;
        assert_eq!(text(&by_ref, &1), "1!");
    }
}
