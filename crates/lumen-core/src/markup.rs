//! Small helpers for building preview markup.

use std::borrow::Cow;
use std::fmt;

/// Ordered list of inline CSS declarations.
///
/// ```rust
/// use lumen_core::Style;
///
/// let s = Style::new().set("color", "red").set("font-size", "1rem");
/// assert_eq!(s.to_string(), "color: red; font-size: 1rem;");
/// assert_eq!(s.attr(), r#" style="color: red; font-size: 1rem;""#);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Style {
    decls: Vec<(&'static str, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a declaration. Setting the same property twice keeps both,
    /// and the browser honors the later one.
    pub fn set(mut self, property: &'static str, value: impl fmt::Display) -> Self {
        self.decls.push((property, value.to_string()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// ` style="..."` ready to splice into a tag, or nothing when empty.
    pub fn attr(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!(r#" style="{}""#, escape_attr(&self.to_string()))
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.decls.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{property}: {value};")?;
        }
        Ok(())
    }
}

/// Escapes text content.
pub fn escape_text(s: &str) -> Cow<'_, str> {
    html_escape::encode_text(s)
}

/// Escapes a double-quoted attribute value.
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(s)
}
