//! # Control snapshots
//!
//! Every interaction rebuilds a [`ControlState`] from scratch: one entry per
//! named form control in a panel's controls region. Nothing in it survives
//! the event that produced it.
//!
//! Widgets don't read the raw map directly. Each one declares a small config
//! struct with named, typed fields and implements [`FromControls`] for it, so
//! missing or malformed controls resolve to a documented default in one place:
//!
//! ```rust
//! use lumen_core::*;
//!
//! #[derive(Debug, Default)]
//! struct Demo {
//!     /// `enabled` checkbox; off when missing.
//!     enabled: bool,
//!     /// `label` text input; empty when missing.
//!     label: String,
//! }
//!
//! impl FromControls for Demo {
//!     fn from_controls(state: &ControlState) -> Self {
//!         Demo {
//!             enabled: state.flag("enabled"),
//!             label: state.text("label").to_string(),
//!         }
//!     }
//! }
//!
//! let state: ControlState = [
//!     ("enabled", ControlValue::Checked(true)),
//!     ("label", ControlValue::Text("hi".into())),
//! ]
//! .into_iter()
//! .collect();
//!
//! let demo = Demo::from_controls(&state);
//! assert!(demo.enabled);
//! assert_eq!(demo.label, "hi");
//! ```

use std::borrow::Cow;
use std::collections::HashMap;

use crate::Color;

/// Value of a single control, by control kind.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlValue {
    /// Raw `value` of text, color, range and other inputs.
    Text(String),
    /// Checkbox `checked`.
    Checked(bool),
    /// Whether a button is currently held down.
    Pressed(bool),
}

impl ControlValue {
    /// Truthiness as the page sees it: a non-empty text value is set.
    pub fn as_flag(&self) -> bool {
        match self {
            ControlValue::Text(s) => !s.is_empty(),
            ControlValue::Checked(b) | ControlValue::Pressed(b) => *b,
        }
    }

    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            ControlValue::Text(s) => Cow::Borrowed(s),
            ControlValue::Checked(b) | ControlValue::Pressed(b) => Cow::Owned(b.to_string()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ControlState {
    values: HashMap<String, ControlValue>,
}

impl ControlState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later writes to the same name replace earlier ones.
    pub fn insert(&mut self, name: impl Into<String>, value: ControlValue) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&ControlValue> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ControlValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// `false` when the control is missing.
    pub fn flag(&self, name: &str) -> bool {
        self.get(name).is_some_and(ControlValue::as_flag)
    }

    /// Text value, `""` when missing or not a text control.
    pub fn text(&self, name: &str) -> &str {
        match self.get(name) {
            Some(ControlValue::Text(s)) => s,
            _ => "",
        }
    }

    /// Parses a text value as a number.
    pub fn number(&self, name: &str) -> Option<f64> {
        self.text(name).trim().parse().ok()
    }

    pub fn number_or(&self, name: &str, default: f64) -> f64 {
        match self.number(name) {
            Some(v) if v.is_finite() => v,
            _ => {
                if self.get(name).is_some() {
                    log::warn!(
                        "control `{name}` holds `{}`, not a number; using {default}",
                        self.text(name)
                    );
                }
                default
            }
        }
    }

    /// Strictly parses a `#rrggbb` control, falling back to `default`.
    pub fn color_or(&self, name: &str, default: Color) -> Color {
        match self.get(name) {
            None => default,
            Some(_) => Color::parse_hex(self.text(name)).unwrap_or_else(|e| {
                log::warn!("control `{name}`: {e}; using {default}");
                default
            }),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, ControlValue)> for ControlState {
    fn from_iter<I: IntoIterator<Item = (K, ControlValue)>>(iter: I) -> Self {
        let mut state = ControlState::new();
        for (name, value) in iter {
            state.insert(name, value);
        }
        state
    }
}

/// Typed view over a snapshot, built once per event.
pub trait FromControls: Sized {
    fn from_controls(state: &ControlState) -> Self;
}
