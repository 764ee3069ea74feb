//! Predictability: an Accept/Cancel pair whose "cancel" styling can land on
//! the wrong button.

use lumen_core::*;

use crate::Widget;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PredictableConfig {
    /// `unpredictable` puts the cancel styling on Accept.
    pub unpredictable: bool,
}

impl FromControls for PredictableConfig {
    fn from_controls(state: &ControlState) -> Self {
        Self {
            unpredictable: state.flag("unpredictable"),
        }
    }
}

pub struct Predictable;

impl Widget for Predictable {
    fn render(&mut self, state: &ControlState) -> Rendered {
        let cfg = PredictableConfig::from_controls(state);
        let cancel = r#" class="cancel""#;
        let (accept_class, cancel_class) = if cfg.unpredictable {
            (cancel, "")
        } else {
            ("", cancel)
        };
        Rendered::markup(format!(
            r#"<span class="control-group"><input type="button" value="Accept"{accept_class}><input type="button" value="Cancel"{cancel_class}></span>"#
        ))
    }
}
