use std::collections::HashSet;

use lumen_core::{ControlState, ControlValue};

/// How a control's value is read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlKind {
    /// `<input type="button">`, read as held/not held.
    Button,
    Checkbox,
    /// Everything else (text, color, range, textarea...), read as raw text.
    Other,
}

impl ControlKind {
    /// From an input's `type` attribute.
    pub fn from_input_type(ty: &str) -> Self {
        match ty {
            "button" => ControlKind::Button,
            "checkbox" => ControlKind::Checkbox,
            _ => ControlKind::Other,
        }
    }
}

/// One form control as found in a panel's controls region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Control {
    pub name: String,
    pub kind: ControlKind,
    pub value: String,
    pub checked: bool,
}

impl Control {
    pub fn button(name: impl Into<String>) -> Self {
        Self::new(name, ControlKind::Button, "")
    }

    pub fn checkbox(name: impl Into<String>, checked: bool) -> Self {
        Self {
            checked,
            ..Self::new(name, ControlKind::Checkbox, "on")
        }
    }

    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, ControlKind::Other, value)
    }

    fn new(name: impl Into<String>, kind: ControlKind, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            value: value.into(),
            checked: false,
        }
    }
}

/// Snapshot of `controls` in document order; `pressed` holds the names of
/// buttons currently held down.
pub fn collect_state(controls: &[Control], pressed: &HashSet<String>) -> ControlState {
    controls
        .iter()
        .map(|c| {
            let value = match c.kind {
                ControlKind::Button => ControlValue::Pressed(pressed.contains(&c.name)),
                ControlKind::Checkbox => ControlValue::Checked(c.checked),
                ControlKind::Other => ControlValue::Text(c.value.clone()),
            };
            (c.name.clone(), value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_each_kind() {
        let controls = [
            Control::button("tab"),
            Control::button("enter"),
            Control::checkbox("enable_tab_order", true),
            Control::text("font_size", "20"),
        ];
        let pressed = HashSet::from(["tab".to_string()]);
        let state = collect_state(&controls, &pressed);

        assert_eq!(state.get("tab"), Some(&ControlValue::Pressed(true)));
        assert_eq!(state.get("enter"), Some(&ControlValue::Pressed(false)));
        assert_eq!(state.get("enable_tab_order"), Some(&ControlValue::Checked(true)));
        assert_eq!(state.text("font_size"), "20");
    }

    #[test]
    fn later_control_wins() {
        let controls = [Control::text("x", "1"), Control::text("x", "2")];
        assert_eq!(collect_state(&controls, &HashSet::new()).text("x"), "2");
    }

    #[test]
    fn kind_from_type() {
        assert_eq!(ControlKind::from_input_type("button"), ControlKind::Button);
        assert_eq!(ControlKind::from_input_type("checkbox"), ControlKind::Checkbox);
        assert_eq!(ControlKind::from_input_type("color"), ControlKind::Other);
        assert_eq!(ControlKind::from_input_type("range"), ControlKind::Other);
    }
}
