//! Reduced motion: a toggle switch whose slide can be smooth, stepped, or
//! turned off entirely.

use lumen_core::*;

use crate::Widget;

pub const TOGGLE_VISUALS_ID: &str = "inter-toggle-visuals-1";
pub const DURATION_DISPLAY_ID: &str = "duration_value_display";

const TOGGLE: &str = r#"<span class="control-group"><input type="checkbox" id="inter-toggle-1"><label class="toggle-switch" id="inter-toggle-visuals-1" for="inter-toggle-1"></label></span>"#;

#[derive(Clone, Debug, PartialEq)]
pub struct ReducedAnimationConfig {
    /// `motion_sensitive` switches to a 4-step easing.
    pub motion_sensitive: bool,
    /// `reduce_animation` removes the transition.
    pub reduce_animation: bool,
    /// `duration` in seconds, 1 when missing.
    pub duration: f64,
}

impl Default for ReducedAnimationConfig {
    fn default() -> Self {
        Self {
            motion_sensitive: false,
            reduce_animation: false,
            duration: 1.0,
        }
    }
}

impl FromControls for ReducedAnimationConfig {
    fn from_controls(state: &ControlState) -> Self {
        Self {
            motion_sensitive: state.flag("motion_sensitive"),
            reduce_animation: state.flag("reduce_animation"),
            duration: state.number_or("duration", Self::default().duration),
        }
    }
}

impl ReducedAnimationConfig {
    pub fn easing(&self) -> Easing {
        if self.motion_sensitive {
            Easing::stepped(4)
        } else {
            Easing::Ease
        }
    }

    /// `None` when animation is reduced.
    pub fn transition(&self) -> Option<Transition> {
        (!self.reduce_animation).then(|| Transition::all(self.duration, self.easing()))
    }
}

pub struct ReducedAnimation;

impl Widget for ReducedAnimation {
    fn render(&mut self, state: &ControlState) -> Rendered {
        let cfg = ReducedAnimationConfig::from_controls(state);
        let transition = cfg
            .transition()
            .map_or_else(|| "none".to_string(), |t| t.to_string());
        let duration = cfg.duration;

        Rendered::markup(TOGGLE).with_mount(move |host| {
            host.set_style(TOGGLE_VISUALS_ID, "transition", &transition)?;
            host.set_html(DURATION_DISPLAY_ID, &format!("{duration}s"))
        })
    }
}
