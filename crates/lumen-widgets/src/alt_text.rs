//! Alternate text: the image as most people see it, or only its alt text as
//! a screen reader user would get it.

use lumen_core::*;

use crate::Widget;

pub const IMAGE_SRC: &str = "images/wireframe-notebook-pexels-picjumbocom.jpg";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AltTextConfig {
    /// `enable_alt`; without it the alt text is empty.
    pub enable_alt: bool,
    /// `alt_text` as typed.
    pub alt_text: String,
    /// `hide_graphics` swaps the image for its text.
    pub hide_graphics: bool,
}

impl FromControls for AltTextConfig {
    fn from_controls(state: &ControlState) -> Self {
        Self {
            enable_alt: state.flag("enable_alt"),
            alt_text: state.text("alt_text").to_string(),
            hide_graphics: state.flag("hide_graphics"),
        }
    }
}

impl AltTextConfig {
    pub fn effective_alt(&self) -> &str {
        if self.enable_alt { &self.alt_text } else { "" }
    }
}

pub struct AltText;

impl Widget for AltText {
    fn render(&mut self, state: &ControlState) -> Rendered {
        let cfg = AltTextConfig::from_controls(state);
        let alt = cfg.effective_alt();

        if !cfg.hide_graphics {
            let style = Style::new().set("width", "70%").set("margin", "0.5rem");
            Rendered::markup(format!(
                r#"<img{} src="{IMAGE_SRC}" alt="{}">"#,
                style.attr(),
                escape_attr(alt)
            ))
        } else {
            let style = Style::new()
                .set("width", "70%")
                .set("margin", "0.5rem")
                .set("box-sizing", "border-box")
                .set("aspect-ratio", "1 / 1")
                .set("border", "1px solid black")
                .set("overflow-wrap", "break-word")
                .set("overflow", "hidden");
            Rendered::markup(format!("<div{}>{}</div>", style.attr(), escape_text(alt)))
        }
    }
}
