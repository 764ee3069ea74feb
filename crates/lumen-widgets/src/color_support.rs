//! Robust color support: six color names, half of which lose their color
//! when colors are limited, leaving only the text to tell them apart.

use lumen_core::*;

use crate::Widget;

/// `(label, css color, kept when colors are limited)`
const SWATCHES: [(&str, &str, bool); 6] = [
    ("Red", "red", true),
    ("Tomato", "tomato", false),
    ("Green", "green", true),
    ("Olivedrab", "olivedrab", false),
    ("Blue", "blue", true),
    ("Royalblue", "royalblue", false),
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorSupportConfig {
    /// `limit_colors`
    pub limit_colors: bool,
    /// `alt_font` nudges the font size so assistive tech sees a change.
    pub alt_font: bool,
}

impl FromControls for ColorSupportConfig {
    fn from_controls(state: &ControlState) -> Self {
        Self {
            limit_colors: state.flag("limit_colors"),
            alt_font: state.flag("alt_font"),
        }
    }
}

pub struct ColorSupport;

impl Widget for ColorSupport {
    fn render(&mut self, state: &ControlState) -> Rendered {
        let cfg = ColorSupportConfig::from_controls(state);
        let grid = Style::new()
            .set("display", "grid")
            .set("grid-template-columns", "repeat(2, 1fr)")
            .set("gap", "0.5rem")
            .set("font-size", if cfg.alt_font { "0.99rem" } else { "1rem" });

        let mut markup = format!("<div{}>", grid.attr());
        for (label, color, always) in SWATCHES {
            let style = if always || !cfg.limit_colors {
                Style::new().set("color", color)
            } else {
                Style::new()
            };
            markup.push_str(&format!("<span{}>{label}</span>", style.attr()));
        }
        markup.push_str("</div>");
        Rendered::markup(markup)
    }
}
