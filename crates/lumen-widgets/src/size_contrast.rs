//! Text size and contrast: shows the WCAG ratio of the chosen colors at the
//! chosen size, optionally desaturated to gray.

use lumen_core::*;

use crate::Widget;

/// Element showing the current font size next to the slider.
pub const FONT_SIZE_DISPLAY_ID: &str = "perceivable-size-contrast-font-size-display";

#[derive(Clone, Debug, PartialEq)]
pub struct SizeContrastConfig {
    /// `text_color`, black when missing or malformed.
    pub text_color: Color,
    /// `bg_color`, white when missing or malformed.
    pub bg_color: Color,
    /// `color_blind` checkbox.
    pub color_blind: bool,
    /// `font_size` in px, 16 when missing.
    pub font_size: f64,
}

impl Default for SizeContrastConfig {
    fn default() -> Self {
        Self {
            text_color: Color::BLACK,
            bg_color: Color::WHITE,
            color_blind: false,
            font_size: 16.0,
        }
    }
}

impl FromControls for SizeContrastConfig {
    fn from_controls(state: &ControlState) -> Self {
        let d = Self::default();
        Self {
            text_color: state.color_or("text_color", d.text_color),
            bg_color: state.color_or("bg_color", d.bg_color),
            color_blind: state.flag("color_blind"),
            font_size: state.number_or("font_size", d.font_size),
        }
    }
}

impl SizeContrastConfig {
    /// Ratio of the chosen colors, truncated to two decimals.
    pub fn contrast(&self) -> f64 {
        truncate_to(self.text_color.contrast_ratio(self.bg_color), 2)
    }

    /// `(text, background)` as displayed.
    pub fn display_colors(&self) -> (Color, Color) {
        if self.color_blind {
            (self.text_color.to_gray(), self.bg_color.to_gray())
        } else {
            (self.text_color, self.bg_color)
        }
    }
}

pub struct SizeContrast;

impl Widget for SizeContrast {
    fn render(&mut self, state: &ControlState) -> Rendered {
        let cfg = SizeContrastConfig::from_controls(state);
        let (text, background) = cfg.display_colors();

        let outer = Style::new()
            .set("background-color", background)
            .set("width", "100%")
            .set("height", "100%")
            .set("display", "flex")
            .set("justify-content", "center")
            .set("align-items", "center")
            .set("padding", "0.5rem")
            .set("box-sizing", "border-box");
        let inner = Style::new()
            .set("color", text)
            .set("font-size", format!("{}px", cfg.font_size))
            .set("text-align", "center");

        let markup = format!(
            "<div{}><span{}>This text has a contrast ratio of {}:1.</span></div>",
            outer.attr(),
            inner.attr(),
            cfg.contrast()
        );

        let font_size = cfg.font_size;
        Rendered::markup(markup)
            .with_mount(move |host| host.set_html(FONT_SIZE_DISPLAY_ID, &format!("{font_size}px")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    fn colors(text: &str, bg: &str, blind: bool) -> ControlState {
        state(&[
            ("text_color", ControlValue::Text(text.into())),
            ("bg_color", ControlValue::Text(bg.into())),
            ("color_blind", ControlValue::Checked(blind)),
            ("font_size", ControlValue::Text("18".into())),
        ])
    }

    #[test]
    fn black_on_white_reports_21() {
        let r = SizeContrast.render(&colors("#000000", "#ffffff", false));
        assert!(r.markup.contains("contrast ratio of 21:1."));
        assert!(r.markup.contains("background-color: #ffffff;"));
        assert!(r.markup.contains("color: #000000;"));
        assert!(r.markup.contains("font-size: 18px;"));
    }

    #[test]
    fn ratio_is_truncated_not_rounded() {
        // #777777 on white is about 4.48.
        let cfg = SizeContrastConfig::from_controls(&colors("#777777", "#ffffff", false));
        let raw = cfg.text_color.contrast_ratio(cfg.bg_color);
        assert_eq!(cfg.contrast(), (raw * 100.0).trunc() / 100.0);
        assert!(cfg.contrast() <= raw);
    }

    #[test]
    fn color_blind_shows_luminance_grays() {
        let cfg = SizeContrastConfig::from_controls(&colors("#ff0000", "#0000ff", true));
        let (text, bg) = cfg.display_colors();
        for c in [text, bg] {
            assert_eq!(c.0, c.1);
            assert_eq!(c.1, c.2);
        }
        assert_eq!(text, Color(255, 0, 0).to_gray());
        assert_eq!(bg, Color(0, 0, 255).to_gray());

        let r = SizeContrast.render(&colors("#000000", "#ffffff", true));
        assert!(r.markup.contains("color: #000000;"));
        assert!(r.markup.contains("background-color: #ffffff;"));
        // The ratio still describes the chosen colors.
        assert!(r.markup.contains("21:1."));
    }

    #[test]
    fn malformed_color_falls_back() {
        let cfg = SizeContrastConfig::from_controls(&colors("red", "#ffffff", false));
        assert_eq!(cfg.text_color, Color::BLACK);
    }

    #[test]
    fn mount_writes_font_size() {
        let mut host = RecordingHost::default();
        mount(SizeContrast.render(&colors("#000000", "#ffffff", false)), &mut host);
        assert_eq!(host.calls, [format!("html {FONT_SIZE_DISPLAY_ID} 18px")]);
    }
}
