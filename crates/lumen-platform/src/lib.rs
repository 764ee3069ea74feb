//! Panel runners.
//!
//! A [`Page`] exposes panel containers, their controls, and their preview
//! regions. [`setup_panels`] binds a [`Panel`] to each container whose id is
//! registered and renders it once; after that, the embedder calls
//! [`Panel::handle`] on every pointer-down or input event inside the
//! container's controls region.
//!
//! [`MemoryPage`] runs the whole loop headless. On wasm32, `web::run_panels`
//! binds every `.interactive-panel` in the document.

pub mod controls;
pub mod memory;
pub mod options;
pub mod panel;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use controls::{Control, ControlKind, collect_state};
pub use memory::{MemoryElement, MemoryPage, PageEvent};
pub use options::{OptionsError, PanelOptions};
pub use panel::{Page, Panel, setup_panels};

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use lumen_core::Error;
    use lumen_widgets::{Registry, WidgetId, keyboard, narration, size_contrast};

    use super::*;

    fn init_logs() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn keyboard_page() -> MemoryPage {
        let mut page = MemoryPage::new();
        page.add_panel(
            WidgetId::KeyboardShortcuts.as_str(),
            vec![
                Control::checkbox("invalid_tabbing", false),
                Control::button("tab"),
                Control::checkbox("enable_tab_order", true),
                Control::button("enter"),
                Control::checkbox("enable_enter_submit", true),
            ],
        );
        page
    }

    #[test]
    fn unregistered_panel_stays_static() {
        init_logs();
        let mut page = MemoryPage::new();
        page.add_panel("not-a-demo", vec![Control::checkbox("x", true)]);
        page.replace_preview("not-a-demo", "<p>keep</p>").unwrap();

        let mut panels = setup_panels(&mut page, &Registry::standard());
        assert_eq!(panels.len(), 1);
        assert!(!panels[0].is_bound());

        panels[0].refresh(&mut page).unwrap();
        assert_eq!(page.preview("not-a-demo"), Some("<p>keep</p>"));
    }

    #[test]
    fn setup_renders_each_panel() {
        init_logs();
        let mut page = MemoryPage::new();
        page.add_panel(
            WidgetId::Predictable.as_str(),
            vec![Control::checkbox("unpredictable", false)],
        );
        page.add_panel(
            WidgetId::ContentReadability.as_str(),
            vec![Control::checkbox("complex", false)],
        );

        let panels = setup_panels(&mut page, &Registry::standard());
        assert!(panels.iter().all(Panel::is_bound));
        for id in [WidgetId::Predictable, WidgetId::ContentReadability] {
            assert!(!page.preview(id.as_str()).unwrap_or_default().is_empty());
        }
    }

    #[test]
    fn empty_markup_keeps_preview() {
        init_logs();
        let id = WidgetId::AssistiveNarration.as_str();
        let mut page = MemoryPage::new();
        page.add_panel(
            id,
            vec![
                Control::checkbox("aria_semantic", true),
                Control::checkbox("alt_text", false),
                Control::button("read_aloud"),
            ],
        );
        page.replace_preview(id, "<p>static</p>").unwrap();

        let mut panels = setup_panels(&mut page, &Registry::standard());
        assert_eq!(page.preview(id), Some("<p>static</p>"));
        assert_eq!(
            page.events(),
            [PageEvent::AudioLoaded(
                "audio/screen_reader_aria_semantic.mp3".into()
            )]
        );

        page.clear_events();
        panels[0].press("read_aloud");
        panels[0].handle(&mut page);
        page.advance(narration::PLAYBACK_DELAY);
        assert_eq!(
            page.events(),
            [
                PageEvent::AudioLoaded("audio/screen_reader_aria_semantic.mp3".into()),
                PageEvent::AudioPlayed("audio/screen_reader_aria_semantic.mp3".into()),
            ]
        );
    }

    #[test]
    fn rerender_cancels_pending_playback() {
        init_logs();
        let id = WidgetId::AssistiveNarration.as_str();
        let mut page = MemoryPage::new();
        page.add_panel(
            id,
            vec![
                Control::checkbox("aria_semantic", false),
                Control::checkbox("alt_text", true),
                Control::button("read_aloud"),
            ],
        );
        let mut panels = setup_panels(&mut page, &Registry::standard());
        let panel = &mut panels[0];

        panel.press("read_aloud");
        panel.handle(&mut page);
        panel.release("read_aloud");
        page.advance(narration::PLAYBACK_DELAY / 2);

        panel.handle(&mut page);
        page.advance(narration::PLAYBACK_DELAY * 2);
        assert!(
            !page
                .events()
                .iter()
                .any(|e| matches!(e, PageEvent::AudioPlayed(_)))
        );
        assert_eq!(page.pending(), 0);
    }

    #[test]
    fn tab_focuses_after_delay() {
        init_logs();
        let mut page = keyboard_page();
        let mut panels = setup_panels(&mut page, &Registry::standard());
        let panel = &mut panels[0];

        panel.press("tab");
        panel.handle(&mut page);
        panel.release("tab");

        page.advance(keyboard::FOCUS_DELAY - Duration::from_millis(1));
        assert!(page.events().is_empty());
        page.advance(Duration::from_millis(1));
        assert_eq!(page.events(), [PageEvent::Focus("inter-input-1".into())]);
    }

    #[test]
    fn rerender_cancels_pending_focus() {
        init_logs();
        let mut page = keyboard_page();
        let mut panels = setup_panels(&mut page, &Registry::standard());
        let panel = &mut panels[0];

        panel.press("tab");
        panel.handle(&mut page);
        panel.release("tab");
        page.advance(Duration::from_millis(10));

        // Unrelated input before the focus lands.
        page.set_checked(WidgetId::KeyboardShortcuts.as_str(), "invalid_tabbing", false);
        panel.handle(&mut page);

        page.advance(keyboard::FOCUS_DELAY);
        assert!(page.events().is_empty());
    }

    #[test]
    fn enter_clicks_submit() {
        init_logs();
        let mut page = keyboard_page();
        let mut panels = setup_panels(&mut page, &Registry::standard());

        panels[0].press("enter");
        panels[0].handle(&mut page);
        page.advance(keyboard::FOCUS_DELAY);
        assert_eq!(
            page.events(),
            [
                PageEvent::Focus(keyboard::SUBMIT_ID.into()),
                PageEvent::Click(keyboard::SUBMIT_ID.into()),
            ]
        );
    }

    #[test]
    fn dispose_cancels_pending_work() {
        init_logs();
        let mut page = keyboard_page();
        let mut panels = setup_panels(&mut page, &Registry::standard());

        panels[0].press("tab");
        panels[0].handle(&mut page);
        panels[0].dispose();
        page.advance(keyboard::FOCUS_DELAY);
        assert!(page.events().is_empty());
        assert_eq!(page.pending(), 0);
    }

    fn size_contrast_page() -> MemoryPage {
        let mut page = MemoryPage::new();
        page.add_panel(
            WidgetId::SizeContrast.as_str(),
            vec![
                Control::text("text_color", "#000000"),
                Control::text("bg_color", "#ffffff"),
                Control::checkbox("color_blind", false),
                Control::text("font_size", "16"),
            ],
        );
        page
    }

    #[test]
    fn size_contrast_updates_display() {
        init_logs();
        let id = WidgetId::SizeContrast.as_str();
        let mut page = size_contrast_page();
        page.add_element(size_contrast::FONT_SIZE_DISPLAY_ID);

        let mut panels = setup_panels(&mut page, &Registry::standard());
        let display = |page: &MemoryPage| {
            page.element(size_contrast::FONT_SIZE_DISPLAY_ID)
                .map(|e| e.html.clone())
        };
        assert_eq!(display(&page).as_deref(), Some("16px"));
        assert!(page.preview(id).unwrap_or_default().contains("21:1"));

        page.set_value(id, "font_size", "24");
        panels[0].handle(&mut page);
        assert_eq!(display(&page).as_deref(), Some("24px"));
    }

    #[test]
    fn missing_display_is_reported_not_fatal() {
        init_logs();
        let id = WidgetId::SizeContrast.as_str();
        let mut page = size_contrast_page();
        let mut panel = Panel::new(id, &Registry::standard());

        assert_eq!(
            panel.refresh(&mut page),
            Err(Error::MissingElement(
                size_contrast::FONT_SIZE_DISPLAY_ID.into()
            ))
        );
        // Markup was committed before the mount failed.
        assert!(page.preview(id).unwrap_or_default().contains("21:1"));

        panel.handle(&mut page);
    }
}
