//! Accessibility demo widgets.
//!
//! Each widget turns a panel's [`ControlState`] into preview markup and an
//! optional mount callback. Most are pure functions of the snapshot; the
//! keyboard and narration widgets own a little state (a focus cursor, the
//! last loaded audio clip), which is why widgets are objects created once per
//! panel rather than bare functions.

pub mod alt_text;
pub mod color_support;
pub mod keyboard;
pub mod narration;
pub mod predictable;
pub mod readability;
pub mod reduced_animation;
pub mod registry;
pub mod size_contrast;

use std::fmt;
use std::str::FromStr;

use lumen_core::{ControlState, Rendered};

pub use alt_text::AltText;
pub use color_support::ColorSupport;
pub use keyboard::KeyboardShortcuts;
pub use narration::AssistiveNarration;
pub use predictable::Predictable;
pub use readability::ContentReadability;
pub use reduced_animation::ReducedAnimation;
pub use registry::{Factory, Registry};
pub use size_contrast::SizeContrast;

/// Something that can render a panel preview.
pub trait Widget {
    fn render(&mut self, state: &ControlState) -> Rendered;
}

/// The built-in panels, keyed by the `id` of their container on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WidgetId {
    SizeContrast,
    AltText,
    KeyboardShortcuts,
    ReducedAnimation,
    ContentReadability,
    Predictable,
    ColorSupport,
    AssistiveNarration,
}

impl WidgetId {
    pub const ALL: [WidgetId; 8] = [
        WidgetId::SizeContrast,
        WidgetId::AltText,
        WidgetId::KeyboardShortcuts,
        WidgetId::ReducedAnimation,
        WidgetId::ContentReadability,
        WidgetId::Predictable,
        WidgetId::ColorSupport,
        WidgetId::AssistiveNarration,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WidgetId::SizeContrast => "perceivable-size-contrast",
            WidgetId::AltText => "perceivable-alt-text",
            WidgetId::KeyboardShortcuts => "operable-keyboard-shortcuts",
            WidgetId::ReducedAnimation => "operable-reduced-animation",
            WidgetId::ContentReadability => "understandable-content",
            WidgetId::Predictable => "understandable-predictable",
            WidgetId::ColorSupport => "robust-support",
            WidgetId::AssistiveNarration => "robust-assistive",
        }
    }

    /// Fresh widget instance with its own state.
    pub fn create(self) -> Box<dyn Widget> {
        match self {
            WidgetId::SizeContrast => Box::new(SizeContrast),
            WidgetId::AltText => Box::new(AltText),
            WidgetId::KeyboardShortcuts => Box::new(KeyboardShortcuts::new()),
            WidgetId::ReducedAnimation => Box::new(ReducedAnimation),
            WidgetId::ContentReadability => Box::new(ContentReadability),
            WidgetId::Predictable => Box::new(Predictable),
            WidgetId::ColorSupport => Box::new(ColorSupport),
            WidgetId::AssistiveNarration => Box::new(AssistiveNarration::new()),
        }
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown widget `{0}`")]
pub struct UnknownWidget(pub String);

impl FromStr for WidgetId {
    type Err = UnknownWidget;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WidgetId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownWidget(s.to_string()))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use lumen_core::*;

    /// Records every host call; deferred tasks are queued, not run.
    #[derive(Default)]
    pub struct RecordingHost {
        pub calls: Vec<String>,
        pub deferred: Vec<(Duration, Task, Deferred)>,
        pub played: Rc<RefCell<Vec<String>>>,
    }

    struct Clip {
        src: String,
        played: Rc<RefCell<Vec<String>>>,
    }

    impl Playable for Clip {
        fn src(&self) -> &str {
            &self.src
        }
        fn play(&self) -> Result<()> {
            self.played.borrow_mut().push(self.src.clone());
            Ok(())
        }
    }

    impl RecordingHost {
        /// Runs queued tasks in scheduling order, including ones they queue.
        pub fn flush(&mut self) {
            while !self.deferred.is_empty() {
                let (_, task, _) = self.deferred.remove(0);
                task(self).unwrap();
            }
        }
    }

    impl Host for RecordingHost {
        fn set_html(&mut self, id: &str, html: &str) -> Result<()> {
            self.calls.push(format!("html {id} {html}"));
            Ok(())
        }
        fn set_style(&mut self, id: &str, property: &str, value: &str) -> Result<()> {
            self.calls.push(format!("style {id} {property}={value}"));
            Ok(())
        }
        fn focus(&mut self, id: &str) -> Result<()> {
            self.calls.push(format!("focus {id}"));
            Ok(())
        }
        fn activate(&mut self, id: &str) -> Result<()> {
            self.calls.push(format!("click {id}"));
            Ok(())
        }
        fn load_audio(&mut self, src: &str) -> Result<AudioHandle> {
            self.calls.push(format!("audio {src}"));
            Ok(Rc::new(Clip {
                src: src.to_string(),
                played: self.played.clone(),
            }))
        }
        fn defer(&mut self, delay: Duration, task: Task) -> Deferred {
            let handle = Deferred::new();
            let task = handle.guard(task);
            self.deferred.push((delay, task, handle.clone()));
            handle
        }
    }

    pub fn mount(rendered: Rendered, host: &mut RecordingHost) {
        if let Some(on_mount) = rendered.on_mount {
            on_mount(host).unwrap();
        }
    }

    pub fn state(pairs: &[(&str, ControlValue)]) -> ControlState {
        pairs.iter().cloned().collect()
    }
}
