//! Assistive narration: plays a recording of a screen reader reading the
//! page, with or without ARIA semantics and alt text.
//!
//! Renders no markup. Each render loads the clip matching the current flags
//! and replaces the previously loaded one; "read aloud" plays whichever clip
//! is loaded when the short delay runs out.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use lumen_core::*;

use crate::Widget;

pub const PLAYBACK_DELAY: Duration = Duration::from_millis(100);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NarrationConfig {
    /// `aria_semantic` checkbox.
    pub aria_semantic: bool,
    /// `alt_text` checkbox.
    pub alt_text: bool,
    /// `read_aloud` button held.
    pub read_aloud: bool,
}

impl FromControls for NarrationConfig {
    fn from_controls(state: &ControlState) -> Self {
        Self {
            aria_semantic: state.flag("aria_semantic"),
            alt_text: state.flag("alt_text"),
            read_aloud: state.flag("read_aloud"),
        }
    }
}

impl NarrationConfig {
    pub fn track(&self) -> &'static str {
        match (self.aria_semantic, self.alt_text) {
            (true, true) => "audio/screen_reader_aria_semantic_alt.mp3",
            (true, false) => "audio/screen_reader_aria_semantic.mp3",
            (false, true) => "audio/screen_reader_alt.mp3",
            (false, false) => "audio/screen_reader_none.mp3",
        }
    }
}

#[derive(Default)]
pub struct AssistiveNarration {
    loaded: Rc<RefCell<Option<AudioHandle>>>,
}

impl AssistiveNarration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source of the currently loaded clip.
    pub fn loaded_src(&self) -> Option<String> {
        self.loaded.borrow().as_ref().map(|a| a.src().to_string())
    }
}

impl Widget for AssistiveNarration {
    fn render(&mut self, state: &ControlState) -> Rendered {
        let cfg = NarrationConfig::from_controls(state);
        let loaded = self.loaded.clone();

        Rendered::empty().with_mount(move |host| {
            let audio = host.load_audio(cfg.track())?;
            // The old clip is dropped here, not stopped.
            loaded.replace(Some(audio));

            if cfg.read_aloud {
                host.defer(
                    PLAYBACK_DELAY,
                    Box::new(move |_: &mut dyn Host| {
                        let audio = loaded.borrow().clone();
                        match audio {
                            Some(audio) => audio.play(),
                            None => Ok(()),
                        }
                    }),
                );
            }
            Ok(())
        })
    }
}
