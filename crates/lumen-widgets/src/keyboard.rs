//! Keyboard navigation: simulated Tab and Enter keys that move focus through
//! a small form, and an option to scramble the tab order.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use lumen_core::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::Widget;

/// Tab order of the preview form, first to last.
pub const FOCUS_ORDER: [&str; 4] = [
    "inter-input-1",
    "inter-input-2",
    "inter-input-3",
    "inter-input-4",
];

pub const SUBMIT_ID: &str = "inter-input-3";

/// Lets the pressed control button release focus before we move it.
pub const FOCUS_DELAY: Duration = Duration::from_millis(50);

const FORM: &str = r#"<div style="display: flex; flex-direction: column; gap: 1rem; width: max-content; height: max-content;"><div><label for="inter-input-1">Text:</label><input id="inter-input-1" type="text"/></div><div><label for="inter-input-2">Check box:</label><input id="inter-input-2" type="checkbox"/></div><div><input id="inter-input-3" type="submit" value="Submit" onclick="alert('Submit pressed')" style="font-size: 1rem"/><input id="inter-input-4" type="button" value="Clear" onclick="alert('Clear pressed')" style="font-size: 1rem"/></div></div>"#;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyboardConfig {
    /// `invalid_tabbing` scrambles the order on every render.
    pub invalid_tabbing: bool,
    /// `tab` button held.
    pub tab: bool,
    /// `enable_tab_order`
    pub enable_tab_order: bool,
    /// `enter` button held.
    pub enter: bool,
    /// `enable_enter_submit`
    pub enable_enter_submit: bool,
}

impl FromControls for KeyboardConfig {
    fn from_controls(state: &ControlState) -> Self {
        Self {
            invalid_tabbing: state.flag("invalid_tabbing"),
            tab: state.flag("tab"),
            enable_tab_order: state.flag("enable_tab_order"),
            enter: state.flag("enter"),
            enable_enter_submit: state.flag("enable_enter_submit"),
        }
    }
}

/// Swaps two uniformly chosen positions, once per element.
pub fn scramble<T>(items: &mut [T], rng: &mut impl Rng) {
    let len = items.len();
    if len < 2 {
        return;
    }
    for _ in 0..len {
        let from = rng.random_range(0..len);
        let to = rng.random_range(0..len);
        items.swap(from, to);
    }
}

pub struct KeyboardShortcuts {
    /// Index into the order used by the last Tab; `None` until the first one.
    cursor: Rc<Cell<Option<usize>>>,
    rng: StdRng,
}

impl Default for KeyboardShortcuts {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardShortcuts {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_rng(&mut rand::rng()))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            cursor: Rc::new(Cell::new(None)),
            rng,
        }
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor.get()
    }

    pub fn focus_order(&mut self, cfg: &KeyboardConfig) -> [&'static str; 4] {
        let mut order = FOCUS_ORDER;
        if cfg.invalid_tabbing {
            scramble(&mut order, &mut self.rng);
        }
        order
    }
}

impl Widget for KeyboardShortcuts {
    fn render(&mut self, state: &ControlState) -> Rendered {
        let cfg = KeyboardConfig::from_controls(state);
        let order = self.focus_order(&cfg);
        let cursor = self.cursor.clone();

        Rendered::markup(FORM).with_mount(move |host| {
            if cfg.tab && cfg.enable_tab_order {
                let next = cursor.get().map_or(0, |i| (i + 1) % order.len());
                cursor.set(Some(next));
                let target = order[next];
                log::debug!("tab -> {target}");
                host.defer(FOCUS_DELAY, Box::new(move |host: &mut dyn Host| host.focus(target)));
            }

            if cfg.enter && cfg.enable_enter_submit {
                host.defer(
                    FOCUS_DELAY,
                    Box::new(|host: &mut dyn Host| {
                        log::info!("submitting {SUBMIT_ID}");
                        host.focus(SUBMIT_ID)?;
                        host.activate(SUBMIT_ID)
                    }),
                );
            }
            Ok(())
        })
    }
}
