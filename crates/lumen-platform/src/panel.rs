use std::collections::HashSet;

use lumen_core::{Host, Result, Scope};
use lumen_widgets::{Registry, Widget};
use web_time::Instant;

use crate::controls::{Control, collect_state};

/// A page holding demo panels, as seen by the dispatch loop.
///
/// Panels are addressed by their container id.
pub trait Page: Host {
    /// Ids of every panel container, in document order.
    fn panel_ids(&self) -> Vec<String>;
    /// Every `input` and `textarea` in the panel's controls region.
    fn controls(&self, panel: &str) -> Result<Vec<Control>>;
    /// Replaces the children of the panel's preview region.
    fn replace_preview(&mut self, panel: &str, html: &str) -> Result<()>;
}

/// Dispatch state of one panel container.
pub struct Panel {
    id: String,
    widget: Option<Box<dyn Widget>>,
    pressed: HashSet<String>,
    /// Cleanups of the last render; disposed when the next one starts.
    scope: Scope,
}

impl Panel {
    /// Binds the widget registered for `id`, if any. Unbound panels ignore
    /// every event.
    pub fn new(id: impl Into<String>, registry: &Registry) -> Self {
        let id = id.into();
        let widget = registry.create(&id);
        if widget.is_none() {
            log::warn!("panel `{id}` has no widget; it will stay static");
        }
        Self {
            id,
            widget,
            pressed: HashSet::new(),
            scope: Scope::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_bound(&self) -> bool {
        self.widget.is_some()
    }

    pub fn press(&mut self, button: &str) {
        self.pressed.insert(button.to_string());
    }

    pub fn release(&mut self, button: &str) {
        self.pressed.remove(button);
    }

    pub fn is_pressed(&self, button: &str) -> bool {
        self.pressed.contains(button)
    }

    /// Re-renders from the current controls: snapshot, render, commit
    /// non-empty markup, then mount.
    ///
    /// Deferred work still pending from the previous render is cancelled.
    pub fn refresh<P: Page>(&mut self, page: &mut P) -> Result<()> {
        let Some(widget) = self.widget.as_mut() else {
            return Ok(());
        };
        let started = Instant::now();

        let state = collect_state(&page.controls(&self.id)?, &self.pressed);
        std::mem::take(&mut self.scope).dispose();

        let rendered = self.scope.run(|| widget.render(&state));
        if rendered.has_markup() {
            page.replace_preview(&self.id, &rendered.markup)?;
        }
        if let Some(on_mount) = rendered.on_mount {
            self.scope.run(|| on_mount(page))?;
        }

        log::trace!(
            "panel `{}`: {} controls rendered in {:?}",
            self.id,
            state.len(),
            started.elapsed()
        );
        Ok(())
    }

    /// [`refresh`](Self::refresh) as an event handler: a failure is logged
    /// and only this event is lost.
    pub fn handle<P: Page>(&mut self, page: &mut P) {
        if let Err(e) = self.refresh(page) {
            log::error!("panel `{}`: {e}", self.id);
        }
    }

    /// Cancels anything the last render left pending.
    pub fn dispose(&mut self) {
        std::mem::take(&mut self.scope).dispose();
    }
}

/// Creates a [`Panel`] for every container on `page` and renders each once.
pub fn setup_panels<P: Page>(page: &mut P, registry: &Registry) -> Vec<Panel> {
    page.panel_ids()
        .into_iter()
        .map(|id| {
            let mut panel = Panel::new(id, registry);
            panel.handle(page);
            panel
        })
        .collect()
}
