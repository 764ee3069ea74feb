//! Headless page for tests and previews outside the browser.
//!
//! Elements are plain records keyed by id. Markup committed to a preview is
//! scanned for `id="..."` attributes so widgets can focus or style what they
//! just rendered. Deferred tasks wait on a virtual clock that only moves when
//! [`MemoryPage::advance`] is called.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::time::Duration;

use lumen_core::{AudioHandle, Deferred, Error, Host, Playable, Result, Task};

use crate::controls::Control;
use crate::panel::Page;

/// Observable side effects, in the order they happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageEvent {
    Focus(String),
    Click(String),
    AudioLoaded(String),
    AudioPlayed(String),
}

#[derive(Clone, Debug, Default)]
pub struct MemoryElement {
    pub html: String,
    pub styles: BTreeMap<String, String>,
}

#[derive(Default)]
struct MemoryPanel {
    controls: Vec<Control>,
    preview: String,
}

struct Scheduled {
    due: Duration,
    seq: u64,
    task: Task,
}

struct MemoryAudio {
    src: String,
    events: Rc<RefCell<Vec<PageEvent>>>,
}

impl Playable for MemoryAudio {
    fn src(&self) -> &str {
        &self.src
    }

    fn play(&self) -> Result<()> {
        self.events
            .borrow_mut()
            .push(PageEvent::AudioPlayed(self.src.clone()));
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryPage {
    order: Vec<String>,
    panels: HashMap<String, MemoryPanel>,
    elements: HashMap<String, MemoryElement>,
    events: Rc<RefCell<Vec<PageEvent>>>,
    now: Duration,
    seq: u64,
    queue: Vec<Scheduled>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_panel(&mut self, id: impl Into<String>, controls: Vec<Control>) -> &mut Self {
        let id = id.into();
        if !self.panels.contains_key(&id) {
            self.order.push(id.clone());
        }
        self.panels.insert(
            id,
            MemoryPanel {
                controls,
                preview: String::new(),
            },
        );
        self
    }

    /// Adds a free-standing element, e.g. a value display next to a slider.
    pub fn add_element(&mut self, id: impl Into<String>) -> &mut Self {
        self.elements.entry(id.into()).or_default();
        self
    }

    pub fn set_value(&mut self, panel: &str, name: &str, value: &str) {
        if let Some(c) = self.control_mut(panel, name) {
            c.value = value.to_string();
        }
    }

    pub fn set_checked(&mut self, panel: &str, name: &str, checked: bool) {
        if let Some(c) = self.control_mut(panel, name) {
            c.checked = checked;
        }
    }

    fn control_mut(&mut self, panel: &str, name: &str) -> Option<&mut Control> {
        let control = self
            .panels
            .get_mut(panel)?
            .controls
            .iter_mut()
            .find(|c| c.name == name);
        if control.is_none() {
            log::warn!("panel `{panel}` has no control `{name}`");
        }
        control
    }

    pub fn preview(&self, panel: &str) -> Option<&str> {
        self.panels.get(panel).map(|p| p.preview.as_str())
    }

    pub fn element(&self, id: &str) -> Option<&MemoryElement> {
        self.elements.get(id)
    }

    pub fn style(&self, id: &str, property: &str) -> Option<&str> {
        self.elements.get(id)?.styles.get(property).map(String::as_str)
    }

    pub fn events(&self) -> Vec<PageEvent> {
        self.events.borrow().clone()
    }

    pub fn clear_events(&mut self) {
        self.events.borrow_mut().clear();
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Tasks scheduled but not yet run (cancelled ones included).
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Moves the clock forward, running every task that comes due in
    /// deadline order. A failing task is logged and the rest still run.
    pub fn advance(&mut self, by: Duration) {
        let until = self.now + by;
        loop {
            let next = self
                .queue
                .iter()
                .enumerate()
                .filter(|(_, s)| s.due <= until)
                .min_by_key(|(_, s)| (s.due, s.seq))
                .map(|(i, _)| i);
            let Some(i) = next else { break };

            let scheduled = self.queue.remove(i);
            self.now = scheduled.due;
            if let Err(e) = (scheduled.task)(self) {
                log::error!("deferred task failed: {e}");
            }
        }
        self.now = until;
    }

    fn element_mut(&mut self, id: &str) -> Result<&mut MemoryElement> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| Error::MissingElement(id.to_string()))
    }

    fn push(&self, event: PageEvent) {
        self.events.borrow_mut().push(event);
    }
}

/// Values of every `id="..."` attribute in `html`.
fn ids_in(html: &str) -> Vec<&str> {
    const NEEDLE: &str = " id=\"";
    let mut ids = Vec::new();
    let mut rest = html;
    while let Some(start) = rest.find(NEEDLE) {
        rest = &rest[start + NEEDLE.len()..];
        let Some(end) = rest.find('"') else { break };
        ids.push(&rest[..end]);
        rest = &rest[end..];
    }
    ids
}

impl Host for MemoryPage {
    fn set_html(&mut self, id: &str, html: &str) -> Result<()> {
        self.element_mut(id)?.html = html.to_string();
        Ok(())
    }

    fn set_style(&mut self, id: &str, property: &str, value: &str) -> Result<()> {
        self.element_mut(id)?
            .styles
            .insert(property.to_string(), value.to_string());
        Ok(())
    }

    fn focus(&mut self, id: &str) -> Result<()> {
        self.element_mut(id)?;
        self.push(PageEvent::Focus(id.to_string()));
        Ok(())
    }

    fn activate(&mut self, id: &str) -> Result<()> {
        self.element_mut(id)?;
        self.push(PageEvent::Click(id.to_string()));
        Ok(())
    }

    fn load_audio(&mut self, src: &str) -> Result<AudioHandle> {
        self.push(PageEvent::AudioLoaded(src.to_string()));
        Ok(Rc::new(MemoryAudio {
            src: src.to_string(),
            events: self.events.clone(),
        }))
    }

    fn defer(&mut self, delay: Duration, task: Task) -> Deferred {
        let handle = Deferred::new();
        self.seq += 1;
        self.queue.push(Scheduled {
            due: self.now + delay,
            seq: self.seq,
            task: handle.guard(task),
        });
        handle
    }
}

impl Page for MemoryPage {
    fn panel_ids(&self) -> Vec<String> {
        self.order.clone()
    }

    fn controls(&self, panel: &str) -> Result<Vec<Control>> {
        self.panels
            .get(panel)
            .map(|p| p.controls.clone())
            .ok_or_else(|| Error::MissingElement(panel.to_string()))
    }

    fn replace_preview(&mut self, panel: &str, html: &str) -> Result<()> {
        let slot = self
            .panels
            .get_mut(panel)
            .ok_or_else(|| Error::MissingElement(panel.to_string()))?;
        let old = std::mem::replace(&mut slot.preview, html.to_string());

        // Elements from the old preview go away with it.
        for id in ids_in(&old) {
            self.elements.remove(id);
        }
        for id in ids_in(html) {
            self.elements.insert(id.to_string(), MemoryElement::default());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_ids_in_markup() {
        let html = r#"<div id="a"><input id="b" type="text"/><label for="b"></label></div>"#;
        assert_eq!(ids_in(html), ["a", "b"]);
        assert!(ids_in("<p>no ids</p>").is_empty());
    }

    #[test]
    fn advance_runs_due_tasks_in_order() {
        let mut page = MemoryPage::new();
        page.add_element("x");
        page.defer(
            Duration::from_millis(100),
            Box::new(|h: &mut dyn Host| h.focus("x")),
        );
        page.defer(
            Duration::from_millis(50),
            Box::new(|h: &mut dyn Host| h.activate("x")),
        );

        page.advance(Duration::from_millis(60));
        assert_eq!(page.events(), [PageEvent::Click("x".into())]);
        assert_eq!(page.pending(), 1);

        page.advance(Duration::from_millis(60));
        assert_eq!(
            page.events(),
            [PageEvent::Click("x".into()), PageEvent::Focus("x".into())]
        );
        assert_eq!(page.now(), Duration::from_millis(120));
    }

    #[test]
    fn cancelled_task_is_skipped() {
        let mut page = MemoryPage::new();
        page.add_element("x");
        let handle = page.defer(
            Duration::from_millis(10),
            Box::new(|h: &mut dyn Host| h.focus("x")),
        );
        handle.cancel();
        page.advance(Duration::from_millis(10));
        assert!(page.events().is_empty());
        assert_eq!(page.pending(), 0);
    }

    #[test]
    fn panel_ids_are_container_ids_in_order() {
        let mut page = MemoryPage::new();
        page.add_panel("b", vec![]);
        page.add_panel("a", vec![]);
        page.add_panel("b", vec![Control::text("x", "1")]);
        assert_eq!(page.panel_ids(), ["b", "a"]);
        assert_eq!(page.controls("b").unwrap(), [Control::text("x", "1")]);
    }

    #[test]
    fn missing_element_is_an_error() {
        let mut page = MemoryPage::new();
        assert_eq!(
            page.focus("ghost"),
            Err(Error::MissingElement("ghost".into()))
        );
        assert!(page.set_style("ghost", "color", "red").is_err());
    }
}
