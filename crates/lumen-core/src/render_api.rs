use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::{Deferred, Result, Task};

/// Side effects a widget needs once its markup is on the page.
pub type Mount = Box<dyn FnOnce(&mut dyn Host) -> Result<()>>;

/// A loaded, playable audio resource.
pub trait Playable {
    fn src(&self) -> &str;
    fn play(&self) -> Result<()>;
}

pub type AudioHandle = Rc<dyn Playable>;

/// Page primitives that can't be expressed as markup.
///
/// Elements are addressed by their `id` attribute. Implementations report a
/// missing element as [`Error::MissingElement`](crate::Error::MissingElement)
/// rather than ignoring it.
pub trait Host {
    /// Replaces the element's children with `html`.
    fn set_html(&mut self, id: &str, html: &str) -> Result<()>;
    fn set_style(&mut self, id: &str, property: &str, value: &str) -> Result<()>;
    fn focus(&mut self, id: &str) -> Result<()>;
    /// Dispatches a `click` on the element.
    fn activate(&mut self, id: &str) -> Result<()>;
    fn load_audio(&mut self, src: &str) -> Result<AudioHandle>;
    /// Runs `task` after roughly `delay`, unless the returned handle is
    /// cancelled first.
    fn defer(&mut self, delay: Duration, task: Task) -> Deferred;
}

/// Output of one widget render.
///
/// Empty markup means "leave the preview alone". The mount callback, when
/// present, runs after the markup has been committed.
#[derive(Default)]
pub struct Rendered {
    pub markup: String,
    pub on_mount: Option<Mount>,
}

impl Rendered {
    pub fn markup(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
            on_mount: None,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_mount(mut self, f: impl FnOnce(&mut dyn Host) -> Result<()> + 'static) -> Self {
        self.on_mount = Some(Box::new(f));
        self
    }

    pub fn has_markup(&self) -> bool {
        !self.markup.is_empty()
    }

    pub fn has_mount(&self) -> bool {
        self.on_mount.is_some()
    }
}

impl fmt::Debug for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rendered")
            .field("markup", &self.markup)
            .field("on_mount", &self.on_mount.as_ref().map(|_| "<callback>"))
            .finish()
    }
}
