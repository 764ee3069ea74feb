use std::collections::HashMap;

use crate::{Widget, WidgetId};

pub type Factory = Box<dyn Fn() -> Box<dyn Widget>>;

/// Maps panel ids to widget factories.
///
/// Every panel gets its own instance, so per-widget state (focus cursor,
/// loaded audio) is never shared between panels.
#[derive(Default)]
pub struct Registry {
    factories: HashMap<String, Factory>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// All built-in widgets.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for id in WidgetId::ALL {
            registry.register(id.as_str(), move || id.create());
        }
        registry
    }

    /// Registers (or replaces) the factory for `id`.
    pub fn register(&mut self, id: impl Into<String>, factory: impl Fn() -> Box<dyn Widget> + 'static) {
        let id = id.into();
        if self.factories.insert(id.clone(), Box::new(factory)).is_some() {
            log::warn!("registry: replacing widget `{id}`");
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.factories.contains_key(id)
    }

    pub fn create(&self, id: &str) -> Option<Box<dyn Widget>> {
        let widget = self.factories.get(id).map(|f| f());
        if widget.is_none() {
            log::debug!("registry: no widget for `{id}`");
        }
        widget
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::{ControlState, Rendered};

    struct Hello;

    impl Widget for Hello {
        fn render(&mut self, _: &ControlState) -> Rendered {
            Rendered::markup("<p>hello</p>")
        }
    }

    #[test]
    fn standard_has_every_builtin() {
        let _ = env_logger::builder().is_test(true).try_init();
        let registry = Registry::standard();
        assert_eq!(registry.len(), WidgetId::ALL.len());
        for id in WidgetId::ALL {
            assert!(registry.contains(id.as_str()));
            assert!(registry.create(id.as_str()).is_some());
        }
    }

    #[test]
    fn unknown_id_creates_nothing() {
        assert!(Registry::standard().create("not-a-panel").is_none());
        assert!(Registry::new().is_empty());
    }

    #[test]
    fn custom_widgets_can_be_added() {
        let mut registry = Registry::standard();
        registry.register("hello", || Box::new(Hello));
        let mut w = registry.create("hello").unwrap();
        assert_eq!(w.render(&ControlState::new()).markup, "<p>hello</p>");
        assert!(registry.ids().any(|id| id == "hello"));
    }
}
