use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("invalid panel options: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown log level `{0}`")]
    Level(String),
}

/// How panels are found on the page, and how chatty the runner is.
///
/// Every field is optional in JSON; missing ones take the defaults below.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PanelOptions {
    /// Class of each panel container. The container's `id` picks the widget.
    pub panel_class: String,
    /// Class of the preview region inside a container (first match wins).
    pub preview_class: String,
    /// Class of the controls region inside a container (first match wins).
    pub controls_class: String,
    /// `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            panel_class: "interactive-panel".into(),
            preview_class: "interactive-panel-preview".into(),
            controls_class: "interactive-panel-controls".into(),
            log_level: "info".into(),
        }
    }
}

impl PanelOptions {
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        let options: Self = serde_json::from_str(json)?;
        options.level()?;
        Ok(options)
    }

    pub fn level(&self) -> Result<log::Level, OptionsError> {
        self.log_level
            .parse()
            .map_err(|_| OptionsError::Level(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_is_default() {
        assert_eq!(PanelOptions::from_json("{}").unwrap(), PanelOptions::default());
    }

    #[test]
    fn partial_override() {
        let o = PanelOptions::from_json(r#"{"panel_class": "demo", "log_level": "debug"}"#).unwrap();
        assert_eq!(o.panel_class, "demo");
        assert_eq!(o.preview_class, "interactive-panel-preview");
        assert_eq!(o.level().unwrap(), log::Level::Debug);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            PanelOptions::from_json(r#"{"log_level": "loud"}"#),
            Err(OptionsError::Level(l)) if l == "loud"
        ));
        assert!(matches!(
            PanelOptions::from_json("[1, 2"),
            Err(OptionsError::Json(_))
        ));
    }
}
