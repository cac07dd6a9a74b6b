//! Widget settings as supplied by the host page

use serde::{Deserialize, Serialize};

/// Whether the host allows the value to be edited through the widget
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Editable {
    /// Editable unless the attribute itself is read-only
    #[default]
    Default,
    Never,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderSettings {
    pub widget_id: String,
    #[serde(default)]
    pub editable: Editable,
    /// Attribute-level read-only flag
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub initial_value: bool,
    #[serde(default)]
    pub validation_message: Option<String>,
}

impl SliderSettings {
    pub fn new(widget_id: impl Into<String>) -> Self {
        Self {
            widget_id: widget_id.into(),
            editable: Editable::Default,
            read_only: false,
            initial_value: false,
            validation_message: None,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self =
            serde_json::from_str(json).map_err(|e| SettingsError::InvalidJson(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse a JSON array of settings.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, SettingsError> {
        let list: Vec<Self> =
            serde_json::from_str(json).map_err(|e| SettingsError::InvalidJson(e.to_string()))?;
        for settings in &list {
            settings.validate()?;
        }
        Ok(list)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.widget_id.trim().is_empty() {
            return Err(SettingsError::EmptyWidgetId);
        }
        Ok(())
    }

    pub fn is_enabled(&self) -> bool {
        self.editable == Editable::Default && !self.read_only
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid slider settings: {0}")]
    InvalidJson(String),
    #[error("slider settings need a non-empty widget_id")]
    EmptyWidgetId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_missing_fields() {
        let settings = SliderSettings::from_json(r#"{"widget_id": "slider"}"#).unwrap();
        assert_eq!(settings, SliderSettings::new("slider"));
        assert!(settings.is_enabled());
    }

    #[test]
    fn test_full_settings() {
        let settings = SliderSettings::from_json(
            r#"{
                "widget_id": "notify",
                "editable": "never",
                "read_only": false,
                "initial_value": true,
                "validation_message": "Required"
            }"#,
        )
        .unwrap();
        assert_eq!(settings.editable, Editable::Never);
        assert!(settings.initial_value);
        assert_eq!(settings.validation_message.as_deref(), Some("Required"));
        assert!(!settings.is_enabled());
    }

    #[test]
    fn test_read_only_attribute_disables() {
        let mut settings = SliderSettings::new("slider");
        settings.read_only = true;
        assert!(!settings.is_enabled());
    }

    #[test]
    fn test_empty_widget_id_rejected() {
        let err = SliderSettings::from_json(r#"{"widget_id": "  "}"#).unwrap_err();
        assert!(matches!(err, SettingsError::EmptyWidgetId));
    }

    #[test]
    fn test_invalid_json_rejected() {
        let err = SliderSettings::from_json("{").unwrap_err();
        assert!(matches!(err, SettingsError::InvalidJson(_)));

        let err = SliderSettings::from_json(r#"{"widget_id": "a", "editable": "sometimes"}"#)
            .unwrap_err();
        assert!(matches!(err, SettingsError::InvalidJson(_)));
    }

    #[test]
    fn test_list_rejects_any_invalid_entry() {
        let list = SliderSettings::list_from_json(r#"[{"widget_id": "a"}, {"widget_id": "b"}]"#)
            .unwrap();
        assert_eq!(list.len(), 2);

        let err =
            SliderSettings::list_from_json(r#"[{"widget_id": "a"}, {"widget_id": ""}]"#).unwrap_err();
        assert!(matches!(err, SettingsError::EmptyWidgetId));
    }
}
