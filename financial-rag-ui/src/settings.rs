//! Display settings for the query form and result panel
//!
//! Settings are plain serde data. The page can embed them as a JSON block:
//!
//! ```html
//! <script id="ui-settings" type="application/json">
//!   { "title": "Quarterly Reports", "clear_on_submit": true }
//! </script>
//! ```
//!
//! Missing fields fall back to [`UiSettings::default`], so components that
//! run without any settings keep their stock labels.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

/// Element id the application shell reads settings from
pub const SETTINGS_ELEMENT_ID: &str = "ui-settings";

/// User-facing labels and form behaviour
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiSettings {
    /// Page heading rendered by the application shell
    pub title: String,
    /// Placeholder text of the query input
    pub placeholder: String,
    /// Label of the submit button
    pub submit_label: String,
    /// Reset the query input after each submission
    pub clear_on_submit: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            title: "Financial RAG".to_string(),
            placeholder: "Enter your query".to_string(),
            submit_label: "Submit".to_string(),
            clear_on_submit: false,
        }
    }
}

impl UiSettings {
    /// Parse settings from a JSON object. Blank input yields the defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Read settings from the text of the element with the given id
    pub fn load_from_document(element_id: &str) -> Result<Self, SettingsError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(SettingsError::NoDocument)?;
        let element = document
            .get_element_by_id(element_id)
            .ok_or_else(|| SettingsError::NotFound(element_id.to_string()))?;

        Self::from_json(&element.text_content().unwrap_or_default())
    }
}

/// Settings provided through context, or the defaults when none are
pub fn use_settings() -> UiSettings {
    use_context::<UiSettings>().unwrap_or_default()
}

/// Errors that can occur while loading settings
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    /// No browser document is available
    NoDocument,
    /// The settings element does not exist
    NotFound(String),
    /// The settings text is not valid JSON for [`UiSettings`]
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SettingsError::NoDocument => write!(f, "No document available"),
            SettingsError::NotFound(id) => write!(f, "Settings element not found: #{}", id),
            SettingsError::Parse(msg) => write!(f, "Invalid settings: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<SettingsError> for JsValue {
    fn from(error: SettingsError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_labels() {
        let settings = UiSettings::default();
        assert_eq!(settings.placeholder, "Enter your query");
        assert_eq!(settings.submit_label, "Submit");
        assert!(!settings.clear_on_submit);
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let settings =
            UiSettings::from_json(r#"{ "title": "Quarterly Reports", "clear_on_submit": true }"#)
                .unwrap();

        assert_eq!(settings.title, "Quarterly Reports");
        assert!(settings.clear_on_submit);
        assert_eq!(settings.submit_label, "Submit");
    }

    #[test]
    fn test_result_heading_is_not_configurable() {
        let settings = UiSettings::from_json(r#"{ "result_heading": "Answer:" }"#).unwrap();
        assert_eq!(settings, UiSettings::default());
    }

    #[test]
    fn test_blank_json_is_default() {
        assert_eq!(UiSettings::from_json("  \n ").unwrap(), UiSettings::default());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = UiSettings::from_json("{ title: ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
        assert!(err.to_string().starts_with("Invalid settings:"));
    }

    #[test]
    fn test_wrong_field_type_is_parse_error() {
        let err = UiSettings::from_json(r#"{ "clear_on_submit": "yes" }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
