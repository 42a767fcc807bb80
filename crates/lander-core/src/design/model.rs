//! Landing page design configuration.

use serde::{Deserialize, Serialize};

/// Color configuration for the landing page.
///
/// Values are color strings (usually hex) and are not validated; a
/// malformed value only affects rendering downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignConfig {
    pub bg_color: String,
    pub button_color: String,
    pub text_color: String,
    pub button_text_color: String,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            bg_color: "#ffffff".to_string(),
            button_color: "#2563eb".to_string(),
            text_color: "#1f2937".to_string(),
            button_text_color: "#ffffff".to_string(),
        }
    }
}

/// Partial design update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DesignPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text_color: Option<String>,
}

impl DesignPatch {
    pub fn is_empty(&self) -> bool {
        self.bg_color.is_none()
            && self.button_color.is_none()
            && self.text_color.is_none()
            && self.button_text_color.is_none()
    }
}
