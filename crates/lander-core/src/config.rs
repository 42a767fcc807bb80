//! Generator configuration sourced from the environment.
//!
//! The API key is not part of [`GeneratorConfig`]. It is read from the
//! environment on every generation call; a missing key is a generation
//! failure, not a startup error.

use crate::error::{LanderError, LanderResult};

/// Default Gemini API base URL.
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com";

/// Default text-generation model.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Environment variables checked for the API key, in order.
pub const API_KEY_VARS: [&str; 2] = ["API_KEY", "GEMINI_API_KEY"];

/// Environment variable overriding the model (read by the CLI).
pub const MODEL_VAR: &str = "LANDER_MODEL";

/// Environment variable overriding the API base URL (read by the CLI).
pub const API_URL_VAR: &str = "LANDER_API_URL";

/// Where and with which model the generator talks to the text service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub base_url: String,
    pub model: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Build a config, rejecting blank values.
    pub fn new(base_url: &str, model: &str) -> LanderResult<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        let model = model.trim();
        if base_url.is_empty() {
            return Err(LanderError::config("API base URL must not be empty"));
        }
        if model.is_empty() {
            return Err(LanderError::config("Model must not be empty"));
        }
        Ok(Self {
            base_url: base_url.to_string(),
            model: model.to_string(),
        })
    }
}

/// Read the API key from the environment. Blank values count as absent.
pub fn api_key_from_env() -> Option<String> {
    API_KEY_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .map(|key| key.trim().to_string())
        .find(|key| !key.is_empty())
}
