//! Gemini connection settings.

use serde::{Deserialize, Serialize};

/// Settings for [`crate::GeminiClient`].
///
/// Every field has a default, so a config section may set only what it changes.
///
/// # Examples
///
/// ```
/// use grimoire_models::GeminiConfig;
///
/// let config = GeminiConfig::default();
/// assert_eq!(config.model(), "gemini-3-pro-preview");
/// assert_eq!(config.api_key_env(), "GEMINI_API_KEY");
/// assert!(config.timeout_secs().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(default)]
pub struct GeminiConfig {
    /// Model used when a request does not name one
    model: String,
    /// Base URL of the REST API, without a trailing slash
    api_base: String,
    /// Environment variable holding the API key
    api_key_env: String,
    /// Sampling temperature used when a request does not set one
    temperature: Option<f32>,
    /// Whole-request timeout; none by default
    timeout_secs: Option<u64>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: "gemini-3-pro-preview".to_string(),
            api_base: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            temperature: None,
            timeout_secs: None,
        }
    }
}

impl GeminiConfig {
    /// Use a different default model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Point at a different API endpoint.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Set a request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// URL of the `generateContent` endpoint for `model`.
    pub fn generate_url(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            model
        )
    }
}
