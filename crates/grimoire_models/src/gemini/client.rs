//! Gemini `generateContent` client.

use super::conversion;
use super::dto::{GeminiErrorEnvelope, GeminiResponse};
use crate::GeminiConfig;
use async_trait::async_trait;
use grimoire_core::{GenerateRequest, GenerateResponse};
use grimoire_error::{GeminiError, GeminiErrorKind, GrimoireResult, HttpError};
use grimoire_interface::GrimoireDriver;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Client for the Gemini REST API.
///
/// Each call is a single attempt. Failures are reported, never retried.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Creates a client, reading the API key from the environment variable
    /// named in the config.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The API key variable is not set
    /// - The HTTP client cannot be initialized
    #[instrument(skip_all, fields(model = %config.model()))]
    pub fn new(config: GeminiConfig) -> Result<Self, GeminiError> {
        let api_key = std::env::var(config.api_key_env())
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                GeminiError::new(GeminiErrorKind::MissingApiKey(config.api_key_env().clone()))
            })?;
        Self::with_api_key(config, api_key)
    }

    /// Creates a client with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    #[instrument(skip_all, fields(model = %config.model()))]
    pub fn with_api_key(config: GeminiConfig, api_key: impl Into<String>) -> Result<Self, GeminiError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs() {
            builder = builder.timeout(Duration::from_secs(*secs));
        }
        let client = builder
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            config,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }
}

#[async_trait]
impl GrimoireDriver for GeminiClient {
    #[instrument(skip(self, req), fields(model))]
    async fn generate(&self, req: &GenerateRequest) -> GrimoireResult<GenerateResponse> {
        let model = req.model.as_deref().unwrap_or(self.config.model());
        tracing::Span::current().record("model", model);

        let body = conversion::to_gemini_request(req, *self.config.temperature())?;
        let url = self.config.generate_url(model);
        debug!(url = %url, turns = body.contents.len(), "Sending Gemini request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| HttpError::new(format!("Gemini request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiErrorEnvelope>(&text)
                .map(|envelope| envelope.error.message)
                .unwrap_or(text);
            error!(status = status.as_u16(), message = %message, "Gemini returned an error status");
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            })
            .into());
        }

        let payload: GeminiResponse = response.json().await.map_err(|e| {
            GeminiError::new(GeminiErrorKind::ResponseParsing(e.to_string()))
        })?;
        debug!(candidates = payload.candidates.len(), "Received Gemini response");

        conversion::from_gemini_response(&payload).map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        self.config.model()
    }
}
