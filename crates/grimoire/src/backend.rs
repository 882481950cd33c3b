//! The driver used by the binary.

use async_trait::async_trait;
use grimoire_core::{GenerateRequest, GenerateResponse};
use grimoire_error::{GeminiError, GeminiErrorKind, GrimoireResult};
use grimoire_interface::GrimoireDriver;
use grimoire_models::{GeminiClient, GeminiConfig};
use tracing::warn;

/// Gemini when an API key is available, otherwise a driver that refuses every
/// request.
///
/// Browsing, deleting and exporting need no key, so a missing key only
/// surfaces when something is generated.
#[derive(Debug)]
pub enum Backend {
    /// Live Gemini client
    Gemini(GeminiClient),
    /// No client could be built; holds the environment variable that was missing
    Unconfigured(String),
}

impl Backend {
    /// Build a Gemini client from `config`, falling back to [`Backend::Unconfigured`].
    pub fn from_config(config: &GeminiConfig) -> Self {
        match GeminiClient::new(config.clone()) {
            Ok(client) => Self::Gemini(client),
            Err(e) => {
                warn!(error = %e, "Gemini unavailable; generation disabled");
                Self::Unconfigured(config.api_key_env().clone())
            }
        }
    }
}

#[async_trait]
impl GrimoireDriver for Backend {
    async fn generate(&self, req: &GenerateRequest) -> GrimoireResult<GenerateResponse> {
        match self {
            Self::Gemini(client) => client.generate(req).await,
            Self::Unconfigured(var) => {
                Err(GeminiError::new(GeminiErrorKind::MissingApiKey(var.clone())).into())
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        match self {
            Self::Gemini(client) => client.provider_name(),
            Self::Unconfigured(_) => "unconfigured",
        }
    }

    fn model_name(&self) -> &str {
        match self {
            Self::Gemini(client) => client.model_name(),
            Self::Unconfigured(_) => "none",
        }
    }
}
