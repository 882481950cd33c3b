//! Provider-neutral generation requests and responses.

use grimoire_error::BuilderError;
use serde::{Deserialize, Serialize};

/// Participant in a generation exchange.
///
/// # Examples
///
/// ```
/// use grimoire_core::Role;
///
/// assert_ne!(Role::User, Role::Assistant);
/// assert_eq!(format!("{}", Role::System), "System");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Role {
    /// Instructions that frame the exchange
    System,
    /// Text from the user
    User,
    /// Text from the model
    Assistant,
}

/// One turn of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Who is speaking
    pub role: Role,
    /// What was said
    pub content: String,
}

impl Message {
    /// A user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// A piece of model output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Text output, which is JSON text when a response schema was requested
    Text(String),
    /// Already-parsed JSON output
    Json(serde_json::Value),
}

/// A request for one generation.
///
/// When `response_schema` is set the backend is asked to return JSON that
/// conforms to it.
///
/// # Examples
///
/// ```
/// use grimoire_core::{GenerateRequest, Message};
///
/// let request = GenerateRequest::builder()
///     .messages(vec![Message::user("Describe a dragon")])
///     .temperature(0.9_f32)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages.len(), 1);
/// assert!(request.response_schema.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, derive_builder::Builder)]
#[builder(
    setter(into, strip_option),
    default,
    build_fn(private, name = "build_internal")
)]
pub struct GenerateRequest {
    /// Conversation turns to send
    pub messages: Vec<Message>,
    /// System instruction, sent separately from the turns
    pub system_instruction: Option<String>,
    /// Sampling temperature
    pub temperature: Option<f32>,
    /// Model override; the backend default is used when absent
    pub model: Option<String>,
    /// Structured output schema in the backend's schema dialect
    pub response_schema: Option<serde_json::Value>,
    /// MIME type of the expected response, e.g. `application/json`
    pub response_mime_type: Option<String>,
}

impl GenerateRequest {
    /// Start building a request.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

impl GenerateRequestBuilder {
    /// Build the request.
    ///
    /// # Errors
    ///
    /// Does not currently fail; every field has a default.
    pub fn build(&self) -> Result<GenerateRequest, BuilderError> {
        self.build_internal().map_err(|e| BuilderError::from(e.to_string()))
    }
}

/// Result of one generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Outputs in the order the backend returned them
    pub outputs: Vec<Output>,
}

impl GenerateResponse {
    /// Response made of a single text output.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            outputs: vec![Output::Text(text.into())],
        }
    }

    /// All output concatenated as text, or `None` when there is none.
    ///
    /// JSON outputs are rendered compactly.
    pub fn text(&self) -> Option<String> {
        if self.outputs.is_empty() {
            return None;
        }
        let joined = self
            .outputs
            .iter()
            .map(|output| match output {
                Output::Text(text) => text.clone(),
                Output::Json(value) => value.to_string(),
            })
            .collect::<String>();
        if joined.trim().is_empty() {
            None
        } else {
            Some(joined)
        }
    }
}
