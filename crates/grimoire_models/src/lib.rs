//! Generative backend integrations for Grimoire.
//!
//! Currently one provider: Google Gemini over its REST `generateContent` API,
//! with structured output enabled whenever a request carries a response schema.
//!
//! ```no_run
//! use grimoire_core::{GenerateRequest, Message};
//! use grimoire_interface::GrimoireDriver;
//! use grimoire_models::{GeminiClient, GeminiConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new(GeminiConfig::default())?;
//! let request = GenerateRequest::builder()
//!     .messages(vec![Message::user("Name a dragon")])
//!     .build()?;
//! let response = client.generate(&request).await?;
//! println!("{:?}", response.text());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;

pub use gemini::{
    GeminiCandidate, GeminiClient, GeminiConfig, GeminiContent, GeminiPart, GeminiRequest,
    GeminiRequestBuilder, GeminiResponse, GenerationConfig, PromptFeedback,
};
