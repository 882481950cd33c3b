//! Google Gemini integration.

mod client;
mod config;
mod conversion;
mod dto;

pub use client::GeminiClient;
pub use config::GeminiConfig;
pub use dto::{
    GeminiCandidate, GeminiContent, GeminiPart, GeminiRequest, GeminiRequestBuilder,
    GeminiResponse, GenerationConfig, PromptFeedback,
};
