//! Trait definitions for generative backends.

use async_trait::async_trait;
use grimoire_core::{GenerateRequest, GenerateResponse};
use grimoire_error::GrimoireResult;
use std::sync::Arc;

/// Core trait that every generative backend implements.
///
/// A driver performs exactly one request per call. It does not retry and does
/// not interpret the output; schema handling lives with the caller.
#[async_trait]
pub trait GrimoireDriver: Send + Sync {
    /// Generate model output for a request.
    async fn generate(&self, req: &GenerateRequest) -> GrimoireResult<GenerateResponse>;

    /// Provider name (e.g. "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g. "gemini-3-pro-preview").
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<D: GrimoireDriver + ?Sized> GrimoireDriver for Arc<D> {
    async fn generate(&self, req: &GenerateRequest) -> GrimoireResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

#[async_trait]
impl<D: GrimoireDriver + ?Sized> GrimoireDriver for Box<D> {
    async fn generate(&self, req: &GenerateRequest) -> GrimoireResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
