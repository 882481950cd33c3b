//! Scripted driver for tests.

use crate::GrimoireDriver;
use async_trait::async_trait;
use grimoire_core::{GenerateRequest, GenerateResponse};
use grimoire_error::{GeminiError, GeminiErrorKind, GrimoireError, GrimoireResult};
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// A single scripted reply.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Reply with this text
    Success(String),
    /// Fail with this provider error
    Error(GeminiErrorKind),
}

/// How the mock answers successive calls.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Same reply every time
    Always(MockResponse),
    /// Replies in order; calls past the end fail
    Sequence(Vec<MockResponse>),
}

#[derive(Debug, Default)]
struct MockState {
    calls: usize,
    requests: Vec<GenerateRequest>,
}

/// In-memory [`GrimoireDriver`] that returns scripted replies and records requests.
///
/// Clones share their call history.
#[derive(Debug, Clone)]
pub struct MockDriver {
    behavior: MockBehavior,
    state: Arc<Mutex<MockState>>,
    model_name: String,
}

impl MockDriver {
    /// Mock with explicit behaviour.
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            state: Arc::new(Mutex::new(MockState::default())),
            model_name: "mock-model".to_string(),
        }
    }

    /// Always succeed with `text`.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new(MockBehavior::Always(MockResponse::Success(text.into())))
    }

    /// Always fail with `error`.
    pub fn new_error(error: GeminiErrorKind) -> Self {
        Self::new(MockBehavior::Always(MockResponse::Error(error)))
    }

    /// Reply with `responses` in order.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self::new(MockBehavior::Sequence(responses))
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock()
    }

    /// Number of `generate` calls so far.
    pub fn call_count(&self) -> usize {
        self.state().calls
    }

    /// Every request received, oldest first.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.state().requests.clone()
    }

    /// The most recent request.
    pub fn last_request(&self) -> Option<GenerateRequest> {
        self.state().requests.last().cloned()
    }

    fn reply(response: &MockResponse) -> GrimoireResult<GenerateResponse> {
        match response {
            MockResponse::Success(text) => Ok(GenerateResponse::from_text(text.clone())),
            MockResponse::Error(kind) => Err(GrimoireError::from(GeminiError::new(kind.clone()))),
        }
    }
}

#[async_trait]
impl GrimoireDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> GrimoireResult<GenerateResponse> {
        let index = {
            let mut state = self.state();
            state.requests.push(req.clone());
            state.calls += 1;
            state.calls - 1
        };
        tracing::debug!(call = index + 1, "Mock driver generate");

        match &self.behavior {
            MockBehavior::Always(response) => Self::reply(response),
            MockBehavior::Sequence(responses) => match responses.get(index) {
                Some(response) => Self::reply(response),
                None => Err(GrimoireError::from(GeminiError::new(
                    GeminiErrorKind::ResponseParsing(format!(
                        "Mock sequence exhausted (call {} beyond {} responses)",
                        index + 1,
                        responses.len()
                    )),
                ))),
            },
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerateRequest {
        GenerateRequest::default()
    }

    #[tokio::test]
    async fn test_sequence_then_exhausted() {
        let driver = MockDriver::new_sequence(vec![
            MockResponse::Error(GeminiErrorKind::EmptyResponse),
            MockResponse::Success("second".to_string()),
        ]);

        assert!(driver.generate(&request()).await.is_err());
        let second = driver.generate(&request()).await.unwrap();
        assert_eq!(second.text().as_deref(), Some("second"));
        assert!(driver.generate(&request()).await.is_err());
        assert_eq!(driver.call_count(), 3);
    }

    #[tokio::test]
    async fn test_clones_share_history() {
        let driver = MockDriver::new_success("x");
        let clone = driver.clone();
        clone.generate(&request()).await.unwrap();
        assert_eq!(driver.call_count(), 1);
        assert!(driver.last_request().is_some());
    }
}
