//! HTTP error types.

/// Transport-level failure talking to a generation backend, with source location.
///
/// Raised when the request never produced an HTTP response (connection refused,
/// DNS failure, timeout, unreadable body).
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Error: {} at line {} in {}", message, line, file)]
pub struct HttpError {
    /// What reqwest reported
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Record a transport failure at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use grimoire_error::{GrimoireError, HttpError};
    ///
    /// let err = HttpError::new("generateContent request timed out after 30s");
    /// assert!(GrimoireError::from(err).is_network());
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
