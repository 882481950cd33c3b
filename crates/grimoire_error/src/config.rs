//! Configuration error types.

/// Layered configuration (`grimoire.toml`, `--config`, `GRIMOIRE__*`) could not
/// be read, or a value had the wrong type.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// Which source or key was at fault
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Record a configuration failure at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use grimoire_error::ConfigError;
    ///
    /// let err = ConfigError::new("gemini.timeout_secs: invalid type: string \"soon\"");
    /// assert!(err.message.starts_with("gemini.timeout_secs"));
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
