//! JSON error types.

/// A dossier or collection could not be rendered as JSON.
///
/// Raised by JSON export. Parsing model output is a schema concern and
/// reports [`crate::SchemaError`] instead.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: {} at line {} in {}", message, line, file)]
pub struct JsonError {
    /// What serde reported
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Record a serialization failure at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use grimoire_error::JsonError;
    ///
    /// let err = JsonError::new("failed to export dossier 1718000000000: key must be a string");
    /// assert!(err.to_string().starts_with("JSON Error: failed to export dossier"));
    /// assert!(err.line > 0);
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
