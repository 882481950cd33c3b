//! Top-level error wrapper types.

use crate::{
    BuilderError, ConfigError, GeminiError, HttpError, InputError, InvalidFieldError, JsonError,
    SchemaError, StorageError, WorkflowError,
};

/// Every failure a Grimoire operation can report.
///
/// # Examples
///
/// ```
/// use grimoire_error::{GrimoireError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: GrimoireError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum GrimoireErrorKind {
    /// Transport failure reaching the backend
    #[from(HttpError)]
    Http(HttpError),
    /// Provider-reported failure
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Model output did not match the declared schema
    #[from(SchemaError)]
    Schema(SchemaError),
    /// Reroll requested on an ineligible field
    #[from(InvalidFieldError)]
    InvalidField(InvalidFieldError),
    /// Request rejected before generation
    #[from(InputError)]
    Input(InputError),
    /// Persistent storage failure
    #[from(StorageError)]
    Storage(StorageError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Orchestration error
    #[from(WorkflowError)]
    Workflow(WorkflowError),
}

/// Grimoire error with kind discrimination.
///
/// # Examples
///
/// ```
/// use grimoire_error::{GrimoireError, GrimoireResult, ConfigError};
///
/// fn might_fail() -> GrimoireResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Grimoire Error: {}", _0)]
pub struct GrimoireError(Box<GrimoireErrorKind>);

impl GrimoireError {
    /// Create a new error from a kind.
    pub fn new(kind: GrimoireErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GrimoireErrorKind {
        &self.0
    }

    /// True when the backend could not be reached or refused the request.
    pub fn is_network(&self) -> bool {
        matches!(
            self.kind(),
            GrimoireErrorKind::Http(_) | GrimoireErrorKind::Gemini(_)
        )
    }

    /// True when the backend answered but the answer was unusable.
    pub fn is_schema_violation(&self) -> bool {
        matches!(self.kind(), GrimoireErrorKind::Schema(_))
    }
}

// Generic From implementation for any type that converts to GrimoireErrorKind
impl<T> From<T> for GrimoireError
where
    T: Into<GrimoireErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Grimoire operations.
///
/// # Examples
///
/// ```
/// use grimoire_error::{GrimoireResult, HttpError};
///
/// fn fetch_data() -> GrimoireResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type GrimoireResult<T> = std::result::Result<T, GrimoireError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GeminiErrorKind, SchemaErrorKind};

    #[test]
    fn test_network_classification() {
        let err: GrimoireError = HttpError::new("timed out").into();
        assert!(err.is_network());
        assert!(!err.is_schema_violation());

        let err: GrimoireError = GeminiError::new(GeminiErrorKind::HttpError {
            status_code: 503,
            message: "overloaded".to_string(),
        })
        .into();
        assert!(err.is_network());
    }

    #[test]
    fn test_schema_classification() {
        let err: GrimoireError =
            SchemaError::new(SchemaErrorKind::MissingField("quote".to_string())).into();
        assert!(err.is_schema_violation());
        assert!(format!("{}", err).contains("quote"));
    }
}
