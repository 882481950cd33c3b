//! Schema violation errors for model output.

/// Ways a model response can fail to match the declared output schema.
///
/// Paths use dotted notation with array indices, e.g. `abilities[2].type`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SchemaErrorKind {
    /// The backend returned no text at all
    #[display("Model returned no text output")]
    NoOutput,
    /// The text could not be parsed as JSON
    #[display("Model output is not valid JSON: {}", _0)]
    Unparsable(String),
    /// A required field is absent
    #[display("Missing required field '{}'", _0)]
    MissingField(String),
    /// A field has the wrong JSON type
    #[display("Field '{}' should be {}", path, expected)]
    WrongType {
        /// Location of the offending value
        path: String,
        /// Expected JSON type
        expected: &'static str,
    },
    /// An enumerated field holds a value outside its allowed set
    #[display("Field '{}' has value '{}', expected one of: {}", path, value, allowed)]
    NotAllowed {
        /// Location of the offending value
        path: String,
        /// The value that was found
        value: String,
        /// Comma-separated allowed values
        allowed: String,
    },
    /// A required string is empty or whitespace
    #[display("Field '{}' is blank", _0)]
    BlankValue(String),
    /// An array holds fewer items than required
    #[display("Field '{}' needs at least {} item(s), found {}", path, min, found)]
    TooFewItems {
        /// Location of the array
        path: String,
        /// Minimum number of items
        min: usize,
        /// Number of items present
        found: usize,
    },
}

/// Schema violation with location tracking.
///
/// # Examples
///
/// ```
/// use grimoire_error::{SchemaError, SchemaErrorKind};
///
/// let err = SchemaError::new(SchemaErrorKind::MissingField("backstory".to_string()));
/// assert!(format!("{}", err).contains("backstory"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Schema Error: {} at line {} in {}", kind, line, file)]
pub struct SchemaError {
    /// The kind of violation
    pub kind: SchemaErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SchemaError {
    /// Create a new SchemaError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SchemaErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
