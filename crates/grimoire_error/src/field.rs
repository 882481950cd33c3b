//! Reroll field errors.

/// A reroll was requested for a field that cannot be regenerated.
///
/// Identity fields and export metadata are never eligible.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display(
    "Invalid Field Error: '{}' is not a rerollable {} section (expected one of: {}) at line {} in {}",
    field,
    entity,
    eligible,
    line,
    file
)]
pub struct InvalidFieldError {
    /// Entity kind the field was requested on
    pub entity: String,
    /// The requested field name
    pub field: String,
    /// Comma-separated eligible field names
    pub eligible: String,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl InvalidFieldError {
    /// Create a new InvalidFieldError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use grimoire_error::InvalidFieldError;
    ///
    /// let err = InvalidFieldError::new("character", "name", ["backstory", "appearance"]);
    /// assert_eq!(err.eligible, "backstory, appearance");
    /// ```
    #[track_caller]
    pub fn new<I, S>(entity: impl Into<String>, field: impl Into<String>, eligible: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let location = std::panic::Location::caller();
        let eligible = eligible
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            entity: entity.into(),
            field: field.into(),
            eligible,
            line: location.line(),
            file: location.file(),
        }
    }
}
