//! JSON rendering.

use grimoire_error::JsonError;
use serde::Serialize;

/// Pretty-print a dossier with two-space indentation.
///
/// The output parses back to an identical value.
///
/// # Errors
///
/// Returns [`JsonError`] if the value cannot be serialized.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| JsonError::new(format!("Failed to serialize dossier: {}", e)))
}
