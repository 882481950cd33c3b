//! Markdown and JSON export of Grimoire dossiers.
//!
//! Export is pure: it formats what it is given and touches nothing else.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod json;
mod markdown;

pub use json::to_json;
pub use markdown::{beast_to_markdown, character_to_markdown, to_markdown};

use grimoire_core::Entity;
use grimoire_error::JsonError;

/// Supported export formats.
///
/// # Examples
///
/// ```
/// use grimoire_export::ExportFormat;
///
/// assert_eq!("markdown".parse::<ExportFormat>().unwrap(), ExportFormat::Markdown);
/// assert_eq!(ExportFormat::Json.extension(), "json");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
    /// Human-readable sheet
    #[default]
    Markdown,
    /// Pretty-printed JSON
    Json,
}

impl ExportFormat {
    /// File extension for the format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Json => "json",
        }
    }
}

/// Render `entity` in `format`.
///
/// # Errors
///
/// Only JSON rendering can fail.
pub fn render(entity: &Entity, format: ExportFormat) -> Result<String, JsonError> {
    match format {
        ExportFormat::Markdown => Ok(to_markdown(entity)),
        ExportFormat::Json => to_json(entity),
    }
}

/// Suggested file name for an export: the dossier name, slugified.
pub fn file_name(entity: &Entity, format: ExportFormat) -> String {
    let mut slug = String::new();
    for ch in entity.display_name().chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    let stem = if slug.is_empty() {
        entity.id().as_str()
    } else {
        slug
    };
    format!("{}.{}", stem, format.extension())
}
