//! Storage location settings.

use grimoire_error::{StorageError, StorageErrorKind};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where collections are kept.
///
/// # Examples
///
/// ```
/// use grimoire_storage::StorageConfig;
/// use std::path::PathBuf;
///
/// let config = StorageConfig::at("/tmp/grimoire");
/// assert_eq!(config.resolve_dir().unwrap(), PathBuf::from("/tmp/grimoire"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(default)]
pub struct StorageConfig {
    /// Explicit directory; the platform data directory is used when absent
    dir: Option<PathBuf>,
}

impl StorageConfig {
    /// Keep collections in `dir`.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    /// Directory to open, defaulting to `<data_dir>/grimoire`.
    ///
    /// # Errors
    ///
    /// Fails when no directory is configured and the platform has no data directory.
    pub fn resolve_dir(&self) -> Result<PathBuf, StorageError> {
        match &self.dir {
            Some(dir) => Ok(dir.clone()),
            None => dirs::data_dir()
                .map(|dir| dir.join("grimoire"))
                .ok_or_else(|| {
                    StorageError::new(StorageErrorKind::Unavailable(
                        "no platform data directory; set storage.dir".to_string(),
                    ))
                }),
        }
    }
}
