//! Raw key-value stores.

use grimoire_error::{StorageError, StorageErrorKind};
use parking_lot::{Mutex, MutexGuard};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A persistent string store addressed by key.
///
/// Writes replace the whole value under a key. Implementations are synchronous;
/// callers must not hold locks of their own across other awaits while using them.
pub trait CollectionStore: Send + Sync {
    /// Read the value under `key`, or `None` when absent.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value under `key`.
    fn write(&self, key: &str, contents: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: CollectionStore + ?Sized> CollectionStore for Arc<S> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, contents: &str) -> Result<(), StorageError> {
        (**self).write(key, contents)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Filesystem store: one `<key>.json` file per key.
///
/// Writes go to a temporary file that is then renamed over the target, so a
/// crash mid-write leaves the previous contents intact.
///
/// ```text
/// ~/.local/share/grimoire/
/// ├── characters.json
/// ├── beasts.json
/// └── savedProfileItems.json
/// ```
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct FileSystemStore {
    /// Directory holding the collection files
    base_path: PathBuf,
}

impl FileSystemStore {
    /// Open a store rooted at `base_path`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::debug!(path = %base_path.display(), "Opened filesystem store");
        Ok(Self { base_path })
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", key))
    }

    fn temp_path(path: &Path) -> PathBuf {
        path.with_extension("json.tmp")
    }
}

impl CollectionStore for FileSystemStore {
    #[tracing::instrument(skip(self))]
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::debug!(path = %path.display(), bytes = contents.len(), "Read collection file");
                Ok(Some(contents))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))),
        }
    }

    #[tracing::instrument(skip(self, contents), fields(bytes = contents.len()))]
    fn write(&self, key: &str, contents: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        let temp_path = Self::temp_path(&path);

        std::fs::write(&temp_path, contents).map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        std::fs::rename(&temp_path, &path).map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        tracing::debug!(path = %path.display(), "Wrote collection file");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        match std::fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "Removed collection file");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::new(StorageErrorKind::FileRemove(format!(
                "{}: {}",
                path.display(),
                e
            )))),
        }
    }
}

/// Volatile store kept in memory.
///
/// Used for `--ephemeral` sessions and tests. Clones share contents.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with one value.
    pub fn with_entry(key: impl Into<String>, contents: impl Into<String>) -> Self {
        let store = Self::new();
        store.entries().insert(key.into(), contents.into());
        store
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock()
    }

    /// True when `key` holds a value.
    pub fn contains(&self, key: &str) -> bool {
        self.entries().contains_key(key)
    }
}

impl CollectionStore for InMemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries().get(key).cloned())
    }

    fn write(&self, key: &str, contents: &str) -> Result<(), StorageError> {
        self.entries().insert(key.to_string(), contents.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_round_trip() {
        let store = InMemoryStore::new();
        assert_eq!(store.read("beasts").unwrap(), None);

        store.write("beasts", "[]").unwrap();
        assert_eq!(store.read("beasts").unwrap().as_deref(), Some("[]"));

        store.remove("beasts").unwrap();
        store.remove("beasts").unwrap();
        assert!(!store.contains("beasts"));
    }

    #[test]
    fn test_in_memory_clones_share_entries() {
        let store = InMemoryStore::with_entry("characters", "[1]");
        let clone = store.clone();
        clone.write("characters", "[2]").unwrap();
        assert_eq!(store.read("characters").unwrap().as_deref(), Some("[2]"));
    }
}
