//! Whole-collection load and save.

use crate::CollectionStore;
use grimoire_error::{GrimoireResult, StorageError, StorageErrorKind};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Storage keys of the three persisted collections.
///
/// # Examples
///
/// ```
/// use grimoire_storage::CollectionKey;
///
/// assert_eq!(CollectionKey::Characters.as_str(), "characters");
/// assert_eq!(CollectionKey::ProfileItems.to_string(), "savedProfileItems");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
pub enum CollectionKey {
    /// Generated characters
    #[strum(serialize = "characters")]
    Characters,
    /// Generated beasts
    #[strum(serialize = "beasts")]
    Beasts,
    /// Items saved to the profile
    #[strum(serialize = "savedProfileItems")]
    ProfileItems,
}

impl CollectionKey {
    /// The key string used in the store.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Load a collection.
///
/// Never fails: an absent key, an unreadable store or unparsable contents all
/// yield an empty list, with the cause logged at `warn`.
#[tracing::instrument(skip(store), fields(key = %key))]
pub fn load<T, S>(store: &S, key: CollectionKey) -> Vec<T>
where
    T: DeserializeOwned,
    S: CollectionStore + ?Sized,
{
    let contents = match store.read(key.as_str()) {
        Ok(Some(contents)) => contents,
        Ok(None) => {
            tracing::debug!("No stored collection, starting empty");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read stored collection, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<T>>(&contents) {
        Ok(items) => {
            tracing::debug!(count = items.len(), "Loaded collection");
            items
        }
        Err(e) => {
            tracing::warn!(error = %e, "Stored collection is corrupt, starting empty");
            Vec::new()
        }
    }
}

/// Replace a stored collection with `items`.
///
/// An empty list removes the key.
///
/// # Errors
///
/// Returns an error if the items cannot be serialized or the store rejects the write.
#[tracing::instrument(skip(store, items), fields(key = %key, count = items.len()))]
pub fn save<T, S>(store: &S, key: CollectionKey, items: &[T]) -> GrimoireResult<()>
where
    T: Serialize,
    S: CollectionStore + ?Sized,
{
    if items.is_empty() {
        store.remove(key.as_str())?;
        tracing::debug!("Removed empty collection");
        return Ok(());
    }

    let contents = serde_json::to_string(items)
        .map_err(|e| StorageError::new(StorageErrorKind::Serialization(e.to_string())))?;
    store.write(key.as_str(), &contents)?;
    tracing::debug!(bytes = contents.len(), "Saved collection");
    Ok(())
}
