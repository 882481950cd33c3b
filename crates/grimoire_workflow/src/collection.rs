//! One ordered, persisted dossier collection.

use crate::CollectionStatus;
use grimoire_core::{Dossier, EntityId, SectionPatch};
use grimoire_error::{GrimoireResult, WorkflowError, WorkflowErrorKind};
use grimoire_storage::{CollectionKey, CollectionStore, load, save};
use parking_lot::Mutex;
use tracing::{debug, error, info};

#[derive(Debug)]
struct CollectionState<T> {
    items: Vec<T>,
    status: CollectionStatus,
}

/// A newest-first list of dossiers and the status of requests against it.
///
/// The in-memory list is the source of truth. After every mutation the whole
/// list is written to the store under the collection's key. The lock is only
/// held for synchronous work, never across a backend call: long requests run
/// between [`Collection::begin`] and a completion that re-reads the current list.
#[derive(Debug)]
pub struct Collection<T> {
    key: CollectionKey,
    state: Mutex<CollectionState<T>>,
}

impl<T: Dossier> Collection<T> {
    /// An empty, idle collection stored under `key`.
    pub fn new(key: CollectionKey) -> Self {
        Self {
            key,
            state: Mutex::new(CollectionState {
                items: Vec::new(),
                status: CollectionStatus::Idle,
            }),
        }
    }

    /// Storage key of the collection.
    pub fn key(&self) -> CollectionKey {
        self.key
    }

    /// Current status.
    pub fn status(&self) -> CollectionStatus {
        self.state.lock().status.clone()
    }

    /// Snapshot of the items, newest first.
    pub fn items(&self) -> Vec<T> {
        self.state.lock().items.clone()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.state.lock().items.len()
    }

    /// True when the collection holds nothing.
    pub fn is_empty(&self) -> bool {
        self.state.lock().items.is_empty()
    }

    /// The item with `id`, if present.
    pub fn get(&self, id: &EntityId) -> Option<T> {
        self.state.lock().items.iter().find(|item| item.id() == id).cloned()
    }

    /// Replace the in-memory list with what the store holds.
    ///
    /// Unreadable or corrupt contents yield an empty list; loading never enters
    /// the error state.
    ///
    /// # Errors
    ///
    /// Fails with [`WorkflowErrorKind::Busy`] when a request is in flight.
    pub fn reload<S: CollectionStore + ?Sized>(&self, store: &S) -> Result<(), WorkflowError> {
        let mut state = self.state.lock();
        self.claim(&mut state, CollectionStatus::Loading)?;

        state.items = load(store, self.key);
        state.status = CollectionStatus::Idle;
        info!(key = %self.key, count = state.items.len(), "Collection loaded");
        Ok(())
    }

    fn claim(
        &self,
        state: &mut CollectionState<T>,
        next: CollectionStatus,
    ) -> Result<(), WorkflowError> {
        if state.status.is_busy() {
            return Err(WorkflowError::new(WorkflowErrorKind::Busy {
                collection: self.key.to_string(),
                status: state.status.to_string(),
            }));
        }
        debug!(key = %self.key, status = %next, "Collection status change");
        state.status = next;
        Ok(())
    }

    /// Claim the collection for a request, moving it to `next`.
    ///
    /// # Errors
    ///
    /// Fails with [`WorkflowErrorKind::Busy`] when another request is in flight.
    pub fn begin(&self, next: CollectionStatus) -> Result<(), WorkflowError> {
        let mut state = self.state.lock();
        self.claim(&mut state, next)
    }

    /// End a failed request: the list is unchanged and the message is kept.
    pub fn fail(&self, message: impl Into<String>) {
        let message = message.into();
        error!(key = %self.key, error = %message, "Request failed");
        self.state.lock().status = CollectionStatus::Error(message);
    }

    /// End a successful generation by prepending `item` and persisting.
    pub fn complete_insert<S: CollectionStore + ?Sized>(&self, item: T, store: &S) {
        let mut state = self.state.lock();
        info!(key = %self.key, id = %item.id(), "Adding dossier");
        state.items.insert(0, item);
        state.status = CollectionStatus::Idle;
        self.persist(&state.items, store);
    }

    /// End a successful reroll by merging `patch` into the item with `id`.
    ///
    /// The merge runs against the list as it is now, so items deleted or added
    /// while the request was in flight are respected.
    ///
    /// # Errors
    ///
    /// - [`WorkflowErrorKind::NotFound`] if the item was deleted meanwhile
    /// - schema errors if the patch does not fit the item
    ///
    /// Either way the collection returns to idle or error and the list is unchanged.
    pub fn complete_patch<S: CollectionStore + ?Sized>(
        &self,
        id: &EntityId,
        patch: &SectionPatch<T::Section>,
        store: &S,
    ) -> GrimoireResult<T> {
        let mut state = self.state.lock();
        let Some(position) = state.items.iter().position(|item| item.id() == id) else {
            state.status = CollectionStatus::Idle;
            return Err(WorkflowError::new(WorkflowErrorKind::NotFound(id.to_string())).into());
        };

        let mut updated = state.items[position].clone();
        if let Err(e) = updated.apply_patch(patch) {
            error!(key = %self.key, id = %id, error = %e, "Patch rejected");
            state.status = CollectionStatus::Error(e.to_string());
            return Err(e.into());
        }

        info!(key = %self.key, id = %id, section = %patch.section, "Merged regenerated section");
        state.items[position] = updated.clone();
        state.status = CollectionStatus::Idle;
        self.persist(&state.items, store);
        Ok(updated)
    }

    /// Remove the item with `id` and persist. Returns false when absent.
    pub fn remove<S: CollectionStore + ?Sized>(&self, id: &EntityId, store: &S) -> bool {
        let mut state = self.state.lock();
        let before = state.items.len();
        state.items.retain(|item| item.id() != id);
        if state.items.len() == before {
            debug!(key = %self.key, id = %id, "Nothing to delete");
            return false;
        }
        info!(key = %self.key, id = %id, "Deleted dossier");
        self.persist(&state.items, store);
        true
    }

    /// Write `items` to the store. Failures are logged and otherwise ignored:
    /// the in-memory list stays authoritative.
    fn persist<S: CollectionStore + ?Sized>(&self, items: &[T], store: &S) {
        if let Err(e) = save(store, self.key, items) {
            error!(key = %self.key, error = %e, "Failed to persist collection");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grimoire_core::fixtures::sample_beast;
    use grimoire_core::{Beast, BeastSection};
    use grimoire_storage::InMemoryStore;
    use serde_json::json;

    #[test]
    fn test_begin_rejects_while_busy_and_recovers_from_error() {
        let collection: Collection<Beast> = Collection::new(CollectionKey::Beasts);
        collection.begin(CollectionStatus::Generating).unwrap();
        let err = collection.begin(CollectionStatus::Generating).unwrap_err();
        assert!(matches!(err.kind, WorkflowErrorKind::Busy { .. }));

        collection.fail("network down");
        assert_eq!(collection.status().error_message(), Some("network down"));
        assert!(collection.begin(CollectionStatus::Generating).is_ok());
    }

    #[test]
    fn test_insert_prepends_and_persists() {
        let store = InMemoryStore::new();
        let collection = Collection::new(CollectionKey::Beasts);
        collection.complete_insert(sample_beast("1"), &store);
        collection.complete_insert(sample_beast("2"), &store);

        let ids: Vec<String> = collection.items().iter().map(|b| b.id.to_string()).collect();
        assert_eq!(ids, vec!["2", "1"]);

        let stored: Vec<Beast> = load(&store, CollectionKey::Beasts);
        assert_eq!(stored, collection.items());
    }

    #[test]
    fn test_patch_after_delete_is_not_found() {
        let store = InMemoryStore::new();
        let collection = Collection::new(CollectionKey::Beasts);
        collection.complete_insert(sample_beast("1"), &store);
        collection.begin(CollectionStatus::Generating).unwrap();
        assert!(collection.remove(&EntityId::from("1"), &store));

        let patch = SectionPatch::new(BeastSection::Flaw, json!("Afraid of mice"));
        assert!(collection.complete_patch(&EntityId::from("1"), &patch, &store).is_err());
        assert!(collection.is_empty());
        assert_eq!(collection.status(), CollectionStatus::Idle);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let store = InMemoryStore::new();
        let collection = Collection::new(CollectionKey::Beasts);
        collection.complete_insert(sample_beast("1"), &store);
        assert!(!collection.remove(&EntityId::from("nope"), &store));
        assert_eq!(collection.len(), 1);
    }
}
