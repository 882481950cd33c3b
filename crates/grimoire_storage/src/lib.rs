//! Persistent collection storage for Grimoire.
//!
//! Each collection is a JSON array written wholesale under one key. The store is
//! a cache of the in-memory lists: reads degrade to an empty list rather than
//! failing, and writes replace everything under the key.
//!
//! # Example
//!
//! ```
//! use grimoire_storage::{CollectionKey, InMemoryStore, load, save};
//!
//! let store = InMemoryStore::new();
//! save(&store, CollectionKey::Beasts, &["a".to_string()]).unwrap();
//! let beasts: Vec<String> = load(&store, CollectionKey::Beasts);
//! assert_eq!(beasts, vec!["a".to_string()]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod collection;
mod config;
mod store;

pub use collection::{CollectionKey, load, save};
pub use config::StorageConfig;
pub use store::{CollectionStore, FileSystemStore, InMemoryStore};
