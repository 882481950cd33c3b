//! Locally assigned dossier identifiers.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicI64, Ordering};

static LAST_ISSUED: AtomicI64 = AtomicI64::new(0);

/// Identifier of a generated dossier.
///
/// Generated ids are millisecond timestamps rendered as decimal strings. When two
/// ids are requested within the same millisecond the later one is bumped forward,
/// so ids minted by one process are strictly increasing and never repeat.
///
/// # Examples
///
/// ```
/// use grimoire_core::EntityId;
///
/// let a = EntityId::generate();
/// let b = EntityId::generate();
/// assert_ne!(a, b);
///
/// let fixed = EntityId::from("123");
/// assert_eq!(fixed.as_str(), "123");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Mint a new time-based id.
    pub fn generate() -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        let previous = LAST_ISSUED
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        Self(now.max(previous + 1).to_string())
    }

    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generated_ids_are_unique() {
        let ids: HashSet<EntityId> = (0..1000).map(|_| EntityId::generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_generated_ids_are_numeric_timestamps() {
        let id = EntityId::generate();
        let millis: i64 = id.as_str().parse().unwrap();
        assert!(millis >= chrono::Utc::now().timestamp_millis() - 60_000);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = EntityId::from("1718000000000");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"1718000000000\"");
    }
}
