//! Collection status.

use grimoire_core::EntityId;
use serde::{Deserialize, Serialize};

/// What a collection is doing right now.
///
/// At most one generation or reroll is in flight per collection: new requests
/// are accepted only from [`CollectionStatus::Idle`] or [`CollectionStatus::Error`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, derive_more::Display)]
pub enum CollectionStatus {
    /// Nothing in flight
    #[default]
    #[display("idle")]
    Idle,
    /// Reading from storage
    #[display("loading")]
    Loading,
    /// A new dossier is being generated
    #[display("generating")]
    Generating,
    /// One section of a dossier is being regenerated
    #[display("rerolling {} of {}", section, id)]
    Rerolling {
        /// Dossier being updated
        id: EntityId,
        /// Section being regenerated
        section: String,
    },
    /// The last request failed with this message
    #[display("error: {}", _0)]
    Error(String),
}

impl CollectionStatus {
    /// True when a new request may start.
    pub fn accepts_requests(&self) -> bool {
        matches!(self, Self::Idle | Self::Error(_))
    }

    /// True while a request is in flight.
    pub fn is_busy(&self) -> bool {
        !self.accepts_requests()
    }

    /// Message of the last failure, if the collection is in the error state.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_idle_and_error_accept_requests() {
        assert!(CollectionStatus::Idle.accepts_requests());
        assert!(CollectionStatus::Error("boom".to_string()).accepts_requests());
        assert!(CollectionStatus::Generating.is_busy());
        assert!(CollectionStatus::Loading.is_busy());
        assert!(
            CollectionStatus::Rerolling {
                id: EntityId::from("1"),
                section: "backstory".to_string()
            }
            .is_busy()
        );
    }

    #[test]
    fn test_display() {
        let status = CollectionStatus::Rerolling {
            id: EntityId::from("123"),
            section: "backstory".to_string(),
        };
        assert_eq!(status.to_string(), "rerolling backstory of 123");
        assert_eq!(CollectionStatus::Error("x".to_string()).error_message(), Some("x"));
    }
}
