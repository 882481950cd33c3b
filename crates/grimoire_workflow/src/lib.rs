//! Collection state machine and orchestration for Grimoire.
//!
//! A [`Workshop`] holds the character and beast [`Collection`]s in memory,
//! mirrors them to a [`grimoire_storage::CollectionStore`], and drives the
//! forge. Each collection moves through [`CollectionStatus`]:
//!
//! ```text
//! Idle ──create──▶ Generating ──ok──▶ Idle
//!   ▲                  │
//!   │                  └──err──▶ Error(message) ──create/reroll──▶ ...
//!   └──ok── Rerolling{id, section} ◀──reroll── Idle
//! ```
//!
//! A request arriving while another is in flight on the same collection fails
//! immediately with a busy error.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod collection;
mod status;
mod workshop;

pub use collection::Collection;
pub use status::CollectionStatus;
pub use workshop::{SaveOutcome, Workshop};
