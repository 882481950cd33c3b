//! Grimoire: fantasy character and bestiary dossiers generated by Gemini.
//!
//! Describe a character or beast in a sentence, get back a complete,
//! schema-checked dossier; regenerate single sections, keep a profile of
//! favourites, and export sheets as Markdown or JSON.
//!
//! # Quick Start
//!
//! ```no_run
//! use grimoire::{BeastInput, GeminiClient, GeminiConfig, InMemoryStore, Workshop};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let workshop = Workshop::open(GeminiClient::new(GeminiConfig::default())?, InMemoryStore::new());
//! let beast = workshop
//!     .create_beast(&BeastInput::from_description("A glass creature"))
//!     .await?;
//! println!("{}", workshop.export_markdown(&beast.id)?);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - `grimoire_error` - Error types
//! - `grimoire_core` - Dossier model, schemas, inputs
//! - `grimoire_interface` - `GrimoireDriver` trait
//! - `grimoire_models` - Gemini client
//! - `grimoire_storage` - Collection persistence
//! - `grimoire_forge` - Generation and partial regeneration
//! - `grimoire_export` - Markdown and JSON export
//! - `grimoire_workflow` - Collection state machine
//!
//! This crate re-exports everything and adds configuration loading and the
//! `grimoire` binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod config;
mod telemetry;

pub use backend::Backend;
pub use config::GrimoireConfig;
pub use telemetry::init_tracing;

pub use grimoire_core::catalog;
pub use grimoire_core::{
    AbilityType, Appearance, Beast, BeastAbility, BeastInput, BeastSection, Character,
    CharacterAbility, CharacterExport, CharacterInput, CharacterSection, Dossier, Entity, EntityId,
    EntityInput, EntityKind, LootEntry, Personality, ProfileItem, Relationship, RerollSection,
    RpgStats, SectionPatch,
};
pub use grimoire_error::{
    ConfigError, GeminiError, GeminiErrorKind, GrimoireError, GrimoireErrorKind, GrimoireResult,
    InputError, SchemaError, SchemaErrorKind, StorageError, StorageErrorKind, WorkflowError,
    WorkflowErrorKind,
};
pub use grimoire_export::{ExportFormat, file_name, render, to_json, to_markdown};
pub use grimoire_forge::Forge;
pub use grimoire_interface::GrimoireDriver;
pub use grimoire_models::{GeminiClient, GeminiConfig};
pub use grimoire_storage::{
    CollectionKey, CollectionStore, FileSystemStore, InMemoryStore, StorageConfig,
};
pub use grimoire_workflow::{CollectionStatus, SaveOutcome, Workshop};
