//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the grimoire binary.

mod commands;
mod dossier;
mod library;

pub use commands::{Cli, Commands, ProfileCommands};
pub use dossier::{handle_beast_command, handle_character_command};
pub use library::{export_dossier, list_profile, print_catalog};

use grimoire::{
    Backend, CollectionStore, Entity, EntityId, EntityKind, GrimoireResult, WorkflowError,
    WorkflowErrorKind, Workshop,
};
use std::sync::Arc;

/// The workshop the binary runs against.
pub type CliWorkshop = Workshop<Backend, Arc<dyn CollectionStore>>;

/// Look up `id`, requiring it to be of `kind` when one is given.
fn find_dossier(
    workshop: &CliWorkshop,
    kind: Option<EntityKind>,
    id: &EntityId,
) -> GrimoireResult<Entity> {
    workshop
        .find(id)
        .filter(|entity| kind.is_none_or(|kind| entity.kind() == kind))
        .ok_or_else(|| WorkflowError::new(WorkflowErrorKind::NotFound(id.to_string())).into())
}
