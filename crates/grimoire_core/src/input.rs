//! User-supplied generation constraints.
//!
//! Inputs are transient: they shape a prompt and are never persisted.

use crate::EntityKind;
use grimoire_error::{BuilderError, InputError};
use serde::{Deserialize, Serialize};

fn require_description(description: &str) -> Result<(), InputError> {
    if description.trim().is_empty() {
        return Err(InputError::new("description must not be empty"));
    }
    Ok(())
}

/// Constraints for generating a character.
///
/// Only `description` is required. Blank optional fields are treated as absent.
///
/// # Examples
///
/// ```
/// use grimoire_core::CharacterInput;
///
/// let input = CharacterInput::builder()
///     .description("A disgraced paladin")
///     .race("Dwarf")
///     .build()
///     .unwrap();
///
/// assert_eq!(input.race.as_deref(), Some("Dwarf"));
/// assert!(input.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(
    setter(into, strip_option),
    default,
    build_fn(private, name = "build_internal")
)]
pub struct CharacterInput {
    /// Free-text concept
    pub description: String,
    /// Role in the story (protagonist, villain, ...)
    pub role: Option<String>,
    /// Race or ancestry
    pub race: Option<String>,
    /// Narrative archetype
    pub archetype: Option<String>,
    /// What the character wants
    pub goals: Option<String>,
    /// Comma-separated tags
    pub tags: Option<String>,
    /// Preferred weapon
    pub sword_type: Option<String>,
    /// Story the character belongs to
    pub story_summary: Option<String>,
    /// Existing relationships to weave in
    pub character_relationships: Option<String>,
    /// Gender
    pub gender: Option<String>,
    /// Kind of character (hero, mentor, monster hunter, ...)
    pub character_type: Option<String>,
}

impl CharacterInput {
    /// Start building an input.
    pub fn builder() -> CharacterInputBuilder {
        CharacterInputBuilder::default()
    }

    /// Input with only a description.
    pub fn from_description(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    /// Reject inputs without a usable description.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] when the description is empty or whitespace.
    pub fn validate(&self) -> Result<(), InputError> {
        require_description(&self.description)
    }
}

impl CharacterInputBuilder {
    /// Build the input.
    ///
    /// # Errors
    ///
    /// Does not currently fail; every field has a default.
    pub fn build(&self) -> Result<CharacterInput, BuilderError> {
        self.build_internal().map_err(|e| BuilderError::from(e.to_string()))
    }
}

/// Constraints for generating a beast.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(
    setter(into, strip_option),
    default,
    build_fn(private, name = "build_internal")
)]
pub struct BeastInput {
    /// Free-text concept
    pub description: String,
    /// Preferred taxonomy (see [`crate::catalog::BEAST_TAXONOMY`])
    pub taxonomy: Option<String>,
    /// Preferred affinity (see [`crate::catalog::BEAST_AFFINITY`])
    pub affinity: Option<String>,
    /// Preferred habitat (see [`crate::catalog::BEAST_ENVIRONMENT`])
    pub environment: Option<String>,
}

impl BeastInput {
    /// Start building an input.
    pub fn builder() -> BeastInputBuilder {
        BeastInputBuilder::default()
    }

    /// Input with only a description.
    pub fn from_description(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    /// Reject inputs without a usable description.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] when the description is empty or whitespace.
    pub fn validate(&self) -> Result<(), InputError> {
        require_description(&self.description)
    }
}

impl BeastInputBuilder {
    /// Build the input.
    ///
    /// # Errors
    ///
    /// Does not currently fail; every field has a default.
    pub fn build(&self) -> Result<BeastInput, BuilderError> {
        self.build_internal().map_err(|e| BuilderError::from(e.to_string()))
    }
}

/// Input for either kind of dossier.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::From)]
pub enum EntityInput {
    /// Generate a character
    Character(CharacterInput),
    /// Generate a beast
    Beast(BeastInput),
}

impl EntityInput {
    /// Kind of dossier this input produces.
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Character(_) => EntityKind::Character,
            Self::Beast(_) => EntityKind::Beast,
        }
    }

    /// Reject inputs without a usable description.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] when the description is empty or whitespace.
    pub fn validate(&self) -> Result<(), InputError> {
        match self {
            Self::Character(input) => input.validate(),
            Self::Beast(input) => input.validate(),
        }
    }
}
