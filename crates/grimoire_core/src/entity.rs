//! The [`Dossier`] abstraction shared by characters and beasts.
//!
//! Model output arrives as untyped JSON. A dossier type knows its schema, how to
//! turn validated JSON into a typed value, and how to merge a regenerated
//! section back in. Everything downstream (generation, rerolls, storage,
//! export) is written against this trait or the [`Entity`] sum type.

use crate::schema::ObjectSchema;
use crate::{Beast, Character, EntityId, EntityKind};
use grimoire_error::{InvalidFieldError, SchemaError, SchemaErrorKind};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;

/// A top-level field of a dossier that may be regenerated on its own.
pub trait RerollSection:
    Copy
    + Eq
    + fmt::Debug
    + fmt::Display
    + FromStr
    + Into<&'static str>
    + IntoEnumIterator
    + Send
    + Sync
    + 'static
{
    /// JSON key of the section.
    fn key(self) -> &'static str {
        self.into()
    }

    /// Keys of every eligible section, in declaration order.
    fn eligible() -> Vec<&'static str> {
        Self::iter().map(Self::key).collect()
    }
}

impl<T> RerollSection for T where
    T: Copy
        + Eq
        + fmt::Debug
        + fmt::Display
        + FromStr
        + Into<&'static str>
        + IntoEnumIterator
        + Send
        + Sync
        + 'static
{
}

/// Replacement value for exactly one section of a dossier.
///
/// # Examples
///
/// ```
/// use grimoire_core::{CharacterSection, SectionPatch};
/// use serde_json::json;
///
/// let patch = SectionPatch::new(CharacterSection::Backstory, json!("Born in fire."));
/// assert_eq!(patch.to_json(), json!({"backstory": "Born in fire."}));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SectionPatch<S> {
    /// The section being replaced
    pub section: S,
    /// New value of that section
    pub value: Value,
}

impl<S: RerollSection> SectionPatch<S> {
    /// Create a patch for one section.
    pub fn new(section: S, value: Value) -> Self {
        Self { section, value }
    }

    /// The patch as a single-key JSON object.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert(self.section.key().to_string(), self.value.clone());
        Value::Object(map)
    }
}

fn unparsable(err: serde_json::Error) -> SchemaError {
    SchemaError::new(SchemaErrorKind::Unparsable(err.to_string()))
}

/// Common behaviour of generated dossiers.
pub trait Dossier: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Sections eligible for partial regeneration.
    type Section: RerollSection;

    /// Which kind of entity this is.
    const KIND: EntityKind;

    /// Locally assigned id.
    fn id(&self) -> &EntityId;

    /// Human-facing name.
    fn display_name(&self) -> &str;

    /// Output schema for a full dossier, without `id`.
    fn schema() -> &'static ObjectSchema;

    /// Wrap in the [`Entity`] sum type.
    fn into_entity(self) -> Entity;

    /// Wrap as a profile item.
    fn into_profile_item(self) -> ProfileItem;

    /// Build a dossier from model output, attaching `id`.
    ///
    /// # Errors
    ///
    /// Fails when `value` does not satisfy [`Dossier::schema`]. No partial
    /// dossier is ever produced.
    fn from_generated(value: Value, id: EntityId) -> Result<Self, SchemaError> {
        Self::schema().validate(&value)?;
        let Value::Object(mut map) = value else {
            return Err(SchemaError::new(SchemaErrorKind::WrongType {
                path: "$".to_string(),
                expected: "an object",
            }));
        };
        map.insert("id".to_string(), Value::String(id.as_str().to_string()));
        serde_json::from_value(Value::Object(map)).map_err(unparsable)
    }

    /// Resolve a field name to a reroll section.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFieldError`] naming the eligible sections when `field`
    /// is not one of them.
    fn parse_section(field: &str) -> Result<Self::Section, InvalidFieldError> {
        field.parse::<Self::Section>().map_err(|_| {
            InvalidFieldError::new(Self::KIND.to_string(), field, Self::Section::eligible())
        })
    }

    /// Schema holding only `section`, reusing its full-schema definition.
    fn section_schema(section: Self::Section) -> Result<ObjectSchema, SchemaError> {
        Self::schema()
            .only(section.key())
            .ok_or_else(|| SchemaError::new(SchemaErrorKind::MissingField(section.key().to_string())))
    }

    /// The dossier as JSON with `id` and the `omit` field removed.
    fn context_json(&self, omit: Option<Self::Section>) -> Result<Value, SchemaError> {
        let mut value = serde_json::to_value(self).map_err(unparsable)?;
        if let Value::Object(map) = &mut value {
            map.remove("id");
            if let Some(section) = omit {
                map.remove(section.key());
            }
        }
        Ok(value)
    }

    /// Overwrite one section with the patch value.
    ///
    /// Other fields, including `id`, are untouched.
    ///
    /// # Errors
    ///
    /// Fails if the value does not satisfy the section's schema, leaving the
    /// dossier unchanged.
    fn apply_patch(&mut self, patch: &SectionPatch<Self::Section>) -> Result<(), SchemaError> {
        Self::section_schema(patch.section)?.validate(&patch.to_json())?;

        let mut value = serde_json::to_value(&*self).map_err(unparsable)?;
        if let Value::Object(map) = &mut value {
            map.insert(patch.section.key().to_string(), patch.value.clone());
        }
        *self = serde_json::from_value(value).map_err(unparsable)?;
        Ok(())
    }
}

/// Any generated dossier.
///
/// Serializes transparently as the inner dossier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::From)]
#[serde(untagged)]
pub enum Entity {
    /// A character
    Character(Character),
    /// A beast
    Beast(Beast),
}

impl Entity {
    /// Locally assigned id.
    pub fn id(&self) -> &EntityId {
        match self {
            Self::Character(character) => character.id(),
            Self::Beast(beast) => beast.id(),
        }
    }

    /// Which kind of entity this is.
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Character(_) => EntityKind::Character,
            Self::Beast(_) => EntityKind::Beast,
        }
    }

    /// Human-facing name.
    pub fn display_name(&self) -> &str {
        match self {
            Self::Character(character) => character.display_name(),
            Self::Beast(beast) => beast.display_name(),
        }
    }

    /// Save this entity to the profile.
    pub fn into_profile_item(self) -> ProfileItem {
        match self {
            Self::Character(character) => character.into_profile_item(),
            Self::Beast(beast) => beast.into_profile_item(),
        }
    }
}

/// An entity kept in the profile collection.
///
/// Stored as the entity's own fields plus a `savedType` discriminator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "savedType", rename_all = "lowercase")]
pub enum ProfileItem {
    /// A saved character
    Character(Character),
    /// A saved beast
    Beast(Beast),
}

impl ProfileItem {
    /// Id of the saved entity.
    pub fn id(&self) -> &EntityId {
        match self {
            Self::Character(character) => character.id(),
            Self::Beast(beast) => beast.id(),
        }
    }

    /// The `savedType` discriminator.
    pub fn saved_type(&self) -> EntityKind {
        match self {
            Self::Character(_) => EntityKind::Character,
            Self::Beast(_) => EntityKind::Beast,
        }
    }

    /// Human-facing name of the saved entity.
    pub fn display_name(&self) -> &str {
        match self {
            Self::Character(character) => character.display_name(),
            Self::Beast(beast) => beast.display_name(),
        }
    }

    /// The saved entity without its tag.
    pub fn into_entity(self) -> Entity {
        match self {
            Self::Character(character) => Entity::Character(character),
            Self::Beast(beast) => Entity::Beast(beast),
        }
    }
}
