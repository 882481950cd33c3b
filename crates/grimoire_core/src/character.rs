//! Character dossiers.

use crate::schema::{
    ObjectSchema, SchemaNode, array_of, described, integer, one_of, string,
};
use crate::{Dossier, Entity, EntityId, EntityKind, ProfileItem};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// A generated fantasy character.
///
/// Serialized with camelCase keys, the format collections are stored in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// Locally assigned identifier
    pub id: EntityId,
    /// Character name
    pub name: String,
    /// Race or ancestry
    pub race: String,
    /// Class or calling
    pub character_class: String,
    /// Narrative archetype
    pub archetype: String,
    /// Short descriptive tags
    pub tags: Vec<String>,
    /// Physical description
    pub appearance: Appearance,
    /// Inner life
    pub personality: Personality,
    /// Prose history
    pub backstory: String,
    /// Skills, spells and other talents
    pub abilities: Vec<CharacterAbility>,
    /// Carried gear
    pub equipment: Vec<String>,
    /// People in the character's life
    pub relationships: Vec<Relationship>,
    /// Adventure hooks
    pub plot_hooks: Vec<String>,
    /// Signature line
    pub quote: String,
    /// Image prompt and tabletop stats
    pub export: CharacterExport,
}

/// Physical description of a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appearance {
    /// Height
    pub height: String,
    /// Build
    pub build: String,
    /// Hair
    pub hair: String,
    /// Eyes
    pub eyes: String,
    /// Smell or aura
    pub sensory_detail: String,
    /// Clothing
    pub attire: String,
    /// Marks, scars and the like
    pub distinguishing_features: String,
}

/// Inner life of a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Personality {
    /// Personality traits
    pub traits: Vec<String>,
    /// Habits and oddities
    pub quirks: Vec<String>,
    /// The face shown to the world
    pub the_mask: String,
    /// What they hide
    pub deep_secret: String,
    /// What drives them
    pub motivations: String,
    /// What they want
    pub goals: String,
    /// What they dread
    pub fears: Vec<String>,
}

/// Category of a character ability.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AbilityType {
    /// Trained skill
    Skill,
    /// Spell or supernatural power
    Magic,
    /// Anything else
    Other,
}

/// A single character ability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterAbility {
    /// Ability name
    pub name: String,
    /// Ability category
    #[serde(rename = "type")]
    pub kind: AbilityType,
    /// How rare the ability is
    pub rarity: String,
    /// What it does
    pub effect: String,
}

/// A relationship with another person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// Role the other person plays (mentor, rival, ...)
    pub role: String,
    /// Their name
    pub name: String,
    /// How the two interact
    pub dynamic: String,
    /// Prose description
    pub description: String,
}

/// Export metadata for a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterExport {
    /// Prompt for an image generator
    pub image_prompt: String,
    /// Tabletop ability scores
    pub rpg_stats: RpgStats,
}

/// The six classic ability scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpgStats {
    /// Strength
    #[serde(rename = "STR")]
    pub strength: i64,
    /// Dexterity
    #[serde(rename = "DEX")]
    pub dexterity: i64,
    /// Constitution
    #[serde(rename = "CON")]
    pub constitution: i64,
    /// Intelligence
    #[serde(rename = "INT")]
    pub intelligence: i64,
    /// Wisdom
    #[serde(rename = "WIS")]
    pub wisdom: i64,
    /// Charisma
    #[serde(rename = "CHA")]
    pub charisma: i64,
}

impl RpgStats {
    /// Scores paired with their abbreviations, in sheet order.
    pub fn entries(&self) -> [(&'static str, i64); 6] {
        [
            ("STR", self.strength),
            ("DEX", self.dexterity),
            ("CON", self.constitution),
            ("INT", self.intelligence),
            ("WIS", self.wisdom),
            ("CHA", self.charisma),
        ]
    }
}

/// Character sections that can be regenerated on their own.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CharacterSection {
    /// `backstory`
    Backstory,
    /// `appearance`
    Appearance,
    /// `personality`
    Personality,
    /// `abilities`
    Abilities,
    /// `relationships`
    Relationships,
}

static CHARACTER_SCHEMA: LazyLock<ObjectSchema> = LazyLock::new(|| {
    let appearance = ObjectSchema::new()
        .field("height", string())
        .field("build", string())
        .field("hair", string())
        .field("eyes", string())
        .field(
            "sensoryDetail",
            described("What do they smell like or what aura do they project?"),
        )
        .field("attire", string())
        .field("distinguishingFeatures", string());

    let personality = ObjectSchema::new()
        .field("traits", array_of(string()))
        .field("quirks", array_of(string()))
        .field("theMask", string())
        .field("deepSecret", string())
        .field("motivations", string())
        .field("goals", string())
        .field("fears", array_of(string()));

    let ability = ObjectSchema::new()
        .field("name", string())
        .field("type", one_of(&["skill", "magic", "other"]))
        .field("rarity", string())
        .field("effect", string());

    let relationship = ObjectSchema::new()
        .field("role", string())
        .field("name", string())
        .field("dynamic", string())
        .field("description", string());

    let rpg_stats = ObjectSchema::new()
        .field("STR", integer())
        .field("DEX", integer())
        .field("CON", integer())
        .field("INT", integer())
        .field("WIS", integer())
        .field("CHA", integer());

    let export = ObjectSchema::new()
        .field("imagePrompt", string())
        .field("rpgStats", SchemaNode::Object(rpg_stats));

    ObjectSchema::new()
        .field("name", string())
        .field("race", string())
        .field("characterClass", string())
        .field("archetype", string())
        .field("tags", array_of(string()))
        .field("appearance", SchemaNode::Object(appearance))
        .field("personality", SchemaNode::Object(personality))
        .field("backstory", string())
        .field("abilities", array_of(SchemaNode::Object(ability)))
        .field("equipment", array_of(string()))
        .field("relationships", array_of(SchemaNode::Object(relationship)))
        .field("plotHooks", array_of(string()))
        .field("quote", string())
        .field("export", SchemaNode::Object(export))
});

impl Dossier for Character {
    type Section = CharacterSection;

    const KIND: EntityKind = EntityKind::Character;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn schema() -> &'static ObjectSchema {
        &CHARACTER_SCHEMA
    }

    fn into_entity(self) -> Entity {
        Entity::Character(self)
    }

    fn into_profile_item(self) -> ProfileItem {
        ProfileItem::Character(self)
    }
}
