//! Beast dossiers.

use crate::schema::{
    ObjectSchema, SchemaNode, array_of, non_empty_array_of, string,
};
use crate::{Dossier, Entity, EntityId, EntityKind, ProfileItem};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// A generated fantasy creature.
///
/// Serialized with snake_case keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beast {
    /// Locally assigned identifier
    pub id: EntityId,
    /// Common name
    pub display_name: String,
    /// Broad classification (Beast, Dragon, Undead, ...)
    pub taxonomy: String,
    /// Narrative archetype
    pub archetype: String,
    /// Prose description of how it looks
    pub appearance_description: String,
    /// How rarely it is encountered
    pub rarity: String,
    /// Size category
    pub size_class: String,
    /// Whether and how it can be tamed
    pub taming_possibility: String,
    /// Magical or elemental affinities
    pub affinity: Vec<String>,
    /// Habitats
    pub environment: Vec<String>,
    /// How clever it is
    pub intelligence_level: String,
    /// How readily it attacks
    pub aggression: String,
    /// How it senses the world
    pub perception: String,
    /// How hard it is to bring down
    pub durability: String,
    /// Ways it moves (flying, burrowing, ...)
    pub movement_modes: Vec<String>,
    /// Notable features
    pub key_features: Vec<String>,
    /// Special abilities, at least one
    pub abilities: Vec<BeastAbility>,
    /// How it fights
    pub combat_style: Vec<String>,
    /// Exploitable weaknesses
    pub weaknesses: Vec<String>,
    /// Its fatal flaw
    pub flaw: String,
    /// Place in the ecosystem
    pub ecological_role: String,
    /// Solitary, pack, hive...
    pub social_structure: String,
    /// Legends told about it
    pub mythos_rumor: String,
    /// What it leaves behind
    pub loot_table: Vec<LootEntry>,
    /// Encounter seeds
    pub example_encounters: Vec<String>,
    /// Prompt for an image generator
    pub image_prompt: String,
}

/// A special ability of a beast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeastAbility {
    /// Ability name
    pub name: String,
    /// Free-form category
    #[serde(rename = "type")]
    pub kind: String,
    /// Short description of the effect
    pub effect_summary: String,
}

/// An item the beast may drop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootEntry {
    /// Item name
    pub item_name: String,
    /// How rare the item is
    pub rarity: String,
    /// What the item is good for in a story
    pub narrative_use: String,
}

/// Beast sections that can be regenerated on their own.
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BeastSection {
    /// `appearance_description`
    AppearanceDescription,
    /// `abilities`
    Abilities,
    /// `combat_style`
    CombatStyle,
    /// `weaknesses`
    Weaknesses,
    /// `flaw`
    Flaw,
    /// `ecological_role`
    EcologicalRole,
    /// `social_structure`
    SocialStructure,
    /// `mythos_rumor`
    MythosRumor,
    /// `loot_table`
    LootTable,
    /// `example_encounters`
    ExampleEncounters,
}

static BEAST_SCHEMA: LazyLock<ObjectSchema> = LazyLock::new(|| {
    let ability = ObjectSchema::new()
        .field("name", string())
        .field("type", string())
        .field("effect_summary", string());

    let loot = ObjectSchema::new()
        .field("item_name", string())
        .field("rarity", string())
        .field("narrative_use", string());

    ObjectSchema::new()
        .field("display_name", string())
        .field("taxonomy", string())
        .field("archetype", string())
        .field("appearance_description", string())
        .field("rarity", string())
        .field("size_class", string())
        .field("taming_possibility", string())
        .field("affinity", array_of(string()))
        .field("environment", array_of(string()))
        .field("intelligence_level", string())
        .field("aggression", string())
        .field("perception", string())
        .field("durability", string())
        .field("movement_modes", array_of(string()))
        .field("key_features", array_of(string()))
        .field("abilities", non_empty_array_of(SchemaNode::Object(ability)))
        .field("combat_style", array_of(string()))
        .field("weaknesses", array_of(string()))
        .field("flaw", string())
        .field("ecological_role", string())
        .field("social_structure", string())
        .field("mythos_rumor", string())
        .field("loot_table", array_of(SchemaNode::Object(loot)))
        .field("example_encounters", array_of(string()))
        .field("image_prompt", string())
});

impl Dossier for Beast {
    type Section = BeastSection;

    const KIND: EntityKind = EntityKind::Beast;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn schema() -> &'static ObjectSchema {
        &BEAST_SCHEMA
    }

    fn into_entity(self) -> Entity {
        Entity::Beast(self)
    }

    fn into_profile_item(self) -> ProfileItem {
        ProfileItem::Beast(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RerollSection;

    #[test]
    fn test_sections_parse_from_snake_case() {
        assert_eq!(
            "ecological_role".parse::<BeastSection>().unwrap(),
            BeastSection::EcologicalRole
        );
        assert_eq!(BeastSection::LootTable.key(), "loot_table");
    }

    #[test]
    fn test_identity_fields_are_not_sections() {
        for field in ["display_name", "taxonomy", "archetype", "image_prompt", "id"] {
            assert!(field.parse::<BeastSection>().is_err());
        }
    }

    #[test]
    fn test_every_section_is_a_schema_field() {
        for key in BeastSection::eligible() {
            assert!(Beast::schema().get(key).is_some(), "{} missing", key);
        }
    }

    #[test]
    fn test_abilities_require_one_item() {
        let abilities = Beast::schema().get("abilities").unwrap();
        assert!(matches!(abilities, SchemaNode::Array { min_items: 1, .. }));
    }
}
