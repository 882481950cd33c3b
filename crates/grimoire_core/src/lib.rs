//! Core data types for the Grimoire dossier generator.
//!
//! This crate defines the generated dossiers ([`Character`], [`Beast`]), the
//! inputs that shape them, the output schemas used both to constrain and to
//! validate model responses, and the provider-neutral request types.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod beast;
pub mod catalog;
mod character;
mod entity;
mod id;
mod input;
mod kind;
mod request;
pub mod schema;

#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;

pub use beast::{Beast, BeastAbility, BeastSection, LootEntry};
pub use character::{
    AbilityType, Appearance, Character, CharacterAbility, CharacterExport, CharacterSection,
    Personality, Relationship, RpgStats,
};
pub use entity::{Dossier, Entity, ProfileItem, RerollSection, SectionPatch};
pub use id::EntityId;
pub use input::{BeastInput, BeastInputBuilder, CharacterInput, CharacterInputBuilder, EntityInput};
pub use kind::EntityKind;
pub use request::{
    GenerateRequest, GenerateRequestBuilder, GenerateResponse, Message, Output, Role,
};
pub use schema::ObjectSchema;

#[cfg(test)]
mod tests {
    use super::*;
    use fixtures::{beast_json, character_json, sample_beast, sample_character};
    use grimoire_error::SchemaErrorKind;
    use serde_json::json;

    #[test]
    fn test_fixtures_satisfy_their_schemas() {
        assert!(Character::schema().validate(&character_json()).is_ok());
        assert!(Beast::schema().validate(&beast_json()).is_ok());
    }

    #[test]
    fn test_from_generated_attaches_id() {
        let beast = Beast::from_generated(beast_json(), EntityId::from("77")).unwrap();
        assert_eq!(beast, sample_beast("77"));
    }

    #[test]
    fn test_from_generated_rejects_partial_output() {
        let mut value = character_json();
        value.as_object_mut().unwrap().remove("backstory");
        let err = Character::from_generated(value, EntityId::generate()).unwrap_err();
        assert_eq!(err.kind, SchemaErrorKind::MissingField("backstory".to_string()));
    }

    #[test]
    fn test_from_generated_ignores_extra_keys_and_model_ids() {
        let mut value = beast_json();
        value["id"] = json!("from-the-model");
        value["mood"] = json!("grumpy");
        let beast = Beast::from_generated(value, EntityId::from("5")).unwrap();
        assert_eq!(beast.id.as_str(), "5");
    }

    #[test]
    fn test_apply_patch_replaces_only_that_section() {
        let mut character = sample_character("123");
        let patch = SectionPatch::new(CharacterSection::Backstory, json!("B"));
        character.apply_patch(&patch).unwrap();

        let mut expected = sample_character("123");
        expected.backstory = "B".to_string();
        assert_eq!(character, expected);
    }

    #[test]
    fn test_apply_patch_rejects_invalid_value_and_keeps_entity() {
        let mut beast = sample_beast("9");
        let patch = SectionPatch::new(BeastSection::Abilities, json!([]));
        assert!(beast.apply_patch(&patch).is_err());
        assert_eq!(beast, sample_beast("9"));
    }

    #[test]
    fn test_parse_section_lists_eligible_fields() {
        assert_eq!(
            Character::parse_section("personality").unwrap(),
            CharacterSection::Personality
        );
        let err = Character::parse_section("name").unwrap_err();
        assert_eq!(err.entity, "character");
        assert!(err.eligible.contains("backstory"));
        assert!(Character::parse_section("export").is_err());
    }

    #[test]
    fn test_context_json_omits_id_and_target() {
        let context = sample_character("123")
            .context_json(Some(CharacterSection::Backstory))
            .unwrap();
        assert!(context.get("id").is_none());
        assert!(context.get("backstory").is_none());
        assert_eq!(context["name"], "Vex Thornwood");
    }

    #[test]
    fn test_section_schema_holds_single_field() {
        let schema = Beast::section_schema(BeastSection::LootTable).unwrap();
        assert_eq!(schema.fields().len(), 1);
        assert_eq!(schema.fields()[0].name, "loot_table");
    }

    #[test]
    fn test_profile_item_is_tagged_with_saved_type() {
        let item = sample_character("1").into_profile_item();
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["savedType"], "character");
        assert_eq!(value["name"], "Vex Thornwood");

        let back: ProfileItem = serde_json::from_value(value).unwrap();
        assert_eq!(back.saved_type(), EntityKind::Character);
        assert_eq!(back.id().as_str(), "1");
    }

    #[test]
    fn test_entity_deserializes_either_kind() {
        let value = serde_json::to_value(sample_beast("2")).unwrap();
        let entity: Entity = serde_json::from_value(value).unwrap();
        assert_eq!(entity.kind(), EntityKind::Beast);
        assert_eq!(entity.display_name(), "Glasswing Stalker");
    }
}
