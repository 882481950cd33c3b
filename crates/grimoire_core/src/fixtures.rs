//! Sample dossiers for tests.

use crate::{
    AbilityType, Appearance, Beast, BeastAbility, Character, CharacterAbility, CharacterExport,
    EntityId, LootEntry, Personality, Relationship, RpgStats,
};
use serde_json::Value;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// A fully populated character with the given id.
pub fn sample_character(id: &str) -> Character {
    Character {
        id: EntityId::from(id),
        name: "Vex Thornwood".to_string(),
        race: "Half-Elf".to_string(),
        character_class: "Rogue".to_string(),
        archetype: "The Reluctant Heir".to_string(),
        tags: strings(&["cunning", "haunted"]),
        appearance: Appearance {
            height: "5'9\"".to_string(),
            build: "Wiry".to_string(),
            hair: "Ash-grey, cropped".to_string(),
            eyes: "Mismatched green and gold".to_string(),
            sensory_detail: "Smells faintly of cloves and lamp oil".to_string(),
            attire: "A patched noble's coat over leathers".to_string(),
            distinguishing_features: "A brand on the left palm".to_string(),
        },
        personality: Personality {
            traits: strings(&["wry", "observant"]),
            quirks: strings(&["counts exits on entering a room"]),
            the_mask: "Carefree gambler".to_string(),
            deep_secret: "Sold out the guild that raised her".to_string(),
            motivations: "Buy back her family's name".to_string(),
            goals: "Reclaim the Thornwood estate".to_string(),
            fears: strings(&["deep water"]),
        },
        backstory: "Raised by thieves after her house fell.".to_string(),
        abilities: vec![
            CharacterAbility {
                name: "Shadowstep".to_string(),
                kind: AbilityType::Magic,
                rarity: "Rare".to_string(),
                effect: "Teleport between adjacent shadows".to_string(),
            },
            CharacterAbility {
                name: "Lockcraft".to_string(),
                kind: AbilityType::Skill,
                rarity: "Common".to_string(),
                effect: "Opens most mundane locks".to_string(),
            },
        ],
        equipment: strings(&["twin stilettos", "lockpicks"]),
        relationships: vec![Relationship {
            role: "Mentor".to_string(),
            name: "Old Harrow".to_string(),
            dynamic: "Strained".to_string(),
            description: "Taught her everything, then disowned her.".to_string(),
        }],
        plot_hooks: strings(&["A debt collector arrives with her true name"]),
        quote: "Every lock is a promise someone meant to break.".to_string(),
        export: CharacterExport {
            image_prompt: "Portrait of a grey-haired half-elf rogue in a patched coat".to_string(),
            rpg_stats: RpgStats {
                strength: 10,
                dexterity: 17,
                constitution: 12,
                intelligence: 14,
                wisdom: 11,
                charisma: 15,
            },
        },
    }
}

/// A fully populated beast with the given id.
pub fn sample_beast(id: &str) -> Beast {
    Beast {
        id: EntityId::from(id),
        display_name: "Glasswing Stalker".to_string(),
        taxonomy: "Aberration".to_string(),
        archetype: "Ambush Predator".to_string(),
        appearance_description: "A lanky, translucent creature that refracts light.".to_string(),
        rarity: "Rare".to_string(),
        size_class: "Large".to_string(),
        taming_possibility: "Impossible".to_string(),
        affinity: strings(&["Arcane"]),
        environment: strings(&["Desert"]),
        intelligence_level: "Cunning".to_string(),
        aggression: "High".to_string(),
        perception: "Senses vibration through sand".to_string(),
        durability: "Brittle but regenerating".to_string(),
        movement_modes: strings(&["walking", "gliding"]),
        key_features: strings(&["prismatic hide", "shard claws"]),
        abilities: vec![BeastAbility {
            name: "Refraction".to_string(),
            kind: "Defensive".to_string(),
            effect_summary: "Bends light to appear elsewhere".to_string(),
        }],
        combat_style: strings(&["hit and run"]),
        weaknesses: strings(&["sonic attacks"]),
        flaw: "Shatters when frozen".to_string(),
        ecological_role: "Apex predator of the glass dunes".to_string(),
        social_structure: "Solitary".to_string(),
        mythos_rumor: "Said to be the ghosts of drowned mirrors.".to_string(),
        loot_table: vec![LootEntry {
            item_name: "Prism shard".to_string(),
            rarity: "Uncommon".to_string(),
            narrative_use: "Focuses scrying spells".to_string(),
        }],
        example_encounters: strings(&["A caravan finds its guards vanished"]),
        image_prompt: "A crystalline predator stalking across moonlit dunes".to_string(),
    }
}

fn without_id(value: Value) -> Value {
    match value {
        Value::Object(mut map) => {
            map.remove("id");
            Value::Object(map)
        }
        other => other,
    }
}

/// What a model would return for [`sample_character`]: every field except `id`.
pub fn character_json() -> Value {
    without_id(serde_json::to_value(sample_character("0")).unwrap_or(Value::Null))
}

/// What a model would return for [`sample_beast`]: every field except `id`.
pub fn beast_json() -> Value {
    without_id(serde_json::to_value(sample_beast("0")).unwrap_or(Value::Null))
}
