//! Markdown rendering.

use grimoire_core::{AbilityType, Beast, Character, Entity};

const RULE: &str = "\n\n---\n\n";

fn bullets<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| format!("- {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn field(label: &str, value: &str) -> String {
    format!("- **{}:** {}", label, value)
}

/// Blank-line separated paragraphs from text with single newlines.
fn paragraphs(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn fenced(text: &str) -> String {
    format!("```\n{}\n```", text)
}

/// Render a character sheet.
///
/// Abilities are grouped into combat/skills (skill and other) and magic.
pub fn character_to_markdown(character: &Character) -> String {
    let appearance = &character.appearance;
    let personality = &character.personality;

    let abilities_of = |kinds: &[AbilityType]| {
        character
            .abilities
            .iter()
            .filter(|ability| kinds.contains(&ability.kind))
            .map(|ability| format!("- **{} ({})**: {}", ability.name, ability.rarity, ability.effect))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let stats = character
        .export
        .rpg_stats
        .entries()
        .iter()
        .map(|(label, score)| format!("- **{}:** {}", label, score))
        .collect::<Vec<_>>()
        .join("\n");

    let sections = [
        format!(
            "# {}\n*{} {} ({})*\n> \"{}\"\n\n**Tags:** {}",
            character.name,
            character.race,
            character.character_class,
            character.archetype,
            character.quote,
            character.tags.join(", ")
        ),
        [
            "## Appearance".to_string(),
            field("Height", &appearance.height),
            field("Build", &appearance.build),
            field("Hair", &appearance.hair),
            field("Eyes", &appearance.eyes),
            field("Sensory Detail", &appearance.sensory_detail),
            field("Attire", &appearance.attire),
            field("Distinguishing Features", &appearance.distinguishing_features),
        ]
        .join("\n"),
        [
            "## Personality".to_string(),
            field("Core Traits", &personality.traits.join(", ")),
            field("Quirks", &personality.quirks.join(", ")),
            field("Fears", &personality.fears.join(", ")),
            field("Motivations", &personality.motivations),
            field("Goals", &personality.goals),
            field("The Mask", &personality.the_mask),
            field("Deep Secret", &personality.deep_secret),
        ]
        .join("\n"),
        format!("## Backstory\n{}", paragraphs(&character.backstory)),
        format!(
            "## Skills & Abilities\n\n### Combat / Skills\n{}\n\n### Magic\n{}",
            abilities_of(&[AbilityType::Skill, AbilityType::Other]),
            abilities_of(&[AbilityType::Magic])
        ),
        format!("## Equipment\n{}", bullets(&character.equipment)),
        format!(
            "## Relationships\n{}",
            bullets(character.relationships.iter().map(|r| {
                format!("**{} ({})**: {} *Dynamic:* {}", r.name, r.role, r.description, r.dynamic)
            }))
        ),
        format!("## Plot Hooks\n{}", bullets(&character.plot_hooks)),
        format!("## RPG Stats (d20 System)\n{}", stats),
        format!("## Image Prompt\n{}", fenced(&character.export.image_prompt)),
    ];

    format!("{}\n\n*Dossier id: {}*\n", sections.join(RULE), character.id)
}

/// Render a bestiary entry.
pub fn beast_to_markdown(beast: &Beast) -> String {
    let sections = [
        format!(
            "# {}\n*{} ({})*\n> {}\n\n**Rarity:** {} | **Size:** {} | **Taming:** {}",
            beast.display_name,
            beast.taxonomy,
            beast.archetype,
            beast.appearance_description,
            beast.rarity,
            beast.size_class,
            beast.taming_possibility
        ),
        [
            "## Core Info".to_string(),
            field("Affinities", &beast.affinity.join(", ")),
            field("Environments", &beast.environment.join(", ")),
            field("Intelligence", &beast.intelligence_level),
            field("Aggression", &beast.aggression),
            field("Perception", &beast.perception),
            field("Durability", &beast.durability),
            field("Movement", &beast.movement_modes.join(", ")),
        ]
        .join("\n"),
        format!("## Key Features\n{}", bullets(&beast.key_features)),
        format!(
            "## Abilities\n{}",
            bullets(beast.abilities.iter().map(|a| {
                format!("**{} ({})**: {}", a.name, a.kind, a.effect_summary)
            }))
        ),
        [
            "## Combat & Weaknesses".to_string(),
            field("Combat Style", &beast.combat_style.join(", ")),
            field("Weaknesses", &beast.weaknesses.join(", ")),
            field("Behavioral Flaw", &beast.flaw),
        ]
        .join("\n"),
        [
            "## Ecology & Lore".to_string(),
            field("Ecological Role", &beast.ecological_role),
            field("Social Structure", &beast.social_structure),
            field("Mythos/Rumor", &beast.mythos_rumor),
        ]
        .join("\n"),
        format!(
            "## Loot Table\n{}",
            bullets(beast.loot_table.iter().map(|l| {
                format!("**{} ({})**: {}", l.item_name, l.rarity, l.narrative_use)
            }))
        ),
        format!("## Example Encounters\n{}", bullets(&beast.example_encounters)),
        format!("## Image Prompt\n{}", fenced(&beast.image_prompt)),
    ];

    format!("{}\n\n*Dossier id: {}*\n", sections.join(RULE), beast.id)
}

/// Render either kind of dossier.
pub fn to_markdown(entity: &Entity) -> String {
    match entity {
        Entity::Character(character) => character_to_markdown(character),
        Entity::Beast(beast) => beast_to_markdown(beast),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_drop_blank_lines() {
        assert_eq!(paragraphs("One.\n\n  \nTwo.\n"), "One.\n\nTwo.");
    }

    #[test]
    fn test_bullets() {
        assert_eq!(bullets(["a", "b"]), "- a\n- b");
        assert_eq!(bullets(Vec::<String>::new()), "");
    }
}
