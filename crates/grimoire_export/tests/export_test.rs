//! Export formatter tests.

use grimoire_core::fixtures::{sample_beast, sample_character};
use grimoire_core::{Beast, Character, Entity};
use grimoire_export::{
    ExportFormat, beast_to_markdown, character_to_markdown, file_name, render, to_json,
    to_markdown,
};

#[test]
fn test_character_markdown_layout() {
    let character = sample_character("123");
    let markdown = character_to_markdown(&character);

    assert!(markdown.starts_with("# Vex Thornwood\n*Half-Elf Rogue (The Reluctant Heir)*\n"));
    assert!(markdown.contains("> \"Every lock is a promise someone meant to break.\""));
    assert!(markdown.contains("**Tags:** cunning, haunted"));
    assert!(markdown.contains("\n\n---\n\n## Appearance\n"));
    assert!(markdown.contains("- **STR:** 10"));
    assert!(markdown.contains("```\nPortrait of a grey-haired half-elf rogue in a patched coat\n```"));
}

#[test]
fn test_character_markdown_groups_abilities() {
    let markdown = character_to_markdown(&sample_character("1"));
    let skills = markdown.find("### Combat / Skills").unwrap();
    let magic = markdown.find("### Magic").unwrap();
    let lockcraft = markdown.find("**Lockcraft (Common)**").unwrap();
    let shadowstep = markdown.find("**Shadowstep (Rare)**").unwrap();

    assert!(skills < lockcraft && lockcraft < magic);
    assert!(magic < shadowstep);
}

#[test]
fn test_character_markdown_includes_every_field() {
    let character = sample_character("123");
    let markdown = character_to_markdown(&character);

    for text in [
        &character.appearance.sensory_detail,
        &character.appearance.attire,
        &character.personality.the_mask,
        &character.personality.deep_secret,
        &character.relationships[0].dynamic,
        &character.equipment[1],
        &character.plot_hooks[0],
    ] {
        assert!(markdown.contains(text.as_str()), "missing {}", text);
    }
    assert!(markdown.contains("123"));
}

#[test]
fn test_beast_markdown_layout() {
    let beast = sample_beast("9");
    let markdown = beast_to_markdown(&beast);

    assert!(markdown.starts_with("# Glasswing Stalker\n*Aberration (Ambush Predator)*\n"));
    assert!(markdown.contains("**Rarity:** Rare | **Size:** Large | **Taming:** Impossible"));
    assert!(markdown.contains("- **Refraction (Defensive)**: Bends light to appear elsewhere"));
    assert!(markdown.contains("- **Prism shard (Uncommon)**: Focuses scrying spells"));
    assert!(markdown.contains("- **Behavioral Flaw:** Shatters when frozen"));
    assert_eq!(to_markdown(&Entity::from(beast)), markdown);
}

#[test]
fn test_json_round_trips_each_kind() -> anyhow::Result<()> {
    let character = sample_character("1");
    let json = to_json(&Entity::from(character.clone()))?;
    assert!(json.contains("\n  \"name\": \"Vex Thornwood\""));
    assert_eq!(serde_json::from_str::<Character>(&json)?, character);

    let beast = sample_beast("2");
    let json = render(&Entity::from(beast.clone()), ExportFormat::Json)?;
    assert_eq!(serde_json::from_str::<Beast>(&json)?, beast);
    Ok(())
}

#[test]
fn test_file_names() {
    let character = Entity::from(sample_character("1"));
    assert_eq!(file_name(&character, ExportFormat::Markdown), "vex-thornwood.md");

    let mut beast = sample_beast("42");
    beast.display_name = "???".to_string();
    assert_eq!(file_name(&Entity::from(beast), ExportFormat::Json), "42.json");
}
