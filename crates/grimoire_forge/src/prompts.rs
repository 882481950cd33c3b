//! Prompt templates.
//!
//! Prompts are deterministic: the same input always renders the same text.
//! Optional constraints that are absent or blank are left out entirely.

use grimoire_core::{BeastInput, CharacterInput, Dossier, RerollSection};
use grimoire_error::SchemaError;

/// System instruction sent with every request.
pub const SYSTEM_INSTRUCTION: &str = "You are a meticulous worldbuilder for tabletop fantasy games. \
Respond only with JSON that matches the response schema. Never leave a field empty.";

fn push_constraint(prompt: &mut String, label: &str, value: Option<&str>) {
    if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
        prompt.push_str(&format!("- {}: {}\n", label, value));
    }
}

/// Prompt for a new character.
///
/// # Examples
///
/// ```
/// use grimoire_core::CharacterInput;
/// use grimoire_forge::character_prompt;
///
/// let prompt = character_prompt(&CharacterInput::from_description("A disgraced paladin"));
/// assert!(prompt.contains("- Concept: A disgraced paladin"));
/// assert!(!prompt.contains("Race"));
/// ```
pub fn character_prompt(input: &CharacterInput) -> String {
    let mut prompt = String::from("Generate a high-fidelity fantasy character dossier.\nConstraints:\n");
    push_constraint(&mut prompt, "Concept", Some(&input.description));
    push_constraint(&mut prompt, "Role", input.role.as_deref());
    push_constraint(&mut prompt, "Race", input.race.as_deref());
    push_constraint(&mut prompt, "Archetype", input.archetype.as_deref());
    push_constraint(&mut prompt, "Gender", input.gender.as_deref());
    push_constraint(&mut prompt, "Character Type", input.character_type.as_deref());
    push_constraint(&mut prompt, "Goals", input.goals.as_deref());
    push_constraint(&mut prompt, "Tags", input.tags.as_deref());
    push_constraint(&mut prompt, "Signature Weapon", input.sword_type.as_deref());
    push_constraint(&mut prompt, "Story Summary", input.story_summary.as_deref());
    push_constraint(
        &mut prompt,
        "Relationships",
        input.character_relationships.as_deref(),
    );
    prompt.push_str("- Subvert a common trope for this class.\n");
    prompt.push_str("- Make the secret deeply impactful to their story arc.\n");
    prompt
}

/// Prompt for a new beast.
pub fn beast_prompt(input: &BeastInput) -> String {
    let mut prompt = String::from("Generate a high-fidelity fantasy beast dossier.\nConstraints:\n");
    push_constraint(&mut prompt, "Description", Some(&input.description));
    push_constraint(&mut prompt, "Taxonomy", input.taxonomy.as_deref());
    push_constraint(&mut prompt, "Affinity", input.affinity.as_deref());
    push_constraint(&mut prompt, "Environment", input.environment.as_deref());
    prompt.push_str("- Ensure the abilities are creative and narratively interesting.\n");
    prompt.push_str("- The mythos/rumor should add depth to the creature's place in the world.\n");
    prompt.push_str("- Keep its ecology consistent with its environment.\n");
    prompt
}

/// Prompt for replacing one section of an existing dossier.
///
/// The dossier is embedded as JSON without its id and without the section being
/// replaced, so the model writes a fresh value rather than editing the old one.
///
/// # Errors
///
/// Fails only if the dossier cannot be serialized.
pub fn reroll_prompt<T: Dossier>(entity: &T, section: T::Section) -> Result<String, SchemaError> {
    let context = entity.context_json(Some(section))?;
    let context = serde_json::to_string_pretty(&context).unwrap_or_else(|_| context.to_string());
    let key = section.key();

    Ok(format!(
        "Regenerate the '{key}' field of this {kind} dossier for {name}.\n\
         Existing dossier, without the field being replaced:\n\
         {context}\n\
         Write a fresh replacement for '{key}' that stays consistent with everything above. \
         Make it even more unique and gritty. Return an object containing only '{key}'.\n",
        kind = T::KIND,
        name = entity.display_name(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use grimoire_core::fixtures::sample_character;
    use grimoire_core::CharacterSection;

    #[test]
    fn test_character_prompt_is_deterministic_and_omits_blanks() {
        let input = CharacterInput::builder()
            .description("A rogue")
            .race("Elf")
            .tags("   ")
            .build()
            .unwrap();

        let prompt = character_prompt(&input);
        assert_eq!(prompt, character_prompt(&input));
        assert!(prompt.contains("- Race: Elf\n"));
        assert!(!prompt.contains("Tags"));
        assert!(!prompt.contains("Role"));
        assert!(prompt.contains("Subvert a common trope"));
    }

    #[test]
    fn test_beast_prompt_lists_given_constraints() {
        let input = BeastInput::builder()
            .description("A glass creature")
            .environment("Desert")
            .build()
            .unwrap();

        let prompt = beast_prompt(&input);
        assert!(prompt.contains("- Description: A glass creature\n"));
        assert!(prompt.contains("- Environment: Desert\n"));
        assert!(!prompt.contains("Taxonomy"));
        assert!(prompt.contains("mythos/rumor"));
    }

    #[test]
    fn test_reroll_prompt_excludes_target_and_id() {
        let character = sample_character("123");
        let prompt = reroll_prompt(&character, CharacterSection::Backstory).unwrap();

        assert!(prompt.contains("'backstory'"));
        assert!(!prompt.contains(&character.backstory));
        assert!(!prompt.contains("\"id\""));
        assert!(prompt.contains(&character.quote));
        assert!(prompt.contains("Vex Thornwood"));
    }
}
