//! Character and beast command handlers.

use super::commands::{BeastCommands, CharacterArgs, CharacterCommands};
use super::{CliWorkshop, find_dossier};
use grimoire::{
    BeastInput, CharacterInput, Entity, EntityId, EntityKind, GrimoireResult, to_markdown,
};
use tracing::debug;

impl From<CharacterArgs> for CharacterInput {
    fn from(args: CharacterArgs) -> Self {
        Self {
            description: args.description,
            role: args.role,
            race: args.race,
            archetype: args.archetype,
            goals: args.goals,
            tags: args.tags,
            sword_type: args.sword_type,
            story_summary: args.story_summary,
            character_relationships: args.relationships,
            gender: args.gender,
            character_type: args.character_type,
        }
    }
}

fn print_created(id: &EntityId, name: &str) {
    println!("Created {name} ({id})");
}

fn list(entities: impl IntoIterator<Item = Entity>, kind: EntityKind) {
    let mut count = 0;
    for entity in entities {
        match &entity {
            Entity::Character(c) => {
                println!("{}\t{}\t{} {}", c.id, c.name, c.race, c.character_class)
            }
            Entity::Beast(b) => {
                println!("{}\t{}\t{} {}", b.id, b.display_name, b.size_class, b.taxonomy)
            }
        }
        count += 1;
    }
    if count == 0 {
        println!("No {kind}s yet");
    }
}

fn show(workshop: &CliWorkshop, kind: EntityKind, id: &EntityId) -> GrimoireResult<()> {
    let entity = find_dossier(workshop, Some(kind), id)?;
    println!("{}", to_markdown(&entity));
    Ok(())
}

fn delete(workshop: &CliWorkshop, kind: EntityKind, id: &EntityId) {
    if workshop.delete_entity(kind, id) {
        println!("Deleted {id}");
    } else {
        println!("No {kind} with id {id}");
    }
}

fn save(workshop: &CliWorkshop, kind: EntityKind, id: &EntityId) -> GrimoireResult<()> {
    let outcome = workshop.save_to_profile(kind, id)?;
    println!("{id}: {outcome}");
    Ok(())
}

async fn reroll(
    workshop: &CliWorkshop,
    kind: EntityKind,
    id: &EntityId,
    section: &str,
) -> GrimoireResult<()> {
    let updated = workshop.reroll_field(kind, id, section).await?;
    println!("Regenerated {section} of {}", updated.display_name());
    Ok(())
}

/// Handle character commands.
pub async fn handle_character_command(
    workshop: &CliWorkshop,
    cmd: CharacterCommands,
) -> GrimoireResult<()> {
    const KIND: EntityKind = EntityKind::Character;
    debug!(command = ?cmd, "Character command");

    match cmd {
        CharacterCommands::Create(args) => {
            let character = workshop.create_character(&args.into()).await?;
            print_created(&character.id, &character.name);
        }
        CharacterCommands::Variant { id, description } => {
            let base = description.map(CharacterInput::from_description);
            let character = workshop
                .create_character_variant(&EntityId::from(id), base)
                .await?;
            print_created(&character.id, &character.name);
        }
        CharacterCommands::Reroll { id, section } => {
            reroll(workshop, KIND, &EntityId::from(id), &section).await?
        }
        CharacterCommands::List => list(workshop.characters().into_iter().map(Entity::from), KIND),
        CharacterCommands::Show { id } => show(workshop, KIND, &EntityId::from(id))?,
        CharacterCommands::Delete { id } => delete(workshop, KIND, &EntityId::from(id)),
        CharacterCommands::Save { id } => save(workshop, KIND, &EntityId::from(id))?,
    }
    Ok(())
}

/// Handle beast commands.
pub async fn handle_beast_command(workshop: &CliWorkshop, cmd: BeastCommands) -> GrimoireResult<()> {
    const KIND: EntityKind = EntityKind::Beast;
    debug!(command = ?cmd, "Beast command");

    match cmd {
        BeastCommands::Create {
            description,
            taxonomy,
            affinity,
            environment,
        } => {
            let input = BeastInput {
                description,
                taxonomy,
                affinity,
                environment,
            };
            let beast = workshop.create_beast(&input).await?;
            print_created(&beast.id, &beast.display_name);
        }
        BeastCommands::Reroll { id, section } => {
            reroll(workshop, KIND, &EntityId::from(id), &section).await?
        }
        BeastCommands::List => list(workshop.beasts().into_iter().map(Entity::from), KIND),
        BeastCommands::Show { id } => show(workshop, KIND, &EntityId::from(id))?,
        BeastCommands::Delete { id } => delete(workshop, KIND, &EntityId::from(id)),
        BeastCommands::Save { id } => save(workshop, KIND, &EntityId::from(id))?,
    }
    Ok(())
}
