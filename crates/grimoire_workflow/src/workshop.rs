//! The Workshop: every user-facing operation on dossiers.

use crate::{Collection, CollectionStatus};
use grimoire_core::{
    Beast, BeastInput, BeastSection, Character, CharacterInput, CharacterSection, Dossier,
    Entity, EntityId, EntityInput, EntityKind, ProfileItem, RerollSection,
};
use grimoire_error::{GrimoireResult, WorkflowError, WorkflowErrorKind};
use grimoire_export::{to_json, to_markdown};
use grimoire_forge::Forge;
use grimoire_interface::GrimoireDriver;
use grimoire_storage::{CollectionKey, CollectionStore, load, save};
use tracing::{error, info, instrument};

/// Result of saving a dossier to the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SaveOutcome {
    /// The dossier was appended to the profile
    #[display("saved")]
    Saved,
    /// A profile item with the same id already existed; nothing changed
    #[display("already saved")]
    AlreadySaved,
}

fn not_found(id: &EntityId) -> WorkflowError {
    WorkflowError::new(WorkflowErrorKind::NotFound(id.to_string()))
}

/// Owns the generated collections and runs every operation against them.
///
/// Characters and beasts are independent: each has its own status and a request
/// in one never blocks the other.
///
/// # Examples
///
/// ```no_run
/// use grimoire_core::BeastInput;
/// use grimoire_models::{GeminiClient, GeminiConfig};
/// use grimoire_storage::InMemoryStore;
/// use grimoire_workflow::Workshop;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let driver = GeminiClient::new(GeminiConfig::default())?;
/// let workshop = Workshop::open(driver, InMemoryStore::new());
///
/// let beast = workshop.create_beast(&BeastInput::from_description("A glass creature")).await?;
/// assert_eq!(workshop.beasts()[0].id, beast.id);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Workshop<D, S> {
    forge: Forge<D>,
    store: S,
    characters: Collection<Character>,
    beasts: Collection<Beast>,
}

impl<D: GrimoireDriver, S: CollectionStore> Workshop<D, S> {
    /// Open a workshop, loading both collections from `store`.
    #[instrument(skip_all, fields(provider = driver.provider_name()))]
    pub fn open(driver: D, store: S) -> Self {
        let workshop = Self {
            forge: Forge::new(driver),
            store,
            characters: Collection::new(CollectionKey::Characters),
            beasts: Collection::new(CollectionKey::Beasts),
        };
        // Fresh collections are idle, so these cannot be busy.
        let _ = workshop.characters.reload(&workshop.store);
        let _ = workshop.beasts.reload(&workshop.store);
        workshop
    }

    /// The underlying forge.
    pub fn forge(&self) -> &Forge<D> {
        &self.forge
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Re-read one collection from storage.
    ///
    /// # Errors
    ///
    /// Fails with a busy error while a request on that collection is in flight.
    pub fn load_collection(&self, kind: EntityKind) -> GrimoireResult<()> {
        match kind {
            EntityKind::Character => self.characters.reload(&self.store)?,
            EntityKind::Beast => self.beasts.reload(&self.store)?,
        }
        Ok(())
    }

    /// Status of one collection.
    pub fn status(&self, kind: EntityKind) -> CollectionStatus {
        match kind {
            EntityKind::Character => self.characters.status(),
            EntityKind::Beast => self.beasts.status(),
        }
    }

    /// Characters, newest first.
    pub fn characters(&self) -> Vec<Character> {
        self.characters.items()
    }

    /// Beasts, newest first.
    pub fn beasts(&self) -> Vec<Beast> {
        self.beasts.items()
    }

    /// Look a dossier up by id in either collection.
    pub fn find(&self, id: &EntityId) -> Option<Entity> {
        self.characters
            .get(id)
            .map(Entity::from)
            .or_else(|| self.beasts.get(id).map(Entity::from))
    }

    async fn run_create<T: Dossier>(
        &self,
        collection: &Collection<T>,
        generation: impl Future<Output = GrimoireResult<T>>,
    ) -> GrimoireResult<T> {
        collection.begin(CollectionStatus::Generating)?;
        match generation.await {
            Ok(dossier) => {
                collection.complete_insert(dossier.clone(), &self.store);
                Ok(dossier)
            }
            Err(e) => {
                collection.fail(e.to_string());
                Err(e)
            }
        }
    }

    /// Generate a character and put it first in the collection.
    ///
    /// # Errors
    ///
    /// - input errors for a blank description (no state change)
    /// - busy while another character request is in flight
    /// - network and schema errors, which also move the collection to the error
    ///   state with the list unchanged
    #[instrument(skip_all)]
    pub async fn create_character(&self, input: &CharacterInput) -> GrimoireResult<Character> {
        input.validate()?;
        self.run_create(&self.characters, self.forge.generate_character(input))
            .await
    }

    /// Generate a beast and put it first in the collection.
    ///
    /// # Errors
    ///
    /// Same as [`Workshop::create_character`].
    #[instrument(skip_all)]
    pub async fn create_beast(&self, input: &BeastInput) -> GrimoireResult<Beast> {
        input.validate()?;
        self.run_create(&self.beasts, self.forge.generate_beast(input))
            .await
    }

    /// Generate whichever kind `input` asks for.
    ///
    /// # Errors
    ///
    /// Same as [`Workshop::create_character`].
    pub async fn create_entity(&self, input: &EntityInput) -> GrimoireResult<Entity> {
        match input {
            EntityInput::Character(input) => self.create_character(input).await.map(Entity::from),
            EntityInput::Beast(input) => self.create_beast(input).await.map(Entity::from),
        }
    }

    /// Generate a new character as a variant of an existing one.
    ///
    /// The description of `base` (or, without one, a description derived from
    /// the original's archetype and class) is suffixed with
    /// `(variant of <name>)`. The original is left untouched.
    ///
    /// # Errors
    ///
    /// Not found when no character has `id`; otherwise as
    /// [`Workshop::create_character`].
    pub async fn create_character_variant(
        &self,
        id: &EntityId,
        base: Option<CharacterInput>,
    ) -> GrimoireResult<Character> {
        let original = self.characters.get(id).ok_or_else(|| not_found(id))?;
        let mut input = base.unwrap_or_else(|| CharacterInput {
            description: original.archetype.clone(),
            role: Some(original.character_class.clone()),
            ..CharacterInput::default()
        });
        input.description = format!("{} (variant of {})", input.description, original.name);
        self.create_character(&input).await
    }

    async fn run_reroll<T: Dossier>(
        &self,
        collection: &Collection<T>,
        id: &EntityId,
        section: T::Section,
    ) -> GrimoireResult<T> {
        let current = collection.get(id).ok_or_else(|| not_found(id))?;
        collection.begin(CollectionStatus::Rerolling {
            id: id.clone(),
            section: section.key().to_string(),
        })?;

        match self.forge.regenerate_section(&current, section).await {
            Ok(patch) => collection.complete_patch(id, &patch, &self.store),
            Err(e) => {
                collection.fail(e.to_string());
                Err(e)
            }
        }
    }

    /// Regenerate one section of a character and merge it in place.
    ///
    /// # Errors
    ///
    /// - not found when no character has `id` (no backend call)
    /// - busy while another character request is in flight
    /// - network and schema errors, leaving the character unchanged
    #[instrument(skip(self), fields(id = %id, section = %section))]
    pub async fn reroll_character(
        &self,
        id: &EntityId,
        section: CharacterSection,
    ) -> GrimoireResult<Character> {
        self.run_reroll(&self.characters, id, section).await
    }

    /// Regenerate one section of a beast and merge it in place.
    ///
    /// # Errors
    ///
    /// Same as [`Workshop::reroll_character`].
    #[instrument(skip(self), fields(id = %id, section = %section))]
    pub async fn reroll_beast(&self, id: &EntityId, section: BeastSection) -> GrimoireResult<Beast> {
        self.run_reroll(&self.beasts, id, section).await
    }

    /// Regenerate a section addressed by field name.
    ///
    /// # Errors
    ///
    /// Invalid-field errors for names that are not rerollable sections of
    /// `kind`, raised before any state change; otherwise as
    /// [`Workshop::reroll_character`].
    pub async fn reroll_field(
        &self,
        kind: EntityKind,
        id: &EntityId,
        field: &str,
    ) -> GrimoireResult<Entity> {
        match kind {
            EntityKind::Character => {
                let section = Character::parse_section(field)?;
                self.reroll_character(id, section).await.map(Entity::from)
            }
            EntityKind::Beast => {
                let section = Beast::parse_section(field)?;
                self.reroll_beast(id, section).await.map(Entity::from)
            }
        }
    }

    /// Delete one dossier. Returns false, changing nothing, when it is absent.
    pub fn delete_entity(&self, kind: EntityKind, id: &EntityId) -> bool {
        match kind {
            EntityKind::Character => self.characters.remove(id, &self.store),
            EntityKind::Beast => self.beasts.remove(id, &self.store),
        }
    }

    /// Append a dossier to the profile unless an item with its id is already there.
    ///
    /// The profile is re-read from storage first, so saves from other sessions
    /// are not overwritten.
    ///
    /// # Errors
    ///
    /// - not found when the collection has no dossier with `id`
    /// - storage errors when the profile cannot be written; the profile is
    ///   only kept in storage, so nothing is saved
    #[instrument(skip(self), fields(id = %id))]
    pub fn save_to_profile(&self, kind: EntityKind, id: &EntityId) -> GrimoireResult<SaveOutcome> {
        let item = match kind {
            EntityKind::Character => self.characters.get(id).map(Dossier::into_profile_item),
            EntityKind::Beast => self.beasts.get(id).map(Dossier::into_profile_item),
        }
        .ok_or_else(|| not_found(id))?;

        let mut profile: Vec<ProfileItem> = load(&self.store, CollectionKey::ProfileItems);
        if profile.iter().any(|saved| saved.id() == id) {
            info!("Already in profile");
            return Ok(SaveOutcome::AlreadySaved);
        }

        profile.push(item);
        save(&self.store, CollectionKey::ProfileItems, &profile).inspect_err(|e| {
            error!(error = %e, "Failed to persist profile");
        })?;
        info!(count = profile.len(), "Saved to profile");
        Ok(SaveOutcome::Saved)
    }

    /// Items saved to the profile, oldest first.
    pub fn profile_items(&self) -> Vec<ProfileItem> {
        load(&self.store, CollectionKey::ProfileItems)
    }

    /// Markdown sheet for the dossier with `id`.
    ///
    /// # Errors
    ///
    /// Not found when neither collection has `id`.
    pub fn export_markdown(&self, id: &EntityId) -> GrimoireResult<String> {
        let entity = self.find(id).ok_or_else(|| not_found(id))?;
        Ok(to_markdown(&entity))
    }

    /// Pretty JSON for the dossier with `id`.
    ///
    /// # Errors
    ///
    /// Not found when neither collection has `id`.
    pub fn export_json(&self, id: &EntityId) -> GrimoireResult<String> {
        let entity = self.find(id).ok_or_else(|| not_found(id))?;
        Ok(to_json(&entity)?)
    }
}
