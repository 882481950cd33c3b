//! The generation and partial-regeneration client.

use crate::extraction::parse_json;
use crate::prompts::{SYSTEM_INSTRUCTION, beast_prompt, character_prompt, reroll_prompt};
use grimoire_core::schema::ObjectSchema;
use grimoire_core::{
    Beast, BeastInput, Character, CharacterInput, Dossier, Entity, EntityId, EntityInput,
    GenerateRequest, Message, RerollSection, SectionPatch,
};
use grimoire_error::{GrimoireResult, SchemaError, SchemaErrorKind};
use grimoire_interface::GrimoireDriver;
use serde_json::Value;
use tracing::{debug, error, info, instrument};

const JSON_MIME_TYPE: &str = "application/json";

/// Turns user constraints into validated dossiers using a [`GrimoireDriver`].
///
/// The forge never touches storage and never retries. Each operation makes at
/// most one backend call.
#[derive(Debug, Clone)]
pub struct Forge<D> {
    driver: D,
}

impl<D: GrimoireDriver> Forge<D> {
    /// Create a forge over `driver`.
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    /// The backend in use.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Send one prompt with `schema` as the response schema and parse the JSON reply.
    async fn complete(&self, prompt: String, schema: &ObjectSchema) -> GrimoireResult<Value> {
        let request = GenerateRequest::builder()
            .messages(vec![Message::user(prompt)])
            .system_instruction(SYSTEM_INSTRUCTION)
            .response_mime_type(JSON_MIME_TYPE)
            .response_schema(schema.to_response_schema())
            .build()?;

        let response = self.driver.generate(&request).await?;
        let text = response
            .text()
            .ok_or_else(|| SchemaError::new(SchemaErrorKind::NoOutput))?;
        debug!(response_length = text.len(), "Received model output");

        Ok(parse_json(&text)?)
    }

    async fn generate_dossier<T: Dossier>(&self, prompt: String) -> GrimoireResult<T> {
        let value = self.complete(prompt, T::schema()).await?;
        let dossier = T::from_generated(value, EntityId::generate()).inspect_err(|e| {
            error!(kind = %T::KIND, error = %e, "Model output failed schema validation");
        })?;
        info!(kind = %T::KIND, id = %dossier.id(), name = dossier.display_name(), "Generated dossier");
        Ok(dossier)
    }

    /// Generate a character.
    ///
    /// # Errors
    ///
    /// - input errors when the description is blank (no backend call is made)
    /// - network and provider errors from the driver
    /// - schema violations when the output is not a complete character
    #[instrument(skip(self, input), fields(provider = self.driver.provider_name()))]
    pub async fn generate_character(&self, input: &CharacterInput) -> GrimoireResult<Character> {
        input.validate()?;
        self.generate_dossier(character_prompt(input)).await
    }

    /// Generate a beast.
    ///
    /// # Errors
    ///
    /// Same as [`Forge::generate_character`].
    #[instrument(skip(self, input), fields(provider = self.driver.provider_name()))]
    pub async fn generate_beast(&self, input: &BeastInput) -> GrimoireResult<Beast> {
        input.validate()?;
        self.generate_dossier(beast_prompt(input)).await
    }

    /// Generate whichever kind of dossier `input` asks for.
    ///
    /// # Errors
    ///
    /// Same as [`Forge::generate_character`].
    pub async fn generate(&self, input: &EntityInput) -> GrimoireResult<Entity> {
        match input {
            EntityInput::Character(input) => self.generate_character(input).await.map(Entity::from),
            EntityInput::Beast(input) => self.generate_beast(input).await.map(Entity::from),
        }
    }

    /// Produce a replacement value for one section of `entity`.
    ///
    /// The returned patch touches exactly that section. Extra keys in the
    /// model's reply are ignored.
    ///
    /// # Errors
    ///
    /// - network and provider errors from the driver
    /// - schema violations when the reply lacks the section or it is malformed
    #[instrument(
        skip(self, entity),
        fields(kind = %T::KIND, id = %entity.id(), section = %section)
    )]
    pub async fn regenerate_section<T: Dossier>(
        &self,
        entity: &T,
        section: T::Section,
    ) -> GrimoireResult<SectionPatch<T::Section>> {
        let schema = T::section_schema(section)?;
        let value = self.complete(reroll_prompt(entity, section)?, &schema).await?;

        schema.validate(&value).inspect_err(|e| {
            error!(error = %e, "Regenerated section failed schema validation");
        })?;

        let replacement = match value {
            Value::Object(mut map) => map.remove(section.key()),
            _ => None,
        }
        .ok_or_else(|| SchemaError::new(SchemaErrorKind::MissingField(section.key().to_string())))?;

        info!("Regenerated section");
        Ok(SectionPatch::new(section, replacement))
    }

    /// [`Forge::regenerate_section`] addressed by field name.
    ///
    /// # Errors
    ///
    /// Fails with an invalid-field error, before any backend call, when `field`
    /// is not a rerollable section of `T`.
    pub async fn regenerate_field<T: Dossier>(
        &self,
        entity: &T,
        field: &str,
    ) -> GrimoireResult<SectionPatch<T::Section>> {
        let section = T::parse_section(field)?;
        self.regenerate_section(entity, section).await
    }
}
