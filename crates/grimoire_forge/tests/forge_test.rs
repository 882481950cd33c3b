//! Forge tests against the scripted driver.

use grimoire_core::fixtures::{beast_json, character_json, sample_character};
use grimoire_core::{
    BeastInput, Character, CharacterInput, CharacterSection, Dossier, EntityInput, EntityKind,
};
use grimoire_error::{GeminiErrorKind, GrimoireErrorKind, SchemaErrorKind};
use grimoire_forge::Forge;
use grimoire_interface::{MockDriver, MockResponse};
use serde_json::json;

fn schema_kind(err: &grimoire_error::GrimoireError) -> Option<&SchemaErrorKind> {
    match err.kind() {
        GrimoireErrorKind::Schema(e) => Some(&e.kind),
        _ => None,
    }
}

#[tokio::test]
async fn test_generate_beast_assigns_id_and_keeps_fields() -> anyhow::Result<()> {
    let driver = MockDriver::new_success(beast_json().to_string());
    let forge = Forge::new(driver.clone());

    let beast = forge
        .generate_beast(&BeastInput::from_description("A glass creature"))
        .await?;

    assert_eq!(beast.display_name, "Glasswing Stalker");
    assert!(!beast.id.as_str().is_empty());
    assert!(beast.id.as_str().parse::<i64>().is_ok());
    assert_eq!(driver.call_count(), 1);

    let request = driver.last_request().expect("request recorded");
    assert_eq!(request.response_mime_type.as_deref(), Some("application/json"));
    assert_eq!(
        request.response_schema,
        Some(grimoire_core::Beast::schema().to_response_schema())
    );
    assert!(request.messages[0].content.contains("- Description: A glass creature"));
    Ok(())
}

#[tokio::test]
async fn test_two_generations_get_distinct_ids() -> anyhow::Result<()> {
    let forge = Forge::new(MockDriver::new_success(character_json().to_string()));
    let input = CharacterInput::from_description("A rogue");

    let first = forge.generate_character(&input).await?;
    let second = forge.generate_character(&input).await?;
    assert_ne!(first.id, second.id);
    Ok(())
}

#[tokio::test]
async fn test_fenced_output_is_accepted() -> anyhow::Result<()> {
    let fenced = format!("```json\n{}\n```", character_json());
    let forge = Forge::new(MockDriver::new_success(fenced));

    let character = forge
        .generate(&EntityInput::from(CharacterInput::from_description("A rogue")))
        .await?;
    assert_eq!(character.kind(), EntityKind::Character);
    Ok(())
}

#[tokio::test]
async fn test_missing_field_is_schema_violation() -> anyhow::Result<()> {
    let mut partial = character_json();
    partial.as_object_mut().expect("object").remove("backstory");
    let forge = Forge::new(MockDriver::new_success(partial.to_string()));

    let err = forge
        .generate_character(&CharacterInput::from_description("A rogue"))
        .await
        .unwrap_err();

    assert!(err.is_schema_violation());
    assert_eq!(
        schema_kind(&err),
        Some(&SchemaErrorKind::MissingField("backstory".to_string()))
    );
    Ok(())
}

#[tokio::test]
async fn test_beast_without_abilities_is_rejected() -> anyhow::Result<()> {
    let mut value = beast_json();
    value["abilities"] = json!([]);
    let forge = Forge::new(MockDriver::new_success(value.to_string()));

    let err = forge
        .generate_beast(&BeastInput::from_description("A glass creature"))
        .await
        .unwrap_err();
    assert!(matches!(
        schema_kind(&err),
        Some(SchemaErrorKind::TooFewItems { .. })
    ));
    Ok(())
}

#[tokio::test]
async fn test_non_json_output_is_unparsable() -> anyhow::Result<()> {
    let forge = Forge::new(MockDriver::new_success("The stars are silent tonight."));
    let err = forge
        .generate_beast(&BeastInput::from_description("A glass creature"))
        .await
        .unwrap_err();
    assert!(matches!(schema_kind(&err), Some(SchemaErrorKind::Unparsable(_))));
    Ok(())
}

#[tokio::test]
async fn test_blank_description_makes_no_call() -> anyhow::Result<()> {
    let driver = MockDriver::new_success(beast_json().to_string());
    let forge = Forge::new(driver.clone());

    let err = forge
        .generate_beast(&BeastInput::from_description("  "))
        .await
        .unwrap_err();
    assert!(matches!(err.kind(), GrimoireErrorKind::Input(_)));
    assert_eq!(driver.call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_provider_failure_is_network_error() -> anyhow::Result<()> {
    let forge = Forge::new(MockDriver::new_error(GeminiErrorKind::HttpError {
        status_code: 503,
        message: "overloaded".to_string(),
    }));

    let err = forge
        .generate_character(&CharacterInput::from_description("A rogue"))
        .await
        .unwrap_err();
    assert!(err.is_network());
    assert!(err.to_string().contains("503"));
    Ok(())
}

#[tokio::test]
async fn test_regenerate_backstory_yields_one_field_patch() -> anyhow::Result<()> {
    let driver = MockDriver::new_success(r#"{"backstory": "B", "quote": "ignored"}"#);
    let forge = Forge::new(driver.clone());
    let character = sample_character("123");

    let patch = forge
        .regenerate_section(&character, CharacterSection::Backstory)
        .await?;
    assert_eq!(patch.to_json(), json!({"backstory": "B"}));

    let request = driver.last_request().expect("request recorded");
    let schema = request.response_schema.expect("schema sent");
    assert_eq!(schema["required"], json!(["backstory"]));
    assert_eq!(schema["properties"].as_object().map(|p| p.len()), Some(1));

    let prompt = &request.messages[0].content;
    assert!(!prompt.contains(&character.backstory));
    assert!(!prompt.contains("\"123\""));

    let mut updated = character.clone();
    updated.apply_patch(&patch)?;
    assert_eq!(updated.backstory, "B");
    assert_eq!(updated.id, character.id);
    assert_eq!(updated.quote, character.quote);
    Ok(())
}

#[tokio::test]
async fn test_regenerated_section_must_be_present() -> anyhow::Result<()> {
    let forge = Forge::new(MockDriver::new_success(r#"{"appearance": "wrong field"}"#));
    let err = forge
        .regenerate_section(&sample_character("1"), CharacterSection::Backstory)
        .await
        .unwrap_err();
    assert_eq!(
        schema_kind(&err),
        Some(&SchemaErrorKind::MissingField("backstory".to_string()))
    );
    Ok(())
}

#[tokio::test]
async fn test_regenerated_nested_section_is_validated() -> anyhow::Result<()> {
    let forge = Forge::new(MockDriver::new_sequence(vec![
        MockResponse::Success(r#"{"abilities": [{"name": "Feint", "type": "psionic", "rarity": "Common", "effect": "x"}]}"#.to_string()),
        MockResponse::Success(r#"{"abilities": [{"name": "Feint", "type": "skill", "rarity": "Common", "effect": "x"}]}"#.to_string()),
    ]));
    let character = sample_character("1");

    let err = forge
        .regenerate_section(&character, CharacterSection::Abilities)
        .await
        .unwrap_err();
    assert!(matches!(schema_kind(&err), Some(SchemaErrorKind::NotAllowed { .. })));

    let patch = forge
        .regenerate_section(&character, CharacterSection::Abilities)
        .await?;
    let mut updated: Character = character.clone();
    updated.apply_patch(&patch)?;
    assert_eq!(updated.abilities.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_regenerate_field_rejects_identity_fields_without_calling() -> anyhow::Result<()> {
    let driver = MockDriver::new_success(r#"{"name": "New"}"#);
    let forge = Forge::new(driver.clone());

    let err = forge
        .regenerate_field(&sample_character("1"), "name")
        .await
        .unwrap_err();
    match err.kind() {
        GrimoireErrorKind::InvalidField(e) => {
            assert_eq!(e.field, "name");
            assert!(e.eligible.contains("relationships"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(driver.call_count(), 0);
    Ok(())
}
