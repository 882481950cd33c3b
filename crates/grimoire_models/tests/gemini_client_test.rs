//! GeminiClient construction and configuration tests.
//!
//! No test here reaches the network.

use grimoire_error::GeminiErrorKind;
use grimoire_interface::GrimoireDriver;
use grimoire_models::{GeminiClient, GeminiConfig};

#[test]
fn test_missing_api_key_is_reported_by_variable_name() {
    let config: GeminiConfig = serde_json::from_value(serde_json::json!({
        "api_key_env": "GRIMOIRE_TEST_KEY_THAT_IS_NEVER_SET"
    }))
    .unwrap();

    let err = GeminiClient::new(config).unwrap_err();
    assert_eq!(
        err.kind,
        GeminiErrorKind::MissingApiKey("GRIMOIRE_TEST_KEY_THAT_IS_NEVER_SET".to_string())
    );
}

#[test]
fn test_explicit_key_and_driver_identity() -> anyhow::Result<()> {
    let client = GeminiClient::with_api_key(
        GeminiConfig::default().with_model("gemini-2.5-flash").with_timeout_secs(30),
        "test-key",
    )?;

    assert_eq!(client.provider_name(), "gemini");
    assert_eq!(client.model_name(), "gemini-2.5-flash");
    assert_eq!(*client.config().timeout_secs(), Some(30));
    Ok(())
}

#[test]
fn test_generate_url() {
    let config = GeminiConfig::default().with_api_base("http://localhost:9000/v1beta/");
    assert_eq!(
        config.generate_url("gemini-3-pro-preview"),
        "http://localhost:9000/v1beta/models/gemini-3-pro-preview:generateContent"
    );
}

#[test]
fn test_partial_config_keeps_defaults() {
    let config: GeminiConfig =
        serde_json::from_value(serde_json::json!({"temperature": 0.4})).unwrap();
    assert_eq!(config.model(), "gemini-3-pro-preview");
    assert_eq!(*config.temperature(), Some(0.4));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_a_network_error() -> anyhow::Result<()> {
    let client = GeminiClient::with_api_key(
        GeminiConfig::default()
            .with_api_base("http://127.0.0.1:9")
            .with_timeout_secs(5),
        "test-key",
    )?;
    let request = grimoire_core::GenerateRequest::builder()
        .messages(vec![grimoire_core::Message::user("hello")])
        .build()?;

    let err = client.generate(&request).await.unwrap_err();
    assert!(err.is_network());
    Ok(())
}
