//! Conversions between Grimoire and Gemini types.

use super::dto::{GeminiContent, GeminiRequest, GeminiResponse, GenerationConfig};
use grimoire_core::{GenerateRequest, GenerateResponse, Output, Role};
use grimoire_error::{BuilderError, GeminiError, GeminiErrorKind};

/// Finish reasons that mean the output was withheld.
const BLOCKING_FINISH_REASONS: &[&str] = &[
    "SAFETY",
    "PROHIBITED_CONTENT",
    "BLOCKLIST",
    "SPII",
    "RECITATION",
];

/// Converts a Grimoire request to a Gemini request body.
///
/// System turns are folded into the system instruction. `default_temperature`
/// applies when the request does not set one.
pub fn to_gemini_request(
    request: &GenerateRequest,
    default_temperature: Option<f32>,
) -> Result<GeminiRequest, BuilderError> {
    let mut system_parts: Vec<String> = request.system_instruction.iter().cloned().collect();
    let mut contents = Vec::with_capacity(request.messages.len());

    for message in &request.messages {
        match message.role {
            Role::System => system_parts.push(message.content.clone()),
            Role::User => contents.push(GeminiContent::text(Some("user"), &message.content)),
            Role::Assistant => contents.push(GeminiContent::text(Some("model"), &message.content)),
        }
    }

    let temperature = request.temperature.or(default_temperature);
    let generation_config = if temperature.is_some()
        || request.response_mime_type.is_some()
        || request.response_schema.is_some()
    {
        Some(GenerationConfig {
            temperature,
            response_mime_type: request.response_mime_type.clone(),
            response_schema: request.response_schema.clone(),
        })
    } else {
        None
    };

    let system_instruction = if system_parts.is_empty() {
        None
    } else {
        Some(GeminiContent::text(None, system_parts.join("\n\n")))
    };

    GeminiRequest::builder()
        .contents(contents)
        .system_instruction(system_instruction)
        .generation_config(generation_config)
        .build()
        .map_err(|e| BuilderError::from(format!("Failed to build Gemini request: {}", e)))
}

/// Converts a Gemini response to a Grimoire response.
///
/// # Errors
///
/// - [`GeminiErrorKind::Blocked`] when the prompt or every candidate was blocked
/// - [`GeminiErrorKind::EmptyResponse`] when no candidate carries text
pub fn from_gemini_response(response: &GeminiResponse) -> Result<GenerateResponse, GeminiError> {
    if let Some(reason) = response
        .prompt_feedback
        .as_ref()
        .and_then(|feedback| feedback.block_reason.as_ref())
    {
        return Err(GeminiError::new(GeminiErrorKind::Blocked(reason.clone())));
    }

    let outputs: Vec<Output> = response
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .filter_map(|part| part.text.clone())
                .map(Output::Text)
                .collect()
        })
        .unwrap_or_default();

    if outputs.is_empty() {
        let blocked = response
            .candidates
            .first()
            .and_then(|candidate| candidate.finish_reason.as_deref())
            .filter(|reason| BLOCKING_FINISH_REASONS.contains(reason));
        return Err(GeminiError::new(match blocked {
            Some(reason) => GeminiErrorKind::Blocked(reason.to_string()),
            None => GeminiErrorKind::EmptyResponse,
        }));
    }

    Ok(GenerateResponse { outputs })
}

#[cfg(test)]
mod tests {
    use super::*;
    use grimoire_core::Message;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let request = GenerateRequest::builder()
            .messages(vec![Message::user("Describe a wyvern")])
            .system_instruction("You write bestiaries.")
            .response_mime_type("application/json")
            .response_schema(json!({"type": "OBJECT"}))
            .build()
            .unwrap();

        let body = serde_json::to_value(to_gemini_request(&request, Some(0.8)).unwrap()).unwrap();

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Describe a wyvern");
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "You write bestiaries.");
        assert!(body["systemInstruction"].get("role").is_none());
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["generationConfig"]["responseSchema"]["type"], "OBJECT");
        let temperature = body["generationConfig"]["temperature"].as_f64().unwrap();
        assert!((temperature - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_plain_request_omits_generation_config() {
        let request = GenerateRequest::builder()
            .messages(vec![Message::user("hi")])
            .build()
            .unwrap();
        let body = serde_json::to_value(to_gemini_request(&request, None).unwrap()).unwrap();
        assert!(body.get("generationConfig").is_none());
        assert!(body.get("systemInstruction").is_none());
    }

    #[test]
    fn test_response_text_parts_become_outputs() {
        let response: GeminiResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "{\"a\":"}, {"text": "1}"}]},
                "finishReason": "STOP"
            }]
        }))
        .unwrap();

        let converted = from_gemini_response(&response).unwrap();
        assert_eq!(converted.text().as_deref(), Some("{\"a\":1}"));
    }

    #[test]
    fn test_blocked_prompt() {
        let response: GeminiResponse =
            serde_json::from_value(json!({"promptFeedback": {"blockReason": "SAFETY"}})).unwrap();
        let err = from_gemini_response(&response).unwrap_err();
        assert_eq!(err.kind, GeminiErrorKind::Blocked("SAFETY".to_string()));
    }

    #[test]
    fn test_blocked_candidate_and_empty_response() {
        let blocked: GeminiResponse =
            serde_json::from_value(json!({"candidates": [{"finishReason": "SAFETY"}]})).unwrap();
        assert!(matches!(
            from_gemini_response(&blocked).unwrap_err().kind,
            GeminiErrorKind::Blocked(_)
        ));

        let empty: GeminiResponse = serde_json::from_value(json!({"candidates": []})).unwrap();
        assert_eq!(
            from_gemini_response(&empty).unwrap_err().kind,
            GeminiErrorKind::EmptyResponse
        );
    }
}
