//! Recovering JSON from model text.
//!
//! With structured output enabled the model normally returns bare JSON, but
//! responses wrapped in markdown fences or prefixed with a sentence still occur.

use grimoire_error::{SchemaError, SchemaErrorKind};
use serde_json::Value;

/// Extract the JSON object from a response that may contain markdown or extra text.
///
/// Strategies, in order:
/// 1. Bare JSON: the trimmed text starts with `{`; anything after the
///    closing brace is dropped
/// 2. Markdown code blocks: ```` ```json ... ``` ```` or unlabelled fences
/// 3. Balanced braces: the first `{ ... }` in the text
///
/// # Examples
///
/// ```
/// use grimoire_forge::extract_json;
///
/// let response = "Here is your beast:\n```json\n{\"display_name\": \"Mire Hound\"}\n```\n";
/// assert_eq!(extract_json(response), "{\"display_name\": \"Mire Hound\"}");
/// ```
pub fn extract_json(response: &str) -> String {
    let trimmed = response.trim();
    if trimmed.starts_with('{') {
        return extract_balanced(trimmed, '{', '}').unwrap_or_else(|| trimmed.to_string());
    }

    if let Some(block) = extract_from_code_block(trimmed) {
        return block;
    }

    extract_balanced(trimmed, '{', '}').unwrap_or_else(|| trimmed.to_string())
}

/// Parse a model response as a JSON value.
///
/// # Errors
///
/// Returns [`SchemaErrorKind::Unparsable`] when no JSON can be recovered.
pub fn parse_json(response: &str) -> Result<Value, SchemaError> {
    let json = extract_json(response);
    serde_json::from_str(&json).map_err(|e| {
        tracing::error!(
            error = %e,
            response_length = response.len(),
            "Failed to parse model output as JSON"
        );
        SchemaError::new(SchemaErrorKind::Unparsable(e.to_string()))
    })
}

/// Content of the first markdown code block, with any language tag skipped.
///
/// A block missing its closing fence (a truncated response) runs to the end.
fn extract_from_code_block(response: &str) -> Option<String> {
    let start = response.find("```")?;
    let after_fence = start + 3;
    let content_start = response[after_fence..]
        .find('\n')
        .map(|n| after_fence + n + 1)
        .unwrap_or(after_fence);

    let content = match response[content_start..].find("```") {
        Some(end) => &response[content_start..content_start + end],
        None => &response[content_start..],
    };
    Some(content.trim().to_string())
}

/// Content between balanced delimiters, starting at the first `open`.
fn extract_balanced(response: &str, open: char, close: char) -> Option<String> {
    let start = response.find(open)?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in response[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(response[start..start + i + ch.len_utf8()].to_string());
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_json_passes_through() {
        assert_eq!(extract_json("  {\"a\": 1}\n"), "{\"a\": 1}");
    }

    #[test]
    fn test_bare_json_drops_trailing_chatter() {
        let value = parse_json("{\"a\": 1}\nHope this helps!").unwrap();
        assert_eq!(value, serde_json::json!({"a": 1}));
    }

    #[test]
    fn test_truncated_bare_json_is_unparsable() {
        let err = parse_json("{\"a\": {\"b\": 1}").unwrap_err();
        assert!(matches!(err.kind, SchemaErrorKind::Unparsable(_)));
    }

    #[test]
    fn test_unlabelled_fence() {
        assert_eq!(extract_json("```\n{\"a\": 1}\n```"), "{\"a\": 1}");
    }

    #[test]
    fn test_truncated_fence_runs_to_end() {
        assert_eq!(extract_json("```json\n{\"a\": 1}"), "{\"a\": 1}");
    }

    #[test]
    fn test_balanced_braces_ignore_braces_in_strings() {
        let response = "Sure! {\"quote\": \"a } in text\", \"n\": {\"x\": 2}} trailing";
        assert_eq!(
            extract_json(response),
            "{\"quote\": \"a } in text\", \"n\": {\"x\": 2}}"
        );
    }

    #[test]
    fn test_parse_failure_is_unparsable() {
        let err = parse_json("I cannot help with that.").unwrap_err();
        assert!(matches!(err.kind, SchemaErrorKind::Unparsable(_)));
    }
}
