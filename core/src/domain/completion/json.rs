use std::sync::LazyLock;

use regex::Regex;
use serde::de::DeserializeOwned;

use crate::domain::common::entities::app_errors::CoreError;

static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^```[A-Za-z0-9_-]*\s*(.*?)\s*```$").expect("code fence pattern is valid")
});

/// Removes a surrounding markdown code fence, if the provider added one anyway.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    CODE_FENCE
        .captures(trimmed)
        .and_then(|captures| captures.get(1))
        .map(|body| body.as_str())
        .unwrap_or(trimmed)
}

/// Parses a provider answer as strict JSON of the expected shape.
pub fn parse_provider_json<T: DeserializeOwned>(raw: &str) -> Result<T, CoreError> {
    serde_json::from_str(strip_code_fence(raw)).map_err(|e| {
        tracing::error!(error = %e, "Failed to parse LLM response");
        CoreError::InvalidProviderResponse(format!("Failed to parse LLM response: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    #[test]
    fn test_plain_json_is_left_untouched() {
        assert_eq!(strip_code_fence("  {\"a\": 1}\n"), "{\"a\": 1}");
    }

    #[test]
    fn test_json_fence_is_stripped() {
        let raw = "```json\n{\"prediction\": \"Mug\"}\n```";
        assert_eq!(strip_code_fence(raw), "{\"prediction\": \"Mug\"}");
    }

    #[test]
    fn test_bare_fence_is_stripped() {
        let raw = "```\n[1, 2]\n```";
        assert_eq!(strip_code_fence(raw), "[1, 2]");
    }

    #[test]
    fn test_parse_provider_json_reads_fenced_answer() {
        let value: Value = parse_provider_json("```json\n{\"dishes\": []}\n```").unwrap();
        assert_eq!(value, json!({ "dishes": [] }));
    }

    #[test]
    fn test_parse_provider_json_rejects_prose() {
        let result: Result<Value, CoreError> = parse_provider_json("Sure! Here is your recipe.");
        assert!(matches!(
            result,
            Err(CoreError::InvalidProviderResponse(_))
        ));
    }
}
