use serde_json::json;

/// Returns the JSON schema for identification LLM responses
pub fn get_identify_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "prediction": { "type": "string" },
            "confidence": { "type": "string" },
            "alternatives": {
                "type": "array",
                "items": { "type": "string" }
            },
            "summary": { "type": "string" }
        },
        "required": ["prediction", "confidence", "alternatives", "summary"]
    })
}
