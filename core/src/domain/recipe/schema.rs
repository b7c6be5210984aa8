use serde_json::json;

fn dish_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "name": { "type": "string" },
            "ingredients": {
                "type": "array",
                "items": { "type": "string" }
            },
            "instructions": {
                "type": "array",
                "items": { "type": "string" }
            },
            "estimatedCalories": { "type": "number" }
        },
        "required": ["name", "ingredients", "instructions"]
    })
}

/// Returns the JSON schema for photo based recipe generation
pub fn get_recipes_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "ingredients": {
                "type": "array",
                "items": { "type": "string" }
            },
            "dishes": {
                "type": "array",
                "items": dish_schema()
            }
        },
        "required": ["ingredients", "dishes"]
    })
}

/// Returns the JSON schema for ingredient list based recipe generation
pub fn get_dishes_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "dishes": {
                "type": "array",
                "items": dish_schema()
            }
        },
        "required": ["dishes"]
    })
}
