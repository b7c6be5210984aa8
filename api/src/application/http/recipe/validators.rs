use pantrylens_core::domain::recipe::value_objects::ANY_CUISINE;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

fn default_cuisine() -> String {
    ANY_CUISINE.to_string()
}

/// Accepts only an array of strings; anything else reads as no ingredients.
fn ingredient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;

    Ok(match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(ingredient) => Some(ingredient),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeFromIngredientsValidator {
    #[serde(default, deserialize_with = "ingredient_list")]
    #[validate(length(min = 1, message = "Ingredients are required"))]
    #[schema(example = json!(["egg", "rice"]))]
    pub ingredients: Vec<String>,

    #[serde(default = "default_cuisine")]
    #[schema(example = "Japanese")]
    pub cuisine: String,

    #[serde(default)]
    pub on_diet: bool,
}

#[cfg(test)]
mod tests {
    use pantrylens_core::domain::recipe::policies::INGREDIENTS_REQUIRED;
    use serde_json::json;

    use super::*;

    fn parse(value: serde_json::Value) -> RecipeFromIngredientsValidator {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_full_body() {
        let body = parse(json!({ "ingredients": ["egg", "rice"], "cuisine": "Japanese", "onDiet": true }));

        assert_eq!(body.ingredients, vec!["egg", "rice"]);
        assert_eq!(body.cuisine, "Japanese");
        assert!(body.on_diet);
        assert!(body.validate().is_ok());
    }

    #[test]
    fn test_defaults() {
        let body = parse(json!({ "ingredients": ["egg"] }));

        assert_eq!(body.cuisine, "any");
        assert!(!body.on_diet);
    }

    #[test]
    fn test_missing_or_invalid_ingredients_fail_validation() {
        for value in [
            json!({}),
            json!({ "ingredients": [] }),
            json!({ "ingredients": "egg, rice" }),
            json!({ "ingredients": null }),
            json!({ "ingredients": [1, 2] }),
        ] {
            let body = parse(value.clone());
            let errors = body.validate().unwrap_err();
            let message = errors.field_errors()["ingredients"][0]
                .message
                .as_ref()
                .map(|m| m.to_string());
            assert_eq!(message.as_deref(), Some(INGREDIENTS_REQUIRED), "{value}");
        }
    }
}
