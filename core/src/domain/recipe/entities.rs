use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One generated recipe suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Sequential cooking steps.
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub estimated_calories: Option<serde_json::Number>,
    /// Tutorial link attached after generation, `null` when none was found.
    #[serde(default)]
    pub video: Option<String>,
}

/// Response of the photo based generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeResponse {
    pub ingredients: Vec<String>,
    pub dishes: Vec<Dish>,
}

/// Response of the ingredient list based generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DishesResponse {
    pub dishes: Vec<Dish>,
}

/// Shape the provider is asked to produce on the photo path.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GeneratedRecipes {
    #[serde(default)]
    pub ingredients: Vec<String>,
    pub dishes: Vec<Dish>,
}

/// Shape the provider is asked to produce on the ingredient list path.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GeneratedDishes {
    pub dishes: Vec<Dish>,
}
