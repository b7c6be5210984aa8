use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::Dish,
        value_objects::{ANY_CUISINE, DEFAULT_DISH_COUNT, RecipeParams},
    },
};

pub const INGREDIENTS_REQUIRED: &str = "Ingredients are required";

/// Blank cuisine means no preference.
pub fn normalize_cuisine(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(cuisine) if !cuisine.is_empty() => cuisine.to_string(),
        _ => ANY_CUISINE.to_string(),
    }
}

pub fn is_any_cuisine(cuisine: &str) -> bool {
    let cuisine = cuisine.trim();
    cuisine.is_empty() || cuisine.eq_ignore_ascii_case(ANY_CUISINE)
}

/// Coerces a form value to a positive dish count, capped at `max`.
///
/// Fractions are floored; anything unparseable or below one falls back to
/// the default of one dish.
pub fn parse_dish_count(raw: Option<&str>, max: u32) -> u32 {
    let parsed = raw
        .map(str::trim)
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| value.is_finite() && *value >= 1.0)
        .map(|value| value.floor().min(u32::MAX as f64) as u32)
        .unwrap_or(DEFAULT_DISH_COUNT);

    parsed.min(max.max(DEFAULT_DISH_COUNT))
}

pub fn parse_flag(raw: Option<&str>) -> bool {
    raw.map(str::trim).is_some_and(|value| {
        value.eq_ignore_ascii_case("true") || value == "1" || value.eq_ignore_ascii_case("on")
    })
}

/// Builds generation parameters from raw multipart form values.
pub fn recipe_params_from_form(
    cuisine: Option<&str>,
    dish_count: Option<&str>,
    on_diet: Option<&str>,
    max_dish_count: u32,
) -> RecipeParams {
    RecipeParams {
        cuisine: normalize_cuisine(cuisine),
        dish_count: parse_dish_count(dish_count, max_dish_count),
        on_diet: parse_flag(on_diet),
    }
}

/// Trims every ingredient and drops blank ones; fails when nothing is left.
pub fn clean_ingredients(ingredients: Vec<String>) -> Result<Vec<String>, CoreError> {
    let cleaned: Vec<String> = ingredients
        .into_iter()
        .map(|ingredient| ingredient.trim().to_string())
        .filter(|ingredient| !ingredient.is_empty())
        .collect();

    if cleaned.is_empty() {
        return Err(CoreError::InvalidInput(INGREDIENTS_REQUIRED.to_string()));
    }

    Ok(cleaned)
}

/// Every dish handed to the client must carry a name.
pub fn ensure_dishes_named(dishes: &[Dish]) -> Result<(), CoreError> {
    if let Some(position) = dishes.iter().position(|dish| dish.name.trim().is_empty()) {
        tracing::error!(position, "LLM returned a dish without a name");
        return Err(CoreError::InvalidProviderResponse(format!(
            "Dish at position {} has no name",
            position
        )));
    }

    Ok(())
}
