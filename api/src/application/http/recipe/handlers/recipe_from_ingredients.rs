use axum::extract::State;
use pantrylens_core::domain::recipe::{
    entities::DishesResponse, ports::RecipeService, value_objects::RecipeFromIngredientsInput,
};

use crate::application::http::{
    recipe::validators::RecipeFromIngredientsValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

pub const RECIPE_FROM_INGREDIENTS_FAILED: &str = "Failed to generate recipe";

#[utoipa::path(
    post,
    path = "/recipe-from-ingredients",
    tag = "recipe",
    summary = "Generate one more dish from known ingredients",
    responses(
        (status = 200, body = DishesResponse),
        (status = 400, description = "Ingredients missing or empty", body = ApiErrorResponse),
        (status = 500, description = "Provider or parse failure", body = ApiErrorResponse)
    ),
    request_body = RecipeFromIngredientsValidator
)]
pub async fn recipe_from_ingredients(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RecipeFromIngredientsValidator>,
) -> Result<Response<DishesResponse>, ApiError> {
    let response = state
        .service
        .recipe_from_ingredients(RecipeFromIngredientsInput {
            ingredients: payload.ingredients,
            cuisine: payload.cuisine,
            on_diet: payload.on_diet,
        })
        .await
        .map_err(|e| ApiError::from_core(e, RECIPE_FROM_INGREDIENTS_FAILED))?;

    Ok(Response::OK(response))
}
