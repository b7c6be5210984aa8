use super::handlers::{
    generate_recipes::{__path_generate_recipes, generate_recipes},
    recipe_from_ingredients::{__path_recipe_from_ingredients, recipe_from_ingredients},
};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(generate_recipes, recipe_from_ingredients))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/recipes", state.args.server.root_path),
            post(generate_recipes),
        )
        .route(
            &format!(
                "{}/api/recipe-from-ingredients",
                state.args.server.root_path
            ),
            post(recipe_from_ingredients),
        )
}
