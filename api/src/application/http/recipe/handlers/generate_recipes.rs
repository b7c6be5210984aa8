use axum::extract::{Multipart, State, multipart::MultipartRejection};
use pantrylens_core::domain::{
    identification::services::NO_IMAGE_UPLOADED,
    recipe::{
        entities::RecipeResponse, policies::recipe_params_from_form, ports::RecipeService,
        value_objects::GenerateRecipesInput,
    },
};
use tracing::info;

use crate::application::http::{
    multipart::read_image_form,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

pub const GENERATE_RECIPES_FAILED: &str = "Failed to generate recipes";

#[utoipa::path(
    post,
    path = "/recipes",
    tag = "recipe",
    summary = "Generate recipes from a photo",
    description = "Detects the ingredients on the uploaded `image` and suggests `dishCount` dishes \
        in the requested `cuisine`, optionally diet friendly when `onDiet` is `true`. \
        Each dish gets a tutorial `video` link when one is found.",
    request_body(content_type = "multipart/form-data", description = "Form with an `image` file field and optional `cuisine`, `dishCount` and `onDiet` text fields"),
    responses(
        (status = 200, body = RecipeResponse),
        (status = 400, description = "No image uploaded", body = ApiErrorResponse),
        (status = 500, description = "Provider or parse failure", body = ApiErrorResponse)
    ),
)]
pub async fn generate_recipes(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response<RecipeResponse>, ApiError> {
    let form = read_image_form(multipart, state.args.upload.max_image_bytes).await?;
    let params = recipe_params_from_form(
        form.field("cuisine"),
        form.field("dishCount"),
        form.field("onDiet"),
        state.args.upload.max_dish_count,
    );
    let image = form
        .image
        .ok_or_else(|| ApiError::BadRequest(NO_IMAGE_UPLOADED.to_string()))?;

    info!(
        size = image.data.len(),
        cuisine = %params.cuisine,
        dish_count = params.dish_count,
        on_diet = params.on_diet,
        "Generating recipes from image"
    );

    let response = state
        .service
        .generate_recipes(GenerateRecipesInput { image, params })
        .await
        .map_err(|e| ApiError::from_core(e, GENERATE_RECIPES_FAILED))?;

    Ok(Response::OK(response))
}
