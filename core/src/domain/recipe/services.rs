use tracing::{info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    completion::{json::parse_provider_json, ports::LLMClient},
    identification::services::NO_IMAGE_UPLOADED,
    recipe::{
        entities::{Dish, DishesResponse, GeneratedDishes, GeneratedRecipes, RecipeResponse},
        policies::{clean_ingredients, ensure_dishes_named},
        ports::RecipeService,
        prompts::{recipe_from_ingredients_prompt, recipes_from_image_prompt},
        schema::{get_dishes_schema, get_recipes_schema},
        value_objects::{GenerateRecipesInput, RecipeFromIngredientsInput, RecipeParams},
    },
    upload::{entities::StagedUpload, ports::UploadStore},
    video::{ports::VideoSearchClient, services::enrich_dishes},
};

impl<LLM, VS, US> Service<LLM, VS, US>
where
    LLM: LLMClient,
    VS: VideoSearchClient,
    US: UploadStore,
{
    async fn complete_recipes_from_staged(
        &self,
        staged: &StagedUpload,
        params: &RecipeParams,
    ) -> Result<String, CoreError> {
        let image = staged.read().await?;
        self.llm_client
            .generate_with_image(recipes_from_image_prompt(params), image, get_recipes_schema())
            .await
    }

    async fn enrich(&self, dishes: Vec<Dish>) -> Vec<Dish> {
        enrich_dishes(
            self.video_client.as_ref(),
            dishes,
            self.enrichment_concurrency,
        )
        .await
    }
}

impl<LLM, VS, US> RecipeService for Service<LLM, VS, US>
where
    LLM: LLMClient,
    VS: VideoSearchClient,
    US: UploadStore,
{
    #[instrument(skip_all, fields(cuisine = %input.params.cuisine, dish_count = input.params.dish_count, on_diet = input.params.on_diet))]
    async fn generate_recipes(
        &self,
        input: GenerateRecipesInput,
    ) -> Result<RecipeResponse, CoreError> {
        if input.image.is_empty() {
            return Err(CoreError::InvalidInput(NO_IMAGE_UPLOADED.to_string()));
        }

        // The upload is only needed for the completion call.
        let staged = self.upload_store.stage(input.image).await?;
        let raw_response = self
            .complete_recipes_from_staged(&staged, &input.params)
            .await;
        staged.release();

        let generated: GeneratedRecipes = parse_provider_json(&raw_response?)?;
        ensure_dishes_named(&generated.dishes)?;

        if generated.dishes.len() != input.params.dish_count as usize {
            info!(
                requested = input.params.dish_count,
                returned = generated.dishes.len(),
                "LLM returned a different number of dishes than requested"
            );
        }

        let dishes = self.enrich(generated.dishes).await;
        info!(
            ingredients = generated.ingredients.len(),
            dishes = dishes.len(),
            "Recipes generated"
        );

        Ok(RecipeResponse {
            ingredients: generated.ingredients,
            dishes,
        })
    }

    #[instrument(skip_all, fields(cuisine = %input.cuisine, on_diet = input.on_diet))]
    async fn recipe_from_ingredients(
        &self,
        input: RecipeFromIngredientsInput,
    ) -> Result<DishesResponse, CoreError> {
        let input = RecipeFromIngredientsInput {
            ingredients: clean_ingredients(input.ingredients)?,
            ..input
        };

        let raw_response = self
            .llm_client
            .generate_with_text(recipe_from_ingredients_prompt(&input), get_dishes_schema())
            .await?;

        let generated: GeneratedDishes = parse_provider_json(&raw_response)?;
        ensure_dishes_named(&generated.dishes)?;

        let dishes = self.enrich(generated.dishes).await;
        info!(dishes = dishes.len(), "Recipe generated from ingredients");

        Ok(DishesResponse { dishes })
    }
}
