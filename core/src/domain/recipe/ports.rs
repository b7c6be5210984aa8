use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{DishesResponse, RecipeResponse},
        value_objects::{GenerateRecipesInput, RecipeFromIngredientsInput},
    },
};

/// Service trait for recipe generation
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    /// Detects ingredients on a photo and suggests dishes made from them.
    fn generate_recipes(
        &self,
        input: GenerateRecipesInput,
    ) -> impl Future<Output = Result<RecipeResponse, CoreError>> + Send;

    /// Suggests exactly one further dish from an already known ingredient list.
    fn recipe_from_ingredients(
        &self,
        input: RecipeFromIngredientsInput,
    ) -> impl Future<Output = Result<DishesResponse, CoreError>> + Send;
}
