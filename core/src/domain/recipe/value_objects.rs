use crate::domain::upload::entities::UploadedImage;

pub const ANY_CUISINE: &str = "any";
pub const DEFAULT_DISH_COUNT: u32 = 1;
pub const DEFAULT_MAX_DISH_COUNT: u32 = 10;

/// Generation parameters shared by the recipe endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeParams {
    pub cuisine: String,
    pub dish_count: u32,
    pub on_diet: bool,
}

impl Default for RecipeParams {
    fn default() -> Self {
        Self {
            cuisine: ANY_CUISINE.to_string(),
            dish_count: DEFAULT_DISH_COUNT,
            on_diet: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerateRecipesInput {
    pub image: UploadedImage,
    pub params: RecipeParams,
}

#[derive(Debug, Clone)]
pub struct RecipeFromIngredientsInput {
    pub ingredients: Vec<String>,
    pub cuisine: String,
    pub on_diet: bool,
}
