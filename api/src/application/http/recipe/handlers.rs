pub mod generate_recipes;
pub mod recipe_from_ingredients;
