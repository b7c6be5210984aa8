use crate::domain::recipe::{
    policies::is_any_cuisine,
    value_objects::{RecipeFromIngredientsInput, RecipeParams},
};

const DIET_CLAUSE: &str = "The user is on a diet: keep every dish light and low in calories, \
favour vegetables and lean protein, and avoid deep frying and added sugar.";

const RECIPES_SHAPE: &str = r#"{
  "ingredients": ["Ingredient 1", "Ingredient 2"],
  "dishes": [
    {
      "name": "Dish name",
      "ingredients": ["Ingredient with quantity"],
      "instructions": ["Step 1", "Step 2"],
      "estimatedCalories": 500
    }
  ]
}"#;

const DISHES_SHAPE: &str = r#"{
  "dishes": [
    {
      "name": "Dish name",
      "ingredients": ["Ingredient with quantity"],
      "instructions": ["Step 1", "Step 2"],
      "estimatedCalories": 500
    }
  ]
}"#;

fn cuisine_phrase(cuisine: &str) -> String {
    if is_any_cuisine(cuisine) {
        "any cuisine".to_string()
    } else {
        format!("{} cuisine", cuisine.trim())
    }
}

fn json_only_instructions(shape: &str) -> String {
    format!(
        "Respond in JSON only. Do NOT include markdown or triple backticks.\n\
         Your answer must start with {{ and match this strict JSON format:\n\n{}\n",
        shape
    )
}

/// Prompt for ingredient detection plus dish suggestions from a photo.
pub fn recipes_from_image_prompt(params: &RecipeParams) -> String {
    let dishes = if params.dish_count == 1 {
        "1 dish".to_string()
    } else {
        format!("{} different dishes", params.dish_count)
    };

    let mut prompt = format!(
        "Analyze the image and list every food ingredient you can see.\n\
         Then suggest exactly {} from {} that can be cooked mainly with those ingredients.\n",
        dishes,
        cuisine_phrase(&params.cuisine)
    );
    if params.on_diet {
        prompt.push_str(DIET_CLAUSE);
        prompt.push('\n');
    }
    prompt.push_str(
        "For every dish give its name, the ingredients with quantities, \
         ordered step by step instructions and an estimated calorie count per serving.\n",
    );
    prompt.push_str(&json_only_instructions(RECIPES_SHAPE));

    prompt
}

/// Prompt for one further dish from a known ingredient list.
pub fn recipe_from_ingredients_prompt(input: &RecipeFromIngredientsInput) -> String {
    let mut prompt = format!(
        "You are given these ingredients: {}.\n\
         Suggest exactly 1 dish from {} that can be cooked mainly with them.\n",
        input.ingredients.join(", "),
        cuisine_phrase(&input.cuisine)
    );
    if input.on_diet {
        prompt.push_str(DIET_CLAUSE);
        prompt.push('\n');
    }
    prompt.push_str(
        "Give its name, the ingredients with quantities, \
         ordered step by step instructions and an estimated calorie count per serving.\n",
    );
    prompt.push_str(&json_only_instructions(DISHES_SHAPE));

    prompt
}
