//! Prompt for suggesting recipes from a list of pantry ingredients.

/// Prompt name for log lines.
pub const RECIPES_BY_INGREDIENTS_PROMPT_NAME: &str = "recipes_by_ingredients";

pub fn render_recipes_by_ingredients_prompt(ingredients: &[String]) -> String {
    let ingredient_list = ingredients.join(", ");

    format!(
        r#"I have the following ingredients: {list}.
Suggest 3 distinct, delicious recipes I can make primarily using these ingredients (you can assume I have basic pantry staples like oil, salt, pepper, flour).
Include nutritional breakdown for each."#,
        list = ingredient_list
    )
}
