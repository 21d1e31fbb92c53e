//! Prompt for writing a recipe from a dish name.

/// Prompt name for log lines.
pub const RECIPE_BY_NAME_PROMPT_NAME: &str = "recipe_by_name";

pub fn render_recipe_by_name_prompt(food_name: &str) -> String {
    format!(
        "Create a detailed, authentic recipe for: {}. Include nutritional breakdown.",
        food_name
    )
}
