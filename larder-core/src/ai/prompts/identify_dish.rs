//! Prompt for identifying a dish from a photo and writing its recipe.
//!
//! The vision model does not support schema-constrained output, so the
//! prompt itself spells out the JSON structure.

/// Prompt name for log lines.
pub const IDENTIFY_DISH_PROMPT_NAME: &str = "identify_dish";

pub fn render_identify_dish_prompt() -> String {
    r#"Analyze this image of food. Identify the dish.
Then, create a detailed recipe for it.

You MUST return the result as a raw JSON object (no markdown formatting) with the following structure:
{
  "title": "Name of the dish",
  "description": "A short appetizing description",
  "ingredients": ["List of ingredients with quantities"],
  "instructions": ["Step-by-step cooking instructions"],
  "prepTime": "e.g., 30 mins",
  "difficulty": "Easy" or "Medium" or "Hard" or "Expert",
  "tags": ["Tag1", "Tag2"],
  "nutrition": {
    "calories": "e.g. 500 kcal",
    "protein": "e.g. 20g",
    "carbs": "e.g. 60g",
    "fat": "e.g. 15g"
  }
}"#
    .to_string()
}
