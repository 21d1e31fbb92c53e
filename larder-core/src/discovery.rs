//! Recipe acquisition over a generative client.
//!
//! Each operation builds a prompt, invokes the model, and normalizes the
//! response into domain recipes. Failures map onto `DiscoveryError`; there
//! are no retries and no partial results.

use base64::Engine as _;

use crate::ai::prompts::identify_dish::{render_identify_dish_prompt, IDENTIFY_DISH_PROMPT_NAME};
use crate::ai::prompts::recipe_by_name::{render_recipe_by_name_prompt, RECIPE_BY_NAME_PROMPT_NAME};
use crate::ai::prompts::recipes_by_ingredients::{
    render_recipes_by_ingredients_prompt, RECIPES_BY_INGREDIENTS_PROMPT_NAME,
};
use crate::ai::{
    recipe_list_schema, recipe_schema, GenerateReply, GenerateRequest, GenerativeClient,
};
use crate::error::DiscoveryError;
use crate::normalize::{normalize, normalize_batch};
use crate::types::Recipe;

/// Identify the dish in a photo and write a recipe for it.
///
/// The image goes to the vision model, which does not support
/// schema-constrained output; the prompt spells out the JSON structure and
/// the normalizer is the only guard on what comes back.
pub async fn identify_dish(
    client: &dyn GenerativeClient,
    image: &[u8],
    mime_type: &str,
) -> Result<Recipe, DiscoveryError> {
    let data = base64::engine::general_purpose::STANDARD.encode(image);
    let request = GenerateRequest::with_image(render_identify_dish_prompt(), data, mime_type);

    tracing::debug!(prompt = IDENTIFY_DISH_PROMPT_NAME, "requesting recipe");
    let reply = client.generate(&request).await?;
    normalize(&require_text(reply)?)
}

/// Write a recipe for a named dish.
pub async fn recipe_by_name(
    client: &dyn GenerativeClient,
    food_name: &str,
) -> Result<Recipe, DiscoveryError> {
    let request =
        GenerateRequest::text(render_recipe_by_name_prompt(food_name)).with_schema(recipe_schema());

    tracing::debug!(prompt = RECIPE_BY_NAME_PROMPT_NAME, "requesting recipe");
    let reply = client.generate(&request).await?;
    normalize(&require_text(reply)?)
}

/// Suggest recipes that can be made from a list of ingredients.
///
/// The prompt asks for three distinct recipes, but that is a request to
/// the model, not a guarantee; whatever valid array comes back is
/// normalized.
pub async fn recipes_by_ingredients(
    client: &dyn GenerativeClient,
    ingredients: &[String],
) -> Result<Vec<Recipe>, DiscoveryError> {
    let request = GenerateRequest::text(render_recipes_by_ingredients_prompt(ingredients))
        .with_schema(recipe_list_schema());

    tracing::debug!(prompt = RECIPES_BY_INGREDIENTS_PROMPT_NAME, "requesting recipes");
    let reply = client.generate(&request).await?;
    normalize_batch(&require_text(reply)?)
}

/// Text of a reply, or `EmptyResponse` if the model produced none.
fn require_text(reply: GenerateReply) -> Result<String, DiscoveryError> {
    reply
        .text
        .filter(|t| !t.trim().is_empty())
        .ok_or(DiscoveryError::EmptyResponse)
}
