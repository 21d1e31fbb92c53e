//! Defensive normalization of model responses into domain recipes.
//!
//! Model output is semi-structured text believed to contain JSON, possibly
//! wrapped in markdown code fences. Everything the rest of the crate sees
//! goes through this choke point: fences are stripped, the JSON is parsed
//! against the full wire shape, and the result is hydrated with
//! locally-owned identity and review state.

use serde::Deserialize;

use crate::error::DiscoveryError;
use crate::types::{new_id, Difficulty, Nutrition, Recipe};

/// Wire shape of a model-authored recipe, before hydration.
///
/// Every field is required; a response missing any of them is rejected
/// whole. Unknown extra keys are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipePayload {
    title: String,
    description: String,
    ingredients: Vec<String>,
    instructions: Vec<String>,
    prep_time: String,
    difficulty: Difficulty,
    tags: Vec<String>,
    nutrition: Nutrition,
}

impl RecipePayload {
    /// Attach the locally-owned fields: a fresh id, no reviews, zero rating.
    fn hydrate(self) -> Recipe {
        Recipe {
            id: new_id(),
            title: self.title,
            description: self.description,
            ingredients: self.ingredients,
            instructions: self.instructions,
            prep_time: self.prep_time,
            difficulty: self.difficulty,
            tags: self.tags,
            nutrition: self.nutrition,
            reviews: Vec::new(),
            rating: 0.0,
        }
    }
}

/// Strip an enclosing markdown code fence, if present.
///
/// Handles a leading fence tagged `json` or untagged, an optional trailing
/// fence, and surrounding whitespace. Fences inside the payload are left
/// alone.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let without_open = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let without_close = without_open.strip_suffix("```").unwrap_or(without_open);
    without_close.trim()
}

/// Parse a model response believed to contain a single recipe object.
pub fn normalize(raw: &str) -> Result<Recipe, DiscoveryError> {
    let payload: RecipePayload = serde_json::from_str(strip_code_fences(raw))
        .map_err(|e| DiscoveryError::MalformedResponse(e.to_string()))?;
    Ok(payload.hydrate())
}

/// Parse a model response believed to contain an array of recipes.
///
/// Elements are hydrated independently, so each gets its own id.
pub fn normalize_batch(raw: &str) -> Result<Vec<Recipe>, DiscoveryError> {
    let payloads: Vec<RecipePayload> = serde_json::from_str(strip_code_fences(raw))
        .map_err(|e| DiscoveryError::MalformedResponse(e.to_string()))?;
    Ok(payloads.into_iter().map(RecipePayload::hydrate).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "title": "Shakshuka",
        "description": "Eggs poached in a spiced tomato and pepper sauce.",
        "ingredients": ["6 eggs", "800g canned tomatoes", "1 red bell pepper", "1 onion", "2 tsp paprika"],
        "instructions": ["Soften the onion and pepper.", "Add tomatoes and spices, then simmer for 10 minutes.", "Crack in the eggs and cook until just set."],
        "prepTime": "35 mins",
        "difficulty": "Easy",
        "tags": ["Breakfast", "Vegetarian"],
        "nutrition": {"calories": "320 kcal", "protein": "18g", "carbs": "21g", "fat": "17g"}
    }"#;

    #[test]
    fn test_normalize_hydrates_local_fields() {
        let recipe = normalize(PAYLOAD).unwrap();
        assert_eq!(recipe.title, "Shakshuka");
        assert_eq!(recipe.difficulty, Difficulty::Easy);
        assert_eq!(recipe.prep_time, "35 mins");
        assert_eq!(recipe.id.len(), 9);
        assert!(recipe.reviews.is_empty());
        assert_eq!(recipe.rating, 0.0);
    }

    #[test]
    fn test_fenced_and_unfenced_normalize_identically() {
        let fenced = format!("```json\n{}\n```", PAYLOAD);
        let plain = normalize(PAYLOAD).unwrap();
        let stripped = normalize(&fenced).unwrap();

        assert_eq!(plain.title, stripped.title);
        assert_eq!(plain.ingredients, stripped.ingredients);
        assert_eq!(plain.instructions, stripped.instructions);
        assert_eq!(plain.nutrition, stripped.nutrition);
        assert_eq!(plain.tags, stripped.tags);
    }

    #[test]
    fn test_untagged_fence() {
        let fenced = format!("```\n{}\n```", PAYLOAD);
        assert!(normalize(&fenced).is_ok());
    }

    #[test]
    fn test_fence_with_surrounding_whitespace() {
        let fenced = format!("\n  ```json\n{}\n```  \n", PAYLOAD);
        assert!(normalize(&fenced).is_ok());
    }

    #[test]
    fn test_opening_fence_without_closing() {
        let fenced = format!("```json\n{}", PAYLOAD);
        assert!(normalize(&fenced).is_ok());
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let err = normalize("I'm sorry, I can't tell what dish this is.").unwrap_err();
        assert!(matches!(err, DiscoveryError::MalformedResponse(_)));
    }

    #[test]
    fn test_missing_key_is_malformed() {
        // nutrition is absent
        let raw = r#"{"title": "X", "description": "Y", "ingredients": [], "instructions": [],
            "prepTime": "5 mins", "difficulty": "Easy", "tags": []}"#;
        assert!(matches!(
            normalize(raw),
            Err(DiscoveryError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_unknown_difficulty_is_malformed() {
        let raw = PAYLOAD.replace("\"Easy\"", "\"Impossible\"");
        assert!(matches!(
            normalize(&raw),
            Err(DiscoveryError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_wrong_type_is_malformed() {
        let raw = PAYLOAD.replace("[\"Breakfast\", \"Vegetarian\"]", "\"Breakfast\"");
        assert!(matches!(
            normalize(&raw),
            Err(DiscoveryError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_extra_keys_are_tolerated() {
        let raw = PAYLOAD.replacen('{', "{\"servings\": \"4\",", 1);
        assert!(normalize(&raw).is_ok());
    }

    #[test]
    fn test_batch_hydrates_each_element() {
        let raw = format!("[{}, {}]", PAYLOAD, PAYLOAD);
        let recipes = normalize_batch(&raw).unwrap();

        assert_eq!(recipes.len(), 2);
        assert_ne!(recipes[0].id, recipes[1].id);
        assert!(recipes
            .iter()
            .all(|r| r.rating == 0.0 && r.reviews.is_empty()));
    }

    #[test]
    fn test_batch_rejects_single_object() {
        assert!(matches!(
            normalize_batch(PAYLOAD),
            Err(DiscoveryError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_empty_batch_is_ok() {
        let recipes = normalize_batch("[]").unwrap();
        assert!(recipes.is_empty());
    }
}
