//! Fake generative client for testing.
//!
//! This client returns deterministic responses based on prompt matching,
//! allowing tests to run without network access or API costs.

use super::types::{GenerateReply, GenerateRequest, Usage};
use super::{GenerativeClient, GenerativeError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

/// A fake generative client for testing.
///
/// Responses are matched by checking if the request's text contains a
/// registered substring. If no match is found, returns a default response
/// or error.
#[derive(Debug)]
pub struct FakeClient {
    /// Map of prompt substring -> response text
    responses: RwLock<HashMap<String, String>>,
    /// Default response if no match found
    default_response: Option<String>,
}

impl Default for FakeClient {
    fn default() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: Some("{}".to_string()),
        }
    }
}

impl FakeClient {
    /// Create a new FakeClient with no registered responses.
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: None,
        }
    }

    /// Create a FakeClient that returns a specific response for prompts containing a substring.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let mut client = Self::new();
        client.add_response(prompt_contains, response);
        client
    }

    /// Add a response for prompts containing a specific substring.
    pub fn add_response(&mut self, prompt_contains: &str, response: &str) {
        self.responses
            .write()
            .unwrap()
            .insert(prompt_contains.to_string(), response.to_string());
    }

    /// Set the default response when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// Create a FakeClient with valid responses for the three acquisition
    /// prompts.
    ///
    /// The dish-identification response is wrapped in markdown fences, the
    /// way free-form vision output tends to arrive.
    pub fn with_recipe_responses() -> Self {
        let mut client = Self::new();

        // Dish identification from a photo
        client.add_response(
            "Identify the dish",
            r#"```json
{
  "title": "Margherita Pizza",
  "description": "A classic Neapolitan pizza with tomato, mozzarella, and fresh basil.",
  "ingredients": ["250g pizza dough", "100ml tomato passata", "125g fresh mozzarella", "A handful of basil leaves", "1 tbsp olive oil"],
  "instructions": ["Preheat the oven to 250C with a pizza stone inside.", "Stretch the dough into a thin round.", "Spread the passata and tear over the mozzarella.", "Bake for 8-10 minutes, then finish with basil and oil."],
  "prepTime": "25 mins",
  "difficulty": "Medium",
  "tags": ["Italian", "Vegetarian"],
  "nutrition": {"calories": "850 kcal", "protein": "35g", "carbs": "95g", "fat": "32g"}
}
```"#,
        );

        // Recipe by dish name
        client.add_response(
            "detailed, authentic recipe",
            r#"{
  "title": "Spaghetti Carbonara",
  "description": "Roman pasta with eggs, guanciale, and pecorino.",
  "ingredients": ["400g spaghetti", "150g guanciale", "4 egg yolks", "80g pecorino romano", "Black pepper"],
  "instructions": ["Crisp the guanciale in a cold pan brought up to heat.", "Boil the spaghetti until just short of al dente.", "Whisk yolks with pecorino and plenty of pepper.", "Toss everything off the heat, loosening with pasta water."],
  "prepTime": "30 mins",
  "difficulty": "Medium",
  "tags": ["Italian", "Pasta"],
  "nutrition": {"calories": "720 kcal", "protein": "28g", "carbs": "82g", "fat": "30g"}
}"#,
        );

        // Suggestions from pantry ingredients
        client.add_response(
            "3 distinct",
            r#"[
  {
    "title": "Vegetable Frittata",
    "description": "An easy open-faced omelette that uses up whatever is in the fridge.",
    "ingredients": ["6 eggs", "1 onion", "1 bell pepper", "50g cheese", "1 tbsp oil"],
    "instructions": ["Soften the onion and pepper in an ovenproof pan.", "Pour over the beaten eggs and scatter the cheese.", "Finish under the grill until just set."],
    "prepTime": "20 mins",
    "difficulty": "Easy",
    "tags": ["Breakfast", "Vegetarian"],
    "nutrition": {"calories": "310 kcal", "protein": "21g", "carbs": "6g", "fat": "22g"}
  },
  {
    "title": "Fried Rice",
    "description": "Day-old rice stir-fried hot and fast with egg and vegetables.",
    "ingredients": ["400g cooked rice", "2 eggs", "1 carrot", "2 spring onions", "2 tbsp soy sauce"],
    "instructions": ["Scramble the eggs and set aside.", "Stir-fry the vegetables over high heat.", "Add the rice, soy sauce, and eggs, tossing until everything catches a little."],
    "prepTime": "15 mins",
    "difficulty": "Easy",
    "tags": ["Asian", "Quick"],
    "nutrition": {"calories": "450 kcal", "protein": "14g", "carbs": "68g", "fat": "12g"}
  },
  {
    "title": "Minestrone Soup",
    "description": "A hearty vegetable soup that welcomes substitutions.",
    "ingredients": ["1 onion", "2 carrots", "2 celery sticks", "400g canned tomatoes", "100g small pasta", "1l vegetable stock"],
    "instructions": ["Sweat the chopped vegetables until soft.", "Add tomatoes and stock and simmer for 20 minutes.", "Add the pasta and cook until tender."],
    "prepTime": "40 mins",
    "difficulty": "Easy",
    "tags": ["Soup", "Vegetarian"],
    "nutrition": {"calories": "280 kcal", "protein": "9g", "carbs": "48g", "fat": "5g"}
  }
]"#,
        );

        client
    }
}

#[async_trait]
impl GenerativeClient for FakeClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateReply, GenerativeError> {
        let prompt = request.prompt_text();
        let responses = self.responses.read().unwrap();

        // Find first matching pattern (case-insensitive)
        let prompt_lower = prompt.to_lowercase();
        for (pattern, response) in responses.iter() {
            if prompt_lower.contains(&pattern.to_lowercase()) {
                return Ok(GenerateReply {
                    text: Some(response.clone()),
                    usage: Usage::default(),
                });
            }
        }

        // Return default or error
        match &self.default_response {
            Some(response) => Ok(GenerateReply {
                text: Some(response.clone()),
                usage: Usage::default(),
            }),
            None => Err(GenerativeError::RequestFailed(format!(
                "FakeClient: No response configured for prompt (first 100 chars): {}",
                prompt.chars().take(100).collect::<String>()
            ))),
        }
    }

    fn client_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fake_client_matching() {
        let client = FakeClient::with_response("hello", "world");
        let reply = client
            .generate(&GenerateRequest::text("Say hello to the user"))
            .await
            .unwrap();
        assert_eq!(reply.text.as_deref(), Some("world"));
    }

    #[tokio::test]
    async fn test_fake_client_case_insensitive() {
        let client = FakeClient::with_response("HELLO", "world");
        let reply = client
            .generate(&GenerateRequest::text("hello there"))
            .await
            .unwrap();
        assert_eq!(reply.text.as_deref(), Some("world"));
    }

    #[tokio::test]
    async fn test_fake_client_no_match() {
        let client = FakeClient::new();
        let result = client.generate(&GenerateRequest::text("random prompt")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fake_client_default_response() {
        let client = FakeClient::new().with_default_response("default");
        let reply = client
            .generate(&GenerateRequest::text("random prompt"))
            .await
            .unwrap();
        assert_eq!(reply.text.as_deref(), Some("default"));
    }

    #[tokio::test]
    async fn test_recipe_responses_cover_all_three_prompts() {
        let client = FakeClient::with_recipe_responses();

        let reply = client
            .generate(&GenerateRequest::text("Analyze this image of food. Identify the dish."))
            .await
            .unwrap();
        assert!(reply.text.unwrap().contains("Margherita Pizza"));

        let reply = client
            .generate(&GenerateRequest::text(
                "Create a detailed, authentic recipe for: Carbonara.",
            ))
            .await
            .unwrap();
        assert!(reply.text.unwrap().contains("Spaghetti Carbonara"));

        let reply = client
            .generate(&GenerateRequest::text("Suggest 3 distinct, delicious recipes"))
            .await
            .unwrap();
        assert!(reply.text.unwrap().contains("Fried Rice"));
    }
}
