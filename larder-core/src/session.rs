//! Session state for a recipe-discovery client.
//!
//! `Session` owns everything a caller needs to render: the current result
//! list, the weekly meal plan, and the loading/error indicators. It is
//! also the single place where acquisition failures become user-visible
//! messages.
//!
//! Acquisitions are tracked with a generation counter. Each begin bumps
//! the generation and hands back a token; a finish whose token has been
//! superseded by a newer begin is discarded, so a late response to an
//! abandoned request can never overwrite newer state.

use std::sync::Arc;

use crate::ai::GenerativeClient;
use crate::discovery;
use crate::error::{DiscoveryError, ReviewError};
use crate::meal_plan::MealPlan;
use crate::reviews;
use crate::types::{DayOfWeek, MealType, Recipe};

/// Handle for one in-flight acquisition, from [`Session::begin_acquisition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcquisitionToken {
    generation: u64,
}

/// Client-side state for one recipe-discovery session.
#[derive(Debug)]
pub struct Session {
    client: Arc<dyn GenerativeClient>,
    recipes: Vec<Recipe>,
    plan: MealPlan,
    loading: Option<String>,
    error: Option<String>,
    generation: u64,
}

impl Session {
    pub fn new(client: Arc<dyn GenerativeClient>) -> Self {
        Self {
            client,
            recipes: Vec::new(),
            plan: MealPlan::new(),
            loading: None,
            error: None,
            generation: 0,
        }
    }

    /// The most recently acquired recipes.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn plan(&self) -> &MealPlan {
        &self.plan
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_some()
    }

    /// Progress message for the acquisition in flight, if any.
    pub fn loading_message(&self) -> Option<&str> {
        self.loading.as_deref()
    }

    /// Message for the most recent failure, cleared when a new acquisition
    /// begins.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Mark an acquisition as started: bump the generation, show the given
    /// progress message, and clear any previous error.
    pub fn begin_acquisition(&mut self, message: impl Into<String>) -> AcquisitionToken {
        self.generation += 1;
        self.loading = Some(message.into());
        self.error = None;
        AcquisitionToken {
            generation: self.generation,
        }
    }

    /// Apply the outcome of an acquisition.
    ///
    /// On success the result list is replaced; on failure the error
    /// message is set and all other state is left untouched. A result
    /// carrying a superseded token is discarded outright.
    pub fn finish_acquisition(
        &mut self,
        token: AcquisitionToken,
        result: Result<Vec<Recipe>, DiscoveryError>,
    ) {
        if token.generation != self.generation {
            tracing::warn!(
                token = token.generation,
                current = self.generation,
                "discarding result for superseded acquisition"
            );
            return;
        }

        self.loading = None;
        match result {
            Ok(recipes) => self.recipes = recipes,
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Identify the dish in a photo and replace the results with its recipe.
    pub async fn submit_image(&mut self, image: &[u8], mime_type: &str) {
        if image.is_empty() {
            self.error = Some("Please choose a photo first.".to_string());
            return;
        }

        let token = self.begin_acquisition("Analyzing your food...");
        let result = discovery::identify_dish(self.client.as_ref(), image, mime_type)
            .await
            .map(|r| vec![r]);
        self.finish_acquisition(token, result);
    }

    /// Look up a recipe by dish name and replace the results with it.
    pub async fn submit_dish_name(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            self.error = Some("Please enter a dish name.".to_string());
            return;
        }

        let token = self.begin_acquisition("Creating your recipe...");
        let result = discovery::recipe_by_name(self.client.as_ref(), name)
            .await
            .map(|r| vec![r]);
        self.finish_acquisition(token, result);
    }

    /// Suggest recipes for a list of ingredients and replace the results
    /// with them. Blank entries are dropped before the lookup.
    pub async fn submit_ingredients(&mut self, ingredients: &[String]) {
        let cleaned: Vec<String> = ingredients
            .iter()
            .map(|i| i.trim())
            .filter(|i| !i.is_empty())
            .map(str::to_string)
            .collect();
        if cleaned.is_empty() {
            self.error = Some("Please add at least one ingredient.".to_string());
            return;
        }

        let token = self.begin_acquisition("Dreaming up dishes...");
        let result = discovery::recipes_by_ingredients(self.client.as_ref(), &cleaned).await;
        self.finish_acquisition(token, result);
    }

    /// Add a review to the recipe with the given id.
    ///
    /// An unknown id is ignored; validation failures are returned and
    /// leave the session untouched.
    pub fn add_review(
        &mut self,
        recipe_id: &str,
        rating: u8,
        comment: &str,
        user_name: &str,
    ) -> Result<(), ReviewError> {
        let Some(index) = self.recipes.iter().position(|r| r.id == recipe_id) else {
            tracing::warn!(recipe_id = recipe_id, "review for unknown recipe ignored");
            return Ok(());
        };

        self.recipes[index] = reviews::add_review(&self.recipes[index], rating, comment, user_name)?;
        Ok(())
    }

    /// Pin a recipe to a meal slot in the weekly plan.
    pub fn add_to_plan(&mut self, recipe: Recipe, day: DayOfWeek, meal_type: MealType) {
        self.plan = self.plan.add_entry(day, meal_type, recipe);
    }

    /// Remove a recipe from a meal slot in the weekly plan.
    pub fn remove_from_plan(&mut self, day: DayOfWeek, meal_type: MealType, recipe_id: &str) {
        self.plan = self.plan.remove_entry(day, meal_type, recipe_id);
    }
}
