//! Weekly meal plan state.
//!
//! The plan is a day-keyed multimap of planned meals. All transitions are
//! pure: they take the plan by reference and return a new plan, so a UI
//! can hold the previous value until it chooses to swap.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{DayOfWeek, MealType, Recipe};

/// One planned meal: a recipe snapshot pinned to a meal slot.
///
/// The recipe is the value captured at insert time; later changes to the
/// session's copy (such as new reviews) do not reach into the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanItem {
    pub recipe: Recipe,
    pub meal_type: MealType,
}

/// Recipes planned for the week, keyed by day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealPlan {
    days: BTreeMap<DayOfWeek, Vec<MealPlanItem>>,
}

impl MealPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items planned for a day, in insertion order. Days with no entries
    /// read as empty.
    pub fn entries_for(&self, day: DayOfWeek) -> &[MealPlanItem] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Items planned for one meal slot, in insertion order.
    pub fn entries_for_meal(
        &self,
        day: DayOfWeek,
        meal_type: MealType,
    ) -> impl Iterator<Item = &MealPlanItem> {
        self.entries_for(day)
            .iter()
            .filter(move |item| item.meal_type == meal_type)
    }

    /// Days with at least one planned item, in week order.
    pub fn planned_days(&self) -> impl Iterator<Item = DayOfWeek> + '_ {
        self.days
            .iter()
            .filter(|(_, items)| !items.is_empty())
            .map(|(day, _)| *day)
    }

    pub fn is_empty(&self) -> bool {
        self.days.values().all(Vec::is_empty)
    }

    /// Add a recipe to a meal slot.
    ///
    /// Adding a recipe that is already in that slot (same day, meal type,
    /// and recipe id) returns the plan unchanged.
    #[must_use]
    pub fn add_entry(&self, day: DayOfWeek, meal_type: MealType, recipe: Recipe) -> MealPlan {
        let already_planned = self
            .entries_for(day)
            .iter()
            .any(|item| item.meal_type == meal_type && item.recipe.id == recipe.id);
        if already_planned {
            return self.clone();
        }

        let mut updated = self.clone();
        updated
            .days
            .entry(day)
            .or_default()
            .push(MealPlanItem { recipe, meal_type });
        updated
    }

    /// Remove every entry matching the meal slot and recipe id.
    ///
    /// Removing something that is not planned returns the plan unchanged;
    /// it is never an error.
    #[must_use]
    pub fn remove_entry(&self, day: DayOfWeek, meal_type: MealType, recipe_id: &str) -> MealPlan {
        let mut updated = self.clone();
        if let Some(items) = updated.days.get_mut(&day) {
            items.retain(|item| !(item.meal_type == meal_type && item.recipe.id == recipe_id));
        }
        updated
    }
}
