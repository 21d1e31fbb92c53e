//! Prompt templates for recipe acquisition.

pub mod identify_dish;
pub mod recipe_by_name;
pub mod recipes_by_ingredients;

pub use identify_dish::render_identify_dish_prompt;
pub use recipe_by_name::render_recipe_by_name_prompt;
pub use recipes_by_ingredients::render_recipes_by_ingredients_prompt;
