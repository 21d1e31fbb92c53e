//! Review aggregation with derived mean ratings.
//!
//! `Recipe::rating` is derived state: it is only ever written here, next
//! to the `reviews` append it is derived from.

use chrono::Utc;

use crate::error::ReviewError;
use crate::types::{new_id, Recipe, Review};

/// Append a review to a recipe and recompute its mean rating.
///
/// Returns a new recipe; the original is untouched. Ratings outside 1..=5
/// and blank comment or user name are rejected.
pub fn add_review(
    recipe: &Recipe,
    rating: u8,
    comment: &str,
    user_name: &str,
) -> Result<Recipe, ReviewError> {
    if !(1..=5).contains(&rating) {
        return Err(ReviewError::RatingOutOfRange(rating));
    }
    if comment.trim().is_empty() {
        return Err(ReviewError::BlankField("comment"));
    }
    if user_name.trim().is_empty() {
        return Err(ReviewError::BlankField("user name"));
    }

    let mut updated = recipe.clone();
    updated.reviews.push(Review {
        id: new_id(),
        rating,
        comment: comment.to_string(),
        date: Utc::now(),
        user_name: user_name.to_string(),
    });
    updated.rating = mean_rating(&updated.reviews);
    Ok(updated)
}

fn mean_rating(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let total: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    f64::from(total) / reviews.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Difficulty, Nutrition};

    fn sample_recipe() -> Recipe {
        Recipe {
            id: "abc123def".to_string(),
            title: "Lentil Soup".to_string(),
            description: "A weeknight staple.".to_string(),
            ingredients: vec!["200g red lentils".to_string(), "1 onion".to_string()],
            instructions: vec!["Simmer everything for 25 minutes.".to_string()],
            prep_time: "30 mins".to_string(),
            difficulty: Difficulty::Easy,
            tags: vec!["Soup".to_string()],
            nutrition: Nutrition {
                calories: "250 kcal".to_string(),
                protein: "14g".to_string(),
                carbs: "40g".to_string(),
                fat: "3g".to_string(),
            },
            reviews: Vec::new(),
            rating: 0.0,
        }
    }

    #[test]
    fn test_first_review_sets_rating() {
        let recipe = add_review(&sample_recipe(), 5, "Lovely", "Ana").unwrap();
        assert_eq!(recipe.reviews.len(), 1);
        assert_eq!(recipe.rating, 5.0);
        assert_eq!(recipe.reviews[0].user_name, "Ana");
        assert_eq!(recipe.reviews[0].id.len(), 9);
    }

    #[test]
    fn test_mean_of_three_reviews() {
        let recipe = sample_recipe();
        let recipe = add_review(&recipe, 5, "Great", "Ana").unwrap();
        let recipe = add_review(&recipe, 3, "Fine", "Ben").unwrap();
        let recipe = add_review(&recipe, 4, "Good", "Cai").unwrap();

        assert_eq!(recipe.rating, 4.0);
        assert_eq!(recipe.reviews.len(), 3);
    }

    #[test]
    fn test_mean_is_order_independent() {
        let recipe = sample_recipe();
        let forward = add_review(
            &add_review(&add_review(&recipe, 5, "a", "A").unwrap(), 3, "b", "B").unwrap(),
            4,
            "c",
            "C",
        )
        .unwrap();
        let backward = add_review(
            &add_review(&add_review(&recipe, 4, "c", "C").unwrap(), 3, "b", "B").unwrap(),
            5,
            "a",
            "A",
        )
        .unwrap();

        assert_eq!(forward.rating, backward.rating);
    }

    #[test]
    fn test_reviews_append_in_order() {
        let recipe = sample_recipe();
        let recipe = add_review(&recipe, 2, "first", "Ana").unwrap();
        let recipe = add_review(&recipe, 4, "second", "Ben").unwrap();

        assert_eq!(recipe.reviews[0].comment, "first");
        assert_eq!(recipe.reviews[1].comment, "second");
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        let recipe = sample_recipe();
        assert!(matches!(
            add_review(&recipe, 0, "x", "Ana"),
            Err(ReviewError::RatingOutOfRange(0))
        ));
        assert!(matches!(
            add_review(&recipe, 6, "x", "Ana"),
            Err(ReviewError::RatingOutOfRange(6))
        ));
    }

    #[test]
    fn test_blank_fields_rejected() {
        let recipe = sample_recipe();
        assert!(matches!(
            add_review(&recipe, 4, "   ", "Ana"),
            Err(ReviewError::BlankField("comment"))
        ));
        assert!(matches!(
            add_review(&recipe, 4, "Tasty", ""),
            Err(ReviewError::BlankField("user name"))
        ));
    }

    #[test]
    fn test_original_recipe_untouched() {
        let original = sample_recipe();
        let _ = add_review(&original, 5, "Lovely", "Ana").unwrap();

        assert!(original.reviews.is_empty());
        assert_eq!(original.rating, 0.0);
    }
}
