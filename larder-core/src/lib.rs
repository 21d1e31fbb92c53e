pub mod ai;
pub mod discovery;
pub mod error;
pub mod meal_plan;
pub mod normalize;
pub mod reviews;
pub mod session;
pub mod types;

pub use ai::{
    client_from_env, FakeClient, GeminiClient, GenerateReply, GenerateRequest, GenerativeClient,
    GenerativeError,
};
pub use discovery::{identify_dish, recipe_by_name, recipes_by_ingredients};
pub use error::{DiscoveryError, ReviewError};
pub use meal_plan::{MealPlan, MealPlanItem};
pub use normalize::{normalize, normalize_batch};
pub use reviews::add_review;
pub use session::{AcquisitionToken, Session};
pub use types::{DayOfWeek, Difficulty, MealType, Nutrition, Recipe, Review};
