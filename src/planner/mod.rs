pub mod aggregator;
pub mod calculations;
pub mod constants;
pub mod recommender;

pub use aggregator::{analyze, analyze_request, suggestions_for, Suggestion};
pub use calculations::{bmi_rounded, calculate_bmi, per_meal_targets, round_macros, round_to};
pub use constants::*;
pub use recommender::{compose_meal, recommend, resolve_foods};
