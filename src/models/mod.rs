mod analysis;
mod food;
mod plan;

pub use analysis::{AnalysisRequest, AnalysisResult, BreakdownEntry, MealGroup};
pub use food::{normalize_name, FoodItem, MacroTargets};
pub use plan::{ComposedMeal, MealPlanRequest, MealPlanResult};
