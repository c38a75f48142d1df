use serde::{Deserialize, Serialize};

use crate::models::food::{FoodItem, MacroTargets};

/// Parameters for a daily meal plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanRequest {
    pub meal_count: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub daily_targets: MacroTargets,
}

/// One meal assembled by the recommender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposedMeal {
    /// 1-based position in the day.
    pub index: u32,
    pub items: Vec<FoodItem>,
    /// Sum of `items`, rounded to one decimal.
    pub totals: MacroTargets,
    /// Share of the daily targets, rounded to one decimal.
    pub per_meal_targets: MacroTargets,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanResult {
    pub bmi_estimate: Option<f64>,
    pub meals: Vec<ComposedMeal>,
    /// Sum of the already-rounded meal totals.
    pub aggregate_totals: MacroTargets,
    pub daily_targets: MacroTargets,
}

impl MealPlanResult {
    /// Total number of items across all meals.
    pub fn item_count(&self) -> usize {
        self.meals.iter().map(|m| m.items.len()).sum()
    }
}
