use crate::models::FoodItem;

// ─────────────────────────────────────────────────────────────────────────────
// Meal recommender
// ─────────────────────────────────────────────────────────────────────────────

/// Maximum item picks per meal.
pub const MAX_PICKS_PER_MEAL: usize = 10;

/// A meal is complete once calories and protein reach this share of target.
pub const MEAL_FILL_RATIO: f64 = 0.9;

/// Protein deficit (g) above which picks come from the protein-ranked pool.
pub const PROTEIN_DEFICIT_G: f64 = 5.0;

/// Largest meal count accepted from raw input.
pub const MAX_MEAL_COUNT: u32 = 12;

// ─────────────────────────────────────────────────────────────────────────────
// Nutrient aggregator suggestion thresholds
// ─────────────────────────────────────────────────────────────────────────────

pub const LOW_PROTEIN_G: f64 = 50.0;
pub const LOW_CARBS_G: f64 = 200.0;
pub const LOW_FAT_G: f64 = 60.0;
pub const LOW_CALORIES: f64 = 1800.0;
pub const HIGH_PROTEIN_G: f64 = 120.0;
pub const HIGH_FAT_G: f64 = 100.0;

// ─────────────────────────────────────────────────────────────────────────────
// Rounding
// ─────────────────────────────────────────────────────────────────────────────

/// Decimals for totals and per-meal targets.
pub const TOTALS_DECIMALS: u32 = 1;

/// BMI decimals in the recommender result.
pub const PLAN_BMI_DECIMALS: u32 = 1;

/// BMI decimals on analysis and plan viewing paths.
pub const DISPLAY_BMI_DECIMALS: u32 = 2;

// ─────────────────────────────────────────────────────────────────────────────
// Defaults for raw plan input
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_MEAL_COUNT: u32 = 3;
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;
pub const DEFAULT_HEIGHT_CM: f64 = 170.0;
pub const DEFAULT_CALORIES: f64 = 2000.0;
pub const DEFAULT_PROTEIN_G: f64 = 75.0;
pub const DEFAULT_CARBS_G: f64 = 250.0;
pub const DEFAULT_FAT_G: f64 = 70.0;

/// Meal types offered when selecting eaten foods.
pub const MEAL_TYPES: [&str; 4] = ["Breakfast", "Lunch", "Dinner", "Snack"];

/// Built-in food list used when no other source is reachable.
///
/// Per serving: (name, kcal, protein g, carbs g, fat g).
const FALLBACK_FOODS: [(&str, f64, f64, f64, f64); 8] = [
    ("oatmeal (1 cup cooked)", 154.0, 6.0, 27.0, 3.0),
    ("egg (large)", 72.0, 6.0, 0.4, 4.8),
    ("grilled chicken breast (100g)", 165.0, 31.0, 0.0, 3.6),
    ("brown rice (1 cup cooked)", 216.0, 5.0, 45.0, 1.8),
    ("banana (medium)", 105.0, 1.3, 27.0, 0.3),
    ("greek yogurt (1 cup)", 130.0, 11.0, 9.0, 4.0),
    ("almonds (30g)", 173.0, 6.0, 6.1, 15.0),
    ("broccoli (1 cup)", 55.0, 3.7, 11.0, 0.6),
];

/// Staple names resolved through an external nutrition provider.
pub const STAPLE_QUERIES: [&str; 8] = [
    "1 cup cooked oatmeal",
    "1 large egg",
    "100g grilled chicken breast",
    "1 cup cooked brown rice",
    "1 medium banana",
    "1 cup greek yogurt",
    "30g almonds",
    "1 cup broccoli",
];

/// The built-in fallback foods.
pub fn fallback_foods() -> Vec<FoodItem> {
    FALLBACK_FOODS
        .iter()
        .map(|&(name, cal, p, c, f)| FoodItem::new(name, cal, p, c, f))
        .collect()
}
