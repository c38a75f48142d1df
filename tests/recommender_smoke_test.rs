use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use meal_planner_rs::error::{MealError, Result};
use meal_planner_rs::models::{FoodItem, MacroTargets, MealPlanRequest};
use meal_planner_rs::planner::{fallback_foods, recommend, MAX_PICKS_PER_MEAL};
use meal_planner_rs::sources::{BuiltinFoods, NutritionProvider, ProviderFoods};

/// A provider whose upstream is always down.
struct UnreachableProvider;

impl NutritionProvider for UnreachableProvider {
    fn lookup(&self, _name: &str) -> Result<FoodItem> {
        Err(MealError::ProviderUnavailable("connection timed out".to_string()))
    }
}

fn request(meal_count: u32, calories: f64, protein: f64) -> MealPlanRequest {
    MealPlanRequest {
        meal_count,
        weight_kg: 70.0,
        height_cm: 170.0,
        daily_targets: MacroTargets::new(calories, protein, 240.0, 60.0),
    }
}

#[test]
fn test_per_meal_targets_split_evenly() {
    let mut rng = StdRng::seed_from_u64(11);
    let plan = recommend(&request(3, 1800.0, 90.0), &BuiltinFoods, &mut rng);

    assert_eq!(plan.meals.len(), 3);
    for meal in &plan.meals {
        assert_eq!(meal.per_meal_targets.calories, 600.0);
        assert_eq!(meal.per_meal_targets.protein_g, 30.0);
    }
    assert_eq!(plan.daily_targets.calories, 1800.0);
}

#[test]
fn test_aggregate_is_sum_of_rounded_meal_totals() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let plan = recommend(&request(4, 2200.0, 110.0), &BuiltinFoods, &mut rng);

        let mut expected = MacroTargets::default();
        for meal in &plan.meals {
            expected += meal.totals;
        }
        assert_eq!(plan.aggregate_totals, expected);
    }
}

#[test]
fn test_meal_totals_are_sum_of_items() {
    let mut rng = StdRng::seed_from_u64(5);
    let plan = recommend(&request(3, 1800.0, 90.0), &BuiltinFoods, &mut rng);

    for meal in &plan.meals {
        let calories: f64 = meal.items.iter().map(|f| f.calories).sum();
        assert!((meal.totals.calories - calories).abs() <= 0.05 + 1e-9);
    }
}

#[test]
fn test_meals_stop_near_target_or_at_cap() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let plan = recommend(&request(3, 1800.0, 90.0), &BuiltinFoods, &mut rng);

        for meal in &plan.meals {
            let filled =
                meal.totals.calories >= 0.9 * 600.0 && meal.totals.protein_g >= 0.9 * 30.0;
            assert!(filled || meal.items.len() == MAX_PICKS_PER_MEAL);
            assert!(meal.items.len() <= MAX_PICKS_PER_MEAL);
        }
    }
}

#[test]
fn test_protein_deficit_still_draws_from_every_food() {
    // The first pick always starts from a full protein deficit.
    let mut seen = HashSet::new();
    for seed in 0..500 {
        let mut rng = StdRng::seed_from_u64(seed);
        let plan = recommend(&request(1, 600.0, 60.0), &BuiltinFoods, &mut rng);
        seen.insert(plan.meals[0].items[0].name.clone());
    }

    let all: HashSet<String> = fallback_foods().into_iter().map(|f| f.name).collect();
    assert_eq!(seen, all);
}

#[test]
fn test_provider_failure_falls_back_to_builtin() {
    let source = ProviderFoods::staples(UnreachableProvider);
    let mut rng = StdRng::seed_from_u64(3);
    let plan = recommend(&request(3, 1800.0, 90.0), &source, &mut rng);

    assert_eq!(plan.meals.len(), 3);
    assert!(plan.item_count() > 0);

    let fallback = fallback_foods();
    for meal in &plan.meals {
        for item in &meal.items {
            assert!(fallback.contains(item));
        }
    }
}

#[test]
fn test_bmi_absent_for_zero_height() {
    let mut req = request(2, 1800.0, 90.0);
    req.height_cm = 0.0;

    let mut rng = StdRng::seed_from_u64(1);
    let plan = recommend(&req, &BuiltinFoods, &mut rng);
    assert_eq!(plan.bmi_estimate, None);
    assert_eq!(plan.meals.len(), 2);
}

#[test]
fn test_plan_serializes_to_plain_json() {
    let mut rng = StdRng::seed_from_u64(8);
    let plan = recommend(&request(2, 1800.0, 90.0), &BuiltinFoods, &mut rng);

    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["bmi_estimate"], 24.2);
    assert_eq!(json["meals"].as_array().unwrap().len(), 2);
    assert_eq!(json["meals"][0]["index"], 1);
    assert_eq!(json["daily_targets"]["calories"], 1800.0);
    assert!(json["aggregate_totals"]["protein_g"].is_number());
}
