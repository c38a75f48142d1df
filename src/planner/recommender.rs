use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::models::{ComposedMeal, FoodItem, MacroTargets, MealPlanRequest, MealPlanResult};
use crate::planner::calculations::{bmi_rounded, per_meal_targets, round_macros};
use crate::planner::constants::*;
use crate::sources::FoodSource;

/// Pull candidates from `source`, falling back to the built-in list when the
/// source fails or comes back empty.
pub fn resolve_foods(source: &dyn FoodSource) -> Vec<FoodItem> {
    match source.foods() {
        Ok(foods) if !foods.is_empty() => foods,
        Ok(_) => {
            warn!("food source returned no items, using built-in list");
            fallback_foods()
        }
        Err(e) => {
            warn!(error = %e, "food source unavailable, using built-in list");
            fallback_foods()
        }
    }
}

/// Every food, ranked by descending protein.
///
/// Nothing is dropped: the pick stays uniform over the whole source. The sort
/// is stable, so equal-protein items keep source order.
fn protein_ranked_pool(foods: &[FoodItem]) -> Vec<&FoodItem> {
    let mut ranked: Vec<&FoodItem> = foods.iter().collect();
    ranked.sort_by(|a, b| b.protein_g.total_cmp(&a.protein_g));
    ranked
}

fn meal_is_filled(current: &MacroTargets, target: &MacroTargets) -> bool {
    current.calories >= target.calories * MEAL_FILL_RATIO
        && current.protein_g >= target.protein_g * MEAL_FILL_RATIO
}

/// Greedily fill one meal toward `target`.
///
/// Returns the picked items and their unrounded totals.
pub fn compose_meal<R: Rng + ?Sized>(
    foods: &[FoodItem],
    target: &MacroTargets,
    rng: &mut R,
) -> (Vec<FoodItem>, MacroTargets) {
    let mut items = Vec::new();
    let mut current = MacroTargets::default();

    if foods.is_empty() {
        return (items, current);
    }

    let ranked = protein_ranked_pool(foods);
    let full: Vec<&FoodItem> = foods.iter().collect();

    for _ in 0..MAX_PICKS_PER_MEAL {
        if meal_is_filled(&current, target) {
            break;
        }

        let deficit = target.protein_g - current.protein_g;
        let pool = if deficit > PROTEIN_DEFICIT_G { &ranked } else { &full };

        let Some(&pick) = pool.choose(rng) else {
            break;
        };
        debug!(item = %pick.name, deficit, "picked meal item");
        current += pick.macros();
        items.push(pick.clone());
    }

    (items, current)
}

/// Build a daily meal plan from the candidates in `source`.
///
/// Never fails: an unavailable source degrades to the built-in foods.
pub fn recommend<R: Rng + ?Sized>(
    request: &MealPlanRequest,
    source: &dyn FoodSource,
    rng: &mut R,
) -> MealPlanResult {
    let foods = resolve_foods(source);
    let target = per_meal_targets(&request.daily_targets, request.meal_count);
    let rounded_target = round_macros(&target, TOTALS_DECIMALS);

    let mut meals = Vec::with_capacity(request.meal_count as usize);
    let mut aggregate = MacroTargets::default();

    for index in 1..=request.meal_count {
        let (items, totals) = compose_meal(&foods, &target, rng);
        let totals = round_macros(&totals, TOTALS_DECIMALS);
        aggregate += totals;

        meals.push(ComposedMeal {
            index,
            items,
            totals,
            per_meal_targets: rounded_target,
        });
    }

    let result = MealPlanResult {
        bmi_estimate: bmi_rounded(request.weight_kg, request.height_cm, PLAN_BMI_DECIMALS),
        meals,
        aggregate_totals: aggregate,
        daily_targets: request.daily_targets,
    };

    info!(
        meals = result.meals.len(),
        items = result.item_count(),
        calories = result.aggregate_totals.calories,
        "composed meal plan"
    );
    result
}
