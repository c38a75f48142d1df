use crate::models::{AnalysisResult, FoodItem, MacroTargets, MealPlanResult};

fn macro_line(m: &MacroTargets) -> String {
    format!(
        "{:.1} kcal | P {:.1} g | C {:.1} g | F {:.1} g",
        m.calories, m.protein_g, m.carbs_g, m.fat_g
    )
}

fn display_bmi(bmi: Option<f64>) {
    match bmi {
        Some(value) => println!("BMI: {}", value),
        None => println!("BMI: n/a"),
    }
}

/// Display an analysis: per-item table, totals, and suggestions.
pub fn display_analysis(result: &AnalysisResult, bmi: Option<f64>) {
    println!();
    println!("=== Nutrient Analysis ===");
    println!();

    let max_name_len = result
        .per_item_breakdown
        .iter()
        .map(|e| e.name.len())
        .max()
        .unwrap_or(10);

    for (i, entry) in result.per_item_breakdown.iter().enumerate() {
        let note = if entry.matched { "" } else { "  [not found]" };
        println!(
            "{:>3}. {:<width$} - {}{}",
            i + 1,
            entry.name,
            macro_line(&entry.macros()),
            note,
            width = max_name_len
        );
    }

    println!();
    println!("--- Totals ---");
    println!("{}", macro_line(&result.totals));
    display_bmi(bmi);

    if !result.suggestions.is_empty() {
        println!();
        println!("--- Suggestions ---");
        for suggestion in &result.suggestions {
            println!("  * {}", suggestion);
        }
    }
    println!();
}

/// Display a meal plan meal by meal.
pub fn display_meal_plan(plan: &MealPlanResult, bmi: Option<f64>) {
    if plan.meals.is_empty() {
        println!("No meals composed.");
        return;
    }

    println!();
    println!("=== Meal Plan ===");

    for meal in &plan.meals {
        println!();
        println!("Meal {}  (target {})", meal.index, macro_line(&meal.per_meal_targets));
        for item in &meal.items {
            println!("    - {}", item.name);
        }
        println!("    = {}", macro_line(&meal.totals));
    }

    println!();
    println!("--- Summary ---");
    println!("Daily target: {}", macro_line(&plan.daily_targets));
    println!("Plan total:   {}", macro_line(&plan.aggregate_totals));
    display_bmi(bmi);
    println!();
}

/// Display a list of food names.
pub fn display_food_list(names: &[String], title: &str) {
    if names.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, names.len());
    println!();
    for name in names {
        println!("  {}", name);
    }
    println!();
}

/// Display foods with their macros.
pub fn display_food_items(foods: &[&FoodItem], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();
    for food in foods {
        println!("  {} - {}", food.name, macro_line(&food.macros()));
    }
    println!();
}
