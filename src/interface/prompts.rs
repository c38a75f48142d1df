use dialoguer::{Confirm, Input, Select};

use crate::catalog::{fuzzy_match, Catalog};
use crate::error::{MealError, Result};
use crate::models::{AnalysisRequest, MealGroup};
use crate::planner::constants::MEAL_TYPES;

/// Prompt for how many meals to enter.
pub fn prompt_meal_count() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("How many meals did you eat today?")
        .default("1".to_string())
        .interact_text()?;

    match input.trim().parse() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(MealError::InvalidInput("Invalid number".to_string())),
    }
}

/// Prompt for the type of one meal.
pub fn prompt_meal_type(meal_number: u32) -> Result<String> {
    let selection = Select::new()
        .with_prompt(format!("Meal {} type", meal_number))
        .items(&MEAL_TYPES)
        .default(0)
        .interact()?;

    Ok(MEAL_TYPES[selection].to_string())
}

/// Resolve a typed name against the catalog.
///
/// Exact names are taken as-is; otherwise the closest match is offered.
/// A declined or missing match keeps the typed name so it shows as not found.
pub fn resolve_name(input: &str, catalog: &Catalog) -> Result<String> {
    if let Some(food) = catalog.exact_lookup(input) {
        return Ok(food.name.clone());
    }

    let Some(food) = fuzzy_match(input, catalog) else {
        println!("No matching food found for '{}'", input);
        return Ok(input.to_string());
    };

    let confirm = Confirm::new()
        .with_prompt(format!("Did you mean '{}'?", food.name))
        .default(true)
        .interact()?;

    Ok(if confirm {
        food.name.clone()
    } else {
        input.to_string()
    })
}

/// Prompt for a comma-separated list of names.
fn prompt_names(prompt: &str, catalog: &Catalog) -> Result<Vec<String>> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;

    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|name| resolve_name(name, catalog))
        .collect()
}

/// Collect eaten foods and drinks meal by meal.
pub fn prompt_meal_groups(catalog: &Catalog) -> Result<AnalysisRequest> {
    let count = prompt_meal_count()?;
    let mut groups = Vec::with_capacity(count as usize);

    for i in 1..=count {
        let meal_type = prompt_meal_type(i)?;
        let foods = prompt_names("Foods eaten (comma-separated)", catalog)?;
        let drinks = prompt_names("Drinks (comma-separated, Enter for none)", catalog)?;
        groups.push(MealGroup {
            meal_type,
            foods,
            drinks,
        });
    }

    Ok(AnalysisRequest::Grouped(groups))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
