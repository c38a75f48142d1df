//! Caller-facing boundary: raw input coercion, selection checks, and
//! result envelopes that carry errors as data instead of failing.

use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{MealError, Result};
use crate::models::{
    AnalysisRequest, AnalysisResult, MacroTargets, MealPlanRequest, MealPlanResult,
};
use crate::planner::constants::*;
use crate::planner::{analyze, bmi_rounded, recommend};
use crate::sources::FoodSource;

/// Either a result or an `{"error": ...}` record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Outcome<T> {
    Error { error: String },
    Ok(T),
}

impl<T> Outcome<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    pub fn into_result(self) -> std::result::Result<T, String> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Error { error } => Err(error),
        }
    }
}

impl<T> From<Result<T>> for Outcome<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(e) => Self::Error {
                error: e.to_string(),
            },
        }
    }
}

/// Plan parameters as the caller received them, unparsed.
///
/// Missing or blank fields take the form defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPlanInput {
    pub meal_count: Option<String>,
    pub weight_kg: Option<String>,
    pub height_cm: Option<String>,
    pub target_calories: Option<String>,
    pub target_protein: Option<String>,
    pub target_carbs: Option<String>,
    pub target_fat: Option<String>,
}

fn parse_field<T: FromStr>(field: &str, raw: &Option<String>, default: T) -> Result<T> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(text) => text.parse().map_err(|_| {
            MealError::InvalidInput(format!("{} must be a number, got '{}'", field, text))
        }),
    }
}

fn non_negative(field: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(MealError::InvalidInput(format!(
            "{} must be a non-negative number",
            field
        )));
    }
    Ok(value)
}

impl RawPlanInput {
    /// Coerce into a typed request, rejecting unparseable or out-of-range values.
    pub fn parse(&self) -> Result<MealPlanRequest> {
        let meal_count: u32 = parse_field("meal_count", &self.meal_count, DEFAULT_MEAL_COUNT)?;
        if !(1..=MAX_MEAL_COUNT).contains(&meal_count) {
            return Err(MealError::InvalidInput(format!(
                "meal_count must be between 1 and {}",
                MAX_MEAL_COUNT
            )));
        }

        let number = |field: &str, raw: &Option<String>, default: f64| -> Result<f64> {
            non_negative(field, parse_field(field, raw, default)?)
        };

        Ok(MealPlanRequest {
            meal_count,
            weight_kg: number("weight_kg", &self.weight_kg, DEFAULT_WEIGHT_KG)?,
            height_cm: number("height_cm", &self.height_cm, DEFAULT_HEIGHT_CM)?,
            daily_targets: MacroTargets::new(
                number("target_calories", &self.target_calories, DEFAULT_CALORIES)?,
                number("target_protein", &self.target_protein, DEFAULT_PROTEIN_G)?,
                number("target_carbs", &self.target_carbs, DEFAULT_CARBS_G)?,
                number("target_fat", &self.target_fat, DEFAULT_FAT_G)?,
            ),
        })
    }
}

/// Parse raw input and build a plan, reporting bad input as an error record.
pub fn recommend_from_raw<R: Rng + ?Sized>(
    raw: &RawPlanInput,
    source: &dyn FoodSource,
    rng: &mut R,
) -> Outcome<MealPlanResult> {
    raw.parse().map(|req| recommend(&req, source, rng)).into()
}

/// Check that at least one non-blank item was chosen; returns the item list.
pub fn validate_selection(request: &AnalysisRequest) -> Result<Vec<String>> {
    let items: Vec<String> = request
        .flatten()
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if items.is_empty() {
        return Err(MealError::NoSelection);
    }
    Ok(items)
}

/// Validate a selection and analyze it.
pub fn analyze_selection(request: &AnalysisRequest, catalog: &Catalog) -> Outcome<AnalysisResult> {
    validate_selection(request)
        .map(|items| analyze(&items, catalog))
        .into()
}

/// BMI as shown next to analyses and saved plans.
pub fn bmi_for_display(weight_kg: f64, height_cm: f64) -> Option<f64> {
    bmi_rounded(weight_kg, height_cm, DISPLAY_BMI_DECIMALS)
}
