use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{MealError, Result};
use crate::models::{MealPlanRequest, MealPlanResult};

/// Current on-disk plan format.
pub const PLAN_FORMAT_VERSION: u32 = 1;

/// A named plan together with the request that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPlan {
    pub version: u32,
    pub name: String,
    pub request: MealPlanRequest,
    pub result: MealPlanResult,
}

impl SavedPlan {
    pub fn new(name: &str, request: MealPlanRequest, result: MealPlanResult) -> Self {
        Self {
            version: PLAN_FORMAT_VERSION,
            name: name.to_string(),
            request,
            result,
        }
    }
}

/// Save a plan as pretty JSON.
pub fn save_plan<P: AsRef<Path>>(path: P, plan: &SavedPlan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(&path, json)?;
    info!(path = %path.as_ref().display(), name = %plan.name, "saved meal plan");
    Ok(())
}

/// Load a plan written by [`save_plan`].
///
/// The document is only ever parsed as data; anything that does not match
/// the schema is rejected with `DataUnavailable`.
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<SavedPlan> {
    let content = fs::read_to_string(&path)
        .map_err(|e| MealError::DataUnavailable(format!("can't load plan: {}", e)))?;
    let plan: SavedPlan = serde_json::from_str(&content)
        .map_err(|e| MealError::DataUnavailable(format!("can't load plan: {}", e)))?;

    if plan.version != PLAN_FORMAT_VERSION {
        return Err(MealError::DataUnavailable(format!(
            "unsupported plan version {}",
            plan.version
        )));
    }
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MacroTargets;
    use crate::planner::recommend;
    use crate::sources::BuiltinFoods;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_plan() -> SavedPlan {
        let request = MealPlanRequest {
            meal_count: 2,
            weight_kg: 70.0,
            height_cm: 170.0,
            daily_targets: MacroTargets::new(2000.0, 75.0, 250.0, 70.0),
        };
        let result = recommend(&request, &BuiltinFoods, &mut StdRng::seed_from_u64(3));
        SavedPlan::new("Cutting week", request, result)
    }

    #[test]
    fn test_save_and_load() {
        let plan = sample_plan();
        let file = NamedTempFile::new().unwrap();

        save_plan(file.path(), &plan).unwrap();
        let loaded = load_plan(file.path()).unwrap();

        assert_eq!(loaded.name, "Cutting week");
        assert_eq!(loaded.result.meals.len(), 2);
        assert_eq!(loaded.result.bmi_estimate, Some(24.2));
    }

    #[test]
    fn test_non_json_text_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{'meals': [], 'bmi_estimate': __import__('os')}")
            .unwrap();

        let err = load_plan(file.path()).unwrap_err();
        assert!(matches!(err, MealError::DataUnavailable(_)));
    }

    #[test]
    fn test_unknown_version_is_rejected() {
        let mut plan = sample_plan();
        plan.version = 99;
        let file = NamedTempFile::new().unwrap();
        save_plan(file.path(), &plan).unwrap();

        let err = load_plan(file.path()).unwrap_err();
        assert!(matches!(err, MealError::DataUnavailable(_)));
    }
}
