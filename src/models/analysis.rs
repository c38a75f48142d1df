use serde::{Deserialize, Serialize};

use crate::models::food::MacroTargets;

/// Foods and drinks eaten at one meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealGroup {
    #[serde(default)]
    pub meal_type: String,
    #[serde(default)]
    pub foods: Vec<String>,
    #[serde(default)]
    pub drinks: Vec<String>,
}

/// Items selected for analysis, in either accepted shape.
///
/// Deserialization detects the shape: a JSON array is read as meal groups,
/// an object as flat food/drink lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisRequest {
    Grouped(Vec<MealGroup>),
    Flat {
        #[serde(default)]
        foods: Vec<String>,
        #[serde(default)]
        drinks: Vec<String>,
    },
}

impl AnalysisRequest {
    pub fn flat(foods: Vec<String>, drinks: Vec<String>) -> Self {
        Self::Flat { foods, drinks }
    }

    /// Build a flat request from comma-separated text like "2 eggs, apple".
    pub fn from_text(text: &str) -> Self {
        let foods = text
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Self::flat(foods, Vec::new())
    }

    /// All item names in order: foods then drinks, group by group.
    pub fn flatten(&self) -> Vec<String> {
        match self {
            Self::Grouped(groups) => groups
                .iter()
                .flat_map(|g| g.foods.iter().chain(g.drinks.iter()))
                .cloned()
                .collect(),
            Self::Flat { foods, drinks } => foods.iter().chain(drinks.iter()).cloned().collect(),
        }
    }
}

/// One analyzed item. Unmatched items carry zero macros.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    /// The name exactly as the caller supplied it.
    pub name: String,
    pub matched: bool,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl BreakdownEntry {
    pub fn macros(&self) -> MacroTargets {
        MacroTargets::new(self.calories, self.protein_g, self.carbs_g, self.fat_g)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Sums rounded to one decimal.
    pub totals: MacroTargets,
    pub per_item_breakdown: Vec<BreakdownEntry>,
    pub suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_grouped_foods_before_drinks() {
        let request = AnalysisRequest::Grouped(vec![
            MealGroup {
                meal_type: "Breakfast".to_string(),
                foods: vec!["idli".to_string(), "sambar".to_string()],
                drinks: vec!["masala chai".to_string()],
            },
            MealGroup {
                meal_type: "Lunch".to_string(),
                foods: vec!["dal".to_string()],
                drinks: vec![],
            },
        ]);

        assert_eq!(
            request.flatten(),
            vec!["idli", "sambar", "masala chai", "dal"]
        );
    }

    #[test]
    fn test_shape_detection_from_json() {
        let grouped: AnalysisRequest =
            serde_json::from_str(r#"[{"meal_type": "Snack", "foods": ["samosa"]}]"#).unwrap();
        assert!(matches!(grouped, AnalysisRequest::Grouped(_)));
        assert_eq!(grouped.flatten(), vec!["samosa"]);

        let flat: AnalysisRequest =
            serde_json::from_str(r#"{"foods": ["samosa"], "drinks": ["lassi"]}"#).unwrap();
        assert!(matches!(flat, AnalysisRequest::Flat { .. }));
        assert_eq!(flat.flatten(), vec!["samosa", "lassi"]);
    }

    #[test]
    fn test_partial_json_shapes() {
        let drinks_only: AnalysisRequest =
            serde_json::from_str(r#"{"drinks": ["lassi"]}"#).unwrap();
        assert!(matches!(drinks_only, AnalysisRequest::Flat { .. }));
        assert_eq!(drinks_only.flatten(), vec!["lassi"]);

        let untyped: AnalysisRequest =
            serde_json::from_str(r#"[{"foods": ["idli"], "drinks": ["chai"]}]"#).unwrap();
        match &untyped {
            AnalysisRequest::Grouped(groups) => assert_eq!(groups[0].meal_type, ""),
            other => panic!("expected meal groups, got {:?}", other),
        }
        assert_eq!(untyped.flatten(), vec!["idli", "chai"]);
    }

    #[test]
    fn test_from_text() {
        let request = AnalysisRequest::from_text(" 2 eggs, ,apple ,  cup rice");
        assert_eq!(request.flatten(), vec!["2 eggs", "apple", "cup rice"]);
        assert!(AnalysisRequest::from_text(" , ").flatten().is_empty());
    }
}
