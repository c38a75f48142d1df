use tracing::debug;

use crate::catalog::Catalog;
use crate::models::{AnalysisRequest, AnalysisResult, BreakdownEntry, MacroTargets};
use crate::planner::calculations::round_macros;
use crate::planner::constants::*;

/// Advice emitted from the totals of an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestion {
    AddProtein,
    AddComplexCarbs,
    AddHealthyFats,
    AddSnack,
    ReduceProtein,
    ReduceFat,
}

impl Suggestion {
    pub fn message(&self) -> &'static str {
        match self {
            Self::AddProtein => "Add high-protein foods like paneer, lentils, or eggs.",
            Self::AddComplexCarbs => "Include complex carbs like rice, oats, or whole grains.",
            Self::AddHealthyFats => "Add healthy fats such as nuts or ghee.",
            Self::AddSnack => "Your total calories are low, add a smoothie or snack.",
            Self::ReduceProtein => {
                "You might reduce protein, balance with more veggies or carbs."
            }
            Self::ReduceFat => "High fat intake, consider reducing fried foods.",
        }
    }
}

/// Every suggestion whose rule fires for `totals`, in fixed rule order.
///
/// Rules are independent; "low" and "high" advice may both appear.
pub fn suggestions_for(totals: &MacroTargets) -> Vec<Suggestion> {
    let rules = [
        (totals.protein_g < LOW_PROTEIN_G, Suggestion::AddProtein),
        (totals.carbs_g < LOW_CARBS_G, Suggestion::AddComplexCarbs),
        (totals.fat_g < LOW_FAT_G, Suggestion::AddHealthyFats),
        (totals.calories < LOW_CALORIES, Suggestion::AddSnack),
        (totals.protein_g > HIGH_PROTEIN_G, Suggestion::ReduceProtein),
        (totals.fat_g > HIGH_FAT_G, Suggestion::ReduceFat),
    ];

    rules
        .into_iter()
        .filter_map(|(fires, suggestion)| fires.then_some(suggestion))
        .collect()
}

/// Sum the macros of `items` using exact catalog lookups.
///
/// Unmatched names stay in the breakdown with zero macros. Only the final
/// totals are rounded.
pub fn analyze<S: AsRef<str>>(items: &[S], catalog: &Catalog) -> AnalysisResult {
    let mut running = MacroTargets::default();
    let mut breakdown = Vec::with_capacity(items.len());

    for name in items {
        let name = name.as_ref();
        let found = catalog.exact_lookup(name);
        if found.is_none() {
            debug!(item = name, "no catalog entry");
        }

        let macros = found.map(|f| f.macros()).unwrap_or_default();
        running += macros;
        breakdown.push(BreakdownEntry {
            name: name.to_string(),
            matched: found.is_some(),
            calories: macros.calories,
            protein_g: macros.protein_g,
            carbs_g: macros.carbs_g,
            fat_g: macros.fat_g,
        });
    }

    let totals = round_macros(&running, TOTALS_DECIMALS);
    let suggestions = suggestions_for(&totals)
        .iter()
        .map(|s| s.message().to_string())
        .collect();

    AnalysisResult {
        totals,
        per_item_breakdown: breakdown,
        suggestions,
    }
}

/// Flatten a request of either shape and analyze it.
pub fn analyze_request(request: &AnalysisRequest, catalog: &Catalog) -> AnalysisResult {
    analyze(&request.flatten(), catalog)
}
