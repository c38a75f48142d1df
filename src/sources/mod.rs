//! Food sources the meal recommender can draw candidates from.

mod nutritionix;

use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{MealError, Result};
use crate::models::FoodItem;
use crate::planner::constants::{fallback_foods, STAPLE_QUERIES};

pub use nutritionix::{NutritionixConfig, NutritionixProvider};

/// Supplies the candidate pool for meal composition.
pub trait FoodSource {
    fn foods(&self) -> Result<Vec<FoodItem>>;
}

/// The built-in fallback list.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFoods;

impl FoodSource for BuiltinFoods {
    fn foods(&self) -> Result<Vec<FoodItem>> {
        Ok(fallback_foods())
    }
}

impl FoodSource for Catalog {
    fn foods(&self) -> Result<Vec<FoodItem>> {
        Ok(self.items().to_vec())
    }
}

/// External nutrition data: given a name, return its macros or fail.
pub trait NutritionProvider {
    fn lookup(&self, name: &str) -> Result<FoodItem>;
}

/// A food source that resolves a list of queries through a provider.
///
/// Any failed lookup fails the whole source with `ProviderUnavailable`.
pub struct ProviderFoods<P> {
    provider: P,
    queries: Vec<String>,
}

impl<P: NutritionProvider> ProviderFoods<P> {
    pub fn new(provider: P, queries: Vec<String>) -> Self {
        Self { provider, queries }
    }

    /// Resolve the default staple foods.
    pub fn staples(provider: P) -> Self {
        Self::new(provider, STAPLE_QUERIES.iter().map(|q| q.to_string()).collect())
    }
}

impl<P: NutritionProvider> FoodSource for ProviderFoods<P> {
    fn foods(&self) -> Result<Vec<FoodItem>> {
        self.queries
            .iter()
            .map(|query| {
                let item = self.provider.lookup(query).map_err(|e| match e {
                    MealError::ProviderUnavailable(_) => e,
                    other => MealError::ProviderUnavailable(other.to_string()),
                })?;
                debug!(query = %query, name = %item.name, "resolved provider food");
                Ok(item)
            })
            .collect()
    }
}
