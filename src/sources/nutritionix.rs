use std::time::Duration;

use serde::Deserialize;
use tracing::warn;
use ureq::Agent;

use crate::error::{MealError, Result};
use crate::models::FoodItem;
use crate::sources::NutritionProvider;

const NATURAL_NUTRIENTS_URL: &str = "https://trackapi.nutritionix.com/v2/natural/nutrients";

#[derive(Debug, Clone)]
pub struct NutritionixConfig {
    pub app_id: String,
    pub api_key: String,
    pub timeout: Duration,
    pub endpoint: String,
}

impl NutritionixConfig {
    pub fn new(app_id: String, api_key: String, timeout: Duration) -> Self {
        Self {
            app_id,
            api_key,
            timeout,
            endpoint: NATURAL_NUTRIENTS_URL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct NaturalResp {
    #[serde(default)]
    foods: Vec<NaturalFood>,
}

#[derive(Debug, Deserialize)]
struct NaturalFood {
    food_name: String,
    nf_calories: Option<f64>,
    nf_protein: Option<f64>,
    nf_total_carbohydrate: Option<f64>,
    nf_total_fat: Option<f64>,
}

impl NaturalFood {
    fn into_item(self) -> FoodItem {
        FoodItem::new(
            &self.food_name,
            self.nf_calories.unwrap_or(0.0),
            self.nf_protein.unwrap_or(0.0),
            self.nf_total_carbohydrate.unwrap_or(0.0),
            self.nf_total_fat.unwrap_or(0.0),
        )
    }
}

/// Nutritionix natural-language nutrient lookup (blocking, bounded timeout).
pub struct NutritionixProvider {
    agent: Agent,
    config: NutritionixConfig,
}

impl NutritionixProvider {
    pub fn new(config: NutritionixConfig) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(config.timeout).build();
        Self { agent, config }
    }
}

impl NutritionProvider for NutritionixProvider {
    fn lookup(&self, name: &str) -> Result<FoodItem> {
        let resp = self
            .agent
            .post(&self.config.endpoint)
            .set("x-app-id", &self.config.app_id)
            .set("x-app-key", &self.config.api_key)
            .send_json(serde_json::json!({ "query": name }))
            .map_err(|e| {
                warn!(query = name, error = %e, "nutritionix request failed");
                MealError::ProviderUnavailable(e.to_string())
            })?;

        let body: NaturalResp = resp
            .into_json()
            .map_err(|e| MealError::ProviderUnavailable(format!("bad response: {}", e)))?;

        let item = body
            .foods
            .into_iter()
            .next()
            .map(NaturalFood::into_item)
            .ok_or_else(|| MealError::FoodNotFound(name.to_string()))?;

        if !item.is_valid() {
            return Err(MealError::ProviderUnavailable(format!(
                "invalid macros for '{}'",
                name
            )));
        }
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_natural_response() {
        let json = r#"{"foods": [{
            "food_name": "egg",
            "nf_calories": 71.5,
            "nf_protein": 6.28,
            "nf_total_carbohydrate": 0.36,
            "nf_total_fat": null
        }]}"#;

        let resp: NaturalResp = serde_json::from_str(json).unwrap();
        let item = resp.foods.into_iter().next().unwrap().into_item();
        assert_eq!(item.name, "egg");
        assert_eq!(item.calories, 71.5);
        assert_eq!(item.fat_g, 0.0);
    }

    #[test]
    fn test_unreachable_host_is_provider_unavailable() {
        let mut config = NutritionixConfig::new(
            "id".to_string(),
            "key".to_string(),
            Duration::from_millis(500),
        );
        // Nothing listens on the discard port locally.
        config.endpoint = "http://127.0.0.1:9/v2/natural/nutrients".to_string();

        let err = NutritionixProvider::new(config).lookup("egg").unwrap_err();
        assert!(matches!(err, MealError::ProviderUnavailable(_)));
    }
}
