use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

/// Normalize a dish name for lookups: trimmed and lowercased.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// A dish with per-serving macro values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl FoodItem {
    pub fn new(name: &str, calories: f64, protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        Self {
            name: name.to_string(),
            calories,
            protein_g,
            carbs_g,
            fat_g,
        }
    }

    /// Zero-macro entry that keeps the caller's name untouched.
    pub fn unmatched(name: &str) -> Self {
        Self::new(name, 0.0, 0.0, 0.0, 0.0)
    }

    /// The macro values of this item as a totals record.
    pub fn macros(&self) -> MacroTargets {
        MacroTargets {
            calories: self.calories,
            protein_g: self.protein_g,
            carbs_g: self.carbs_g,
            fat_g: self.fat_g,
        }
    }

    /// Basic validation: finite, non-negative values and a non-empty name.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.macros().is_valid()
    }

    /// Canonical key for lookups.
    pub fn key(&self) -> String {
        normalize_name(&self.name)
    }
}

/// Calories and macros in grams. Used both for targets and for totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl MacroTargets {
    pub fn new(calories: f64, protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        Self {
            calories,
            protein_g,
            carbs_g,
            fat_g,
        }
    }

    /// Apply `f` to every field.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            calories: f(self.calories),
            protein_g: f(self.protein_g),
            carbs_g: f(self.carbs_g),
            fat_g: f(self.fat_g),
        }
    }

    /// Every field divided by `divisor`.
    pub fn divided_by(&self, divisor: f64) -> Self {
        self.map(|v| v / divisor)
    }

    pub fn is_valid(&self) -> bool {
        [self.calories, self.protein_g, self.carbs_g, self.fat_g]
            .into_iter()
            .all(|v| v.is_finite() && v >= 0.0)
    }
}

impl AddAssign for MacroTargets {
    fn add_assign(&mut self, rhs: Self) {
        self.calories += rhs.calories;
        self.protein_g += rhs.protein_g;
        self.carbs_g += rhs.carbs_g;
        self.fat_g += rhs.fat_g;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_food() -> FoodItem {
        FoodItem::new("Masala Dosa", 168.0, 3.9, 29.0, 3.7)
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Masala Dosa "), "masala dosa");
        assert_eq!(sample_food().key(), "masala dosa");
    }

    #[test]
    fn test_is_valid() {
        assert!(sample_food().is_valid());

        let mut invalid = sample_food();
        invalid.fat_g = -1.0;
        assert!(!invalid.is_valid());

        let mut nameless = sample_food();
        nameless.name = "   ".to_string();
        assert!(!nameless.is_valid());
    }

    #[test]
    fn test_add_assign_and_divide() {
        let mut totals = MacroTargets::default();
        totals += sample_food().macros();
        totals += sample_food().macros();
        assert_eq!(totals.calories, 336.0);

        let half = totals.divided_by(2.0);
        assert_eq!(half, sample_food().macros());
    }

    #[test]
    fn test_unmatched_keeps_name() {
        let item = FoodItem::unmatched("Mystery Stew");
        assert_eq!(item.name, "Mystery Stew");
        assert_eq!(item.macros(), MacroTargets::default());
    }
}
