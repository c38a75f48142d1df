use crate::models::MacroTargets;

/// Round to `decimals` places, half away from zero.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Round every field of a macro record.
pub fn round_macros(macros: &MacroTargets, decimals: u32) -> MacroTargets {
    macros.map(|v| round_to(v, decimals))
}

/// Body mass index from weight (kg) and height (cm), unrounded.
///
/// `None` when either input is non-finite or non-positive.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if !weight_kg.is_finite() || !height_cm.is_finite() || weight_kg <= 0.0 || height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(weight_kg / (height_m * height_m))
}

/// BMI rounded for a given call site.
pub fn bmi_rounded(weight_kg: f64, height_cm: f64, decimals: u32) -> Option<f64> {
    calculate_bmi(weight_kg, height_cm).map(|bmi| round_to(bmi, decimals))
}

/// Split daily targets evenly across meals. A zero count is treated as one.
pub fn per_meal_targets(daily: &MacroTargets, meal_count: u32) -> MacroTargets {
    daily.divided_by(meal_count.max(1) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(24.221_453, 2), 24.22);
        assert_eq!(round_to(24.221_453, 1), 24.2);
        assert_eq!(round_to(2.25, 1), 2.3);
        assert_eq!(round_to(12.0, 1), 12.0);
    }

    #[test]
    fn test_bmi() {
        assert_eq!(bmi_rounded(70.0, 170.0, 2), Some(24.22));
        assert_eq!(bmi_rounded(70.0, 170.0, 1), Some(24.2));
    }

    #[test]
    fn test_bmi_invalid_height() {
        assert_eq!(calculate_bmi(70.0, 0.0), None);
        assert_eq!(calculate_bmi(70.0, -170.0), None);
        assert_eq!(calculate_bmi(70.0, f64::NAN), None);
    }

    #[test]
    fn test_per_meal_targets() {
        let daily = MacroTargets::new(1800.0, 90.0, 240.0, 60.0);
        let per_meal = per_meal_targets(&daily, 3);
        assert_eq!(per_meal, MacroTargets::new(600.0, 30.0, 80.0, 20.0));

        assert_eq!(per_meal_targets(&daily, 0), daily);
    }
}
