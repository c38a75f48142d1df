use strsim::normalized_levenshtein;
use tracing::debug;

use crate::catalog::store::Catalog;
use crate::models::{normalize_name, FoodItem};

/// Minimum similarity (0..=1) for a fuzzy match to count.
pub const MATCH_THRESHOLD: f64 = 0.6;

/// Similarity ratio between two already-normalized names.
pub fn similarity(a: &str, b: &str) -> f64 {
    normalized_levenshtein(a, b)
}

/// Find the closest catalog entry to a free-text name.
///
/// Ties go to the earliest item in catalog order.
pub fn fuzzy_match<'a>(query: &str, catalog: &'a Catalog) -> Option<&'a FoodItem> {
    let query = normalize_name(query);

    let mut best: Option<(&FoodItem, f64)> = None;
    for item in catalog.items() {
        let score = similarity(&query, &item.name);
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((item, score));
        }
    }

    let (item, score) = best?;
    debug!(query = %query, candidate = %item.name, score, "fuzzy match");
    (score >= MATCH_THRESHOLD).then_some(item)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit_catalog() -> Catalog {
        Catalog::new(vec![
            FoodItem::new("Apple", 52.0, 0.3, 14.0, 0.2),
            FoodItem::new("Banana", 89.0, 1.1, 23.0, 0.3),
            FoodItem::new("Mango", 60.0, 0.8, 15.0, 0.4),
        ])
    }

    #[test]
    fn test_close_name_matches() {
        let catalog = fruit_catalog();
        assert_eq!(fuzzy_match("appl", &catalog).unwrap().name, "apple");
        assert_eq!(fuzzy_match(" BANANNA ", &catalog).unwrap().name, "banana");
    }

    #[test]
    fn test_dissimilar_name_is_absent() {
        let catalog = fruit_catalog();
        assert!(fuzzy_match("zzzzxyz", &catalog).is_none());
    }

    #[test]
    fn test_empty_catalog_is_absent() {
        assert!(fuzzy_match("apple", &Catalog::default()).is_none());
    }

    #[test]
    fn test_tie_goes_to_first_item() {
        let catalog = Catalog::new(vec![
            FoodItem::new("abcx", 1.0, 0.0, 0.0, 0.0),
            FoodItem::new("abcy", 2.0, 0.0, 0.0, 0.0),
        ]);
        assert_eq!(fuzzy_match("abcz", &catalog).unwrap().name, "abcx");
    }

    #[test]
    fn test_not_substring_containment() {
        let catalog = Catalog::new(vec![FoodItem::new(
            "chicken tikka masala with butter naan",
            700.0,
            40.0,
            60.0,
            30.0,
        )]);
        assert!(fuzzy_match("naan", &catalog).is_none());
    }
}
