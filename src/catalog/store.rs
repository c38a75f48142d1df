use std::collections::HashMap;

use crate::models::{normalize_name, FoodItem};

/// Default number of results returned by [`Catalog::search`].
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Read-only dish catalog, keyed by normalized name.
///
/// Built once and shared by reference; nothing mutates it after construction.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Items in source order, names normalized.
    items: Vec<FoodItem>,
    /// Normalized name to position in `items`.
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Create a catalog from a list of items.
    ///
    /// Names are normalized; on duplicate names the first occurrence wins.
    pub fn new(items: Vec<FoodItem>) -> Self {
        let mut catalog = Self::default();
        for mut item in items {
            let key = item.key();
            if catalog.index.contains_key(&key) {
                continue;
            }
            item.name = key.clone();
            catalog.index.insert(key, catalog.items.len());
            catalog.items.push(item);
        }
        catalog
    }

    /// All dish names, sorted ascending.
    pub fn list_all_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.items.iter().map(|f| f.name.clone()).collect();
        names.sort();
        names.dedup();
        names
    }

    /// Case-insensitive exact lookup.
    pub fn exact_lookup(&self, name: &str) -> Option<&FoodItem> {
        self.index
            .get(&normalize_name(name))
            .map(|&i| &self.items[i])
    }

    /// Items whose name contains `query` (case-insensitive), in catalog order.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&FoodItem> {
        let query = normalize_name(query);
        if query.is_empty() {
            return Vec::new();
        }
        self.items
            .iter()
            .filter(|f| f.name.contains(&query))
            .take(limit)
            .collect()
    }

    /// All items in catalog order.
    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// Count of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
