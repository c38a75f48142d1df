use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{info, warn};

use crate::catalog::store::Catalog;
use crate::error::{MealError, Result};
use crate::models::FoodItem;

const NAME_COLUMNS: &[&str] = &["dish name", "food", "food name", "name"];
const CALORIE_COLUMNS: &[&str] = &["calories (kcal)", "calories"];
const PROTEIN_COLUMNS: &[&str] = &["protein (g)", "protein"];
const CARB_COLUMNS: &[&str] = &["carbohydrates (g)", "carbohydrates", "carbs"];
const FAT_COLUMNS: &[&str] = &["fats (g)", "fats", "fat"];

/// Positions of the required columns in a header row.
struct Columns {
    name: usize,
    calories: usize,
    protein: usize,
    carbs: usize,
    fat: usize,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self> {
        let normalized: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();
        let find = |aliases: &[&str]| {
            normalized
                .iter()
                .position(|h| aliases.contains(&h.as_str()))
                .ok_or_else(|| {
                    MealError::DataUnavailable(format!("missing column '{}'", aliases[0]))
                })
        };

        Ok(Self {
            name: find(NAME_COLUMNS)?,
            calories: find(CALORIE_COLUMNS)?,
            protein: find(PROTEIN_COLUMNS)?,
            carbs: find(CARB_COLUMNS)?,
            fat: find(FAT_COLUMNS)?,
        })
    }

    /// Parse one row. Missing or blank numeric cells count as zero.
    fn parse_row(&self, record: &StringRecord) -> Option<FoodItem> {
        let number = |idx: usize| -> Option<f64> {
            match record.get(idx).map(str::trim) {
                None | Some("") => Some(0.0),
                Some(cell) => cell.parse::<f64>().ok(),
            }
        };

        let item = FoodItem::new(
            record.get(self.name)?,
            number(self.calories)?,
            number(self.protein)?,
            number(self.carbs)?,
            number(self.fat)?,
        );
        item.is_valid().then_some(item)
    }
}

/// Load a catalog from a CSV file.
///
/// Fails with `DataUnavailable` when the file cannot be read or lacks a
/// required column. Malformed rows are skipped.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| MealError::DataUnavailable(format!("{}: {}", path.display(), e)))?;
    let catalog = load_catalog_from_reader(file)?;
    info!(path = %path.display(), items = catalog.len(), "loaded food catalog");
    Ok(catalog)
}

/// Load a catalog from any CSV reader.
pub fn load_catalog_from_reader<R: Read>(reader: R) -> Result<Catalog> {
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| MealError::DataUnavailable(format!("unreadable header: {}", e)))?
        .clone();
    let columns = Columns::locate(&headers)?;

    let mut items = Vec::new();
    for (row, record) in rdr.records().enumerate() {
        let parsed = record.ok().and_then(|r| columns.parse_row(&r));
        match parsed {
            Some(item) => items.push(item),
            None => warn!(row = row + 1, "skipping malformed catalog row"),
        }
    }

    Ok(Catalog::new(items))
}
