use std::path::Path;

use serde::Deserialize;

use crate::engine::{format_grams, format_kcal, format_percent, parse_field, parse_optional_field};
use crate::error::Result;
use crate::models::{Macro, MacroGrams};
use crate::session::{reconcile, Edit, FormMode, FormSnapshot, Reconciliation};

/// A logged food as read from an import CSV. Numbers stay raw until reconciled.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FoodRow {
    #[serde(default)]
    pub food_description: String,
    #[serde(default)]
    pub calories: String,
    #[serde(default)]
    pub protein: String,
    #[serde(default)]
    pub carbs: String,
    #[serde(default)]
    pub fat: String,
}

/// A row after running through the add-food form.
#[derive(Debug, Clone)]
pub struct ReconciledRow {
    pub food_description: String,
    pub result: Reconciliation,
}

pub fn read_food_rows<P: AsRef<Path>>(path: P) -> Result<Vec<FoodRow>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for record in rdr.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

/// Reconcile each row with grams as the source of truth.
pub fn reconcile_rows(rows: &[FoodRow]) -> Vec<ReconciledRow> {
    rows.iter()
        .map(|row| {
            let snapshot = FormSnapshot {
                calories: parse_optional_field(&row.calories),
                grams: MacroGrams::new(
                    parse_field(&row.protein),
                    parse_field(&row.carbs),
                    parse_field(&row.fat),
                ),
                ..Default::default()
            };
            ReconciledRow {
                food_description: row.food_description.clone(),
                result: reconcile(FormMode::AddFood, &snapshot, Edit::Refresh),
            }
        })
        .collect()
}

pub fn write_reconciled_csv(rows: &[ReconciledRow], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "food_description",
        "calories",
        "protein_g",
        "carbs_g",
        "fat_g",
        "protein_kcal",
        "carbs_kcal",
        "fat_kcal",
        "macro_kcal",
        "protein_pct",
        "carbs_pct",
        "fat_pct",
    ])?;

    for row in rows {
        let snap = &row.result.snapshot;
        let mut record = vec![
            row.food_description.clone(),
            snap.calories.map(format_kcal).unwrap_or_default(),
        ];
        record.extend(Macro::ALL.map(|m| format_grams(snap.grams.get(m))));
        record.extend(Macro::ALL.map(|m| format_kcal(row.result.breakdown.get(m))));
        record.push(format_kcal(row.result.total_kcal()));
        record.extend(Macro::ALL.map(|m| format_percent(snap.percentages.get(m))));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}
