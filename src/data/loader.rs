use std::path::Path;

use serde::Deserialize;

use super::model::{Beverage, DrinkingDataset, Record, Sex};
use crate::error::LoadError;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a drinking dataset from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header `state,sex,type,percent`, percent as decimal text
/// * `.json` – `[{ "state": "...", "sex": "...", "type": "...", "percent": 25.4 }, ...]`
pub fn load_file(path: &Path) -> Result<DrinkingDataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => Err(LoadError::UnsupportedFormat {
            extension: other.to_string(),
        }),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Raw CSV row with every field as text, so each one can be validated
/// with a row-numbered error instead of an opaque deserialization
/// failure.
#[derive(Debug, Deserialize)]
struct RawRow {
    state: String,
    sex: String,
    #[serde(rename = "type")]
    beverage: String,
    percent: String,
}

fn load_csv(path: &Path) -> Result<DrinkingDataset, LoadError> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut records = Vec::new();
    for (i, result) in reader.deserialize::<RawRow>().enumerate() {
        let row = i + 1;
        let raw = result?;

        let sex = Sex::parse(&raw.sex).ok_or_else(|| LoadError::UnknownSex {
            row,
            value: raw.sex.clone(),
        })?;
        let beverage = Beverage::parse(&raw.beverage).ok_or_else(|| LoadError::UnknownBeverage {
            row,
            value: raw.beverage.clone(),
        })?;
        let percent = parse_percent(&raw.percent, row)?;

        records.push(Record {
            state: raw.state,
            sex,
            beverage,
            percent,
        });
    }

    Ok(DrinkingDataset::from_records(records))
}

/// Parse a percent cell. Non-numeric and out-of-range values are fatal
/// to scale computation downstream, so they are rejected here.
fn parse_percent(s: &str, row: usize) -> Result<f64, LoadError> {
    let value = s.trim().parse::<f64>().map_err(|_| LoadError::InvalidPercent {
        row,
        value: s.to_string(),
    })?;
    if !percent_in_range(value) {
        return Err(LoadError::InvalidPercent {
            row,
            value: s.to_string(),
        });
    }
    Ok(value)
}

/// A percent must be a finite share of a population.
fn percent_in_range(value: f64) -> bool {
    value.is_finite() && (0.0..=100.0).contains(&value)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON array. Field types are enforced by serde; the
/// range check still runs since JSON accepts any numeric magnitude.
fn load_json(path: &Path) -> Result<DrinkingDataset, LoadError> {
    let text = std::fs::read_to_string(path)?;
    let records: Vec<Record> = serde_json::from_str(&text)?;

    for (i, record) in records.iter().enumerate() {
        if !percent_in_range(record.percent) {
            return Err(LoadError::InvalidPercent {
                row: i + 1,
                value: record.percent.to_string(),
            });
        }
    }

    Ok(DrinkingDataset::from_records(records))
}
