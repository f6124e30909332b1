use super::model::{Beverage, DrinkingDataset, Record, Sex};

// ---------------------------------------------------------------------------
// Filter predicate: one (sex, beverage) selection at a time
// ---------------------------------------------------------------------------

/// The current mutually-exclusive toggle selections. Each control group
/// has exactly one active value, so the filtered view holds at most one
/// row per state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub sex: Sex,
    pub beverage: Beverage,
}

impl Default for FilterSelection {
    fn default() -> Self {
        FilterSelection {
            sex: Sex::Female,
            beverage: Beverage::Any,
        }
    }
}

/// Return the rows matching the current selection, preserving corpus
/// order. The corpus itself is never reordered or mutated.
pub fn filtered_records(dataset: &DrinkingDataset, selection: FilterSelection) -> Vec<Record> {
    dataset
        .records
        .iter()
        .filter(|r| r.sex == selection.sex && r.beverage == selection.beverage)
        .cloned()
        .collect()
}
