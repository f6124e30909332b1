use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Sex / Beverage – the two categorical filter axes
// ---------------------------------------------------------------------------

/// Respondent sex as reported in the survey data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Female, Sex::Male];

    /// Parse the lowercase token used in the data files.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "female" => Some(Sex::Female),
            "male" => Some(Sex::Male),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sex::Female => "female",
            Sex::Male => "male",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Beverage category a percentage refers to. `Any` aggregates all
/// categories and is the default selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Beverage {
    Any,
    Beer,
    Wine,
    Spirits,
}

impl Beverage {
    pub const ALL: [Beverage; 4] = [
        Beverage::Any,
        Beverage::Beer,
        Beverage::Wine,
        Beverage::Spirits,
    ];

    /// Parse the lowercase token used in the data files.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "any" => Some(Beverage::Any),
            "beer" => Some(Beverage::Beer),
            "wine" => Some(Beverage::Wine),
            "spirits" => Some(Beverage::Spirits),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Beverage::Any => "any",
            Beverage::Beer => "beer",
            Beverage::Wine => "wine",
            Beverage::Spirits => "spirits",
        }
    }
}

impl fmt::Display for Beverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the source table
// ---------------------------------------------------------------------------

/// One survey observation: the share of a state's population of a given
/// sex that reports drinking a given beverage category.
///
/// The percent is parsed from text at load time, validated finite, and
/// immutable thereafter. The source column is named `type`, which is a
/// Rust keyword, hence the serde rename.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub state: String,
    pub sex: Sex,
    #[serde(rename = "type")]
    pub beverage: Beverage,
    pub percent: f64,
}

// ---------------------------------------------------------------------------
// DrinkingDataset – the complete loaded corpus
// ---------------------------------------------------------------------------

/// The full parsed corpus. The chart never consumes this directly; it
/// is narrowed to one (sex, beverage) view by the filter layer first.
#[derive(Debug, Clone, Default)]
pub struct DrinkingDataset {
    /// All rows, in file order. Not deduplicated: one (sex, beverage)
    /// selection is expected to yield at most one row per state.
    pub records: Vec<Record>,
}

impl DrinkingDataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        DrinkingDataset { records }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the corpus is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_sex_tokens() {
        assert_eq!(Sex::parse("female"), Some(Sex::Female));
        assert_eq!(Sex::parse(" Male "), Some(Sex::Male));
        assert_eq!(Sex::parse("other"), None);
        assert_eq!(Sex::parse(""), None);
    }

    #[test]
    fn parse_beverage_tokens() {
        assert_eq!(Beverage::parse("any"), Some(Beverage::Any));
        assert_eq!(Beverage::parse("SPIRITS"), Some(Beverage::Spirits));
        assert_eq!(Beverage::parse("cider"), None);
    }

    #[test]
    fn display_uses_data_file_tokens() {
        assert_eq!(Sex::Female.to_string(), "female");
        assert_eq!(Beverage::Wine.to_string(), "wine");
    }
}
