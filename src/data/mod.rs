/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → DrinkingDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ DrinkingDataset │  Vec<Record>, full corpus
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  one (sex, beverage) selection → chart view
///   └──────────┘
/// ```
pub mod filter;
pub mod loader;
pub mod model;
