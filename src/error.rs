//! Structured error types.
//!
//! Data problems surface as [`LoadError`] before any record reaches the
//! chart; geometry problems surface as [`ConfigError`] at chart
//! construction instead of failing silently at render time.

use thiserror::Error;

/// Errors raised while loading a drinking dataset from disk.
///
/// Row numbers are 1-based over data rows (the header is not counted).
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported file extension: .{extension}")]
    UnsupportedFormat { extension: String },

    #[error("row {row}: '{value}' is not a valid percent")]
    InvalidPercent { row: usize, value: String },

    #[error("row {row}: unknown sex '{value}' (expected 'female' or 'male')")]
    UnknownSex { row: usize, value: String },

    #[error("row {row}: unknown beverage type '{value}'")]
    UnknownBeverage { row: usize, value: String },
}

/// Errors raised when chart geometry cannot produce a drawing area.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("container size {width}x{height} must be positive")]
    NonPositiveSize { width: f32, height: f32 },

    #[error("margins must be non-negative")]
    NegativeMargin,

    #[error("margins leave no drawing area inside a {width}x{height} container")]
    MarginsExceedContainer { width: f32, height: f32 },
}
