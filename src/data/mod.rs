//! Data layer for the annual sea-level dataset.
//!
//! Loads (Year, CSIRO Adjusted Sea Level) rows from the CSV source.

mod models;
mod source;

pub use models::{SeaLevelRecord, SeaLevelSeries};
pub use source::{parse_records, DataSource, LEVEL_COLUMN, YEAR_COLUMN};
