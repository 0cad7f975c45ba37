//! CSV source for the sea-level dataset.
//!
//! Expected layout (extra columns are ignored):
//! - `Year`: integer year, one row per year
//! - `CSIRO Adjusted Sea Level`: sea level in inches

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use csv::StringRecord;
use tracing::{debug, warn};

use super::models::{SeaLevelRecord, SeaLevelSeries};
use crate::error::{PredictorError, Result};

pub const YEAR_COLUMN: &str = "Year";
pub const LEVEL_COLUMN: &str = "CSIRO Adjusted Sea Level";

/// Parse a year cell, accepting integral floats such as "1880.0"
fn parse_year(field: &str) -> Option<i32> {
    let field = field.trim();
    field.parse::<i32>().ok().or_else(|| {
        field
            .parse::<f64>()
            .ok()
            .filter(|v| v.fract() == 0.0 && v.abs() <= f64::from(i32::MAX))
            .map(|v| v as i32)
    })
}

fn parse_level(field: &str) -> Option<f64> {
    field.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn column_index(headers: &StringRecord, name: &str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| PredictorError::MissingColumn {
            path: path.to_path_buf(),
            column: name.to_string(),
        })
}

/// Read-only handle on the sea-level CSV file
pub struct DataSource {
    path: PathBuf,
}

impl DataSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DataSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every record from the file.
    ///
    /// A file that does not exist yields [`PredictorError::SourceMissing`];
    /// any other open failure is an I/O error.
    pub fn load(&self) -> Result<SeaLevelSeries> {
        let file = File::open(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => PredictorError::SourceMissing {
                path: self.path.clone(),
            },
            _ => PredictorError::Io {
                path: self.path.clone(),
                source: e,
            },
        })?;

        let series = parse_records(BufReader::new(file), &self.path)?;
        debug!(path = ?self.path, rows = series.len(), "loaded sea-level records");

        if let Some(idx) = series.first_unordered_index() {
            warn!(
                path = ?self.path,
                row = idx,
                "years are not strictly increasing; using rows as given"
            );
        }

        Ok(series)
    }
}

/// Parse sea-level records from any CSV reader; `path` is only used in errors
pub fn parse_records<R: Read>(reader: R, path: &Path) -> Result<SeaLevelSeries> {
    let csv_error = |source| PredictorError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader.headers().map_err(csv_error)?.clone();
    let year_idx = column_index(&headers, YEAR_COLUMN, path)?;
    let level_idx = column_index(&headers, LEVEL_COLUMN, path)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(csv_error)?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let invalid = |column: &str, value: &str| PredictorError::InvalidValue {
            path: path.to_path_buf(),
            line,
            column: column.to_string(),
            value: value.to_string(),
        };

        let year_field = row.get(year_idx).unwrap_or_default();
        let level_field = row.get(level_idx).unwrap_or_default();

        let year = parse_year(year_field).ok_or_else(|| invalid(YEAR_COLUMN, year_field))?;
        let level = parse_level(level_field).ok_or_else(|| invalid(LEVEL_COLUMN, level_field))?;

        records.push(SeaLevelRecord::new(year, level));
    }

    Ok(SeaLevelSeries::new(records))
}
