//! Error types for the sea-level predictor.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading, fitting or plotting sea-level data.
///
/// Only [`PredictorError::SourceMissing`] is recovered from at the top
/// level; everything else is reported as a failure.
#[derive(Debug, Error)]
pub enum PredictorError {
    /// The input dataset does not exist
    #[error("data source not found: {}", path.display())]
    SourceMissing { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("column '{column}' not found in {}", path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("{}:{line}: cannot parse '{value}' in column '{column}'", path.display())]
    InvalidValue {
        path: PathBuf,
        line: u64,
        column: String,
        value: String,
    },

    /// Fewer rows than a least-squares line needs
    #[error("{window} fit needs at least {required} rows, found {actual}")]
    InsufficientData {
        window: String,
        required: usize,
        actual: usize,
    },

    /// Every row in the window shares a single year
    #[error("{window} fit is degenerate: all {count} rows fall in year {year}")]
    DegenerateFit {
        window: String,
        year: i32,
        count: usize,
    },

    #[error("failed to render chart to {}: {message}", path.display())]
    Render { path: PathBuf, message: String },
}

impl PredictorError {
    /// True for the one condition the binary reports as a warning instead of a failure
    pub fn is_source_missing(&self) -> bool {
        matches!(self, PredictorError::SourceMissing { .. })
    }
}

pub type Result<T> = std::result::Result<T, PredictorError>;
