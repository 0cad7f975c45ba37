//! Ordinary least-squares line fitting.
//!
//! Uses the centered closed form: slope = Sxy / Sxx, intercept = ȳ - slope·x̄,
//! which stays well conditioned for calendar years where raw sums of x² are large.

use serde::Serialize;

use crate::data::SeaLevelSeries;
use crate::error::{PredictorError, Result};

/// Minimum number of rows for a defined line
pub const MIN_FIT_ROWS: usize = 2;

/// A fitted line `level = slope * year + intercept` plus its fit statistics
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Pearson correlation coefficient between year and level
    pub r_value: f64,
    /// Standard error of the slope; needs at least three rows
    pub slope_stderr: Option<f64>,
    /// Standard error of the intercept; needs at least three rows
    pub intercept_stderr: Option<f64>,
    pub n_observations: usize,
}

impl LinearFit {
    /// Fit a line through every record of `series`.
    ///
    /// `window` names the fit in error messages.
    pub fn fit(window: &str, series: &SeaLevelSeries) -> Result<Self> {
        let records = series.records();
        if records.len() < MIN_FIT_ROWS {
            return Err(PredictorError::InsufficientData {
                window: window.to_string(),
                required: MIN_FIT_ROWS,
                actual: records.len(),
            });
        }

        let n = records.len() as f64;
        let mean_x = records.iter().map(|r| f64::from(r.year)).sum::<f64>() / n;
        let mean_y = records.iter().map(|r| r.level).sum::<f64>() / n;

        let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
        for r in records {
            let dx = f64::from(r.year) - mean_x;
            let dy = r.level - mean_y;
            sxx += dx * dx;
            syy += dy * dy;
            sxy += dx * dy;
        }

        if sxx == 0.0 {
            return Err(PredictorError::DegenerateFit {
                window: window.to_string(),
                year: records[0].year,
                count: records.len(),
            });
        }

        let slope = sxy / sxx;
        let intercept = mean_y - slope * mean_x;

        let r_value = if syy == 0.0 {
            0.0
        } else {
            (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0)
        };

        let (slope_stderr, intercept_stderr) = if records.len() > MIN_FIT_ROWS {
            let dof = n - 2.0;
            let slope_se = ((1.0 - r_value * r_value) * syy / sxx / dof).sqrt();
            let intercept_se = slope_se * (sxx / n + mean_x * mean_x).sqrt();
            (Some(slope_se), Some(intercept_se))
        } else {
            (None, None)
        };

        Ok(LinearFit {
            slope,
            intercept,
            r_value,
            slope_stderr,
            intercept_stderr,
            n_observations: records.len(),
        })
    }

    /// Evaluate the line at `year`
    pub fn predict(&self, year: f64) -> f64 {
        self.slope * year + self.intercept
    }

    pub fn r_squared(&self) -> f64 {
        self.r_value * self.r_value
    }
}
