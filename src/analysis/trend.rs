//! Trend lines: a fit over a window of years, projected to a horizon year.

use serde::Serialize;
use tracing::{debug, warn};

use super::regression::LinearFit;
use crate::data::SeaLevelSeries;
use crate::error::{PredictorError, Result};

/// A fitted line evaluated at every whole year from `start_year` to `end_year` inclusive
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendLine {
    /// Legend label
    pub label: String,
    pub fit: LinearFit,
    pub start_year: i32,
    pub end_year: i32,
    pub points: Vec<(i32, f64)>,
}

impl TrendLine {
    /// Project `fit` over `start_year..=end_year`; empty when start is past the end
    pub fn project(label: impl Into<String>, fit: LinearFit, start_year: i32, end_year: i32) -> Self {
        let points = (start_year..=end_year)
            .map(|year| (year, fit.predict(f64::from(year))))
            .collect();
        TrendLine {
            label: label.into(),
            fit,
            start_year,
            end_year,
            points,
        }
    }

    /// Projected level at `year`, if the year lies on the line
    pub fn value_at(&self, year: i32) -> Option<f64> {
        let offset = year.checked_sub(self.start_year)?;
        usize::try_from(offset)
            .ok()
            .and_then(|i| self.points.get(i))
            .map(|&(_, level)| level)
    }

    /// Level at the last projected year
    pub fn projected_level(&self) -> Option<f64> {
        self.points.last().map(|&(_, level)| level)
    }
}

/// Fit every record and project from the earliest year through `end_year`
pub fn full_range_trend(series: &SeaLevelSeries, end_year: i32) -> Result<TrendLine> {
    let (first, last) = match (series.min_year(), series.max_year()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            return Err(PredictorError::InsufficientData {
                window: "full-range".to_string(),
                required: super::regression::MIN_FIT_ROWS,
                actual: 0,
            })
        }
    };

    let fit = LinearFit::fit("full-range", series)?;
    debug!(
        slope = fit.slope,
        intercept = fit.intercept,
        rows = fit.n_observations,
        r_squared = fit.r_squared(),
        "full-range fit"
    );

    if first > end_year {
        warn!(first, end_year, "data starts after the projection horizon; line is empty");
    }

    Ok(TrendLine::project(
        format!("Fit: {first}\u{2013}{last}"),
        fit,
        first,
        end_year,
    ))
}

/// Fit records from `start_year` on and project from `start_year` through `end_year`.
///
/// Fewer than two qualifying rows is an error, never a fallback to the full range.
pub fn recent_trend(series: &SeaLevelSeries, start_year: i32, end_year: i32) -> Result<TrendLine> {
    let recent = series.since(start_year);
    let fit = LinearFit::fit("recent", &recent)?;
    debug!(
        start_year,
        slope = fit.slope,
        intercept = fit.intercept,
        rows = fit.n_observations,
        r_squared = fit.r_squared(),
        "recent fit"
    );

    Ok(TrendLine::project(
        format!("Fit: {start_year}\u{2013}most recent"),
        fit,
        start_year,
        end_year,
    ))
}
