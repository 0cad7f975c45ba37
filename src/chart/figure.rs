//! The in-memory chart handed back to callers after a plot is generated.

use std::ops::Range;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::analysis::TrendLine;
use crate::data::{SeaLevelRecord, SeaLevelSeries};

/// Fraction of the data span added on each side of the y axis
const Y_PADDING: f64 = 0.05;
/// Years of headroom on each side of the x axis
const X_PADDING_YEARS: f64 = 5.0;

/// Everything needed to draw (or inspect) the sea-level chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeaLevelChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub observations: Vec<SeaLevelRecord>,
    pub full_range: TrendLine,
    pub recent: TrendLine,
    pub output: PathBuf,
    /// Image size in pixels (width, height)
    pub size: (u32, u32),
}

impl SeaLevelChart {
    pub fn new(
        title: impl Into<String>,
        series: &SeaLevelSeries,
        full_range: TrendLine,
        recent: TrendLine,
        output: impl Into<PathBuf>,
        size: (u32, u32),
    ) -> Self {
        SeaLevelChart {
            title: title.into(),
            x_label: "Year".to_string(),
            y_label: "Sea Level (inches)".to_string(),
            observations: series.records().to_vec(),
            full_range,
            recent,
            output: output.into(),
            size,
        }
    }

    /// Trend lines in legend order
    pub fn trend_lines(&self) -> [&TrendLine; 2] {
        [&self.full_range, &self.recent]
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Scatter points as (year, level) floats
    pub fn scatter_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.observations
            .iter()
            .map(|r| (f64::from(r.year), r.level))
    }

    fn all_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let lines = self
            .trend_lines()
            .into_iter()
            .flat_map(|line| line.points.iter().map(|&(y, l)| (f64::from(y), l)));
        self.scatter_points().chain(lines)
    }

    /// Year axis bounds covering observations and both projections
    pub fn x_range(&self) -> Range<f64> {
        let (mut x_min, mut x_max) = self
            .all_points()
            .fold((f64::MAX, f64::MIN), |(lo, hi), (x, _)| (lo.min(x), hi.max(x)));

        if x_min > x_max {
            return 0.0..1.0;
        }
        x_min -= X_PADDING_YEARS;
        x_max += X_PADDING_YEARS;
        x_min..x_max
    }

    /// Sea-level axis bounds covering observations and both projections
    pub fn y_range(&self) -> Range<f64> {
        let (mut y_min, mut y_max) = self
            .all_points()
            .filter(|(_, y)| y.is_finite())
            .fold((f64::MAX, f64::MIN), |(lo, hi), (_, y)| (lo.min(y), hi.max(y)));

        if y_min > y_max {
            return 0.0..1.0;
        }
        if y_min >= y_max {
            y_max = y_min + 1.0;
        }

        let span = y_max - y_min;
        y_min -= span * Y_PADDING;
        y_max += span * Y_PADDING;
        y_min..y_max
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{full_range_trend, recent_trend};

    fn sample_chart() -> SeaLevelChart {
        let series: SeaLevelSeries = (1880..=2013)
            .map(|y| SeaLevelRecord::new(y, 0.06 * f64::from(y - 1880)))
            .collect();
        let full = full_range_trend(&series, 2050).unwrap();
        let recent = recent_trend(&series, 2000, 2050).unwrap();
        SeaLevelChart::new("Rise in Sea Level", &series, full, recent, "out.png", (1000, 600))
    }

    #[test]
    fn test_axis_labels() {
        let chart = sample_chart();
        assert_eq!(chart.x_label, "Year");
        assert_eq!(chart.y_label, "Sea Level (inches)");
        assert_eq!(chart.observations.len(), 134);
    }

    #[test]
    fn test_x_range_covers_horizon() {
        let chart = sample_chart();
        let x = chart.x_range();
        assert!(x.start < 1880.0);
        assert!(x.end > 2050.0);
    }

    #[test]
    fn test_y_range_covers_projection() {
        let chart = sample_chart();
        let y = chart.y_range();
        let top = chart.full_range.projected_level().unwrap();
        assert!(y.start < 0.0);
        assert!(y.end > top);
    }

    #[test]
    fn test_json_contains_fits() {
        let chart = sample_chart();
        let json: serde_json::Value = serde_json::from_str(&chart.to_json().unwrap()).unwrap();
        assert_eq!(json["title"], "Rise in Sea Level");
        assert_eq!(json["recent"]["start_year"], 2000);
        assert_eq!(json["full_range"]["end_year"], 2050);
        assert!(json["full_range"]["fit"]["slope"].is_number());
    }
}
