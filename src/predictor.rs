//! The trend plotter: load → fit both windows → draw → save.

use tracing::debug;

use crate::analysis::{full_range_trend, recent_trend};
use crate::chart::{render_to_file, SeaLevelChart, Theme};
use crate::cli::AppConfig;
use crate::data::{DataSource, SeaLevelSeries};
use crate::error::Result;

/// Fit both trend lines for `series` and assemble the chart without drawing it
pub fn build_chart(series: &SeaLevelSeries, config: &AppConfig) -> Result<SeaLevelChart> {
    let full = full_range_trend(series, config.projection_end_year)?;
    let recent = recent_trend(series, config.recent_start_year, config.projection_end_year)?;

    Ok(SeaLevelChart::new(
        config.title.as_str(),
        series,
        full,
        recent,
        config.output.as_path(),
        config.figure_size,
    ))
}

/// Load the dataset named by `config`, save the chart and return it.
///
/// A missing input file is reported as
/// [`PredictorError::SourceMissing`](crate::error::PredictorError::SourceMissing).
pub fn draw_plot(config: &AppConfig) -> Result<SeaLevelChart> {
    let source = DataSource::new(&config.input);
    let series = source.load()?;
    debug!(path = ?source.path(), rows = series.len(), "building chart");

    let chart = build_chart(&series, config)?;
    render_to_file(&chart, &Theme::default())?;
    Ok(chart)
}
