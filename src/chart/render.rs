//! Raster and vector rendering of a [`SeaLevelChart`] with plotters.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use super::figure::SeaLevelChart;
use super::theme::Theme;
use crate::error::{PredictorError, Result};

const SCATTER_RADIUS: u32 = 3;
const LINE_WIDTH: u32 = 2;

/// Draw the chart onto any plotters drawing area and present it
pub fn draw<DB>(
    root: DrawingArea<DB, Shift>,
    chart: &SeaLevelChart,
    theme: &Theme,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&theme.background)?;

    let mut ctx = ChartBuilder::on(&root)
        .caption(
            &chart.title,
            ("sans-serif", 26).into_font().color(&theme.foreground),
        )
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 70)
        .set_label_area_size(LabelAreaPosition::Bottom, 50)
        .build_cartesian_2d(chart.x_range(), chart.y_range())?;

    ctx.configure_mesh()
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .x_label_formatter(&|v| format!("{:.0}", v))
        .y_label_formatter(&|v| format!("{:.1}", v))
        .light_line_style(theme.grid.stroke_width(1))
        .axis_desc_style(("sans-serif", 18).into_font())
        .label_style(("sans-serif", 14).into_font())
        .draw()?;

    let scatter = theme.scatter;
    ctx.draw_series(
        chart
            .scatter_points()
            .map(|p| Circle::new(p, SCATTER_RADIUS, scatter.filled())),
    )?;

    for (i, line) in chart.trend_lines().into_iter().enumerate() {
        let color = theme.trend_color(i);
        ctx.draw_series(LineSeries::new(
            line.points.iter().map(|&(year, level)| (f64::from(year), level)),
            color.stroke_width(LINE_WIDTH),
        ))?
        .label(line.label.as_str())
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 24, y)], color.stroke_width(LINE_WIDTH))
        });
    }

    ctx.configure_series_labels()
        .background_style(&theme.background.mix(0.8))
        .border_style(&theme.foreground.mix(0.3))
        .label_font(("sans-serif", 14).into_font())
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    Ok(())
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"))
}

/// Write the chart to `chart.output`.
///
/// `.svg` paths get a vector document; anything else goes through the bitmap
/// encoder, which picks the image format from the extension.
pub fn render_to_file(chart: &SeaLevelChart, theme: &Theme) -> Result<()> {
    let render_error = |message: String| PredictorError::Render {
        path: chart.output.clone(),
        message,
    };

    if is_svg(&chart.output) {
        let root = SVGBackend::new(&chart.output, chart.size).into_drawing_area();
        draw(root, chart, theme).map_err(|e| render_error(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(&chart.output, chart.size).into_drawing_area();
        draw(root, chart, theme).map_err(|e| render_error(e.to_string()))?;
    }
    info!(path = ?chart.output, "chart saved");
    Ok(())
}

/// Render the chart to an SVG document in memory
pub fn render_svg(chart: &SeaLevelChart, theme: &Theme) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, chart.size).into_drawing_area();
        draw(root, chart, theme).map_err(|e| PredictorError::Render {
            path: chart.output.clone(),
            message: e.to_string(),
        })?;
    }
    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{full_range_trend, recent_trend};
    use crate::data::{SeaLevelRecord, SeaLevelSeries};

    fn chart_at(output: std::path::PathBuf) -> SeaLevelChart {
        let series: SeaLevelSeries = (1880..=2013)
            .map(|y| SeaLevelRecord::new(y, 0.063 * f64::from(y - 1880)))
            .collect();
        let full = full_range_trend(&series, 2050).unwrap();
        let recent = recent_trend(&series, 2000, 2050).unwrap();
        SeaLevelChart::new("Rise in Sea Level", &series, full, recent, output, (1000, 600))
    }

    #[test]
    fn test_render_png_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let chart = chart_at(dir.path().join("sea_level_plot.png"));
        render_to_file(&chart, &Theme::default()).unwrap();

        let bytes = std::fs::read(chart.output()).unwrap();
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
    }

    #[test]
    fn test_render_svg_has_title_and_legend() {
        let chart = chart_at("unused.svg".into());
        let svg = render_svg(&chart, &Theme::default()).unwrap();
        assert!(svg.contains("Rise in Sea Level"));
        assert!(svg.contains("Sea Level (inches)"));
        assert!(svg.contains("most recent"));
    }

    #[test]
    fn test_svg_extension_writes_svg_document() {
        let dir = tempfile::tempdir().unwrap();
        let chart = chart_at(dir.path().join("sea_level_plot.SVG"));
        render_to_file(&chart, &Theme::default()).unwrap();

        let text = std::fs::read_to_string(chart.output()).unwrap();
        assert!(text.contains("<svg"));
        assert!(text.contains("Rise in Sea Level"));
    }

    #[test]
    fn test_is_svg() {
        assert!(is_svg(Path::new("plot.svg")));
        assert!(!is_svg(Path::new("plot.png")));
        assert!(!is_svg(Path::new("svg")));
    }

    #[test]
    fn test_render_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let chart = chart_at(dir.path().join("no-such-dir").join("plot.png"));
        let err = render_to_file(&chart, &Theme::default()).unwrap_err();
        assert!(matches!(err, PredictorError::Render { .. }));
    }
}
