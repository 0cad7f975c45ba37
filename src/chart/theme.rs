//! Colour theme for rendered charts.

use plotters::style::RGBColor;

/// Colours used when drawing a sea-level chart
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: RGBColor,
    pub foreground: RGBColor,
    pub grid: RGBColor,
    pub scatter: RGBColor,
    pub trend_colors: Vec<RGBColor>,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: RGBColor(255, 255, 255),
            foreground: RGBColor(0, 0, 0),
            grid: RGBColor(220, 220, 220),
            scatter: RGBColor(31, 119, 180),
            trend_colors: vec![
                RGBColor(255, 127, 14),  // Orange
                RGBColor(44, 160, 44),   // Green
                RGBColor(214, 39, 40),   // Red
                RGBColor(148, 103, 189), // Purple
                RGBColor(140, 86, 75),   // Brown
                RGBColor(227, 119, 194), // Pink
            ],
        }
    }
}

impl Theme {
    /// Get a trend-line colour by index (cycles through available colours)
    pub fn trend_color(&self, index: usize) -> RGBColor {
        self.trend_colors[index % self.trend_colors.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(color: RGBColor) -> (u8, u8, u8) {
        (color.0, color.1, color.2)
    }

    #[test]
    fn test_trend_colors_are_distinct() {
        let theme = Theme::default();
        let c0 = rgb(theme.trend_color(0));
        let c1 = rgb(theme.trend_color(1));
        assert_ne!(c0, c1, "the two fits must be told apart");
        assert_ne!(c0, rgb(theme.scatter), "fit 0 should differ from the scatter");
        assert_ne!(c1, rgb(theme.scatter), "fit 1 should differ from the scatter");
    }

    #[test]
    fn test_trend_color_cycles() {
        let theme = Theme::default();
        let len = theme.trend_colors.len();
        assert_eq!(rgb(theme.trend_color(0)), rgb(theme.trend_color(len)));
        assert_eq!(rgb(theme.trend_color(1)), rgb(theme.trend_color(len + 1)));
    }

    #[test]
    fn test_trend_colors_are_not_gray() {
        let theme = Theme::default();
        for (i, color) in theme.trend_colors.iter().enumerate() {
            let (r, g, b) = rgb(*color);
            assert!(
                !(r == g && g == b),
                "Trend color {i} should not be a gray shade: {:?}",
                (r, g, b)
            );
        }
    }
}
