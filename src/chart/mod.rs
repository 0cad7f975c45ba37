//! Chart model and rendering for the sea-level plot.

mod figure;
mod render;
mod theme;

pub use figure::SeaLevelChart;
pub use render::{draw, render_svg, render_to_file};
pub use theme::Theme;
