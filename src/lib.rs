//! sea-level-predictor: fits linear trends to annual sea-level data and plots
//! them, projected through 2050.
//!
//! The whole pipeline is [`draw_plot`]: read the CSV, fit one line over every
//! year and one over 2000 onward, draw both over the scatter, save the image
//! and hand back the [`SeaLevelChart`].

pub mod analysis;
pub mod chart;
pub mod cli;
pub mod data;
pub mod error;
pub mod predictor;

pub use chart::SeaLevelChart;
pub use cli::AppConfig;
pub use error::{PredictorError, Result};
pub use predictor::{build_chart, draw_plot};
