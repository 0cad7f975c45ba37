//! sea-level-predictor: plots annual sea-level data with two trend lines
//! projected to 2050 and saves the chart as an image.

use anyhow::{Context, Result};
use sea_level_predictor::cli::{AppConfig, Cli};
use sea_level_predictor::{draw_plot, PredictorError};
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse_args();
    let config = AppConfig::from_command(cli.command);

    match draw_plot(&config) {
        Ok(chart) => {
            println!("Figure generated: {}", chart.output().display());
            if config.print_summary {
                println!("{}", chart.to_json().context("Failed to serialize chart")?);
            }
        }
        Err(PredictorError::SourceMissing { path }) => {
            warn!(path = ?path, "input dataset missing");
            println!(
                "\u{26a0}\u{fe0f}  Could not find '{}'. Place the dataset in the working directory and run again.",
                path.display()
            );
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to plot {}", config.input.display()));
        }
    }

    Ok(())
}
