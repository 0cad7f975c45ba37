//! Command-line interface argument parsing for sea-level-predictor.
//!
//! With no arguments the binary reads `epa-sea-level.csv` and writes
//! `sea_level_plot.png` in the working directory:
//! - `sea-level-predictor`
//! - `sea-level-predictor plot --summary`
//! - `sea-level-predictor plot --input data/epa.csv --output out/plot.png`

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Plot annual sea-level measurements with full-record and post-2000 trend lines projected to 2050.
#[derive(Parser, Debug)]
#[command(name = "sea-level-predictor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fit both trend lines and save the chart (the default)
    Plot {
        /// CSV file with "Year" and "CSIRO Adjusted Sea Level" columns
        #[arg(short, long, default_value = AppConfig::DEFAULT_INPUT)]
        input: PathBuf,

        /// Image file to write
        #[arg(short, long, default_value = AppConfig::DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Print the fitted chart as JSON after saving it
        #[arg(long)]
        summary: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub print_summary: bool,
    /// First year of the recent-trend window
    pub recent_start_year: i32,
    /// Last year both trend lines are projected to
    pub projection_end_year: i32,
    pub title: String,
    /// Image size in pixels (width, height)
    pub figure_size: (u32, u32),
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            input: PathBuf::from(Self::DEFAULT_INPUT),
            output: PathBuf::from(Self::DEFAULT_OUTPUT),
            print_summary: false,
            recent_start_year: Self::RECENT_START_YEAR,
            projection_end_year: Self::PROJECTION_END_YEAR,
            title: Self::TITLE.to_string(),
            figure_size: Self::FIGURE_SIZE,
        }
    }
}

impl AppConfig {
    pub const DEFAULT_INPUT: &'static str = "epa-sea-level.csv";
    pub const DEFAULT_OUTPUT: &'static str = "sea_level_plot.png";
    pub const RECENT_START_YEAR: i32 = 2000;
    pub const PROJECTION_END_YEAR: i32 = 2050;
    pub const TITLE: &'static str = "Rise in Sea Level";
    pub const FIGURE_SIZE: (u32, u32) = (1000, 600);

    /// Create AppConfig from the parsed command; no subcommand means `plot` with defaults
    pub fn from_command(command: Option<Commands>) -> Self {
        match command {
            Some(Commands::Plot {
                input,
                output,
                summary,
            }) => Self::from_plot_command(input, output, summary),
            None => Self::default(),
        }
    }

    pub fn from_plot_command(input: PathBuf, output: PathBuf, summary: bool) -> Self {
        AppConfig {
            input,
            output,
            print_summary: summary,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::from_command(None);
        assert_eq!(config.input, PathBuf::from("epa-sea-level.csv"));
        assert_eq!(config.output, PathBuf::from("sea_level_plot.png"));
        assert_eq!(config.recent_start_year, 2000);
        assert_eq!(config.projection_end_year, 2050);
        assert!(!config.print_summary);
    }

    #[test]
    fn test_bare_invocation_parses() {
        let cli = Cli::try_parse_from(["sea-level-predictor"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_plot_defaults_match_fixed_paths() {
        let cli = Cli::try_parse_from(["sea-level-predictor", "plot"]).unwrap();
        let config = AppConfig::from_command(cli.command);
        assert_eq!(config.input, PathBuf::from(AppConfig::DEFAULT_INPUT));
        assert_eq!(config.output, PathBuf::from(AppConfig::DEFAULT_OUTPUT));
    }

    #[test]
    fn test_plot_overrides() {
        let cli = Cli::try_parse_from([
            "sea-level-predictor",
            "plot",
            "--input",
            "data/epa.csv",
            "-o",
            "out/plot.png",
            "--summary",
        ])
        .unwrap();
        let config = AppConfig::from_command(cli.command);
        assert_eq!(config.input, PathBuf::from("data/epa.csv"));
        assert_eq!(config.output, PathBuf::from("out/plot.png"));
        assert!(config.print_summary);
        assert_eq!(config.projection_end_year, 2050);
    }
}
