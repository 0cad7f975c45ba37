//! Least-squares trend analysis over the sea-level series.

mod regression;
mod trend;

pub use regression::{LinearFit, MIN_FIT_ROWS};
pub use trend::{full_range_trend, recent_trend, TrendLine};
