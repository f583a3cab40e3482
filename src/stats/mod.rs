//! Stats module - histogram binning and descriptive statistics

mod calculator;
mod histogram;

pub use calculator::{ColumnSummary, StatsCalculator};
pub use histogram::{Histogram, DEFAULT_BINS};
