//! Statistics Calculator Module
//! Descriptive statistics for the plotted column.

use statrs::statistics::{Data, Median, Statistics};

/// Descriptive statistics for one column.
#[derive(Debug, Clone)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub median: f64,
    pub max: f64,
}

impl ColumnSummary {
    fn empty(column: &str) -> Self {
        Self {
            column: column.to_string(),
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            median: f64::NAN,
            max: f64::NAN,
        }
    }
}

pub struct StatsCalculator;

impl StatsCalculator {
    /// Summarize `values` with sample standard deviation (n - 1).
    pub fn summarize(column: &str, values: &[f64]) -> ColumnSummary {
        let n = values.len();
        if n == 0 {
            return ColumnSummary::empty(column);
        }

        let std = if n > 1 {
            Statistics::std_dev(values.iter())
        } else {
            0.0
        };

        ColumnSummary {
            column: column.to_string(),
            count: n,
            mean: Statistics::mean(values.iter()),
            std,
            min: Statistics::min(values.iter()),
            median: Data::new(values.to_vec()).median(),
            max: Statistics::max(values.iter()),
        }
    }
}
