//! Run Settings
//! Hardcoded values for the single pipeline run.

use crate::stats::DEFAULT_BINS;

/// CSV file read from the working directory.
pub const DEFAULT_CSV_PATH: &str = "flights.csv";

/// Column whose distribution is plotted.
pub const DEFAULT_COLUMN: &str = "Price";

/// Probability that a row lands in the training subset.
pub const DEFAULT_TRAIN_FRACTION: f64 = 0.8;

/// Settings for one run of the pipeline.
#[derive(Debug, Clone)]
pub struct Settings {
    pub csv_path: String,
    pub column: String,
    pub train_fraction: f64,
    pub bins: usize,
    pub window_title: String,
    pub window_size: [f32; 2],
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            csv_path: DEFAULT_CSV_PATH.to_string(),
            column: DEFAULT_COLUMN.to_string(),
            train_fraction: DEFAULT_TRAIN_FRACTION,
            bins: DEFAULT_BINS,
            window_title: format!("{} histogram", DEFAULT_COLUMN),
            window_size: [1100.0, 700.0],
        }
    }
}
