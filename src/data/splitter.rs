//! Train/Test Splitter Module
//! Partitions table rows with an independent uniform draw per row.

use polars::prelude::*;
use rand::Rng;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Train fraction must be within [0, 1], got {0}")]
    InvalidFraction(f64),
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Result of a random row partition.
#[derive(Debug, Clone)]
pub struct TrainTestSplit {
    pub train: DataFrame,
    pub test: DataFrame,
    /// `true` for rows that went to `train`.
    pub mask: Vec<bool>,
}

impl TrainTestSplit {
    pub fn train_rows(&self) -> usize {
        self.train.height()
    }

    pub fn test_rows(&self) -> usize {
        self.test.height()
    }

    /// Fraction of mask bits set; 0 for an empty table.
    pub fn train_share(&self) -> f64 {
        if self.mask.is_empty() {
            return 0.0;
        }
        self.mask.iter().filter(|m| **m).count() as f64 / self.mask.len() as f64
    }
}

/// Split with the thread-local RNG. Not reproducible across runs.
pub fn split_train_test(
    df: &DataFrame,
    train_fraction: f64,
) -> Result<TrainTestSplit, SplitError> {
    split_train_test_with_rng(df, train_fraction, &mut rand::rng())
}

/// Split drawing one `U[0, 1)` value per row; rows below `train_fraction`
/// go to `train`, the rest to `test`.
pub fn split_train_test_with_rng<R: Rng>(
    df: &DataFrame,
    train_fraction: f64,
    rng: &mut R,
) -> Result<TrainTestSplit, SplitError> {
    if !(0.0..=1.0).contains(&train_fraction) {
        return Err(SplitError::InvalidFraction(train_fraction));
    }

    let mask: Vec<bool> = (0..df.height())
        .map(|_| rng.random::<f64>() < train_fraction)
        .collect();

    let selector = BooleanChunked::from_slice("mask".into(), &mask);
    let train = df.filter(&selector)?;
    let test = df.filter(&!&selector)?;

    log::info!(
        "Split {} rows: {} train, {} test",
        df.height(),
        train.height(),
        test.height()
    );

    Ok(TrainTestSplit { train, test, mask })
}
