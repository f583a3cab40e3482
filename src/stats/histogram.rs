//! Histogram Module
//! Equal-width binning of a numeric column.

use rayon::prelude::*;
use thiserror::Error;

/// Bin count used when none is given (pandas/matplotlib default).
pub const DEFAULT_BINS: usize = 10;

#[derive(Error, Debug, PartialEq)]
pub enum HistogramError {
    #[error("No values to bin")]
    NoValues,
    #[error("Bin count must be positive")]
    ZeroBins,
    #[error("Value {0} is not finite")]
    NonFinite(f64),
}

/// Binned frequency counts.
///
/// `edges` has one more element than `counts`. Bin `i` covers
/// `[edges[i], edges[i + 1])`, the last bin also includes its right edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin `values` into `bins` equal-width bins spanning their range.
    pub fn compute(values: &[f64], bins: usize) -> Result<Self, HistogramError> {
        if bins == 0 {
            return Err(HistogramError::ZeroBins);
        }
        if values.is_empty() {
            return Err(HistogramError::NoValues);
        }
        if let Some(&bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(HistogramError::NonFinite(bad));
        }

        let (mut lo, mut hi) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let mut edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();
        edges[bins] = hi;

        let counts = values
            .par_iter()
            .fold(
                || vec![0usize; bins],
                |mut acc, &v| {
                    acc[Self::bin_index(v, &edges, width)] += 1;
                    acc
                },
            )
            .reduce(
                || vec![0usize; bins],
                |mut a, b| {
                    a.iter_mut().zip(b).for_each(|(x, y)| *x += y);
                    a
                },
            );

        log::debug!(
            "Histogram over [{}, {}] with {} bins of width {}",
            lo,
            hi,
            bins,
            width
        );

        Ok(Self { edges, counts })
    }

    /// Estimate the bin from the width, then nudge it so `value` lies
    /// within the stored edges of that bin.
    fn bin_index(value: f64, edges: &[f64], width: f64) -> usize {
        let last = edges.len() - 2;
        let mut idx = (((value - edges[0]) / width) as usize).min(last);
        if value < edges[idx] {
            idx -= 1;
        } else if idx != last && value >= edges[idx + 1] {
            idx += 1;
        }
        idx
    }

    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Iterate `(center, width, count)` per bin.
    pub fn bars(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        self.edges
            .windows(2)
            .zip(&self.counts)
            .map(|(edge, &count)| ((edge[0] + edge[1]) / 2.0, edge[1] - edge[0], count))
    }

    pub fn range(&self) -> (f64, f64) {
        (self.edges[0], self.edges[self.edges.len() - 1])
    }
}
