//! Fare Hist - Flight Price Histogram
//!
//! Loads `flights.csv`, splits its rows into train/test subsets and shows a
//! histogram of the `Price` column in a native window.

mod charts;
mod config;
mod data;
mod gui;
mod stats;

use anyhow::Context;
use config::Settings;
use data::{split_train_test, DataLoader};
use gui::HistogramView;
use stats::{Histogram, StatsCalculator};

/// Load, split and bin. Everything up to the window.
fn prepare_view(settings: &Settings) -> anyhow::Result<HistogramView> {
    let df = DataLoader::load_csv(&settings.csv_path)
        .with_context(|| format!("loading {}", settings.csv_path))?;

    let split = split_train_test(&df, settings.train_fraction).context("splitting rows")?;

    let values = DataLoader::numeric_column(&df, &settings.column)
        .with_context(|| format!("reading column {}", settings.column))?;
    let histogram = Histogram::compute(&values, settings.bins)
        .with_context(|| format!("binning column {}", settings.column))?;
    let summary = StatsCalculator::summarize(&settings.column, &values);

    let (lo, hi) = histogram.range();
    log::info!(
        "Binned {} values of {} into {} bins over [{}, {}]",
        histogram.total(),
        settings.column,
        histogram.bins(),
        lo,
        hi
    );

    Ok(HistogramView {
        column: settings.column.clone(),
        source: settings.csv_path.clone(),
        histogram,
        summary,
        split,
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    run(&Settings::default())
}

/// Full pipeline. Errors are returned with their context chain and printed
/// once by `main`.
fn run(settings: &Settings) -> anyhow::Result<()> {
    let view = prepare_view(settings)?;
    gui::show_histogram(settings, view).context("showing histogram")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn settings_for(contents: &str) -> (tempfile::NamedTempFile, Settings) {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();

        let settings = Settings {
            csv_path: file.path().to_string_lossy().to_string(),
            ..Settings::default()
        };
        (file, settings)
    }

    #[test]
    fn histogram_covers_full_table_regardless_of_split() {
        let (_file, settings) = settings_for(
            "Airline,Source,Price\n\
             IndiGo,Banglore,100\n\
             Air India,Kolkata,200\n\
             Jet Airways,Delhi,150\n\
             IndiGo,Kolkata,400\n\
             SpiceJet,Chennai,100\n",
        );

        for _ in 0..20 {
            let view = prepare_view(&settings).unwrap();
            assert_eq!(view.histogram.total(), 5);
            assert_eq!(view.histogram.counts, vec![2, 1, 0, 1, 0, 0, 0, 0, 0, 1]);
            assert_eq!(view.split.train_rows() + view.split.test_rows(), 5);
            assert_eq!(view.summary.count, 5);
        }
    }

    #[test]
    fn missing_price_column_fails_before_plotting() {
        let (_file, settings) = settings_for("Airline,Duration\nIndiGo,2h 50m\nVistara,3h\n");

        let err = prepare_view(&settings).err().unwrap();
        assert!(format!("{err:#}").contains("Price"));
    }

    #[test]
    fn missing_file_fails_at_load() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            csv_path: dir.path().join("flights.csv").to_string_lossy().to_string(),
            ..Settings::default()
        };

        let err = prepare_view(&settings).err().unwrap();
        assert!(format!("{err:#}").starts_with("loading"));
    }

    #[test]
    fn run_returns_error_chain_without_opening_window() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            csv_path: dir.path().join("flights.csv").to_string_lossy().to_string(),
            ..Settings::default()
        };

        let err = run(&settings).unwrap_err();
        let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
        assert!(chain.len() >= 2);
        assert!(chain[0].starts_with("loading"));
        assert!(chain[1].starts_with("Failed to load CSV"));
    }

    #[test]
    fn all_null_prices_are_rejected() {
        let (_file, settings) = settings_for("Airline,Price\nIndiGo,\nVistara,\n");
        assert!(prepare_view(&settings).is_err());
    }
}
