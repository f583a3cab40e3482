//! CSV Data Loader Module
//! Reads the flights table with Polars and extracts numeric columns.

use polars::prelude::*;
use std::path::Path;
use thiserror::Error;

/// Rows scanned when inferring column types.
const INFER_SCHEMA_ROWS: usize = 10000;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Column '{0}' not found")]
    MissingColumn(String),
    #[error("Column '{column}' is not numeric (found {dtype})")]
    NonNumericColumn { column: String, dtype: String },
}

/// Handles CSV file loading with Polars.
pub struct DataLoader;

impl DataLoader {
    /// Load a CSV file with a header row, inferring column types.
    pub fn load_csv(file_path: impl AsRef<Path>) -> Result<DataFrame, LoaderError> {
        let path = file_path.as_ref();
        log::debug!("Reading {}", path.display());

        let df = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
            .finish()?
            .collect()?;

        log::info!(
            "Loaded {}: {} rows, {} columns",
            path.display(),
            df.height(),
            df.width()
        );
        Ok(df)
    }

    /// Check whether a dtype holds numbers.
    pub fn is_numeric(dtype: &DataType) -> bool {
        matches!(
            dtype,
            DataType::Float32
                | DataType::Float64
                | DataType::Int8
                | DataType::Int16
                | DataType::Int32
                | DataType::Int64
                | DataType::UInt8
                | DataType::UInt16
                | DataType::UInt32
                | DataType::UInt64
        )
    }

    /// Extract a numeric column as `f64`, skipping nulls and NaN.
    pub fn numeric_column(df: &DataFrame, name: &str) -> Result<Vec<f64>, LoaderError> {
        let column = df
            .column(name)
            .map_err(|_| LoaderError::MissingColumn(name.to_string()))?;

        if !Self::is_numeric(column.dtype()) {
            return Err(LoaderError::NonNumericColumn {
                column: name.to_string(),
                dtype: column.dtype().to_string(),
            });
        }

        let as_f64 = column.cast(&DataType::Float64)?;
        let values: Vec<f64> = as_f64
            .f64()?
            .into_iter()
            .flatten()
            .filter(|v| !v.is_nan())
            .collect();

        let skipped = df.height() - values.len();
        if skipped > 0 {
            log::warn!("Skipped {} missing values in '{}'", skipped, name);
        }

        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("create temp csv");
        file.write_all(contents.as_bytes()).expect("write temp csv");
        file.flush().expect("flush temp csv");
        file
    }

    #[test]
    fn loads_rows_and_columns() {
        let file = write_csv("Airline,Price\nIndiGo,3897\nAir India,7662\nJet Airways,13882\n");
        let df = DataLoader::load_csv(file.path()).unwrap();

        assert_eq!(df.height(), 3);
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, vec!["Airline", "Price"]);
        assert!(DataLoader::is_numeric(df.column("Price").unwrap().dtype()));
    }

    #[test]
    fn missing_file_fails_at_load() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("flights.csv");

        let err = DataLoader::load_csv(&missing).unwrap_err();
        assert!(matches!(err, LoaderError::Csv(_)));
    }

    #[test]
    fn extracts_price_values_in_row_order() {
        let file = write_csv("Price\n100\n200\n150\n400\n100\n");
        let df = DataLoader::load_csv(file.path()).unwrap();

        let values = DataLoader::numeric_column(&df, "Price").unwrap();
        assert_eq!(values, vec![100.0, 200.0, 150.0, 400.0, 100.0]);
    }

    #[test]
    fn missing_column_is_reported() {
        let file = write_csv("Airline,Duration\nIndiGo,2h 50m\n");
        let df = DataLoader::load_csv(file.path()).unwrap();

        let err = DataLoader::numeric_column(&df, "Price").unwrap_err();
        assert!(matches!(err, LoaderError::MissingColumn(ref c) if c == "Price"));
    }

    #[test]
    fn text_column_is_rejected() {
        let file = write_csv("Price\ncheap\nexpensive\n");
        let df = DataLoader::load_csv(file.path()).unwrap();

        let err = DataLoader::numeric_column(&df, "Price").unwrap_err();
        assert!(matches!(err, LoaderError::NonNumericColumn { .. }));
    }

    #[test]
    fn nulls_are_skipped() {
        let file = write_csv("Airline,Price\nIndiGo,3897\nVistara,\nGoAir,5000\n");
        let df = DataLoader::load_csv(file.path()).unwrap();

        let values = DataLoader::numeric_column(&df, "Price").unwrap();
        assert_eq!(values, vec![3897.0, 5000.0]);
    }
}
