//! Raw table loading.
//!
//! The input file is read into a Polars DataFrame with an all-string schema.
//! No typing happens here: per-cell coercion belongs to the normalizer, so a
//! bad cell can become a null without polars' column-level inference deciding
//! types for us.

use std::path::Path;

use anyhow::Context;
use polars::prelude::*;

use crate::error::DashboardError;

/// Read the delivery table from a CSV file, every column as String.
pub fn read_raw_table(path: &Path) -> Result<DataFrame, DashboardError> {
    if !path.exists() {
        return Err(DashboardError::DataFileNotFound(path.to_path_buf()));
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0)) // all columns String
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .context("failed to parse CSV into DataFrame")
        .map_err(|source| DashboardError::DataFileUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(df)
}

/// Header names of a loaded table.
pub fn header_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_is_fatal() {
        let err = read_raw_table(Path::new("/nonexistent/deliveries.csv")).unwrap_err();
        assert!(matches!(err, DashboardError::DataFileNotFound(_)));
    }

    #[test]
    fn test_reads_all_columns_as_string() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "Order_Date,Time_taken (min),City").unwrap();
        writeln!(file, "12-03-2022,24,Urban").unwrap();
        writeln!(file, "13-03-2022,not_a_number,Metro").unwrap();
        file.flush().unwrap();

        let df = read_raw_table(file.path()).unwrap();
        assert_eq!(df.height(), 2);
        for name in header_names(&df) {
            assert_eq!(df.column(&name).unwrap().dtype(), &DataType::String);
        }

        let times = df.column("Time_taken (min)").unwrap().str().unwrap();
        assert_eq!(times.get(0), Some("24"));
        assert_eq!(times.get(1), Some("not_a_number"));
    }
}
