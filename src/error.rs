//! Error taxonomy for the dashboard core.
//!
//! Startup problems (missing file, unreadable file, unresolved required
//! columns) are fatal and surfaced to Python as exceptions. Per-cell parse
//! failures are not errors at all: they become nulls inside the normalizer
//! and the row is retained.

use std::path::PathBuf;

use pyo3::PyErr;
use thiserror::Error;

/// Fatal conditions raised by the loading pipeline and API layer.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("data file not found: {0}")]
    DataFileNotFound(PathBuf),

    #[error("failed to read data file {path}")]
    DataFileUnreadable {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("missing required columns: {0:?}")]
    MissingRequiredColumns(Vec<&'static str>),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown {kind}: {value:?}")]
    UnknownSelector { kind: &'static str, value: String },

    #[error("no dataset loaded; call load_dashboard() first")]
    NotLoaded,
}

impl From<DashboardError> for PyErr {
    fn from(err: DashboardError) -> PyErr {
        use pyo3::exceptions::{PyFileNotFoundError, PyRuntimeError, PyValueError};

        match &err {
            DashboardError::DataFileNotFound(_) => PyFileNotFoundError::new_err(err.to_string()),
            DashboardError::MissingRequiredColumns(_)
            | DashboardError::InvalidConfig(_)
            | DashboardError::UnknownSelector { .. } => PyValueError::new_err(err.to_string()),
            DashboardError::DataFileUnreadable { .. } | DashboardError::NotLoaded => {
                PyRuntimeError::new_err(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_message_names_fields() {
        let err = DashboardError::MissingRequiredColumns(vec!["order_date", "time_taken_min"]);
        let msg = err.to_string();
        assert!(msg.contains("order_date"));
        assert!(msg.contains("time_taken_min"));
    }
}
