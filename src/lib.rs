use pyo3::prelude::*;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod parsing;
pub mod preprocessing;
pub mod services;
pub mod transformations;

/// Delivery Time Analytics backend - data preparation and derived views
/// for the Streamlit dashboard.
#[pymodule]
fn dta_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    api::register_api_functions(m)
}
