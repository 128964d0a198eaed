//! # API Module
//!
//! Sole entry point for Python (Streamlit) integration. Keeps PyO3 isolated
//! from the internal pipeline and services so those can evolve freely.
//!
//! - [`types`]: Python-facing DTOs with `#[pyclass]` derives (primitives only)
//! - [`conversions`]: internal model -> DTO conversion layer
//! - [`streamlit`]: `#[pyfunction]` exports and the session dataset

pub mod conversions;
pub mod streamlit;
pub mod types;

pub use streamlit::register_api_functions;
pub use types::*;
