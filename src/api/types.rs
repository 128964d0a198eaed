//! Python-facing Data Transfer Objects (DTOs).
//!
//! Every `#[pyclass]` exposed to the Streamlit app lives here. DTO fields
//! are PyO3-friendly primitives (String, f64, usize, Vec, HashMap) only;
//! chrono dates and internal enums are rendered to strings or keys at this
//! boundary.

use std::collections::HashMap;

use pyo3::prelude::*;
use serde::{Deserialize, Serialize};

/// Result of loading and preparing the dataset.
#[pyclass(module = "dta_rust", get_all)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadReport {
    /// Number of delivery records after normalization (no rows are dropped).
    pub rows: usize,
    /// Canonical field name -> actual header resolved in the input table.
    pub resolved_columns: HashMap<String, String>,
    /// Canonical fields with no matching header.
    pub missing_columns: Vec<String>,
    /// Whether all four coordinate columns resolved (distance available).
    pub has_coordinates: bool,
    pub on_time_min: u32,
    pub on_time_max: u32,
    pub on_time_default: u32,
}

#[pymethods]
impl LoadReport {
    fn __repr__(&self) -> String {
        format!(
            "LoadReport(rows={}, resolved={}, missing={})",
            self.rows,
            self.resolved_columns.len(),
            self.missing_columns.len()
        )
    }
}

/// Multi-select filter state coming from the sidebar widgets. Empty lists
/// leave the corresponding field unconstrained.
#[pyclass(module = "dta_rust", get_all, set_all)]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterSelection {
    pub cities: Vec<String>,
    pub festivals: Vec<String>,
    pub weathers: Vec<String>,
    pub traffics: Vec<String>,
}

#[pymethods]
impl FilterSelection {
    #[new]
    #[pyo3(signature = (cities=Vec::new(), festivals=Vec::new(), weathers=Vec::new(), traffics=Vec::new()))]
    pub fn new(
        cities: Vec<String>,
        festivals: Vec<String>,
        weathers: Vec<String>,
        traffics: Vec<String>,
    ) -> Self {
        Self {
            cities,
            festivals,
            weathers,
            traffics,
        }
    }
}

/// Values observed in the loaded data, for populating the filter widgets.
#[pyclass(module = "dta_rust", get_all)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterOptions {
    pub cities: Vec<String>,
    pub festivals: Vec<String>,
    pub weathers: Vec<String>,
    pub traffics: Vec<String>,
}

/// Headline KPI block. `None` fields render as the "no data" dash.
#[pyclass(module = "dta_rust", get_all)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total_orders: usize,
    pub mean_time_min: Option<f64>,
    pub on_time_rate: f64,
    pub mean_speed_kmh: Option<f64>,
}

/// One month bucket of the trend line.
#[pyclass(module = "dta_rust", get_all)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendPoint {
    pub month: String,
    pub avg_time_min: f64,
    pub count: usize,
}

/// One bar of a category breakdown.
#[pyclass(module = "dta_rust", get_all)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupAverage {
    pub label: String,
    pub avg_time_min: f64,
    pub count: usize,
}

/// One cell of the weather/traffic pivot.
#[pyclass(module = "dta_rust", get_all)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub weather: String,
    pub traffic: String,
    pub avg_time_min: f64,
    pub count: usize,
}

/// One aggregated point of the rating-vs-time view.
#[pyclass(module = "dta_rust", get_all)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScatterGroupPoint {
    pub label: String,
    pub avg_rating: f64,
    pub avg_time_min: f64,
    pub count: usize,
}

/// One sampled raw point (jitter already applied to the rating).
#[pyclass(module = "dta_rust", get_all)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScatterRawPoint {
    pub rating_jittered: f64,
    pub time_min: f64,
}

/// Rating-vs-time data at a chosen aggregation level. Exactly one of
/// `grouped`/`raw` is populated, according to `level`.
#[pyclass(module = "dta_rust", get_all)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingScatterData {
    pub level: String,
    pub grouped: Vec<ScatterGroupPoint>,
    pub raw: Vec<ScatterRawPoint>,
}
