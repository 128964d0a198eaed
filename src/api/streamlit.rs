//! Streamlit API functions.
//!
//! `#[pyfunction]` exports wrapping the pipeline and services. Each call
//! converts DTOs at the boundary, runs against the session dataset, and
//! converts results back. The session dataset is loaded once and replaced
//! wholesale on reload; all reads share the same immutable `Arc`.

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use log::info;
use once_cell::sync::Lazy;
use pyo3::prelude::*;

use crate::api::types as api;
use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::models::CategoricalField;
use crate::preprocessing::Dataset;
use crate::services::{distributions, heatmap, scatter, summary, trends};
use crate::transformations::filtering;

static SESSION: Lazy<RwLock<Option<Arc<Dataset>>>> = Lazy::new(|| RwLock::new(None));

fn current_dataset() -> Result<Arc<Dataset>, DashboardError> {
    SESSION
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .ok_or(DashboardError::NotLoaded)
}

fn view_of<'a>(
    dataset: &'a Dataset,
    filters: &api::FilterSelection,
) -> Vec<&'a crate::models::DeliveryRecord> {
    let selection = filtering::FilterSelection::from(filters);
    dataset.view(&selection)
}

/// Load the delivery dataset and make it the session dataset.
///
/// Args:
///     path: Path to the delivery CSV file.
///     config_path: Optional path to a dashboard TOML config.
///
/// Returns:
///     LoadReport describing the resolved columns and slider bounds.
#[pyfunction]
#[pyo3(signature = (path, config_path=None))]
pub fn load_dashboard(path: &str, config_path: Option<&str>) -> PyResult<api::LoadReport> {
    let config = match config_path {
        Some(p) => DashboardConfig::from_file(Path::new(p))?,
        None => DashboardConfig::default(),
    };

    let dataset = Dataset::load(Path::new(path), config)?;
    let report = api::LoadReport::from(&dataset);
    info!("session dataset replaced: {} rows", report.rows);

    let mut guard = SESSION.write().unwrap_or_else(PoisonError::into_inner);
    *guard = Some(Arc::new(dataset));
    Ok(report)
}

/// Distinct values observed in the loaded data for each filterable field.
#[pyfunction]
pub fn get_filter_options() -> PyResult<api::FilterOptions> {
    let dataset = current_dataset()?;
    Ok(api::FilterOptions::from(dataset.as_ref()))
}

/// Headline KPIs for the filtered view. The threshold is clamped into the
/// configured slider range.
#[pyfunction]
pub fn get_summary(filters: api::FilterSelection, threshold_min: u32) -> PyResult<api::SummaryStats> {
    let dataset = current_dataset()?;
    let view = view_of(&dataset, &filters);
    let threshold = dataset.config.clamp_threshold(threshold_min);
    let stats = summary::compute_summary(&view, f64::from(threshold));
    Ok(stats.into())
}

/// Monthly average delivery time, chronological.
#[pyfunction]
pub fn get_monthly_trend(filters: api::FilterSelection) -> PyResult<Vec<api::TrendPoint>> {
    let dataset = current_dataset()?;
    let view = view_of(&dataset, &filters);
    Ok(trends::compute_monthly_trend(&view)
        .into_iter()
        .map(Into::into)
        .collect())
}

/// Average delivery time grouped by one categorical field
/// ("weather", "traffic", "order_type", "vehicle_type", "festival", "city").
#[pyfunction]
pub fn get_group_averages(
    filters: api::FilterSelection,
    field: &str,
) -> PyResult<Vec<api::GroupAverage>> {
    let dataset = current_dataset()?;
    let categorical =
        CategoricalField::from_key(field).ok_or_else(|| DashboardError::UnknownSelector {
            kind: "categorical field",
            value: field.to_string(),
        })?;
    let view = view_of(&dataset, &filters);
    Ok(distributions::compute_group_averages(&view, categorical)
        .into_iter()
        .map(Into::into)
        .collect())
}

/// Weather x traffic pivot of average delivery time.
#[pyfunction]
pub fn get_weather_traffic_heatmap(
    filters: api::FilterSelection,
) -> PyResult<Vec<api::HeatmapCell>> {
    let dataset = current_dataset()?;
    let view = view_of(&dataset, &filters);
    Ok(heatmap::compute_weather_traffic_heatmap(&view)
        .into_iter()
        .map(Into::into)
        .collect())
}

/// Rating-vs-time view at the requested aggregation level
/// ("vehicle_condition", "vehicle_type", "order_type", "city", "none").
#[pyfunction]
pub fn get_rating_scatter(
    filters: api::FilterSelection,
    level: &str,
) -> PyResult<api::RatingScatterData> {
    let dataset = current_dataset()?;
    let level = scatter::AggregationLevel::from_key(level)?;
    let view = view_of(&dataset, &filters);
    let result = scatter::compute_rating_scatter(&view, level, &dataset.config.scatter);
    Ok(api::RatingScatterData::from_result(level, result))
}

/// Register all API functions and classes with the Python module.
pub fn register_api_functions(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(load_dashboard, m)?)?;
    m.add_function(wrap_pyfunction!(get_filter_options, m)?)?;
    m.add_function(wrap_pyfunction!(get_summary, m)?)?;
    m.add_function(wrap_pyfunction!(get_monthly_trend, m)?)?;
    m.add_function(wrap_pyfunction!(get_group_averages, m)?)?;
    m.add_function(wrap_pyfunction!(get_weather_traffic_heatmap, m)?)?;
    m.add_function(wrap_pyfunction!(get_rating_scatter, m)?)?;

    m.add_class::<api::LoadReport>()?;
    m.add_class::<api::FilterSelection>()?;
    m.add_class::<api::FilterOptions>()?;
    m.add_class::<api::SummaryStats>()?;
    m.add_class::<api::TrendPoint>()?;
    m.add_class::<api::GroupAverage>()?;
    m.add_class::<api::HeatmapCell>()?;
    m.add_class::<api::ScatterGroupPoint>()?;
    m.add_class::<api::ScatterRawPoint>()?;
    m.add_class::<api::RatingScatterData>()?;

    Ok(())
}
