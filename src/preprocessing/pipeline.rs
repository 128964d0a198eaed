//! Loading pipeline and session dataset.
//!
//! `Dataset::load` runs the whole preparation pass: read the raw table,
//! resolve columns, normalize per cell, enrich derived fields. The result is
//! the explicit pipeline-state value consumed by every derived view:
//! constructed once per session, immutable afterwards, replaced wholesale on
//! reload. Filtering never mutates it.

use std::path::Path;

use log::{debug, info, warn};
use polars::prelude::DataFrame;

use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::models::DeliveryRecord;
use crate::parsing::{columns::ColumnMap, csv_parser};
use crate::preprocessing::{enricher, normalizer};
use crate::transformations::filtering::FilterSelection;

/// The loaded, normalized, enriched delivery table plus its column mapping
/// and configuration.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub records: Vec<DeliveryRecord>,
    pub columns: ColumnMap,
    pub config: DashboardConfig,
}

impl Dataset {
    /// Load and prepare the delivery table from a CSV file.
    pub fn load(path: &Path, config: DashboardConfig) -> Result<Self, DashboardError> {
        let df = csv_parser::read_raw_table(path)?;
        info!(
            "loaded raw table from {}: {} rows x {} columns",
            path.display(),
            df.height(),
            df.width()
        );
        Self::from_dataframe(&df, config)
    }

    /// Prepare an already-loaded raw (all-string) table.
    pub fn from_dataframe(df: &DataFrame, config: DashboardConfig) -> Result<Self, DashboardError> {
        let headers = csv_parser::header_names(df);
        let columns = ColumnMap::resolve(&headers);
        columns.ensure_required()?;
        debug!(
            "resolved {} of {} canonical fields",
            columns.resolved_pairs().len(),
            crate::models::Field::ALL.len()
        );

        let mut records = normalizer::build_records(df, &columns, config.date_order)
            .map_err(|source| DashboardError::DataFileUnreadable {
                path: Path::new("<in-memory table>").to_path_buf(),
                source,
            })?;

        let compute_distance = columns.has_coordinates();
        if !compute_distance {
            warn!("coordinate columns not fully resolved; distance and speed stay null");
        }
        enricher::enrich(&mut records, compute_distance);

        info!("prepared {} delivery records", records.len());
        Ok(Self {
            records,
            columns,
            config,
        })
    }

    /// Borrowed working view for the given filter selection.
    pub fn view(&self, filters: &FilterSelection) -> Vec<&DeliveryRecord> {
        filters.apply(&self.records)
    }
}
