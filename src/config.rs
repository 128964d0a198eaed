//! Dashboard configuration.
//!
//! All tunables of the analytics core live here: the on-time threshold
//! bounds exposed as a slider, the deterministic scatter sampling settings,
//! and the date-order assumption used when parsing ambiguous calendar dates.
//! Configuration is optional; `DashboardConfig::default()` reproduces the
//! original dashboard constants.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// Ordering assumed when a date like "03/04/2022" is ambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateOrder {
    /// "03/04/2022" is April 3rd.
    DayFirst,
    /// "03/04/2022" is March 4th.
    MonthFirst,
}

/// Bounds for the on-time threshold slider, in minutes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct OnTimeConfig {
    pub min_minutes: u32,
    pub max_minutes: u32,
    pub default_minutes: u32,
}

impl Default for OnTimeConfig {
    fn default() -> Self {
        Self {
            min_minutes: 15,
            max_minutes: 60,
            default_minutes: 30,
        }
    }
}

/// Settings for the ungrouped rating-vs-time scatter view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterConfig {
    /// Maximum number of raw points returned; larger views are sampled down.
    pub max_points: usize,
    /// Amplitude of the uniform jitter applied to the rating axis.
    pub jitter: f64,
    /// Seed for sampling and jitter, so reruns render identically.
    pub seed: u64,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            max_points: 2000,
            jitter: 0.1,
            seed: 42,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub date_order: DateOrder,
    pub on_time: OnTimeConfig,
    pub scatter: ScatterConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            date_order: DateOrder::DayFirst,
            on_time: OnTimeConfig::default(),
            scatter: ScatterConfig::default(),
        }
    }
}

impl DashboardConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, DashboardError> {
        let config: DashboardConfig =
            toml::from_str(raw).map_err(|e| DashboardError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, DashboardError> {
        let raw = fs::read_to_string(path).map_err(|e| {
            DashboardError::InvalidConfig(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&raw)
    }

    fn validate(&self) -> Result<(), DashboardError> {
        let on_time = &self.on_time;
        if on_time.min_minutes > on_time.max_minutes
            || on_time.default_minutes < on_time.min_minutes
            || on_time.default_minutes > on_time.max_minutes
        {
            return Err(DashboardError::InvalidConfig(format!(
                "on-time bounds must satisfy min <= default <= max (got {}/{}/{})",
                on_time.min_minutes, on_time.default_minutes, on_time.max_minutes
            )));
        }
        if self.scatter.max_points == 0 {
            return Err(DashboardError::InvalidConfig(
                "scatter.max_points must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Clamp a requested on-time threshold into the configured slider range.
    pub fn clamp_threshold(&self, minutes: u32) -> u32 {
        minutes.clamp(self.on_time.min_minutes, self.on_time.max_minutes)
    }
}
