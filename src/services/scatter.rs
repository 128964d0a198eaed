//! Rating-vs-time relationship view.
//!
//! Grouped levels collapse the view to one point per category (average
//! rating, average time). The ungrouped level returns raw pairs, sampled
//! down to a fixed cap with a deterministic seed and jittered on the rating
//! axis so identical ratings do not stack into a single pixel column.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::ScatterConfig;
use crate::error::DashboardError;
use crate::models::{CategoricalField, DeliveryRecord};

/// Grouping choices offered by the aggregation-level selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationLevel {
    VehicleCondition,
    VehicleType,
    OrderType,
    City,
    /// Raw per-row points.
    Ungrouped,
}

impl AggregationLevel {
    pub const ALL: [AggregationLevel; 5] = [
        AggregationLevel::VehicleCondition,
        AggregationLevel::VehicleType,
        AggregationLevel::OrderType,
        AggregationLevel::City,
        AggregationLevel::Ungrouped,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            AggregationLevel::VehicleCondition => "vehicle_condition",
            AggregationLevel::VehicleType => "vehicle_type",
            AggregationLevel::OrderType => "order_type",
            AggregationLevel::City => "city",
            AggregationLevel::Ungrouped => "none",
        }
    }

    pub fn from_key(key: &str) -> Result<Self, DashboardError> {
        Self::ALL
            .iter()
            .copied()
            .find(|l| l.key() == key)
            .ok_or_else(|| DashboardError::UnknownSelector {
                kind: "aggregation level",
                value: key.to_string(),
            })
    }
}

/// One aggregated point: a category's average rating and average time.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterGroupPoint {
    pub label: String,
    pub avg_rating: f64,
    pub avg_time_min: f64,
    pub count: usize,
}

/// One sampled raw point with the jitter already applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterRawPoint {
    pub rating_jittered: f64,
    pub time_min: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RatingScatter {
    Grouped(Vec<ScatterGroupPoint>),
    Raw(Vec<ScatterRawPoint>),
}

/// Rows with both a rating and a time, as (group label, rating, time).
fn labelled_pairs<'a>(
    view: &[&'a DeliveryRecord],
    level: AggregationLevel,
) -> Vec<(String, f64, f64)> {
    view.iter()
        .filter_map(|record| {
            let rating = record.courier_rating?;
            let minutes = record.time_taken_min?;
            let label = match level {
                AggregationLevel::VehicleCondition => {
                    // Numeric ordinal code; rows without one are dropped.
                    format!("{}", record.vehicle_condition?)
                }
                AggregationLevel::VehicleType => {
                    CategoricalField::VehicleType.of(record).to_string()
                }
                AggregationLevel::OrderType => CategoricalField::OrderType.of(record).to_string(),
                AggregationLevel::City => CategoricalField::City.of(record).to_string(),
                AggregationLevel::Ungrouped => String::new(),
            };
            Some((label, rating, minutes))
        })
        .collect()
}

fn grouped_points(pairs: Vec<(String, f64, f64)>) -> Vec<ScatterGroupPoint> {
    use std::collections::BTreeMap;
    let mut groups: BTreeMap<String, (f64, f64, usize)> = BTreeMap::new();
    for (label, rating, minutes) in pairs {
        let entry = groups.entry(label).or_insert((0.0, 0.0, 0));
        entry.0 += rating;
        entry.1 += minutes;
        entry.2 += 1;
    }
    groups
        .into_iter()
        .map(|(label, (rating_sum, time_sum, count))| ScatterGroupPoint {
            label,
            avg_rating: rating_sum / count as f64,
            avg_time_min: time_sum / count as f64,
            count,
        })
        .collect()
}

fn raw_points(mut pairs: Vec<(String, f64, f64)>, config: &ScatterConfig) -> Vec<ScatterRawPoint> {
    let mut rng = StdRng::seed_from_u64(config.seed);

    if pairs.len() > config.max_points {
        pairs.partial_shuffle(&mut rng, config.max_points);
        pairs.truncate(config.max_points);
    }

    pairs
        .into_iter()
        .map(|(_, rating, minutes)| ScatterRawPoint {
            rating_jittered: rating + (rng.gen::<f64>() - 0.5) * config.jitter,
            time_min: minutes,
        })
        .collect()
}

/// Compute the rating-vs-time view at the requested aggregation level.
pub fn compute_rating_scatter(
    view: &[&DeliveryRecord],
    level: AggregationLevel,
    config: &ScatterConfig,
) -> RatingScatter {
    let pairs = labelled_pairs(view, level);
    match level {
        AggregationLevel::Ungrouped => RatingScatter::Raw(raw_points(pairs, config)),
        _ => RatingScatter::Grouped(grouped_points(pairs)),
    }
}
