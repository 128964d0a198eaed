//! Headline KPIs for the current filtered view.

use crate::models::DeliveryRecord;
use crate::services::mean;

/// Summary statistics rendered as the dashboard's metric row.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    pub total_orders: usize,
    /// `None` is the "no data" indicator: no row in the view had a usable
    /// delivery time.
    pub mean_time_min: Option<f64>,
    /// Fraction of rows at or under the threshold; 0.0 for an empty view.
    pub on_time_rate: f64,
    /// Mean implied speed; rows with null distance or zero/null time never
    /// contribute, so no inf/NaN can enter.
    pub mean_speed_kmh: Option<f64>,
}

pub fn compute_summary(view: &[&DeliveryRecord], on_time_threshold_min: f64) -> SummaryStats {
    let total_orders = view.len();

    let mean_time_min = mean(view.iter().filter_map(|r| r.time_taken_min));

    let on_time_rate = if total_orders == 0 {
        0.0
    } else {
        let on_time = view
            .iter()
            .filter(|r| {
                r.time_taken_min
                    .map(|t| t <= on_time_threshold_min)
                    .unwrap_or(false)
            })
            .count();
        on_time as f64 / total_orders as f64
    };

    let mean_speed_kmh = mean(view.iter().filter_map(|r| r.speed_kmh));

    SummaryStats {
        total_orders,
        mean_time_min,
        on_time_rate,
        mean_speed_kmh,
    }
}
