//! Weather x traffic heatmap of average delivery time.

use std::collections::BTreeMap;

use crate::models::DeliveryRecord;

/// One cell of the weather/traffic pivot.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapCell {
    pub weather: String,
    pub traffic: String,
    pub avg_time_min: f64,
    pub count: usize,
}

/// Average delivery time for every observed (weather, traffic) combination.
/// Rows with a null time are dropped; an empty result is the "not enough
/// data" signal for the presentation layer.
pub fn compute_weather_traffic_heatmap(view: &[&DeliveryRecord]) -> Vec<HeatmapCell> {
    let mut cells: BTreeMap<(&str, &str), (f64, usize)> = BTreeMap::new();

    for record in view {
        let Some(minutes) = record.time_taken_min else {
            continue;
        };
        let entry = cells
            .entry((record.weather.as_str(), record.traffic.as_str()))
            .or_insert((0.0, 0));
        entry.0 += minutes;
        entry.1 += 1;
    }

    cells
        .into_iter()
        .map(|((weather, traffic), (sum, count))| HeatmapCell {
            weather: weather.to_string(),
            traffic: traffic.to_string(),
            avg_time_min: sum / count as f64,
            count,
        })
        .collect()
}
