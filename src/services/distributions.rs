//! Group-wise average delivery time by a categorical field.

use std::collections::HashMap;

use crate::models::{CategoricalField, DeliveryRecord};

/// One bar of a category breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupAverage {
    pub label: String,
    pub avg_time_min: f64,
    /// Rows with a usable delivery time that contributed to the average.
    pub count: usize,
}

/// Average delivery time per category value, over non-null times only.
/// Groups with no usable time are dropped entirely. Sorted by average
/// descending (the bar-chart order), label ascending on ties.
pub fn compute_group_averages(
    view: &[&DeliveryRecord],
    field: CategoricalField,
) -> Vec<GroupAverage> {
    let mut groups: HashMap<&str, (f64, usize)> = HashMap::new();

    for record in view {
        let Some(minutes) = record.time_taken_min else {
            continue;
        };
        let entry = groups.entry(field.of(record)).or_insert((0.0, 0));
        entry.0 += minutes;
        entry.1 += 1;
    }

    let mut averages: Vec<GroupAverage> = groups
        .into_iter()
        .map(|(label, (sum, count))| GroupAverage {
            label: label.to_string(),
            avg_time_min: sum / count as f64,
            count,
        })
        .collect();

    averages.sort_by(|a, b| {
        b.avg_time_min
            .partial_cmp(&a.avg_time_min)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.label.cmp(&b.label))
    });

    averages
}
