//! Monthly trend of average delivery time.

use std::collections::BTreeMap;

use crate::models::DeliveryRecord;

/// One month bucket of the trend line.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    /// Calendar bucket as "YYYY-MM".
    pub month: String,
    pub avg_time_min: f64,
    pub count: usize,
}

/// Bucket the view by calendar month and average the delivery time per
/// bucket. Rows with a null date or null time are dropped; buckets come back
/// in chronological order.
pub fn compute_monthly_trend(view: &[&DeliveryRecord]) -> Vec<TrendPoint> {
    use chrono::Datelike;

    let mut buckets: BTreeMap<(i32, u32), (f64, usize)> = BTreeMap::new();

    for record in view {
        let (Some(date), Some(minutes)) = (record.order_date, record.time_taken_min) else {
            continue;
        };
        let entry = buckets.entry((date.year(), date.month())).or_insert((0.0, 0));
        entry.0 += minutes;
        entry.1 += 1;
    }

    buckets
        .into_iter()
        .map(|((year, month), (sum, count))| TrendPoint {
            month: format!("{year:04}-{month:02}"),
            avg_time_min: sum / count as f64,
            count,
        })
        .collect()
}
