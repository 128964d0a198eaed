//! Derived-view services.
//!
//! Each service turns the current filtered view into one chart-ready table
//! or scalar block. Views are recomputed on every filter change and never
//! stored; an empty view yields an explicit "no data" value (`None` or an
//! empty table), not an error.

pub mod distributions;
pub mod heatmap;
pub mod scatter;
pub mod summary;
pub mod trends;

pub use distributions::GroupAverage;
pub use heatmap::HeatmapCell;
pub use scatter::{AggregationLevel, RatingScatter, ScatterGroupPoint, ScatterRawPoint};
pub use summary::SummaryStats;
pub use trends::TrendPoint;

/// Mean over an iterator of values; `None` when nothing qualifies.
pub(crate) fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        sum += v;
        count += 1;
    }
    (count > 0).then(|| sum / count as f64)
}
