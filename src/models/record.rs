//! One row = one delivery order.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// A normalized delivery order.
///
/// Every parsed attribute is `Option`-typed: a cell that failed to parse is
/// `None`, never a sentinel value. Categorical fields are always present and
/// hold the literal placeholder `"Unknown"` when the source cell was missing.
/// The derived fields at the bottom are filled in by the enricher, not read
/// from the input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeliveryRecord {
    pub order_id: Option<String>,
    pub courier_id: Option<String>,
    pub courier_age: Option<f64>,
    /// Expected range roughly 1-5.
    pub courier_rating: Option<f64>,

    pub restaurant_lat: Option<f64>,
    pub restaurant_lon: Option<f64>,
    pub delivery_lat: Option<f64>,
    pub delivery_lon: Option<f64>,

    pub order_date: Option<NaiveDate>,
    pub order_time: Option<NaiveTime>,
    pub pickup_time: Option<NaiveTime>,

    pub weather: String,
    pub traffic: String,
    pub order_type: String,
    pub vehicle_type: String,
    pub festival: String,
    pub city: String,

    /// Ordinal vehicle-condition code.
    pub vehicle_condition: Option<f64>,
    pub multiple_deliveries: Option<f64>,

    /// The target metric. Non-negative; unparseable cells are `None` and are
    /// excluded from every aggregate.
    pub time_taken_min: Option<f64>,

    // Derived by the enricher.
    pub order_timestamp: Option<NaiveDateTime>,
    pub distance_km: Option<f64>,
    pub speed_kmh: Option<f64>,
}

impl DeliveryRecord {
    /// True when all four coordinates are present.
    pub fn has_route(&self) -> bool {
        self.restaurant_lat.is_some()
            && self.restaurant_lon.is_some()
            && self.delivery_lat.is_some()
            && self.delivery_lon.is_some()
    }
}
