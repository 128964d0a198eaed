//! Derived-field enrichment.
//!
//! Fills in the computed columns of each record: the combined order
//! timestamp, the great-circle distance of the route, and the implied
//! average speed. All three are null-propagating.

use crate::models::DeliveryRecord;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two (lat, lon) points in degrees, via the
/// haversine formula.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lon1) = (lat1.to_radians(), lon1.to_radians());
    let (lat2, lon2) = (lat2.to_radians(), lon2.to_radians());

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1 for near-antipodal points; clamp so
    // asin stays defined.
    2.0 * EARTH_RADIUS_KM * a.sqrt().min(1.0).asin()
}

/// Route distance of one record, or `None` unless all four coordinates are
/// present.
fn route_distance_km(record: &DeliveryRecord) -> Option<f64> {
    match (
        record.restaurant_lat,
        record.restaurant_lon,
        record.delivery_lat,
        record.delivery_lon,
    ) {
        (Some(lat1), Some(lon1), Some(lat2), Some(lon2)) => {
            Some(haversine_km(lat1, lon1, lat2, lon2))
        }
        _ => None,
    }
}

/// Populate the derived fields of every record.
///
/// `compute_distance` is false when the coordinate columns were not all
/// resolved; distance (and therefore speed) stays null for the whole table.
pub fn enrich(records: &mut [DeliveryRecord], compute_distance: bool) {
    for record in records.iter_mut() {
        // Timestamp: date + time-of-day, falling back to midnight.
        record.order_timestamp = record.order_date.map(|date| {
            let time = record.order_time.unwrap_or(chrono::NaiveTime::MIN);
            date.and_time(time)
        });

        record.distance_km = if compute_distance {
            route_distance_km(record)
        } else {
            None
        };

        // Implied speed in km/h; undefined for zero-minute deliveries.
        record.speed_kmh = match (record.distance_km, record.time_taken_min) {
            (Some(distance), Some(minutes)) if minutes > 0.0 => {
                Some(distance / (minutes / 60.0))
            }
            _ => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_identical_points_zero_distance() {
        assert_eq!(haversine_km(12.9716, 77.5946, 12.9716, 77.5946), 0.0);
    }

    #[test]
    fn test_antipodal_points_half_circumference() {
        let d = haversine_km(0.0, 0.0, 0.0, 180.0);
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((d - half_circumference).abs() < 1.0, "got {d}");
    }

    #[test]
    fn test_longitude_seam_no_wraparound() {
        // One degree apart across the +-180 meridian, on the equator.
        let d = haversine_km(0.0, 179.5, 0.0, -179.5);
        let one_degree = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;
        assert!((d - one_degree).abs() < 0.01, "got {d}");
    }

    #[test]
    fn test_poles_are_stable() {
        let d = haversine_km(90.0, 0.0, 90.0, 135.0);
        assert!(d.abs() < EPS, "pole to itself under rotated lon, got {d}");

        let pole_to_pole = haversine_km(90.0, 0.0, -90.0, 0.0);
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((pole_to_pole - half_circumference).abs() < 1.0);
    }

    #[test]
    fn test_known_city_pair() {
        // Bangalore city centre to airport area, roughly 33 km.
        let d = haversine_km(12.9716, 77.5946, 13.1986, 77.7066);
        assert!((25.0..40.0).contains(&d), "got {d}");
    }

    fn record_with_route() -> DeliveryRecord {
        DeliveryRecord {
            restaurant_lat: Some(12.9716),
            restaurant_lon: Some(77.5946),
            delivery_lat: Some(13.0),
            delivery_lon: Some(77.6),
            time_taken_min: Some(30.0),
            order_date: NaiveDate::from_ymd_opt(2022, 3, 15),
            order_time: NaiveTime::from_hms_opt(18, 30, 0),
            ..DeliveryRecord::default()
        }
    }

    #[test]
    fn test_enrich_full_record() {
        let mut records = vec![record_with_route()];
        enrich(&mut records, true);

        let r = &records[0];
        let distance = r.distance_km.unwrap();
        assert!(distance > 0.0);
        let expected_speed = distance / 0.5;
        assert!((r.speed_kmh.unwrap() - expected_speed).abs() < EPS);
        assert_eq!(
            r.order_timestamp.unwrap(),
            NaiveDate::from_ymd_opt(2022, 3, 15)
                .unwrap()
                .and_hms_opt(18, 30, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_enrich_null_coordinate_nulls_distance_and_speed() {
        let mut record = record_with_route();
        record.delivery_lon = None;
        let mut records = vec![record];
        enrich(&mut records, true);

        assert_eq!(records[0].distance_km, None);
        assert_eq!(records[0].speed_kmh, None);
    }

    #[test]
    fn test_enrich_zero_minutes_excluded_from_speed() {
        let mut record = record_with_route();
        record.time_taken_min = Some(0.0);
        let mut records = vec![record];
        enrich(&mut records, true);

        assert!(records[0].distance_km.is_some());
        assert_eq!(records[0].speed_kmh, None);
    }

    #[test]
    fn test_enrich_without_resolved_coordinates() {
        let mut records = vec![record_with_route()];
        enrich(&mut records, false);
        assert_eq!(records[0].distance_km, None);
        assert_eq!(records[0].speed_kmh, None);
    }

    #[test]
    fn test_timestamp_midnight_fallback() {
        let mut record = record_with_route();
        record.order_time = None;
        let mut records = vec![record];
        enrich(&mut records, true);

        assert_eq!(
            records[0].order_timestamp.unwrap(),
            NaiveDate::from_ymd_opt(2022, 3, 15)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
    }

    proptest! {
        #[test]
        fn prop_distance_symmetric(
            lat1 in -90.0f64..90.0, lon1 in -180.0f64..180.0,
            lat2 in -90.0f64..90.0, lon2 in -180.0f64..180.0,
        ) {
            let ab = haversine_km(lat1, lon1, lat2, lon2);
            let ba = haversine_km(lat2, lon2, lat1, lon1);
            prop_assert!((ab - ba).abs() < 1e-9);
        }

        #[test]
        fn prop_distance_finite_and_bounded(
            lat1 in -90.0f64..90.0, lon1 in -180.0f64..180.0,
            lat2 in -90.0f64..90.0, lon2 in -180.0f64..180.0,
        ) {
            let d = haversine_km(lat1, lon1, lat2, lon2);
            prop_assert!(d.is_finite());
            prop_assert!(d >= 0.0);
            prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_KM + 1e-6);
        }
    }
}
