//! Type normalizer.
//!
//! Coerces the raw all-string table into typed [`DeliveryRecord`]s using the
//! resolved column map. All failures are per-cell: a bad date or number
//! becomes `None`, a missing categorical cell becomes `"Unknown"`, and the
//! row is always retained.

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use polars::prelude::*;

use crate::config::DateOrder;
use crate::models::{DeliveryRecord, Field};
use crate::parsing::ColumnMap;

/// Placeholder for missing categorical values.
pub const UNKNOWN: &str = "Unknown";

const DAY_FIRST_FORMATS: [&str; 5] = ["%d-%m-%Y", "%d/%m/%Y", "%Y-%m-%d", "%d-%m-%y", "%d/%m/%y"];
const MONTH_FIRST_FORMATS: [&str; 5] =
    ["%m-%d-%Y", "%m/%d/%Y", "%Y-%m-%d", "%m-%d-%y", "%m/%d/%y"];

fn is_missing(raw: &str) -> bool {
    raw.is_empty()
        || raw.eq_ignore_ascii_case("nan")
        || raw.eq_ignore_ascii_case("na")
        || raw.eq_ignore_ascii_case("null")
        || raw.eq_ignore_ascii_case("none")
}

/// Parse a calendar date, honoring the configured day/month order for
/// ambiguous separators. Unparseable cells yield `None`.
pub fn parse_date(raw: &str, order: DateOrder) -> Option<NaiveDate> {
    let raw = raw.trim();
    if is_missing(raw) {
        return None;
    }
    let formats = match order {
        DateOrder::DayFirst => &DAY_FIRST_FORMATS,
        DateOrder::MonthFirst => &MONTH_FIRST_FORMATS,
    };
    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// Parse a time-of-day cell. Accepts "HH:MM:SS", "HH:MM", and spreadsheet
/// day fractions ("0.75" = 18:00), which survive in some exports.
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    if is_missing(raw) {
        return None;
    }
    for fmt in ["%H:%M:%S", "%H:%M"] {
        if let Ok(t) = NaiveTime::parse_from_str(raw, fmt) {
            return Some(t);
        }
    }
    if let Ok(fraction) = raw.parse::<f64>() {
        if (0.0..1.0).contains(&fraction) {
            let seconds = (fraction * 86_400.0).round() as u32;
            return NaiveTime::from_num_seconds_from_midnight_opt(seconds.min(86_399), 0);
        }
    }
    None
}

/// Parse a numeric cell. Non-finite results count as unparseable.
pub fn parse_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if is_missing(raw) {
        return None;
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Trim a categorical cell, substituting the `"Unknown"` placeholder for
/// missing entries.
pub fn normalize_category(raw: Option<&str>) -> String {
    match raw {
        Some(value) => {
            let value = value.trim();
            if is_missing(value) {
                UNKNOWN.to_string()
            } else {
                value.to_string()
            }
        }
        None => UNKNOWN.to_string(),
    }
}

fn string_column<'a>(
    df: &'a DataFrame,
    columns: &ColumnMap,
    field: Field,
) -> Result<Option<&'a StringChunked>> {
    match columns.get(field) {
        Some(name) => {
            let ca = df
                .column(name)
                .with_context(|| format!("resolved column {name:?} missing from table"))?
                .str()
                .context("raw table must be loaded with an all-string schema")?;
            Ok(Some(ca))
        }
        None => Ok(None),
    }
}

fn cell<'a>(ca: Option<&'a StringChunked>, row: usize) -> Option<&'a str> {
    ca.and_then(|c| c.get(row))
}

/// Build typed records from the raw table and resolved columns.
pub fn build_records(
    df: &DataFrame,
    columns: &ColumnMap,
    date_order: DateOrder,
) -> Result<Vec<DeliveryRecord>> {
    let order_ids = string_column(df, columns, Field::OrderId)?;
    let courier_ids = string_column(df, columns, Field::CourierId)?;
    let courier_ages = string_column(df, columns, Field::CourierAge)?;
    let ratings = string_column(df, columns, Field::CourierRating)?;
    let rest_lats = string_column(df, columns, Field::RestaurantLat)?;
    let rest_lons = string_column(df, columns, Field::RestaurantLon)?;
    let dest_lats = string_column(df, columns, Field::DeliveryLat)?;
    let dest_lons = string_column(df, columns, Field::DeliveryLon)?;
    let dates = string_column(df, columns, Field::OrderDate)?;
    let order_times = string_column(df, columns, Field::OrderTime)?;
    let pickup_times = string_column(df, columns, Field::PickupTime)?;
    let weathers = string_column(df, columns, Field::Weather)?;
    let traffics = string_column(df, columns, Field::Traffic)?;
    let conditions = string_column(df, columns, Field::VehicleCondition)?;
    let order_types = string_column(df, columns, Field::OrderType)?;
    let vehicle_types = string_column(df, columns, Field::VehicleType)?;
    let multiples = string_column(df, columns, Field::MultipleDeliveries)?;
    let festivals = string_column(df, columns, Field::Festival)?;
    let cities = string_column(df, columns, Field::City)?;
    let times_taken = string_column(df, columns, Field::TimeTaken)?;

    let mut records = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let record = DeliveryRecord {
            order_id: cell(order_ids, row).map(|s| s.trim().to_string()),
            courier_id: cell(courier_ids, row).map(|s| s.trim().to_string()),
            courier_age: cell(courier_ages, row).and_then(parse_number),
            courier_rating: cell(ratings, row).and_then(parse_number),
            restaurant_lat: cell(rest_lats, row).and_then(parse_number),
            restaurant_lon: cell(rest_lons, row).and_then(parse_number),
            delivery_lat: cell(dest_lats, row).and_then(parse_number),
            delivery_lon: cell(dest_lons, row).and_then(parse_number),
            order_date: cell(dates, row).and_then(|s| parse_date(s, date_order)),
            order_time: cell(order_times, row).and_then(parse_time),
            pickup_time: cell(pickup_times, row).and_then(parse_time),
            weather: normalize_category(cell(weathers, row)),
            traffic: normalize_category(cell(traffics, row)),
            order_type: normalize_category(cell(order_types, row)),
            vehicle_type: normalize_category(cell(vehicle_types, row)),
            festival: normalize_category(cell(festivals, row)),
            city: normalize_category(cell(cities, row)),
            vehicle_condition: cell(conditions, row).and_then(parse_number),
            multiple_deliveries: cell(multiples, row).and_then(parse_number),
            // Negative durations are as unusable as unparseable ones.
            time_taken_min: cell(times_taken, row)
                .and_then(parse_number)
                .filter(|v| *v >= 0.0),
            ..DeliveryRecord::default()
        };
        records.push(record);
    }

    Ok(records)
}
