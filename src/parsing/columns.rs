//! Column resolver.
//!
//! Maps each canonical [`Field`] to the actual header present in the loaded
//! table. Matching is exact (no fuzzy lookup) but case-insensitive and
//! ignores surrounding whitespace. An unresolved optional field is simply
//! absent; unresolved required fields are a fatal configuration error.

use std::collections::HashMap;

use crate::error::DashboardError;
use crate::models::Field;

/// Result of resolving a table's headers against the canonical alias lists.
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    resolved: HashMap<Field, String>,
}

impl ColumnMap {
    /// Resolve the given headers. For each canonical field, the first alias
    /// (in declaration order) that matches any header wins; later aliases
    /// are not consulted once a match is found.
    pub fn resolve<S: AsRef<str>>(headers: &[S]) -> Self {
        let mut by_lowered: HashMap<String, &str> = HashMap::new();
        for header in headers {
            let header = header.as_ref();
            // First occurrence wins for duplicate headers.
            by_lowered
                .entry(header.trim().to_lowercase())
                .or_insert(header);
        }

        let mut resolved = HashMap::new();
        for field in Field::ALL {
            for alias in field.aliases() {
                if let Some(actual) = by_lowered.get(*alias) {
                    resolved.insert(field, (*actual).to_string());
                    break;
                }
            }
        }

        Self { resolved }
    }

    /// Actual header name for a canonical field, if the table has one.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.resolved.get(&field).map(String::as_str)
    }

    pub fn is_resolved(&self, field: Field) -> bool {
        self.resolved.contains_key(&field)
    }

    /// Distance is only computed when the full route is resolvable.
    pub fn has_coordinates(&self) -> bool {
        [
            Field::RestaurantLat,
            Field::RestaurantLon,
            Field::DeliveryLat,
            Field::DeliveryLon,
        ]
        .iter()
        .all(|f| self.is_resolved(*f))
    }

    pub fn missing_required(&self) -> Vec<&'static str> {
        Field::ALL
            .iter()
            .filter(|f| f.is_required() && !self.is_resolved(**f))
            .map(|f| f.name())
            .collect()
    }

    pub fn ensure_required(&self) -> Result<(), DashboardError> {
        let missing = self.missing_required();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(DashboardError::MissingRequiredColumns(missing))
        }
    }

    /// (canonical name, actual header) pairs for the load report.
    pub fn resolved_pairs(&self) -> Vec<(&'static str, &str)> {
        Field::ALL
            .iter()
            .filter_map(|f| self.get(*f).map(|h| (f.name(), h)))
            .collect()
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        Field::ALL
            .iter()
            .filter(|f| !self.is_resolved(**f))
            .map(|f| f.name())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_resolves_exact_headers() {
        let map = ColumnMap::resolve(&["Order_Date", "Time_taken (min)", "City"]);
        assert_eq!(map.get(Field::OrderDate), Some("Order_Date"));
        assert_eq!(map.get(Field::TimeTaken), Some("Time_taken (min)"));
        assert_eq!(map.get(Field::City), Some("City"));
    }

    #[test]
    fn test_matching_ignores_case_and_whitespace() {
        let map = ColumnMap::resolve(&["  ORDER_DATE  ", "tIme_TaKen_MiN"]);
        assert_eq!(map.get(Field::OrderDate), Some("  ORDER_DATE  "));
        assert_eq!(map.get(Field::TimeTaken), Some("tIme_TaKen_MiN"));
    }

    #[test]
    fn test_first_alias_wins() {
        // Both "city" and "area" are present; "city" is listed first.
        let map = ColumnMap::resolve(&["Area", "City"]);
        assert_eq!(map.get(Field::City), Some("City"));

        // Only the later alias present.
        let map = ColumnMap::resolve(&["Area"]);
        assert_eq!(map.get(Field::City), Some("Area"));
    }

    #[test]
    fn test_no_partial_matching() {
        let map = ColumnMap::resolve(&["city_name", "order_dates"]);
        assert_eq!(map.get(Field::City), None);
        assert_eq!(map.get(Field::OrderDate), None);
    }

    #[test]
    fn test_absent_field_is_none_not_error() {
        let map = ColumnMap::resolve(&["order_date", "time_taken"]);
        assert_eq!(map.get(Field::Weather), None);
        assert!(map.ensure_required().is_ok());
    }

    #[test]
    fn test_missing_required_is_fatal() {
        let map = ColumnMap::resolve(&["city", "weather"]);
        let err = map.ensure_required().unwrap_err();
        match err {
            DashboardError::MissingRequiredColumns(missing) => {
                assert_eq!(missing, vec!["order_date", "time_taken_min"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_has_coordinates_requires_all_four() {
        let map = ColumnMap::resolve(&[
            "restaurant_latitude",
            "restaurant_longitude",
            "delivery_location_latitude",
        ]);
        assert!(!map.has_coordinates());

        let map = ColumnMap::resolve(&[
            "restaurant_latitude",
            "restaurant_longitude",
            "delivery_location_latitude",
            "delivery_location_longitude",
        ]);
        assert!(map.has_coordinates());
    }

    fn scramble_case(s: &str, flips: &[bool]) -> String {
        s.chars()
            .enumerate()
            .map(|(i, ch)| {
                if flips.get(i).copied().unwrap_or(false) {
                    ch.to_ascii_uppercase()
                } else {
                    ch
                }
            })
            .collect()
    }

    proptest! {
        /// Any listed alias resolves under arbitrary letter case and padding.
        #[test]
        fn prop_alias_resolves_any_case(
            field_idx in 0usize..Field::ALL.len(),
            alias_pick: prop::sample::Index,
            flips in prop::collection::vec(any::<bool>(), 0..32),
            left_pad in 0usize..4,
            right_pad in 0usize..4,
        ) {
            let field = Field::ALL[field_idx];
            let alias = field.aliases()[alias_pick.index(field.aliases().len())];
            let header = format!(
                "{}{}{}",
                " ".repeat(left_pad),
                scramble_case(alias, &flips),
                " ".repeat(right_pad),
            );

            let map = ColumnMap::resolve(&[header.as_str()]);
            prop_assert_eq!(map.get(field), Some(header.as_str()));
        }
    }
}
