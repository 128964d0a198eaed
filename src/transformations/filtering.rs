//! Multi-select filtering over the categorical context fields.

use crate::models::{CategoricalField, DeliveryRecord};

/// User-selected filter values. An empty list means "no constraint on this
/// field", matching the dashboard's multi-select widgets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    pub cities: Vec<String>,
    pub festivals: Vec<String>,
    pub weathers: Vec<String>,
    pub traffics: Vec<String>,
}

impl FilterSelection {
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
            && self.festivals.is_empty()
            && self.weathers.is_empty()
            && self.traffics.is_empty()
    }

    pub fn matches(&self, record: &DeliveryRecord) -> bool {
        let admit = |selected: &[String], value: &str| {
            selected.is_empty() || selected.iter().any(|s| s == value)
        };
        admit(&self.cities, &record.city)
            && admit(&self.festivals, &record.festival)
            && admit(&self.weathers, &record.weather)
            && admit(&self.traffics, &record.traffic)
    }

    /// Borrowed view of the records admitted by this selection.
    pub fn apply<'a>(&self, records: &'a [DeliveryRecord]) -> Vec<&'a DeliveryRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Sorted distinct values of a categorical field, for populating the
/// multi-select widgets. Only values observed in the loaded data appear.
pub fn observed_values(records: &[DeliveryRecord], field: CategoricalField) -> Vec<String> {
    let mut values: Vec<String> = records
        .iter()
        .map(|r| field.of(r).to_string())
        .collect();
    values.sort();
    values.dedup();
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(city: &str, weather: &str) -> DeliveryRecord {
        DeliveryRecord {
            city: city.to_string(),
            weather: weather.to_string(),
            festival: "No".to_string(),
            traffic: "Low".to_string(),
            time_taken_min: Some(20.0),
            ..DeliveryRecord::default()
        }
    }

    #[test]
    fn test_empty_selection_admits_everything() {
        let records = vec![record("Urban", "Sunny"), record("Metro", "Fog")];
        let view = FilterSelection::default().apply(&records);
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn test_filters_combine_conjunctively() {
        let records = vec![
            record("Urban", "Sunny"),
            record("Urban", "Fog"),
            record("Metro", "Sunny"),
        ];
        let filters = FilterSelection {
            cities: vec!["Urban".to_string()],
            weathers: vec!["Sunny".to_string()],
            ..FilterSelection::default()
        };
        let view = filters.apply(&records);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].city, "Urban");
        assert_eq!(view[0].weather, "Sunny");
    }

    #[test]
    fn test_unobserved_city_yields_empty_view() {
        let records = vec![record("Urban", "Sunny")];
        let filters = FilterSelection {
            cities: vec!["Atlantis".to_string()],
            ..FilterSelection::default()
        };
        assert!(filters.apply(&records).is_empty());
    }

    #[test]
    fn test_observed_values_sorted_distinct() {
        let records = vec![
            record("Metro", "Sunny"),
            record("Urban", "Fog"),
            record("Metro", "Sunny"),
        ];
        assert_eq!(
            observed_values(&records, CategoricalField::City),
            vec!["Metro".to_string(), "Urban".to_string()]
        );
        assert_eq!(
            observed_values(&records, CategoricalField::Weather),
            vec!["Fog".to_string(), "Sunny".to_string()]
        );
    }
}
