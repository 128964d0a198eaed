//! Canonical field catalogue.
//!
//! Dataset exports name their columns inconsistently ("City" vs "Area",
//! "Time_taken (min)" vs "time_taken"). Each logical column the dashboard
//! consumes is a [`Field`] with a fixed, ordered alias list; the resolver
//! in `parsing::columns` maps canonical fields to whatever headers the
//! loaded table actually has. Consuming code never touches header strings.

use crate::models::DeliveryRecord;

/// A logical column of the delivery dataset, independent of header spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    OrderId,
    CourierId,
    CourierAge,
    CourierRating,
    RestaurantLat,
    RestaurantLon,
    DeliveryLat,
    DeliveryLon,
    OrderDate,
    OrderTime,
    PickupTime,
    Weather,
    Traffic,
    VehicleCondition,
    OrderType,
    VehicleType,
    MultipleDeliveries,
    Festival,
    City,
    TimeTaken,
}

impl Field {
    pub const ALL: [Field; 20] = [
        Field::OrderId,
        Field::CourierId,
        Field::CourierAge,
        Field::CourierRating,
        Field::RestaurantLat,
        Field::RestaurantLon,
        Field::DeliveryLat,
        Field::DeliveryLon,
        Field::OrderDate,
        Field::OrderTime,
        Field::PickupTime,
        Field::Weather,
        Field::Traffic,
        Field::VehicleCondition,
        Field::OrderType,
        Field::VehicleType,
        Field::MultipleDeliveries,
        Field::Festival,
        Field::City,
        Field::TimeTaken,
    ];

    /// Canonical name, used in reports and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Field::OrderId => "id",
            Field::CourierId => "delivery_person_id",
            Field::CourierAge => "delivery_person_age",
            Field::CourierRating => "delivery_person_ratings",
            Field::RestaurantLat => "restaurant_latitude",
            Field::RestaurantLon => "restaurant_longitude",
            Field::DeliveryLat => "delivery_location_latitude",
            Field::DeliveryLon => "delivery_location_longitude",
            Field::OrderDate => "order_date",
            Field::OrderTime => "time_orderd",
            Field::PickupTime => "time_order_picked",
            Field::Weather => "weather_conditions",
            Field::Traffic => "road_traffic_density",
            Field::VehicleCondition => "vehicle_condition",
            Field::OrderType => "type_of_order",
            Field::VehicleType => "type_of_vehicle",
            Field::MultipleDeliveries => "multiple_deliveries",
            Field::Festival => "festival",
            Field::City => "city",
            Field::TimeTaken => "time_taken_min",
        }
    }

    /// Acceptable header spellings, in priority order. Matching is
    /// case-insensitive and whitespace-trimmed; the first alias that hits
    /// any header wins.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Field::OrderId => &["id", "order_id"],
            Field::CourierId => &["delivery_person_id"],
            Field::CourierAge => &["delivery_person_age"],
            Field::CourierRating => &["delivery_person_ratings", "courier_rating", "rating"],
            Field::RestaurantLat => &["restaurant_latitude", "rest_lat"],
            Field::RestaurantLon => &["restaurant_longitude", "rest_lon", "rest_longitude"],
            Field::DeliveryLat => &[
                "delivery_location_latitude",
                "dest_lat",
                "customer_latitude",
            ],
            Field::DeliveryLon => &[
                "delivery_location_longitude",
                "dest_lon",
                "customer_longitude",
            ],
            Field::OrderDate => &["order_date", "date"],
            Field::OrderTime => &["time_orderd", "order_time"],
            Field::PickupTime => &["time_order_picked", "pickup_time"],
            Field::Weather => &["weather_conditions", "weather"],
            Field::Traffic => &["road_traffic_density", "traffic_density", "traffic"],
            Field::VehicleCondition => &["vehicle_condition"],
            Field::OrderType => &["type_of_order", "order_type"],
            Field::VehicleType => &["type_of_vehicle", "vehicle_type"],
            Field::MultipleDeliveries => &["multiple_deliveries", "multi_deliveries"],
            Field::Festival => &["festival"],
            Field::City => &["city", "area"],
            Field::TimeTaken => &["time_taken (min)", "time_taken_min", "time_taken"],
        }
    }

    /// Whether the pipeline refuses to start without this field.
    pub fn is_required(&self) -> bool {
        matches!(self, Field::OrderDate | Field::TimeTaken)
    }
}

/// The categorical fields the dashboard groups and filters by.
///
/// Each variant carries a typed accessor into [`DeliveryRecord`], so
/// group-by and filter code never does stringly-typed column lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoricalField {
    Weather,
    Traffic,
    OrderType,
    VehicleType,
    Festival,
    City,
}

impl CategoricalField {
    pub const ALL: [CategoricalField; 6] = [
        CategoricalField::Weather,
        CategoricalField::Traffic,
        CategoricalField::OrderType,
        CategoricalField::VehicleType,
        CategoricalField::Festival,
        CategoricalField::City,
    ];

    /// Stable key used at the Python boundary.
    pub fn key(&self) -> &'static str {
        match self {
            CategoricalField::Weather => "weather",
            CategoricalField::Traffic => "traffic",
            CategoricalField::OrderType => "order_type",
            CategoricalField::VehicleType => "vehicle_type",
            CategoricalField::Festival => "festival",
            CategoricalField::City => "city",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.key() == key)
    }

    pub fn field(&self) -> Field {
        match self {
            CategoricalField::Weather => Field::Weather,
            CategoricalField::Traffic => Field::Traffic,
            CategoricalField::OrderType => Field::OrderType,
            CategoricalField::VehicleType => Field::VehicleType,
            CategoricalField::Festival => Field::Festival,
            CategoricalField::City => Field::City,
        }
    }

    /// Normalized category value of a record ("Unknown" when the source
    /// cell was missing).
    pub fn of<'a>(&self, record: &'a DeliveryRecord) -> &'a str {
        match self {
            CategoricalField::Weather => &record.weather,
            CategoricalField::Traffic => &record.traffic,
            CategoricalField::OrderType => &record.order_type,
            CategoricalField::VehicleType => &record.vehicle_type,
            CategoricalField::Festival => &record.festival,
            CategoricalField::City => &record.city,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_date_and_time_taken_are_required() {
        let required: Vec<&str> = Field::ALL
            .iter()
            .filter(|f| f.is_required())
            .map(|f| f.name())
            .collect();
        assert_eq!(required, vec!["order_date", "time_taken_min"]);
    }

    #[test]
    fn test_aliases_are_lowercase() {
        for field in Field::ALL {
            for alias in field.aliases() {
                assert_eq!(*alias, alias.to_lowercase(), "alias for {:?}", field);
            }
        }
    }

    #[test]
    fn test_categorical_key_roundtrip() {
        for field in CategoricalField::ALL {
            assert_eq!(CategoricalField::from_key(field.key()), Some(field));
        }
        assert_eq!(CategoricalField::from_key("speed"), None);
    }
}
