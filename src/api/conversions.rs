//! Conversion layer between internal models and Python DTOs.

use crate::api::types;
use crate::models::CategoricalField;
use crate::preprocessing::Dataset;
use crate::services;
use crate::transformations::filtering;

impl From<&types::FilterSelection> for filtering::FilterSelection {
    fn from(dto: &types::FilterSelection) -> Self {
        Self {
            cities: dto.cities.clone(),
            festivals: dto.festivals.clone(),
            weathers: dto.weathers.clone(),
            traffics: dto.traffics.clone(),
        }
    }
}

impl From<&Dataset> for types::LoadReport {
    fn from(dataset: &Dataset) -> Self {
        Self {
            rows: dataset.records.len(),
            resolved_columns: dataset
                .columns
                .resolved_pairs()
                .into_iter()
                .map(|(canonical, actual)| (canonical.to_string(), actual.to_string()))
                .collect(),
            missing_columns: dataset
                .columns
                .missing_fields()
                .into_iter()
                .map(String::from)
                .collect(),
            has_coordinates: dataset.columns.has_coordinates(),
            on_time_min: dataset.config.on_time.min_minutes,
            on_time_max: dataset.config.on_time.max_minutes,
            on_time_default: dataset.config.on_time.default_minutes,
        }
    }
}

impl From<&Dataset> for types::FilterOptions {
    fn from(dataset: &Dataset) -> Self {
        let observed = |field| filtering::observed_values(&dataset.records, field);
        Self {
            cities: observed(CategoricalField::City),
            festivals: observed(CategoricalField::Festival),
            weathers: observed(CategoricalField::Weather),
            traffics: observed(CategoricalField::Traffic),
        }
    }
}

impl From<services::SummaryStats> for types::SummaryStats {
    fn from(stats: services::SummaryStats) -> Self {
        Self {
            total_orders: stats.total_orders,
            mean_time_min: stats.mean_time_min,
            on_time_rate: stats.on_time_rate,
            mean_speed_kmh: stats.mean_speed_kmh,
        }
    }
}

impl From<services::TrendPoint> for types::TrendPoint {
    fn from(point: services::TrendPoint) -> Self {
        Self {
            month: point.month,
            avg_time_min: point.avg_time_min,
            count: point.count,
        }
    }
}

impl From<services::GroupAverage> for types::GroupAverage {
    fn from(group: services::GroupAverage) -> Self {
        Self {
            label: group.label,
            avg_time_min: group.avg_time_min,
            count: group.count,
        }
    }
}

impl From<services::HeatmapCell> for types::HeatmapCell {
    fn from(cell: services::HeatmapCell) -> Self {
        Self {
            weather: cell.weather,
            traffic: cell.traffic,
            avg_time_min: cell.avg_time_min,
            count: cell.count,
        }
    }
}

impl From<services::ScatterGroupPoint> for types::ScatterGroupPoint {
    fn from(point: services::ScatterGroupPoint) -> Self {
        Self {
            label: point.label,
            avg_rating: point.avg_rating,
            avg_time_min: point.avg_time_min,
            count: point.count,
        }
    }
}

impl From<services::ScatterRawPoint> for types::ScatterRawPoint {
    fn from(point: services::ScatterRawPoint) -> Self {
        Self {
            rating_jittered: point.rating_jittered,
            time_min: point.time_min,
        }
    }
}

impl types::RatingScatterData {
    pub fn from_result(
        level: services::AggregationLevel,
        result: services::RatingScatter,
    ) -> Self {
        let (grouped, raw) = match result {
            services::RatingScatter::Grouped(points) => {
                (points.into_iter().map(Into::into).collect(), Vec::new())
            }
            services::RatingScatter::Raw(points) => {
                (Vec::new(), points.into_iter().map(Into::into).collect())
            }
        };
        Self {
            level: level.key().to_string(),
            grouped,
            raw,
        }
    }
}
