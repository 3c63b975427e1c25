use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::forecast::{ForecastSample, WeatherCondition};

/// Feasibility severity, ordered from least to most severe
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum FeasibilityTier {
    Recommended,
    UseCaution,
    NotRecommended,
}

/// Weather fields the advisor reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CurrentConditions {
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: u8,
    #[schema(value_type = String, example = "Clear")]
    pub condition: WeatherCondition,
    #[serde(default)]
    pub description: String,
    pub wind_speed: f64,
    pub visibility_meters: f64,
    pub precipitation_probability: f64,
    /// Forecast time; the night rule is skipped when absent
    #[serde(default)]
    pub observed_at: Option<NaiveDateTime>,
}

impl From<&ForecastSample> for CurrentConditions {
    fn from(sample: &ForecastSample) -> Self {
        CurrentConditions {
            temperature: sample.temperature,
            feels_like: sample.feels_like,
            humidity: sample.humidity,
            condition: sample.condition.clone(),
            description: sample.description.clone(),
            wind_speed: sample.wind_speed,
            visibility_meters: sample.visibility_meters,
            precipitation_probability: sample.precipitation_probability,
            observed_at: sample.observed_at(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FeasibilityVerdict {
    pub activity: String,
    pub tier: FeasibilityTier,
    pub recommendation: String,
    /// Reasons in the order the rules produced them
    pub reasons: Vec<String>,
    pub location: String,
    pub evaluated_at: DateTime<Utc>,
    /// Snapshot of the inputs, kept for display
    pub conditions: CurrentConditions,
}
