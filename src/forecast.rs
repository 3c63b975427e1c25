pub mod aggregate;
pub mod grouping;
pub mod models;
pub mod wind;

pub use aggregate::{aggregate, DailyAggregate};
pub use grouping::{group_by_date, DailyBucket};
pub use models::{City, ForecastResponse, ForecastSample, PartOfDay, WeatherCondition};
pub use wind::compass_direction;
