pub mod advisor_service;
pub mod forecast_service;

pub use advisor_service::AdvisorService;
pub use forecast_service::{DailySummary, ForecastDetail, ForecastService};
