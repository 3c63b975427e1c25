use serde::Serialize;
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::fetch_error::FetchError;
use crate::fetcher::ForecastFetcher;
use crate::forecast::{
    aggregate, compass_direction, group_by_date, City, DailyAggregate, ForecastResponse,
    ForecastSample,
};
use crate::storage::{RecentSearches, StorageError};

/// One day card: aggregate plus the day's samples in API order
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DailySummary {
    pub date: String,
    pub aggregate: DailyAggregate,
    pub samples: Vec<ForecastSample>,
}

/// Everything the detail view shows for one lookup
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ForecastDetail {
    pub city: City,
    /// First sample of the forecast, shown as current conditions
    pub current: ForecastSample,
    pub wind_direction: String,
    pub days: Vec<DailySummary>,
}

#[derive(Clone)]
pub struct ForecastService {
    fetcher: ForecastFetcher,
    recent_searches: RecentSearches,
}

impl ForecastService {
    pub fn new(fetcher: ForecastFetcher, recent_searches: RecentSearches) -> Self {
        Self {
            fetcher,
            recent_searches,
        }
    }

    /// Look up a city's forecast and remember the search on success.
    ///
    /// A failure to persist the search is logged and otherwise ignored.
    pub async fn search(&self, city: &str) -> Result<ForecastResponse, FetchError> {
        let forecast = self.fetcher.fetch_forecast(city).await?;

        // Store access is blocking file I/O
        let recent_searches = self.recent_searches.clone();
        let searched = city.trim().to_string();
        let recorded = tokio::task::spawn_blocking(move || recent_searches.record(&searched))
            .await
            .map_err(StorageError::from)
            .and_then(|result| result);

        match recorded {
            Ok(list) => info!("Recorded search for '{}' ({} recent)", city.trim(), list.len()),
            Err(e) => warn!("Failed to record recent search '{}': {}", city.trim(), e),
        }

        Ok(forecast)
    }

    pub async fn recent_searches(&self) -> Result<Vec<String>, StorageError> {
        let recent_searches = self.recent_searches.clone();
        tokio::task::spawn_blocking(move || recent_searches.list()).await?
    }

    /// Build the detail view, `None` when the forecast holds no samples
    pub fn build_detail(forecast: &ForecastResponse) -> Option<ForecastDetail> {
        let current = forecast.samples.first()?.clone();

        let days = group_by_date(&forecast.samples)
            .into_iter()
            .filter_map(|bucket| {
                let aggregate = aggregate(&bucket.samples)?;
                Some(DailySummary {
                    date: bucket.date,
                    aggregate,
                    samples: bucket.samples,
                })
            })
            .collect();

        Some(ForecastDetail {
            city: forecast.city.clone(),
            wind_direction: compass_direction(current.wind_degrees).to_string(),
            current,
            days,
        })
    }
}
