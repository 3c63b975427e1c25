use std::sync::Arc;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::Config;
use crate::fetcher::ForecastFetcher;
use crate::services::{AdvisorService, ForecastService};
use crate::storage::{JsonFileStore, RecentSearches};

/// Running application: the HTTP server task
pub struct Application {
    pub server_handle: JoinHandle<Result<(), std::io::Error>>,
}

impl Application {
    /// Wire the fetcher, recent-search store and services, then spawn the
    /// HTTP API server
    pub async fn build(config: Config) -> Result<Self, Box<dyn std::error::Error>> {
        info!("Initializing application components");

        let fetcher = ForecastFetcher::new(
            config.forecast_url.clone(),
            config.api_key.clone(),
            config.units.clone(),
        );

        let store = JsonFileStore::new(&config.recent_searches_path);
        info!("Recent searches stored at {}", store.path().display());
        let recent_searches = RecentSearches::new(Arc::new(store));

        let forecast_service = ForecastService::new(fetcher, recent_searches);
        let advisor_service = AdvisorService::new(config.advisor_delay());

        let app_state = AppState {
            forecast_service,
            advisor_service,
        };
        let app = create_router(app_state).layer(TraceLayer::new_for_http());

        let addr = config.server_addr();
        info!("Starting HTTP server on {}", addr);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        let server_handle = tokio::spawn(async move { axum::serve(listener, app).await });

        info!("Application initialized successfully");
        Ok(Self { server_handle })
    }

    /// Run until the server stops
    pub async fn run_until_stopped(self) -> Result<(), Box<dyn std::error::Error>> {
        self.server_handle.await??;
        Ok(())
    }
}
