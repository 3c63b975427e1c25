use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};
use utoipa::{IntoParams, OpenApi, ToSchema};

use crate::advisor::{CurrentConditions, FeasibilityTier, FeasibilityVerdict};
use crate::fetch_error::FetchError;
use crate::forecast::{City, DailyAggregate, ForecastResponse, ForecastSample, PartOfDay};
use crate::services::{AdvisorService, DailySummary, ForecastDetail, ForecastService};

pub const NO_DATA_MESSAGE: &str = "No weather data available.";
pub const CITY_NOT_FOUND_MESSAGE: &str = "city not found";

#[derive(Clone)]
pub struct AppState {
    pub forecast_service: ForecastService,
    pub advisor_service: AdvisorService,
}

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ForecastQuery {
    /// City name to look up
    #[serde(default)]
    pub city: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AdvisorRequest {
    pub question: String,
    pub location: String,
    pub conditions: CurrentConditions,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            message: message.into(),
        }),
    )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        search_forecast,
        forecast_detail,
        advise,
        advisor_history,
        recent_searches
    ),
    components(schemas(
        HealthResponse,
        ErrorResponse,
        AdvisorRequest,
        ForecastResponse,
        ForecastSample,
        City,
        PartOfDay,
        ForecastDetail,
        DailySummary,
        DailyAggregate,
        CurrentConditions,
        FeasibilityTier,
        FeasibilityVerdict
    )),
    tags(
        (name = "forecast", description = "City forecast lookup and daily grouping"),
        (name = "advisor", description = "Outdoor activity feasibility")
    )
)]
pub struct ApiDoc;

pub fn generate_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health))
        .route("/forecast", get(search_forecast))
        .route("/detail", post(forecast_detail))
        .route("/advisor", post(advise))
        .route("/advisor/history", get(advisor_history))
        .route("/recent-searches", get(recent_searches))
        .with_state(state);

    Router::new().nest("/api/v1", api_routes)
}

#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
#[instrument]
async fn health() -> impl IntoResponse {
    debug!("Health check requested");
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
        }),
    )
}

#[utoipa::path(
    get,
    path = "/api/v1/forecast",
    tag = "forecast",
    params(ForecastQuery),
    responses(
        (status = 200, description = "Forecast for the city", body = ForecastResponse),
        (status = 400, description = "City name missing", body = ErrorResponse),
        (status = 404, description = "City not found", body = ErrorResponse),
        (
            status = 502,
            description = "Forecast provider unreachable or payload invalid",
            body = ErrorResponse
        )
    )
)]
#[instrument(skip(state), fields(city = %query.city))]
async fn search_forecast(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> Result<Json<ForecastResponse>, ApiError> {
    debug!("Looking up forecast for '{}'", query.city);
    let forecast = state
        .forecast_service
        .search(&query.city)
        .await
        .map_err(|e| match e {
            FetchError::EmptyCity => {
                warn!("Rejected forecast lookup without a city");
                api_error(StatusCode::BAD_REQUEST, e.to_string())
            }
            FetchError::CityNotFound { .. } => {
                warn!("Forecast lookup for '{}' failed: {}", query.city, e);
                api_error(StatusCode::NOT_FOUND, CITY_NOT_FOUND_MESSAGE)
            }
            FetchError::Request(_) | FetchError::Decode(_) => {
                error!("Forecast lookup for '{}' failed: {}", query.city, e);
                api_error(StatusCode::BAD_GATEWAY, e.to_string())
            }
        })?;

    info!(
        "Retrieved {} forecast samples for {}",
        forecast.samples.len(),
        forecast.city.name
    );
    Ok(Json(forecast))
}

/// Detail view. The forecast from a prior search is posted back as-is; it is
/// never re-fetched.
#[utoipa::path(
    post,
    path = "/api/v1/detail",
    tag = "forecast",
    request_body = ForecastResponse,
    responses(
        (status = 200, description = "Grouped daily forecast", body = ForecastDetail),
        (status = 400, description = "Payload is not a forecast", body = ErrorResponse),
        (status = 404, description = "No forecast data supplied", body = ErrorResponse)
    )
)]
#[instrument(skip(body), fields(body_size = body.len()))]
async fn forecast_detail(body: Bytes) -> Result<Json<ForecastDetail>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        warn!("Detail requested without forecast data");
        return Err(api_error(StatusCode::NOT_FOUND, NO_DATA_MESSAGE));
    }

    let forecast: ForecastResponse = serde_json::from_slice(&body).map_err(|e| {
        warn!("Detail payload could not be decoded: {}", e);
        api_error(StatusCode::BAD_REQUEST, format!("Invalid forecast payload: {}", e))
    })?;

    let detail = ForecastService::build_detail(&forecast).ok_or_else(|| {
        warn!("Forecast for {} holds no samples", forecast.city.name);
        api_error(StatusCode::NOT_FOUND, NO_DATA_MESSAGE)
    })?;

    info!(
        "Built detail for {} with {} days",
        detail.city.name,
        detail.days.len()
    );
    Ok(Json(detail))
}

#[utoipa::path(
    post,
    path = "/api/v1/advisor",
    tag = "advisor",
    request_body = AdvisorRequest,
    responses(
        (status = 200, description = "Feasibility verdict", body = FeasibilityVerdict),
        (status = 204, description = "Blank question, nothing evaluated")
    )
)]
#[instrument(skip(state, request), fields(location = %request.location))]
async fn advise(State(state): State<AppState>, Json(request): Json<AdvisorRequest>) -> Response {
    match state
        .advisor_service
        .advise(&request.question, &request.conditions, &request.location)
        .await
    {
        Some(verdict) => (StatusCode::OK, Json(verdict)).into_response(),
        None => {
            debug!("Blank question, no verdict produced");
            StatusCode::NO_CONTENT.into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/advisor/history",
    tag = "advisor",
    responses(
        (status = 200, description = "Recent verdicts, newest first", body = [FeasibilityVerdict])
    )
)]
#[instrument(skip(state))]
async fn advisor_history(State(state): State<AppState>) -> Json<Vec<FeasibilityVerdict>> {
    let history = state.advisor_service.history();
    debug!("Returning {} verdicts", history.len());
    Json(history)
}

#[utoipa::path(
    get,
    path = "/api/v1/recent-searches",
    tag = "forecast",
    responses(
        (status = 200, description = "Recent city searches, newest first", body = [String]),
        (status = 500, description = "Search list unreadable", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
async fn recent_searches(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    let searches = state.forecast_service.recent_searches().await.map_err(|e| {
        error!("Failed to read recent searches: {}", e);
        api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;
    Ok(Json(searches))
}
