use tracing::{debug, error, instrument, warn};

use crate::fetch_error::FetchError;
use crate::forecast::models::{WireEnvelope, WireForecast};
use crate::forecast::ForecastResponse;

/// Status code the forecast API reports for a successful lookup
pub const SUCCESS_CODE: u16 = 200;

#[derive(Clone)]
pub struct ForecastFetcher {
    client: reqwest::Client,
    url: String,
    api_key: String,
    units: String,
}

impl ForecastFetcher {
    pub fn new(url: String, api_key: String, units: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
            api_key,
            units,
        }
    }

    /// Fetch the multi-day forecast for `city`.
    ///
    /// The payload's `cod` field decides success, not the HTTP status.
    #[instrument(skip(self), fields(url = %self.url, units = %self.units))]
    pub async fn fetch_forecast(&self, city: &str) -> Result<ForecastResponse, FetchError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(FetchError::EmptyCity);
        }

        debug!("Sending forecast request");
        let response = self
            .client
            .get(&self.url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", self.units.as_str()),
            ])
            .send()
            .await?;
        let http_status = response.status().as_u16();
        debug!("Received HTTP response with status: {}", http_status);

        let body = response.text().await?;
        debug!("Retrieved forecast body, size: {} bytes", body.len());

        parse_response(&body, http_status)
    }
}

/// Decode a forecast payload. Success iff the payload code is 200; when the
/// payload carries no code the HTTP status stands in for it.
#[instrument(skip(body), fields(body_size = body.len()))]
pub fn parse_response(body: &str, http_status: u16) -> Result<ForecastResponse, FetchError> {
    let envelope: WireEnvelope = serde_json::from_str(body).map_err(|e| {
        error!("Forecast payload is not valid JSON: {}", e);
        debug!(
            "Body preview (first 200 chars): {}",
            body.chars().take(200).collect::<String>()
        );
        e
    })?;

    let code = match &envelope.cod {
        Some(cod) => cod.value().unwrap_or(0),
        None => http_status,
    };

    if code != SUCCESS_CODE {
        let message = match envelope.message {
            Some(serde_json::Value::String(text)) => text,
            Some(other) => other.to_string(),
            None => "city not found".to_string(),
        };
        warn!("Forecast API reported code {}: {}", code, message);
        return Err(FetchError::CityNotFound { code, message });
    }

    let forecast: WireForecast = serde_json::from_str(body)?;
    let forecast = ForecastResponse::from(forecast);
    debug!(
        "Decoded {} samples for {}",
        forecast.samples.len(),
        forecast.city.name
    );
    Ok(forecast)
}
