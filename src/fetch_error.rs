#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Failed to decode forecast payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("city not found (code {code}): {message}")]
    CityNotFound { code: u16, message: String },
    #[error("City name must not be empty")]
    EmptyCity,
}
