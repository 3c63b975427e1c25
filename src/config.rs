use std::env;
use std::time::Duration;

pub const DEFAULT_FORECAST_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";

#[derive(Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub forecast_url: String,
    pub api_key: String,
    pub units: String,
    pub recent_searches_path: String,
    pub advisor_delay_ms: u64,
}

// Hand-written so the API key never reaches the logs
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("forecast_url", &self.forecast_url)
            .field("api_key", &"<redacted>")
            .field("units", &self.units)
            .field("recent_searches_path", &self.recent_searches_path)
            .field("advisor_delay_ms", &self.advisor_delay_ms)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Config {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            forecast_url: env::var("FORECAST_URL")
                .unwrap_or_else(|_| DEFAULT_FORECAST_URL.to_string()),
            api_key: env::var("OPENWEATHER_API_KEY")?,
            units: env::var("FORECAST_UNITS").unwrap_or_else(|_| "metric".to_string()),
            recent_searches_path: env::var("RECENT_SEARCHES_PATH")
                .unwrap_or_else(|_| "recent_searches.json".to_string()),
            advisor_delay_ms: env::var("ADVISOR_DELAY_MS")
                .unwrap_or_else(|_| "1000".to_string())
                .parse()
                .unwrap_or(1000),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn advisor_delay(&self) -> Duration {
        Duration::from_millis(self.advisor_delay_ms)
    }
}
