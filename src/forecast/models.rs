use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Timestamp layout used by the forecast API's `dt_txt` field
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Visibility reported when the API omits the field (its documented maximum)
pub const DEFAULT_VISIBILITY_METERS: f64 = 10_000.0;

/// Primary weather group as reported in `weather[0].main`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WeatherCondition {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    Mist,
    Fog,
    Haze,
    Smoke,
    Dust,
    Sand,
    Ash,
    Squall,
    Tornado,
    Other(String),
}

impl WeatherCondition {
    pub fn as_str(&self) -> &str {
        match self {
            WeatherCondition::Clear => "Clear",
            WeatherCondition::Clouds => "Clouds",
            WeatherCondition::Rain => "Rain",
            WeatherCondition::Drizzle => "Drizzle",
            WeatherCondition::Thunderstorm => "Thunderstorm",
            WeatherCondition::Snow => "Snow",
            WeatherCondition::Mist => "Mist",
            WeatherCondition::Fog => "Fog",
            WeatherCondition::Haze => "Haze",
            WeatherCondition::Smoke => "Smoke",
            WeatherCondition::Dust => "Dust",
            WeatherCondition::Sand => "Sand",
            WeatherCondition::Ash => "Ash",
            WeatherCondition::Squall => "Squall",
            WeatherCondition::Tornado => "Tornado",
            WeatherCondition::Other(name) => name,
        }
    }
}

impl From<String> for WeatherCondition {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Clear" => WeatherCondition::Clear,
            "Clouds" => WeatherCondition::Clouds,
            "Rain" => WeatherCondition::Rain,
            "Drizzle" => WeatherCondition::Drizzle,
            "Thunderstorm" => WeatherCondition::Thunderstorm,
            "Snow" => WeatherCondition::Snow,
            "Mist" => WeatherCondition::Mist,
            "Fog" => WeatherCondition::Fog,
            "Haze" => WeatherCondition::Haze,
            "Smoke" => WeatherCondition::Smoke,
            "Dust" => WeatherCondition::Dust,
            "Sand" => WeatherCondition::Sand,
            "Ash" => WeatherCondition::Ash,
            "Squall" => WeatherCondition::Squall,
            "Tornado" => WeatherCondition::Tornado,
            _ => WeatherCondition::Other(value),
        }
    }
}

impl From<&str> for WeatherCondition {
    fn from(value: &str) -> Self {
        WeatherCondition::from(value.to_string())
    }
}

impl From<WeatherCondition> for String {
    fn from(value: WeatherCondition) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Day/night marker from the API's `sys.pod` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PartOfDay {
    Day,
    Night,
}

/// One 3-hourly forecast observation, flattened from the API's nested layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ForecastSample {
    /// Unix timestamp (seconds)
    pub dt: i64,
    /// Literal "YYYY-MM-DD HH:MM:SS" text as sent by the API
    pub timestamp: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: u8,
    pub pressure: f64,
    pub sea_level_pressure: Option<f64>,
    pub ground_level_pressure: Option<f64>,
    #[schema(value_type = String, example = "Clouds")]
    pub condition: WeatherCondition,
    pub condition_id: u32,
    pub description: String,
    pub icon: String,
    pub cloud_coverage: u8,
    pub visibility_meters: f64,
    pub wind_speed: f64,
    pub wind_degrees: f64,
    pub wind_gust: Option<f64>,
    pub precipitation_probability: f64,
    pub part_of_day: Option<PartOfDay>,
}

impl ForecastSample {
    /// Calendar date portion of the timestamp text (no timezone conversion)
    pub fn date_key(&self) -> &str {
        match self.timestamp.split_once(' ') {
            Some((date, _)) => date,
            None => &self.timestamp,
        }
    }

    /// Time portion of the timestamp text, empty when absent
    pub fn time_of_day(&self) -> &str {
        self.timestamp
            .split_once(' ')
            .map(|(_, time)| time)
            .unwrap_or("")
    }

    pub fn observed_at(&self) -> Option<chrono::NaiveDateTime> {
        chrono::NaiveDateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT).ok()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct City {
    pub name: String,
    pub country: Option<String>,
    /// Shift from UTC in seconds
    pub timezone_offset_seconds: Option<i32>,
}

/// Decoded forecast payload for one city lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ForecastResponse {
    pub city: City,
    pub samples: Vec<ForecastSample>,
}

// Wire format of the forecast API. Only the fields the service reads are
// declared; everything else in the payload is ignored.

/// `cod` is a number on success and a string on errors
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ResponseCode {
    Number(u16),
    Text(String),
}

impl ResponseCode {
    /// Numeric value of the code, `None` when the text is not a number
    pub fn value(&self) -> Option<u16> {
        match self {
            ResponseCode::Number(code) => Some(*code),
            ResponseCode::Text(text) => text.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WireEnvelope {
    pub cod: Option<ResponseCode>,
    #[serde(default)]
    pub message: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct WireForecast {
    #[serde(default)]
    pub list: Vec<WireSample>,
    pub city: WireCity,
}

#[derive(Debug, Deserialize)]
pub struct WireCity {
    pub name: String,
    pub country: Option<String>,
    pub timezone: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct WireSample {
    pub dt: i64,
    pub main: WireMain,
    #[serde(default)]
    pub weather: Vec<WireWeather>,
    pub clouds: Option<WireClouds>,
    pub wind: Option<WireWind>,
    pub visibility: Option<f64>,
    pub pop: Option<f64>,
    pub sys: Option<WireSys>,
    pub dt_txt: String,
}

#[derive(Debug, Deserialize)]
pub struct WireMain {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub pressure: f64,
    pub sea_level: Option<f64>,
    pub grnd_level: Option<f64>,
    pub humidity: u8,
}

#[derive(Debug, Deserialize)]
pub struct WireWeather {
    pub id: u32,
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Deserialize)]
pub struct WireClouds {
    pub all: u8,
}

#[derive(Debug, Deserialize)]
pub struct WireWind {
    pub speed: f64,
    pub deg: f64,
    pub gust: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct WireSys {
    pub pod: String,
}

impl From<WireSample> for ForecastSample {
    fn from(raw: WireSample) -> Self {
        let weather = raw.weather.into_iter().next();
        let (condition, condition_id, description, icon) = match weather {
            Some(w) => (WeatherCondition::from(w.main), w.id, w.description, w.icon),
            None => (WeatherCondition::Other(String::new()), 0, String::new(), String::new()),
        };
        let (wind_speed, wind_degrees, wind_gust) = match raw.wind {
            Some(w) => (w.speed, w.deg, w.gust),
            None => (0.0, 0.0, None),
        };
        let part_of_day = raw.sys.and_then(|sys| match sys.pod.as_str() {
            "d" => Some(PartOfDay::Day),
            "n" => Some(PartOfDay::Night),
            _ => None,
        });

        ForecastSample {
            dt: raw.dt,
            timestamp: raw.dt_txt,
            temperature: raw.main.temp,
            feels_like: raw.main.feels_like,
            temp_min: raw.main.temp_min,
            temp_max: raw.main.temp_max,
            humidity: raw.main.humidity,
            pressure: raw.main.pressure,
            sea_level_pressure: raw.main.sea_level,
            ground_level_pressure: raw.main.grnd_level,
            condition,
            condition_id,
            description,
            icon,
            cloud_coverage: raw.clouds.map(|c| c.all).unwrap_or(0),
            visibility_meters: raw.visibility.unwrap_or(DEFAULT_VISIBILITY_METERS),
            wind_speed,
            wind_degrees,
            wind_gust,
            precipitation_probability: raw.pop.unwrap_or(0.0),
            part_of_day,
        }
    }
}

impl From<WireForecast> for ForecastResponse {
    fn from(raw: WireForecast) -> Self {
        ForecastResponse {
            city: City {
                name: raw.city.name,
                country: raw.city.country,
                timezone_offset_seconds: raw.city.timezone,
            },
            samples: raw.list.into_iter().map(ForecastSample::from).collect(),
        }
    }
}
