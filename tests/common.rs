#![allow(dead_code)]

use forecast_advisor_service::advisor::CurrentConditions;
use forecast_advisor_service::forecast::WeatherCondition;
use serde_json::{json, Value};

pub const TEST_API_KEY: &str = "test-key";

/// One forecast list entry in the provider's wire format
pub fn wire_sample(dt_txt: &str, temp: f64, main: &str) -> Value {
    json!({
        "dt": 1718442000,
        "main": {
            "temp": temp,
            "feels_like": temp,
            "temp_min": temp - 1.0,
            "temp_max": temp + 1.0,
            "pressure": 1008,
            "sea_level": 1008,
            "grnd_level": 1001,
            "humidity": 55
        },
        "weather": [{"id": 800, "main": main, "description": main.to_lowercase(), "icon": "01d"}],
        "clouds": {"all": 10},
        "wind": {"speed": 3.2, "deg": 90, "gust": 4.0},
        "visibility": 10000,
        "pop": 0.1,
        "sys": {"pod": "d"},
        "dt_txt": dt_txt
    })
}

/// Successful provider payload for Patna spanning two dates
pub fn forecast_payload() -> Value {
    json!({
        "cod": "200",
        "message": 0,
        "cnt": 4,
        "list": [
            wire_sample("2024-06-15 18:00:00", 31.0, "Clear"),
            wire_sample("2024-06-15 21:00:00", 29.0, "Clouds"),
            wire_sample("2024-06-16 00:00:00", 27.0, "Clouds"),
            wire_sample("2024-06-16 03:00:00", 26.0, "Rain")
        ],
        "city": {"id": 1260086, "name": "Patna", "country": "IN", "timezone": 19800}
    })
}

pub fn not_found_payload() -> Value {
    json!({"cod": "404", "message": "city not found"})
}

/// Favorable midday conditions used as a baseline for scenarios
pub fn favorable_conditions() -> CurrentConditions {
    CurrentConditions {
        temperature: 20.0,
        feels_like: 20.0,
        humidity: 50,
        condition: WeatherCondition::Clouds,
        description: "scattered clouds".to_string(),
        wind_speed: 3.0,
        visibility_meters: 10_000.0,
        precipitation_probability: 0.1,
        observed_at: chrono::NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0),
    }
}
