// Tests for ForecastFetcher against a mocked forecast provider
// Uses mockito for HTTP mocking

mod common;

use forecast_advisor_service::fetch_error::FetchError;
use forecast_advisor_service::fetcher::ForecastFetcher;
use forecast_advisor_service::forecast::WeatherCondition;
use mockito::{Matcher, Server};

fn create_test_fetcher(base_url: String) -> ForecastFetcher {
    ForecastFetcher::new(
        base_url + "/forecast",
        common::TEST_API_KEY.to_string(),
        "metric".to_string(),
    )
}

#[tokio::test]
async fn test_fetch_forecast_success() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/forecast")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "Patna".into()),
            Matcher::UrlEncoded("appid".into(), common::TEST_API_KEY.into()),
            Matcher::UrlEncoded("units".into(), "metric".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::forecast_payload().to_string())
        .create_async()
        .await;

    let fetcher = create_test_fetcher(server.url());
    let forecast = fetcher.fetch_forecast("Patna").await.unwrap();

    assert_eq!(forecast.city.name, "Patna");
    assert_eq!(forecast.samples.len(), 4);
    assert_eq!(forecast.samples[0].condition, WeatherCondition::Clear);
    assert_eq!(forecast.samples[3].condition, WeatherCondition::Rain);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_forecast_trims_city() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/forecast")
        .match_query(Matcher::UrlEncoded("q".into(), "New York".into()))
        .with_status(200)
        .with_body(common::forecast_payload().to_string())
        .create_async()
        .await;

    let fetcher = create_test_fetcher(server.url());
    assert!(fetcher.fetch_forecast("  New York ").await.is_ok());

    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_forecast_city_not_found() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/forecast")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(common::not_found_payload().to_string())
        .create_async()
        .await;

    let fetcher = create_test_fetcher(server.url());
    let result = fetcher.fetch_forecast("Atlantis").await;

    match result {
        Err(FetchError::CityNotFound { code, message }) => {
            assert_eq!(code, 404);
            assert!(message.contains("not found"));
        }
        other => panic!("Expected CityNotFound error, got {:?}", other),
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_forecast_invalid_body() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("GET", "/forecast")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("<html>Internal Server Error</html>")
        .create_async()
        .await;

    let fetcher = create_test_fetcher(server.url());
    let result = fetcher.fetch_forecast("Patna").await;

    assert!(matches!(result, Err(FetchError::Decode(_))));
}

#[tokio::test]
async fn test_fetch_forecast_empty_city_skips_request() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/forecast")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let fetcher = create_test_fetcher(server.url());
    let result = fetcher.fetch_forecast("   ").await;

    assert!(matches!(result, Err(FetchError::EmptyCity)));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_forecast_connection_refused() {
    // Nothing listens on port 9 locally
    let fetcher = ForecastFetcher::new(
        "http://127.0.0.1:9/forecast".to_string(),
        common::TEST_API_KEY.to_string(),
        "metric".to_string(),
    );

    let result = fetcher.fetch_forecast("Patna").await;
    assert!(matches!(result, Err(FetchError::Request(_))));
}
