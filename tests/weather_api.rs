//! HTTP mock tests for the weather lookup tool.
//!
//! Uses wiremock to simulate the geocoding and forecast endpoints.

use std::time::Duration;

use serde_json::json;
use url::Url;
use weather_agent::tools::WeatherInfo;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn tool_for(server: &MockServer) -> WeatherInfo {
    let geocoding_url = Url::parse(&format!("{}/v1/search", server.uri())).unwrap();
    let forecast_url = Url::parse(&format!("{}/v1/forecast", server.uri())).unwrap();
    WeatherInfo::with_endpoints(geocoding_url, forecast_url, Duration::from_secs(5))
}

#[tokio::test]
async fn unknown_city_reports_not_found_without_a_forecast_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", "Atlantis"))
        .and(query_param("count", "1"))
        .and(query_param("language", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .mount(&server)
        .await;

    // The conditions lookup must not happen when geocoding finds nothing.
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let tool = tool_for(&server);
    let report = tool.lookup("Atlantis").await;

    assert_eq!(report, "Could not find location for Atlantis.");
}

#[tokio::test]
async fn missing_conditions_payload_reports_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"latitude": 52.52, "longitude": 13.41}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let tool = tool_for(&server);
    let report = tool.lookup("Berlin").await;

    assert_eq!(report, "Weather data not available for \"Berlin\".");
}

#[tokio::test]
async fn successful_lookup_formats_the_full_sentence() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", "Berlin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"latitude": 52.52, "longitude": 13.41}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("current_weather", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "current_weather": {"temperature": 21.4, "windspeed": 11.0, "weathercode": 61}
        })))
        .mount(&server)
        .await;

    let tool = tool_for(&server);
    let report = tool.lookup("Berlin").await;

    assert_eq!(
        report,
        "The current weather in Berlin is rainy (21.4°C, wind 11 km/h)."
    );
}

#[tokio::test]
async fn transport_failure_reports_generic_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let tool = tool_for(&server);
    let report = tool.lookup("Berlin").await;

    assert_eq!(report, "Error fetching weather info for \"Berlin\".");
}

#[tokio::test]
async fn malformed_geocoding_payload_reports_generic_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let tool = tool_for(&server);
    let report = tool.lookup("Berlin").await;

    assert_eq!(report, "Error fetching weather info for \"Berlin\".");
}
