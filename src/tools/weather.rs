//! Current-weather lookup tool backed by the Open-Meteo APIs.
//!
//! Two sequential lookups per invocation: city name to coordinates, then
//! coordinates to current conditions. Every failure mode is converted to a
//! descriptive sentence so the model can reason about it; the tool never
//! surfaces an error to the agent loop.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::Config;

use super::Tool;

const RAINY_CODES: &[i32] = &[51, 53, 55, 61, 63, 65, 80, 81, 82];
const SNOWY_CODES: &[i32] = &[71, 73, 75, 77, 85, 86];
const FOGGY_CODES: &[i32] = &[45, 48];

/// Map a temperature and a WMO weather code to a coarse condition label.
///
/// Precipitation/sky codes win over temperature; unrecognized codes fall
/// through to the temperature ladder. Total over all inputs.
pub fn describe_weather(temp_c: f64, weather_code: i32) -> &'static str {
    if RAINY_CODES.contains(&weather_code) {
        "rainy"
    } else if SNOWY_CODES.contains(&weather_code) {
        "snowy"
    } else if FOGGY_CODES.contains(&weather_code) {
        "foggy"
    } else if temp_c >= 35.0 {
        "extremely hot"
    } else if temp_c >= 28.0 {
        "hot"
    } else if temp_c >= 18.0 {
        "pleasant"
    } else if temp_c >= 8.0 {
        "cool"
    } else {
        "cold"
    }
}

#[derive(Serialize)]
struct GeocodingQuery<'a> {
    name: &'a str,
    count: u32,
    language: &'a str,
    format: &'a str,
}

#[derive(Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Option<Vec<GeoMatch>>,
}

#[derive(Deserialize)]
struct GeoMatch {
    latitude: f64,
    longitude: f64,
}

#[derive(Serialize)]
struct ForecastQuery {
    latitude: f64,
    longitude: f64,
    current_weather: bool,
}

#[derive(Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    current_weather: Option<CurrentWeather>,
}

#[derive(Deserialize)]
struct CurrentWeather {
    temperature: f64,
    windspeed: f64,
    weathercode: i32,
}

/// The `getWeatherInfo` tool: current weather for a named city.
pub struct WeatherInfo {
    client: Client,
    geocoding_url: Url,
    forecast_url: Url,
}

impl WeatherInfo {
    pub fn new(config: &Config) -> Self {
        Self::with_endpoints(
            config.geocoding_url.clone(),
            config.forecast_url.clone(),
            config.request_timeout,
        )
    }

    pub fn with_endpoints(
        geocoding_url: Url,
        forecast_url: Url,
        timeout: std::time::Duration,
    ) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            geocoding_url,
            forecast_url,
        }
    }

    /// Look up current weather for `city`, always producing a sentence.
    pub async fn lookup(&self, city: &str) -> String {
        tracing::debug!("fetching weather for {}", city);

        match self.fetch_report(city).await {
            Ok(report) => report,
            Err(err) => {
                tracing::warn!("weather request for {} failed: {:#}", city, err);
                format!("Error fetching weather info for \"{}\".", city)
            }
        }
    }

    async fn fetch_report(&self, city: &str) -> anyhow::Result<String> {
        let geo: GeocodingResponse = self
            .client
            .get(self.geocoding_url.clone())
            .query(&GeocodingQuery {
                name: city,
                count: 1,
                language: "en",
                format: "json",
            })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let location = match geo.results.and_then(|matches| matches.into_iter().next()) {
            Some(location) => location,
            None => {
                tracing::debug!("location not found for {}", city);
                return Ok(format!("Could not find location for {}.", city));
            }
        };

        let forecast: ForecastResponse = self
            .client
            .get(self.forecast_url.clone())
            .query(&ForecastQuery {
                latitude: location.latitude,
                longitude: location.longitude,
                current_weather: true,
            })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let weather = match forecast.current_weather {
            Some(weather) => weather,
            None => return Ok(format!("Weather data not available for \"{}\".", city)),
        };

        let condition = describe_weather(weather.temperature, weather.weathercode);

        Ok(format!(
            "The current weather in {} is {} ({}°C, wind {} km/h).",
            city, condition, weather.temperature, weather.windspeed
        ))
    }
}

#[async_trait]
impl Tool for WeatherInfo {
    fn name(&self) -> &str {
        "getWeatherInfo"
    }

    fn description(&self) -> &str {
        "Accepts a city name as a string and returns current weather details for that city."
    }

    async fn execute(&self, input: &str) -> anyhow::Result<String> {
        Ok(self.lookup(input).await)
    }
}
