//! Configuration management for the weather agent.
//!
//! Configuration can be set via environment variables:
//! - `OPENAI_API_KEY` - Required. API key for the chat completion service.
//! - `MODEL` - Optional. The model to use. Defaults to `gpt-4o`.
//! - `OPENAI_BASE_URL` - Optional. Chat completion API base. Defaults to `https://api.openai.com/v1/`.
//! - `GEOCODING_URL` - Optional. Geocoding endpoint. Defaults to the Open-Meteo geocoding API.
//! - `FORECAST_URL` - Optional. Forecast endpoint. Defaults to the Open-Meteo forecast API.
//! - `REQUEST_TIMEOUT_SECS` - Optional. Timeout for outbound HTTP requests. Defaults to `30`.
//! - `MAX_TURNS` - Optional. Maximum inner-loop iterations per user message. Defaults to `10`.

use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1/";
const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Agent configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the chat completion service
    pub api_key: String,

    /// Model identifier sent with every completion request
    pub model: String,

    /// Base URL of the OpenAI-compatible completion API
    pub openai_base_url: Url,

    /// Geocoding endpoint (city name to coordinates)
    pub geocoding_url: Url,

    /// Forecast endpoint (coordinates to current conditions)
    pub forecast_url: Url,

    /// Timeout applied to all outbound HTTP requests
    pub request_timeout: Duration,

    /// Maximum plan/action cycles before a turn is abandoned
    pub max_turns: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if `OPENAI_API_KEY` is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("OPENAI_API_KEY".to_string()))?;

        let model = std::env::var("MODEL").unwrap_or_else(|_| "gpt-4o".to_string());

        let openai_base_url = env_url("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL)?;
        let geocoding_url = env_url("GEOCODING_URL", DEFAULT_GEOCODING_URL)?;
        let forecast_url = env_url("FORECAST_URL", DEFAULT_FORECAST_URL)?;

        let timeout_secs: u64 = env_parse("REQUEST_TIMEOUT_SECS", 30)?;
        let max_turns: usize = env_parse("MAX_TURNS", 10)?;

        Ok(Self {
            api_key,
            model,
            openai_base_url,
            geocoding_url,
            forecast_url,
            request_timeout: Duration::from_secs(timeout_secs),
            max_turns,
        })
    }

    /// Create a config with custom values (useful for testing).
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            openai_base_url: Url::parse(DEFAULT_OPENAI_BASE_URL).expect("valid default URL"),
            geocoding_url: Url::parse(DEFAULT_GEOCODING_URL).expect("valid default URL"),
            forecast_url: Url::parse(DEFAULT_FORECAST_URL).expect("valid default URL"),
            request_timeout: Duration::from_secs(30),
            max_turns: 10,
        }
    }
}

fn env_url(name: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(name).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidValue(name.to_string(), format!("{}", e)))
}

fn env_parse<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| ConfigError::InvalidValue(name.to_string(), format!("{}", e))),
        Err(_) => Ok(default),
    }
}
