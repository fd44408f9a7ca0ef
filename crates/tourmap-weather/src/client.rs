//! HTTP client for the Open-Meteo forecast API.

use std::time::Duration;

use reqwest::{Client, Url};
use tourmap_core::{AppConfig, Coordinate};

use crate::error::WeatherError;
use crate::types::{CurrentWeather, ForecastResponse};

/// Open-Meteo client. Free tier, no API key.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    forecast_url: Url,
}

impl OpenMeteoClient {
    /// `forecast_url` is the full `/v1/forecast` endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`WeatherError::InvalidBaseUrl`] if `forecast_url` does not parse.
    pub fn new(
        forecast_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(5))
            .user_agent(user_agent)
            .build()?;
        let forecast_url = Url::parse(forecast_url).map_err(|e| WeatherError::InvalidBaseUrl {
            url: forecast_url.to_owned(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            client,
            forecast_url,
        })
    }

    /// # Errors
    ///
    /// See [`OpenMeteoClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, WeatherError> {
        Self::new(
            &config.open_meteo_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Current temperature, wind speed and WMO code at `at`.
    ///
    /// # Errors
    ///
    /// - [`WeatherError::Http`] on network failure or a non-2xx status.
    /// - [`WeatherError::Deserialize`] if the body lacks a `current_weather` block.
    pub async fn current_weather(&self, at: &Coordinate) -> Result<CurrentWeather, WeatherError> {
        let url = self.build_url(at);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        let parsed: ForecastResponse =
            serde_json::from_str(&body).map_err(|e| WeatherError::Deserialize {
                context: format!("forecast({at})"),
                source: e,
            })?;

        tracing::debug!(
            %at,
            temperature = parsed.current_weather.temperature,
            weathercode = parsed.current_weather.weathercode,
            "fetched current weather"
        );
        Ok(parsed.current_weather)
    }

    fn build_url(&self, at: &Coordinate) -> Url {
        let mut url = self.forecast_url.clone();
        url.query_pairs_mut()
            .append_pair("latitude", &at.latitude().to_string())
            .append_pair("longitude", &at.longitude().to_string())
            .append_pair("current_weather", "true");
        url
    }
}
