//! Open-Meteo forecast API client.

use reqwest::Client;
use serde::Deserialize;
use skycast_core::TemperatureUnit;
use std::time::Duration;
use tracing::instrument;

use crate::types::WeatherError;

const FORECAST_API_BASE: &str = "https://api.open-meteo.com";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Hourly variables requested from the forecast endpoint. The mapper relies
/// on these arrays lining up index-for-index.
const HOURLY_VARIABLES: &str =
    "temperature_2m,weathercode,relativehumidity_2m,windspeed_10m,pressure_msl";

/// Raw forecast payload
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub timezone: String,
    pub hourly: HourlyBlock,
}

/// Parallel hourly arrays as served by the API. `time` entries look like
/// "2026-08-06T14:00" in the queried location's local time.
#[derive(Debug, Clone, Deserialize)]
pub struct HourlyBlock {
    pub time: Vec<String>,
    pub temperature_2m: Vec<f64>,
    pub weathercode: Vec<i32>,
    pub relativehumidity_2m: Vec<f64>,
    pub windspeed_10m: Vec<f64>,
    pub pressure_msl: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
}

impl WeatherClient {
    pub fn new() -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: FORECAST_API_BASE.to_string(),
        })
    }

    #[doc(hidden)]
    pub fn new_with_base_url(base_url: &str) -> Result<Self, WeatherError> {
        let mut client = Self::new()?;
        client.base_url = base_url.to_string();
        Ok(client)
    }

    /// Fetch the hourly forecast for a coordinate pair.
    ///
    /// `timezone=auto` keeps the hourly timestamps in the location's local
    /// time so they can be compared against a local clock.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        forecast_days: u8,
        unit: TemperatureUnit,
    ) -> Result<ForecastResponse, WeatherError> {
        let mut url = format!(
            "{}/v1/forecast?latitude={}&longitude={}&hourly={}&timezone=auto&forecast_days={}",
            self.base_url, latitude, longitude, HOURLY_VARIABLES, forecast_days,
        );

        if unit == TemperatureUnit::Fahrenheit {
            url.push_str("&temperature_unit=fahrenheit");
        }

        let response = self.client.get(&url).send().await?;
        self.handle_response(response).await
    }

    /// Helper to handle API responses and errors.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, WeatherError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| WeatherError::Parse(format!("JSON parse error: {}", e)))
        } else {
            let text = response.text().await.unwrap_or_default();
            Err(WeatherError::Api(format!("{}: {}", status, text)))
        }
    }
}
