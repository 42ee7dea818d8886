//! The single fetch-and-map operation the presentation layer consumes.

use chrono::{Local, NaiveDateTime};
use skycast_core::{TemperatureUnit, WeatherConfig};
use tracing::instrument;

use crate::api::WeatherClient;
use crate::mapper;
use crate::types::{Location, WeatherError, WeatherInfo};

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: WeatherClient,
    unit: TemperatureUnit,
    forecast_days: u8,
}

impl WeatherProvider {
    pub fn new(config: &WeatherConfig) -> Result<Self, WeatherError> {
        Ok(Self {
            client: WeatherClient::new()?,
            unit: config.temperature_unit,
            forecast_days: config.forecast_days,
        })
    }

    #[doc(hidden)]
    pub fn new_with_base_url(config: &WeatherConfig, base_url: &str) -> Result<Self, WeatherError> {
        Ok(Self {
            client: WeatherClient::new_with_base_url(base_url)?,
            unit: config.temperature_unit,
            forecast_days: config.forecast_days,
        })
    }

    /// The unit requests are made in, with `Auto` resolved for `location`.
    pub fn unit_for(&self, location: &Location) -> TemperatureUnit {
        self.unit.resolve(location.country_code.as_deref())
    }

    /// Fetch the forecast for `location` and reshape it into [`WeatherInfo`].
    ///
    /// One call, no retries; the caller decides what a failure means.
    #[instrument(skip(self, location), level = "info")]
    pub async fn fetch(&self, location: &Location) -> Result<WeatherInfo, WeatherError> {
        self.fetch_with_now(location, Local::now().naive_local()).await
    }

    async fn fetch_with_now(
        &self,
        location: &Location,
        now: NaiveDateTime,
    ) -> Result<WeatherInfo, WeatherError> {
        let unit = self.unit_for(location);
        let response = self
            .client
            .fetch_forecast(location.latitude, location.longitude, self.forecast_days, unit)
            .await?;

        let info = mapper::to_weather_info(&response, now)?;
        tracing::info!(
            "Fetched {} forecast days ({} hourly samples)",
            info.per_day.len(),
            info.per_day.values().map(Vec::len).sum::<usize>(),
        );
        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn forecast_body() -> serde_json::Value {
        let time: Vec<String> = (0..24).map(|h| format!("2026-08-06T{:02}:00", h)).collect();
        serde_json::json!({
            "latitude": 47.6,
            "longitude": -122.33,
            "timezone": "America/Los_Angeles",
            "hourly": {
                "time": time,
                "temperature_2m": (0..24).map(|h| h as f64).collect::<Vec<_>>(),
                "weathercode": vec![61; 24],
                "relativehumidity_2m": vec![70.0; 24],
                "windspeed_10m": vec![12.0; 24],
                "pressure_msl": vec![1008.0; 24]
            }
        })
    }

    fn seattle() -> Location {
        Location {
            latitude: 47.6062,
            longitude: -122.3321,
            city: None,
            country_code: Some("US".to_string()),
        }
    }

    #[test]
    fn test_unit_resolution_per_location() {
        let provider = WeatherProvider::new(&WeatherConfig::default()).unwrap();
        assert_eq!(provider.unit_for(&seattle()), TemperatureUnit::Fahrenheit);

        let elsewhere = Location {
            country_code: Some("DE".to_string()),
            ..seattle()
        };
        assert_eq!(provider.unit_for(&elsewhere), TemperatureUnit::Celsius);
    }

    #[tokio::test]
    async fn test_fetch_maps_into_weather_info() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .and(query_param("forecast_days", "7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
            .mount(&mock_server)
            .await;

        let provider =
            WeatherProvider::new_with_base_url(&WeatherConfig::default(), &mock_server.uri())
                .unwrap();

        let now = NaiveDate::from_ymd_opt(2026, 8, 6)
            .unwrap()
            .and_hms_opt(9, 10, 0)
            .unwrap();
        let info = provider.fetch_with_now(&seattle(), now).await.unwrap();

        assert_eq!(info.per_day.len(), 1);
        assert_eq!(info.day(0).unwrap().len(), 24);
        let current = info.current.unwrap();
        assert_eq!(current.temperature, 9.0);
        assert_eq!(current.kind, crate::types::WeatherKind::Rain);
    }

    #[tokio::test]
    async fn test_fetch_propagates_api_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&mock_server)
            .await;

        let provider =
            WeatherProvider::new_with_base_url(&WeatherConfig::default(), &mock_server.uri())
                .unwrap();

        let result = provider.fetch(&seattle()).await;
        assert!(matches!(result, Err(WeatherError::Api(_))));
    }
}
