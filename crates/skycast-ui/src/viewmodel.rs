//! Coordinates the screen's data flow: get location, reverse geocode, fetch
//! weather, publish UI state. Each step is a single call; the first failure
//! ends the sequence (geocoding excepted, which degrades to a placeholder).

use std::sync::Arc;

use skycast_core::LocationConfig;
use skycast_weather::{current_location, reverse_geocode, Location, WeatherProvider};
use tokio::sync::watch;

use crate::error_mapping;
use crate::state::WeatherUiState;

/// Shown when the locality is unknown (geocoding failed or not attempted yet)
pub const UNKNOWN_LOCALITY: &str = "-";

const LOCATION_ERROR_MESSAGE: &str =
    "Couldn't retrieve location. Set one in the config or check the network.";

/// Owns the observable screen state, in the way a view model owns LiveData:
/// `state` carries loading/loaded/error, `locality` the place name, published
/// independently so a failed geocode never blocks the forecast.
pub struct WeatherViewModel {
    provider: Arc<WeatherProvider>,
    location_config: LocationConfig,
    state_tx: watch::Sender<WeatherUiState>,
    locality_tx: watch::Sender<String>,
}

impl WeatherViewModel {
    pub fn new(provider: Arc<WeatherProvider>, location_config: LocationConfig) -> Self {
        let (state_tx, _) = watch::channel(WeatherUiState::Loading);
        let (locality_tx, _) = watch::channel(UNKNOWN_LOCALITY.to_string());

        Self {
            provider,
            location_config,
            state_tx,
            locality_tx,
        }
    }

    /// Observe the screen state.
    pub fn state(&self) -> watch::Receiver<WeatherUiState> {
        self.state_tx.subscribe()
    }

    /// Observe the locality name.
    pub fn locality(&self) -> watch::Receiver<String> {
        self.locality_tx.subscribe()
    }

    /// Resolve the location, then load the forecast for it.
    pub async fn load_weather(&self) {
        self.state_tx.send_replace(WeatherUiState::Loading);

        match current_location(&self.location_config).await {
            Ok(location) => self.load_at(&location).await,
            Err(e) => {
                tracing::warn!("Location detection failed: {}", e);
                self.state_tx
                    .send_replace(WeatherUiState::Error(LOCATION_ERROR_MESSAGE.to_string()));
            }
        }
    }

    /// Load the forecast for a known location.
    pub async fn load_at(&self, location: &Location) {
        self.state_tx.send_replace(WeatherUiState::Loading);

        let locality = reverse_geocode(location)
            .await
            .unwrap_or_else(|| UNKNOWN_LOCALITY.to_string());
        self.locality_tx.send_replace(locality);

        match self.provider.fetch(location).await {
            Ok(info) => {
                self.state_tx.send_replace(WeatherUiState::Loaded(info));
            }
            Err(e) => {
                tracing::warn!("Weather fetch failed: {}", e);
                let message = error_mapping::app_error(e).user_message().to_string();
                self.state_tx.send_replace(WeatherUiState::Error(message));
            }
        }
    }
}
