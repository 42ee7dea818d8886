//! Weather data for Skycast
//!
//! Retrieves hourly forecasts from the Open-Meteo API, detects the machine's
//! position via IP lookup, and reverse-geocodes coordinates to place names.

pub mod api;
pub mod geocode;
pub mod location;
pub mod mapper;
pub mod provider;
pub mod types;

pub use geocode::reverse_geocode;
pub use location::current_location;
pub use provider::WeatherProvider;
pub use types::*;
