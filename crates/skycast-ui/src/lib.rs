//! Presentation layer for Skycast
//!
//! Turns domain weather data into UI state and renders the terminal screens.

pub mod error_mapping;
pub mod format;
pub mod screen;
pub mod state;
pub mod viewmodel;

pub use state::WeatherUiState;
pub use viewmodel::WeatherViewModel;
