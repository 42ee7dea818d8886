use skycast_core::error::ReqwestErrorExt;
use skycast_core::AppError;
use skycast_weather::{LocationError, WeatherError};

/// Map a weather-crate error onto the application error hierarchy.
pub fn app_error(e: WeatherError) -> AppError {
    match e {
        WeatherError::Network(e) => AppError::Network(e.into_network_error()),
        WeatherError::Api(msg) => AppError::Weather(skycast_core::WeatherError::ApiError(msg)),
        WeatherError::Parse(msg) => {
            AppError::Weather(skycast_core::WeatherError::MalformedData(msg))
        }
        WeatherError::Location(e) => AppError::Location(location_error(e)),
    }
}

fn location_error(e: LocationError) -> skycast_core::LocationError {
    match e {
        LocationError::ServiceUnavailable => skycast_core::LocationError::ServiceUnavailable,
        LocationError::Timeout => skycast_core::LocationError::Timeout,
        LocationError::Malformed(msg) | LocationError::Other(msg) => {
            skycast_core::LocationError::NotFound(msg)
        }
    }
}
