use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Weather condition categories mapped from WMO codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeatherKind {
    #[default]
    Clear,
    MainlyClear,
    PartlyCloudy,
    Overcast,
    Fog,
    Drizzle,
    FreezingDrizzle,
    Rain,
    FreezingRain,
    HeavyRain,
    RainShowers,
    Snow,
    SnowGrains,
    SnowShowers,
    Thunderstorm,
    HailThunderstorm,
}

impl WeatherKind {
    /// Convert WMO weather code to WeatherKind
    /// See: https://open-meteo.com/en/docs#weathervariables
    pub fn from_wmo_code(code: i32) -> Self {
        match code {
            0 => Self::Clear,
            1 => Self::MainlyClear,
            2 => Self::PartlyCloudy,
            3 => Self::Overcast,
            45 | 48 => Self::Fog,
            51 | 53 | 55 => Self::Drizzle,
            56 | 57 => Self::FreezingDrizzle,
            61 | 63 => Self::Rain,
            65 => Self::HeavyRain,
            66 | 67 => Self::FreezingRain,
            80 | 81 | 82 => Self::RainShowers,
            71 | 73 | 75 => Self::Snow,
            77 => Self::SnowGrains,
            85 | 86 => Self::SnowShowers,
            95 => Self::Thunderstorm,
            96 | 99 => Self::HailThunderstorm,
            _ => Self::Clear, // Unknown codes default to clear
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::Clear => "Clear sky",
            Self::MainlyClear => "Mainly clear",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Overcast => "Overcast",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::FreezingDrizzle => "Freezing drizzle",
            Self::Rain => "Rain",
            Self::FreezingRain => "Freezing rain",
            Self::HeavyRain => "Heavy rain",
            Self::RainShowers => "Rain showers",
            Self::Snow => "Snow",
            Self::SnowGrains => "Snow grains",
            Self::SnowShowers => "Snow showers",
            Self::Thunderstorm => "Thunderstorm",
            Self::HailThunderstorm => "Thunderstorm with hail",
        }
    }

    /// Icon name for the screen renderer
    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Clear | Self::MainlyClear => "sun",
            Self::PartlyCloudy => "cloud_sun",
            Self::Overcast => "cloud",
            Self::Fog => "cloud_fog",
            Self::Drizzle | Self::FreezingDrizzle => "cloud_drizzle",
            Self::Rain | Self::FreezingRain | Self::HeavyRain | Self::RainShowers => "cloud_rain",
            Self::Snow | Self::SnowGrains | Self::SnowShowers => "cloud_snow",
            Self::Thunderstorm | Self::HailThunderstorm => "cloud_lightning",
        }
    }
}

/// Geographic location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    /// Place name hint from the locator, skips reverse geocoding when set
    pub city: Option<String>,
    /// ISO 3166-1 alpha-2 country code, used to resolve the Auto unit
    pub country_code: Option<String>,
}

/// One hourly forecast sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlySample {
    /// Forecast hour in the queried location's local time
    pub time: NaiveDateTime,
    pub temperature: f64,
    pub pressure_msl: f64,
    pub wind_speed: f64,
    pub humidity: f64,
    pub kind: WeatherKind,
}

/// Domain-level aggregate: hourly samples bucketed by calendar day plus the
/// sample closest to "now".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherInfo {
    pub per_day: BTreeMap<NaiveDate, Vec<HourlySample>>,
    pub current: Option<HourlySample>,
}

impl WeatherInfo {
    /// Samples for the n-th forecast day, in chronological order.
    /// Day 0 is the earliest day in the forecast.
    pub fn day(&self, index: usize) -> Option<&[HourlySample]> {
        self.per_day.values().nth(index).map(Vec::as_slice)
    }

    /// Iterate over (date, samples) pairs in chronological order.
    pub fn days(&self) -> impl Iterator<Item = (NaiveDate, &[HourlySample])> {
        self.per_day.iter().map(|(date, samples)| (*date, samples.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.per_day.is_empty()
    }
}

/// Location service errors
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("Location service unavailable")]
    ServiceUnavailable,
    #[error("Location request timed out")]
    Timeout,
    #[error("Malformed location data: {0}")]
    Malformed(String),
    #[error("Location error: {0}")]
    Other(String),
}

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Location error: {0}")]
    Location(#[from] LocationError),
    #[error("Weather API error: {0}")]
    Api(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample(time: NaiveDateTime) -> HourlySample {
        HourlySample {
            time,
            temperature: 20.0,
            pressure_msl: 1013.0,
            wind_speed: 10.0,
            humidity: 50.0,
            kind: WeatherKind::Clear,
        }
    }

    #[test]
    fn test_wmo_code_clear_family() {
        assert_eq!(WeatherKind::from_wmo_code(0), WeatherKind::Clear);
        assert_eq!(WeatherKind::from_wmo_code(1), WeatherKind::MainlyClear);
        assert_eq!(WeatherKind::from_wmo_code(2), WeatherKind::PartlyCloudy);
        assert_eq!(WeatherKind::from_wmo_code(3), WeatherKind::Overcast);
    }

    #[test]
    fn test_wmo_code_fog() {
        assert_eq!(WeatherKind::from_wmo_code(45), WeatherKind::Fog);
        assert_eq!(WeatherKind::from_wmo_code(48), WeatherKind::Fog);
    }

    #[test]
    fn test_wmo_code_drizzle() {
        assert_eq!(WeatherKind::from_wmo_code(51), WeatherKind::Drizzle);
        assert_eq!(WeatherKind::from_wmo_code(55), WeatherKind::Drizzle);
        assert_eq!(WeatherKind::from_wmo_code(56), WeatherKind::FreezingDrizzle);
        assert_eq!(WeatherKind::from_wmo_code(57), WeatherKind::FreezingDrizzle);
    }

    #[test]
    fn test_wmo_code_rain() {
        assert_eq!(WeatherKind::from_wmo_code(61), WeatherKind::Rain);
        assert_eq!(WeatherKind::from_wmo_code(63), WeatherKind::Rain);
        assert_eq!(WeatherKind::from_wmo_code(65), WeatherKind::HeavyRain);
        assert_eq!(WeatherKind::from_wmo_code(66), WeatherKind::FreezingRain);
        assert_eq!(WeatherKind::from_wmo_code(80), WeatherKind::RainShowers);
        assert_eq!(WeatherKind::from_wmo_code(82), WeatherKind::RainShowers);
    }

    #[test]
    fn test_wmo_code_snow() {
        assert_eq!(WeatherKind::from_wmo_code(71), WeatherKind::Snow);
        assert_eq!(WeatherKind::from_wmo_code(75), WeatherKind::Snow);
        assert_eq!(WeatherKind::from_wmo_code(77), WeatherKind::SnowGrains);
        assert_eq!(WeatherKind::from_wmo_code(85), WeatherKind::SnowShowers);
        assert_eq!(WeatherKind::from_wmo_code(86), WeatherKind::SnowShowers);
    }

    #[test]
    fn test_wmo_code_thunderstorm() {
        assert_eq!(WeatherKind::from_wmo_code(95), WeatherKind::Thunderstorm);
        assert_eq!(WeatherKind::from_wmo_code(96), WeatherKind::HailThunderstorm);
        assert_eq!(WeatherKind::from_wmo_code(99), WeatherKind::HailThunderstorm);
    }

    #[test]
    fn test_wmo_code_unknown_defaults_to_clear() {
        assert_eq!(WeatherKind::from_wmo_code(999), WeatherKind::Clear);
        assert_eq!(WeatherKind::from_wmo_code(-1), WeatherKind::Clear);
    }

    #[test]
    fn test_kind_description() {
        assert_eq!(WeatherKind::Clear.description(), "Clear sky");
        assert_eq!(
            WeatherKind::HailThunderstorm.description(),
            "Thunderstorm with hail"
        );
    }

    #[test]
    fn test_kind_icon_name() {
        assert_eq!(WeatherKind::MainlyClear.icon_name(), "sun");
        assert_eq!(WeatherKind::RainShowers.icon_name(), "cloud_rain");
    }

    #[test]
    fn test_day_indexing_is_chronological() {
        let d0 = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let d1 = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();

        let mut per_day = BTreeMap::new();
        // Insert out of order; BTreeMap keeps dates sorted
        per_day.insert(d1, vec![sample(d1.and_hms_opt(0, 0, 0).unwrap())]);
        per_day.insert(d0, vec![sample(d0.and_hms_opt(0, 0, 0).unwrap())]);

        let info = WeatherInfo {
            per_day,
            current: None,
        };

        assert_eq!(info.day(0).unwrap()[0].time.date(), d0);
        assert_eq!(info.day(1).unwrap()[0].time.date(), d1);
        assert!(info.day(2).is_none());
        assert_eq!(info.days().count(), 2);
    }
}
