use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Add a warning
    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Temperature unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Auto,
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Resolve `Auto` against an ISO country code from the located position.
    /// Only the US, Liberia and Myanmar report in Fahrenheit.
    pub fn resolve(self, country_code: Option<&str>) -> TemperatureUnit {
        match self {
            TemperatureUnit::Auto => match country_code {
                Some(code) if matches!(code.to_ascii_uppercase().as_str(), "US" | "LR" | "MM") => {
                    TemperatureUnit::Fahrenheit
                }
                _ => TemperatureUnit::Celsius,
            },
            unit => unit,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Where the forecast is for; auto-detected when not set
    #[serde(default)]
    pub location: LocationConfig,

    /// Forecast settings
    #[serde(default)]
    pub weather: WeatherConfig,
}

/// Manual location override. When latitude/longitude are set, no IP lookup
/// is performed; `place` skips reverse geocoding as well.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LocationConfig {
    #[serde(default)]
    pub latitude: Option<f64>,

    #[serde(default)]
    pub longitude: Option<f64>,

    /// Display name for the configured coordinates (e.g. "Home")
    #[serde(default)]
    pub place: Option<String>,
}

impl LocationConfig {
    /// Manual coordinates, when both are configured.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Temperature unit preference
    #[serde(default)]
    pub temperature_unit: TemperatureUnit,

    /// How many days of hourly forecast to request (1-16)
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,
}

fn default_forecast_days() -> u8 {
    7
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            temperature_unit: TemperatureUnit::Auto,
            forecast_days: default_forecast_days(),
        }
    }
}

impl Config {
    /// Load configuration from the default path, creating it if missing
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Self::default();
            config.save_to(&config_path)?;
            return Ok(config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Returns the config along with any validation warnings.
    /// Returns an error if validation fails with critical errors.
    pub fn load_validated() -> Result<(Self, ValidationResult)> {
        let config = Self::load()?;
        let validation = config.validate();

        if !validation.is_valid() {
            anyhow::bail!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    /// Validate the configuration
    ///
    /// Returns a ValidationResult containing any errors or warnings.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        match (self.location.latitude, self.location.longitude) {
            (Some(lat), _) if !(-90.0..=90.0).contains(&lat) => {
                result.add_error("location.latitude", "Latitude must be within -90 to 90");
            }
            (_, Some(lon)) if !(-180.0..=180.0).contains(&lon) => {
                result.add_error("location.longitude", "Longitude must be within -180 to 180");
            }
            (Some(_), None) => {
                result.add_error(
                    "location.longitude",
                    "Longitude is required when latitude is set",
                );
            }
            (None, Some(_)) => {
                result.add_error(
                    "location.latitude",
                    "Latitude is required when longitude is set",
                );
            }
            _ => {}
        }

        if self.location.place.is_some() && self.location.coordinates().is_none() {
            result.add_warning(
                "location.place",
                "Place name is ignored without manual coordinates",
            );
        }

        if self.weather.forecast_days == 0 {
            result.add_error("weather.forecast_days", "Must request at least 1 day");
        } else if self.weather.forecast_days > 16 {
            result.add_error(
                "weather.forecast_days",
                "The forecast API serves at most 16 days",
            );
        }

        result
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure config directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the path to the configuration file
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("skycast");

        Ok(config_dir.join("config.toml"))
    }
}
