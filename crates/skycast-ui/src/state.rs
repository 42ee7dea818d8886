use skycast_weather::WeatherInfo;

/// What the weather screen is currently showing.
#[derive(Debug, Clone, Default)]
pub enum WeatherUiState {
    #[default]
    Loading,
    Loaded(WeatherInfo),
    Error(String),
}

impl WeatherUiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, WeatherUiState::Loading)
    }

    pub fn info(&self) -> Option<&WeatherInfo> {
        match self {
            WeatherUiState::Loaded(info) => Some(info),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            WeatherUiState::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_accessors() {
        assert!(WeatherUiState::Loading.is_loading());
        assert!(WeatherUiState::Loading.info().is_none());

        let loaded = WeatherUiState::Loaded(WeatherInfo::default());
        assert!(!loaded.is_loading());
        assert!(loaded.info().is_some());
        assert!(loaded.error().is_none());

        let failed = WeatherUiState::Error("no network".to_string());
        assert_eq!(failed.error(), Some("no network"));
        assert!(failed.info().is_none());
    }

    #[test]
    fn test_default_is_loading() {
        assert!(WeatherUiState::default().is_loading());
    }
}
