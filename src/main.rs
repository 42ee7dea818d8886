use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use skycast_core::{Config, TemperatureUnit};
use skycast_ui::{screen, WeatherUiState, WeatherViewModel};
use skycast_weather::WeatherProvider;

#[derive(Parser)]
#[command(name = "skycast", about = "Shows the weather where you are")]
struct Cli {
    /// Latitude override
    #[arg(long, requires = "longitude", allow_negative_numbers = true)]
    latitude: Option<f64>,

    /// Longitude override
    #[arg(long, requires = "latitude", allow_negative_numbers = true)]
    longitude: Option<f64>,

    /// Display name for the overridden location
    #[arg(long)]
    place: Option<String>,

    /// Temperature unit: auto, celsius or fahrenheit
    #[arg(long, value_parser = parse_unit)]
    unit: Option<TemperatureUnit>,

    /// Days of forecast to request (1-16)
    #[arg(long)]
    days: Option<u8>,
}

fn parse_unit(s: &str) -> Result<TemperatureUnit, String> {
    match s.to_ascii_lowercase().as_str() {
        "auto" => Ok(TemperatureUnit::Auto),
        "celsius" | "c" => Ok(TemperatureUnit::Celsius),
        "fahrenheit" | "f" => Ok(TemperatureUnit::Fahrenheit),
        other => Err(format!("unknown unit: {}", other)),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    skycast_core::init()?;
    let cli = Cli::parse();

    let (mut config, _) = Config::load_validated()?;
    if let (Some(latitude), Some(longitude)) = (cli.latitude, cli.longitude) {
        config.location.latitude = Some(latitude);
        config.location.longitude = Some(longitude);
    }
    if let Some(place) = cli.place {
        config.location.place = Some(place);
    }
    if let Some(unit) = cli.unit {
        config.weather.temperature_unit = unit;
    }
    if let Some(days) = cli.days {
        config.weather.forecast_days = days;
    }

    // Command-line overrides get the same checks as the config file
    let validation = config.validate();
    if !validation.is_valid() {
        anyhow::bail!("Invalid options: {}", validation.error_summary());
    }

    let provider = WeatherProvider::new(&config.weather)?;
    let view_model = WeatherViewModel::new(Arc::new(provider), config.location.clone());

    print!("{}", screen::loading_screen());
    view_model.load_weather().await;

    let locality = view_model.locality().borrow().clone();
    match view_model.state().borrow().clone() {
        WeatherUiState::Loaded(info) => {
            tracing::info!("Rendering forecast for {}", locality);
            let today = chrono::Local::now().date_naive();
            print!("{}", screen::forecast_screen(&info, &locality, today));
            Ok(())
        }
        state => {
            let message = state
                .error()
                .unwrap_or("The forecast never arrived.")
                .to_string();
            eprint!("{}", screen::error_screen(&message));
            std::process::exit(1);
        }
    }
}
