//! The presentational screens, rendered as plain text: a current-conditions
//! card, an hourly strip for today, and one summary row per remaining day.

use chrono::NaiveDate;
use skycast_weather::{HourlySample, WeatherInfo, WeatherKind};

use crate::format;

const CARD_WIDTH: usize = 52;

/// Hours to skip between columns of the hourly strip; a terminal has no
/// horizontal scroll, so every third hour keeps a day on one line.
const STRIP_STEP: usize = 3;

fn glyph(kind: WeatherKind) -> &'static str {
    match kind.icon_name() {
        "sun" => "☀",
        "cloud_sun" => "⛅",
        "cloud" => "☁",
        "cloud_fog" => "≋",
        "cloud_drizzle" => "☂",
        "cloud_rain" => "☔",
        "cloud_snow" => "❄",
        "cloud_lightning" => "⚡",
        _ => "·",
    }
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let pad = (width - len) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

/// The current-conditions card: place and time up top, the headline
/// temperature and description in the middle, metrics along the bottom.
pub fn weather_card(current: &HourlySample, locality: &str) -> String {
    let header_right = format!("Today, {}", format::hour(current.time));
    let pad = CARD_WIDTH.saturating_sub(locality.chars().count() + header_right.chars().count());

    let mut out = String::new();
    out.push_str(&format!("{}{}{}\n", locality, " ".repeat(pad), header_right));
    out.push('\n');
    out.push_str(&center(
        &format!(
            "{}  {}",
            glyph(current.kind),
            format::temperature(current.temperature)
        ),
        CARD_WIDTH,
    ));
    out.push('\n');
    out.push_str(&center(current.kind.description(), CARD_WIDTH));
    out.push('\n');
    out.push('\n');
    out.push_str(&center(
        &format!(
            "{}    {}    {}",
            format::pressure(current.pressure_msl),
            format::humidity(current.humidity),
            format::wind(current.wind_speed)
        ),
        CARD_WIDTH,
    ));
    out.push('\n');
    out
}

/// A horizontal strip of hourly entries: temperature, icon, hour.
pub fn hourly_strip(samples: &[HourlySample]) -> String {
    let mut temps = String::new();
    let mut icons = String::new();
    let mut hours = String::new();

    for sample in samples {
        temps.push_str(&format!("{:^8}", format::temperature(sample.temperature)));
        icons.push_str(&format!("{:^8}", glyph(sample.kind)));
        hours.push_str(&format!("{:^8}", format::hour(sample.time)));
    }

    format!(
        "{}\n{}\n{}\n",
        temps.trim_end(),
        icons.trim_end(),
        hours.trim_end()
    )
}

/// One summary row for a forecast day: label, midday condition, low/high.
pub fn day_row(date: NaiveDate, samples: &[HourlySample], today: NaiveDate) -> String {
    let label = format::day_label(date, today);
    if samples.is_empty() {
        return label;
    }

    let low = samples
        .iter()
        .map(|s| s.temperature)
        .fold(f64::INFINITY, f64::min);
    let high = samples
        .iter()
        .map(|s| s.temperature)
        .fold(f64::NEG_INFINITY, f64::max);
    let midday = &samples[samples.len() / 2];

    format!(
        "{:<10} {}  {:<22} {} / {}",
        label,
        glyph(midday.kind),
        midday.kind.description(),
        format::temperature(low),
        format::temperature(high)
    )
}

/// The full forecast screen.
pub fn forecast_screen(info: &WeatherInfo, locality: &str, today: NaiveDate) -> String {
    let mut out = String::new();

    if let Some(current) = &info.current {
        out.push_str(&weather_card(current, locality));
        out.push('\n');
    }

    if let Some(today_samples) = info.day(0) {
        let stepped: Vec<HourlySample> = today_samples
            .iter()
            .step_by(STRIP_STEP)
            .cloned()
            .collect();
        out.push_str("Hourly\n");
        out.push_str(&hourly_strip(&stepped));
        out.push('\n');
    }

    let mut rest = info.days().skip(1).peekable();
    if rest.peek().is_some() {
        out.push_str("Coming days\n");
        for (date, samples) in rest {
            out.push_str(&day_row(date, samples, today));
            out.push('\n');
        }
    }

    out
}

pub fn loading_screen() -> String {
    "Loading weather…\n".to_string()
}

pub fn error_screen(message: &str) -> String {
    format!("Something went wrong\n{}\n", message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn sample(day: u32, hour: u32, temperature: f64, kind: WeatherKind) -> HourlySample {
        HourlySample {
            time: NaiveDate::from_ymd_opt(2026, 8, day)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
            temperature,
            pressure_msl: 1013.0,
            wind_speed: 12.0,
            humidity: 32.0,
            kind,
        }
    }

    fn two_day_info() -> WeatherInfo {
        let mut per_day = BTreeMap::new();
        per_day.insert(
            NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
            (0..24)
                .map(|h| sample(6, h, 15.0 + h as f64 / 4.0, WeatherKind::PartlyCloudy))
                .collect::<Vec<_>>(),
        );
        per_day.insert(
            NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(),
            (0..24)
                .map(|h| sample(7, h, 10.0 + h as f64 / 2.0, WeatherKind::RainShowers))
                .collect::<Vec<_>>(),
        );

        let current = Some(sample(6, 14, 25.2, WeatherKind::PartlyCloudy));
        WeatherInfo { per_day, current }
    }

    #[test]
    fn test_weather_card_contents() {
        let card = weather_card(
            &sample(6, 14, 25.2, WeatherKind::PartlyCloudy),
            "Seattle, Washington",
        );

        assert!(card.contains("Seattle, Washington"));
        assert!(card.contains("Today, 2 PM"));
        assert!(card.contains("25°"));
        assert!(card.contains("Partly cloudy"));
        assert!(card.contains("1013 hpa"));
        assert!(card.contains("32 %"));
        assert!(card.contains("12 km/h"));
    }

    #[test]
    fn test_hourly_strip_layout() {
        let samples: Vec<_> = (0..4)
            .map(|h| sample(6, h * 3, 18.0, WeatherKind::Clear))
            .collect();
        let strip = hourly_strip(&samples);

        let lines: Vec<&str> = strip.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("18°"));
        assert!(lines[2].contains("12 AM"));
        assert!(lines[2].contains("9 AM"));
    }

    #[test]
    fn test_day_row_low_high() {
        let samples: Vec<_> = (0..24)
            .map(|h| sample(7, h, 10.0 + h as f64 / 2.0, WeatherKind::RainShowers))
            .collect();
        let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let row = day_row(NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(), &samples, today);

        assert!(row.starts_with("Tomorrow"));
        assert!(row.contains("Rain showers"));
        assert!(row.contains("10°"));
        assert!(row.contains("22°"));
    }

    #[test]
    fn test_forecast_screen_sections() {
        let info = two_day_info();
        let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let screen = forecast_screen(&info, "Seattle", today);

        assert!(screen.contains("Seattle"));
        assert!(screen.contains("Hourly"));
        assert!(screen.contains("Coming days"));
        assert!(screen.contains("Tomorrow"));
        // Stepped strip: 24 hours every 3rd -> 8 columns
        let hourly_line = screen
            .lines()
            .find(|l| l.contains("12 AM"))
            .unwrap();
        assert_eq!(hourly_line.matches('M').count(), 8);
    }

    #[test]
    fn test_forecast_screen_without_current_sample() {
        let mut info = two_day_info();
        info.current = None;
        let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let screen = forecast_screen(&info, "Seattle", today);

        assert!(!screen.contains("Today, "));
        assert!(screen.contains("Hourly"));
    }

    #[test]
    fn test_error_screen() {
        let screen = error_screen("Weather service error. Please try again.");
        assert!(screen.contains("Something went wrong"));
        assert!(screen.contains("Weather service error"));
    }
}
