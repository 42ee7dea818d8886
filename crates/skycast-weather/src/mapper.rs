//! Reshapes the raw forecast payload into the domain model.
//!
//! The API serves parallel hourly arrays; this module zips them into
//! [`HourlySample`]s, buckets them by calendar day and derives the sample
//! standing in for "right now".

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use std::collections::BTreeMap;

use crate::api::ForecastResponse;
use crate::types::{HourlySample, WeatherError, WeatherInfo, WeatherKind};

/// Hourly timestamps arrive as "2026-08-06T14:00" (no seconds).
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Build a [`WeatherInfo`] from a forecast response.
///
/// `now` must be in the same (location-local) timezone as the payload's
/// hourly timestamps. It is a parameter rather than read from the clock so
/// the derivation is deterministic.
pub fn to_weather_info(
    response: &ForecastResponse,
    now: NaiveDateTime,
) -> Result<WeatherInfo, WeatherError> {
    let hourly = &response.hourly;
    let expected = hourly.time.len();

    let lengths = [
        ("temperature_2m", hourly.temperature_2m.len()),
        ("weathercode", hourly.weathercode.len()),
        ("relativehumidity_2m", hourly.relativehumidity_2m.len()),
        ("windspeed_10m", hourly.windspeed_10m.len()),
        ("pressure_msl", hourly.pressure_msl.len()),
    ];
    if let Some((name, len)) = lengths.iter().find(|(_, len)| *len != expected) {
        return Err(WeatherError::Parse(format!(
            "hourly arrays disagree on length: time has {} entries, {} has {}",
            expected, name, len
        )));
    }

    let mut samples = Vec::with_capacity(expected);
    for (i, raw_time) in hourly.time.iter().enumerate() {
        let time = NaiveDateTime::parse_from_str(raw_time, TIME_FORMAT)
            .map_err(|e| WeatherError::Parse(format!("bad hourly time {:?}: {}", raw_time, e)))?;

        samples.push(HourlySample {
            time,
            temperature: hourly.temperature_2m[i],
            pressure_msl: hourly.pressure_msl[i],
            wind_speed: hourly.windspeed_10m[i],
            humidity: hourly.relativehumidity_2m[i],
            kind: WeatherKind::from_wmo_code(hourly.weathercode[i]),
        });
    }

    let current = current_sample(&samples, now);

    let mut per_day: BTreeMap<NaiveDate, Vec<HourlySample>> = BTreeMap::new();
    for sample in samples {
        per_day.entry(sample.time.date()).or_default().push(sample);
    }
    for day in per_day.values_mut() {
        day.sort_by_key(|s| s.time);
    }

    Ok(WeatherInfo { per_day, current })
}

/// The sample representing current conditions: the one at the current hour,
/// with minutes >= 30 rounding up. When no sample sits exactly on the
/// rounded hour, the nearest one in time is used instead.
fn current_sample(samples: &[HourlySample], now: NaiveDateTime) -> Option<HourlySample> {
    let target = round_to_hour(now);
    samples
        .iter()
        .min_by_key(|s| (s.time - target).num_seconds().abs())
        .cloned()
}

fn round_to_hour(now: NaiveDateTime) -> NaiveDateTime {
    let floor = now
        .with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now);

    if now.minute() >= 30 {
        floor + Duration::hours(1)
    } else {
        floor
    }
}
