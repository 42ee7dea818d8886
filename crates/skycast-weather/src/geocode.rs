//! Reverse geocoding: convert coordinates to human-readable place names.
//! Uses Nominatim (OpenStreetMap) - free, no API key required.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::types::Location;

const NOMINATIM_BASE: &str = "https://nominatim.openstreetmap.org";
const REQUEST_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = "skycast/0.1 (weather display)";

#[derive(Debug, Default, Deserialize)]
struct ReverseResponse {
    address: Option<PlaceAddress>,
}

#[derive(Debug, Default, Deserialize)]
struct PlaceAddress {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    municipality: Option<String>,
    county: Option<String>,
    state: Option<String>,
    country: Option<String>,
}

/// Reverse geocode coordinates to a place name (e.g. "Seattle, Washington").
/// Returns `None` on any failure; the caller falls back to a placeholder and
/// the forecast still renders.
pub async fn reverse_geocode(location: &Location) -> Option<String> {
    // The locator may already know the city
    if let Some(city) = &location.city {
        return Some(city.clone());
    }

    reverse_geocode_at(NOMINATIM_BASE, location).await
}

async fn reverse_geocode_at(base_url: &str, location: &Location) -> Option<String> {
    let client = match Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()
    {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("Failed to create geocoding client: {}", e);
            return None;
        }
    };

    let url = format!(
        "{}/reverse?lat={}&lon={}&format=json&addressdetails=1&layer=address&zoom=10",
        base_url, location.latitude, location.longitude
    );

    let response = match client.get(&url).send().await {
        Ok(r) => r,
        Err(e) => {
            tracing::debug!("Reverse geocode request failed: {}", e);
            return None;
        }
    };

    if !response.status().is_success() {
        tracing::debug!("Reverse geocode returned status {}", response.status());
        return None;
    }

    let body: ReverseResponse = match response.json().await {
        Ok(b) => b,
        Err(e) => {
            tracing::debug!("Reverse geocode parse error: {}", e);
            return None;
        }
    };

    let name = place_name(body.address?);
    if let Some(name) = &name {
        tracing::info!("Reverse geocoded to: {}", name);
    }
    name
}

/// Pick a display name from an address: the most specific populated place,
/// disambiguated with the state (or country) when that adds information.
fn place_name(addr: PlaceAddress) -> Option<String> {
    let region = addr.state.clone().or_else(|| addr.country.clone());

    let place = addr
        .city
        .or(addr.town)
        .or(addr.village)
        .or(addr.municipality)
        .or(addr.county)
        .or(addr.state)
        .or(addr.country)?;

    match region {
        Some(region) if !region.is_empty() && region != place => {
            Some(format!("{}, {}", place, region))
        }
        _ => Some(place),
    }
}
