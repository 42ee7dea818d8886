//! Location detection: manual config coordinates or IP geolocation.
//!
//! There is no GPS on a desktop; ipinfo.io resolves the machine's public IP
//! to approximate coordinates plus city/country hints. No API key required.

use reqwest::Client;
use serde::Deserialize;
use skycast_core::LocationConfig;
use std::time::Duration;

use crate::types::{Location, LocationError};

const IPINFO_BASE: &str = "https://ipinfo.io";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// IP geolocation response; `loc` is "latitude,longitude"
#[derive(Debug, Deserialize)]
struct IpInfoResponse {
    city: Option<String>,
    country: Option<String>,
    loc: Option<String>,
}

impl IpInfoResponse {
    fn coordinates(&self) -> Option<(f64, f64)> {
        let loc = self.loc.as_deref()?;
        let (lat, lon) = loc.split_once(',')?;
        Some((lat.trim().parse().ok()?, lon.trim().parse().ok()?))
    }
}

/// Resolve the current location.
///
/// Manual coordinates from the config win; otherwise the public IP is
/// geolocated. Errors map onto the "couldn't retrieve location" UI path.
pub async fn current_location(config: &LocationConfig) -> Result<Location, LocationError> {
    if let Some((latitude, longitude)) = config.coordinates() {
        tracing::debug!("Using configured location {}, {}", latitude, longitude);
        return Ok(Location {
            latitude,
            longitude,
            city: config.place.clone(),
            country_code: None,
        });
    }

    lookup_ip_location(IPINFO_BASE).await
}

async fn lookup_ip_location(base_url: &str) -> Result<Location, LocationError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| LocationError::Other(e.to_string()))?;

    let url = format!("{}/json", base_url);
    let response = client.get(&url).send().await.map_err(|e| {
        if e.is_timeout() {
            LocationError::Timeout
        } else {
            LocationError::ServiceUnavailable
        }
    })?;

    if !response.status().is_success() {
        tracing::warn!("IP geolocation returned status {}", response.status());
        return Err(LocationError::ServiceUnavailable);
    }

    let body: IpInfoResponse = response
        .json()
        .await
        .map_err(|e| LocationError::Malformed(e.to_string()))?;

    let (latitude, longitude) = body
        .coordinates()
        .ok_or_else(|| LocationError::Malformed("no usable coordinates in response".into()))?;

    tracing::info!(
        "IP geolocation: {}, {} ({})",
        latitude,
        longitude,
        body.city.as_deref().unwrap_or("unknown city")
    );

    Ok(Location {
        latitude,
        longitude,
        city: body.city,
        country_code: body.country,
    })
}
