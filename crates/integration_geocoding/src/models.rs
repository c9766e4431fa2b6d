//! Geocoding data models

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GeocodingError;

/// A resolved address with its coordinates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeocodeResult {
    latitude: f64,
    longitude: f64,
    /// Display name as reported by the service
    address: String,
}

impl GeocodeResult {
    /// Create a new result
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, address: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            address: address.into(),
        }
    }

    /// Get the latitude in degrees
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude in degrees
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Get the display name of the matched place
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }
}

impl fmt::Display for GeocodeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6} ({})", self.latitude, self.longitude, self.address)
    }
}

/// One search candidate as returned by Nominatim
#[derive(Debug, Deserialize)]
pub(crate) struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: String,
}

impl NominatimPlace {
    /// Convert the raw candidate into a [`GeocodeResult`]
    pub(crate) fn into_result(self) -> Result<GeocodeResult, GeocodingError> {
        let latitude = parse_coordinate("lat", &self.lat)?;
        let longitude = parse_coordinate("lon", &self.lon)?;
        Ok(GeocodeResult {
            latitude,
            longitude,
            address: self.display_name,
        })
    }
}

fn parse_coordinate(field: &'static str, raw: &str) -> Result<f64, GeocodingError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| GeocodingError::InvalidCoordinate {
            field,
            value: raw.to_string(),
        })
}
