//! Geocoding error types

use thiserror::Error;

/// Errors that can occur while resolving an address
///
/// [`AddressGeocoder::geocode`](crate::AddressGeocoder::geocode) folds all of
/// these into `None`; they are only visible through logs and
/// [`NominatimGeocoder::try_geocode`](crate::NominatimGeocoder::try_geocode).
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Connection to the geocoding service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out
    #[error("Geocoding request timed out")]
    Timeout,

    /// Service answered with a non-success status
    #[error("Geocoding request failed with HTTP {status}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
    },

    /// Response body was not the expected JSON array
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// A coordinate field could not be read as a finite number
    #[error("Invalid {field} in geocoding response: {value:?}")]
    InvalidCoordinate {
        /// Name of the offending field (`lat` or `lon`)
        field: &'static str,
        /// Raw value as returned by the service
        value: String,
    },

    /// Geocoder could not be set up
    #[error("Geocoder configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for GeocodingError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_decode() {
            Self::ParseError(e.to_string())
        } else {
            Self::ConnectionFailed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GeocodingError::RequestFailed { status: 503 };
        assert!(err.to_string().contains("503"));

        let err = GeocodingError::Timeout;
        assert!(err.to_string().contains("timed out"));

        let err = GeocodingError::InvalidCoordinate {
            field: "lat",
            value: "north".to_string(),
        };
        assert!(err.to_string().contains("lat"));
        assert!(err.to_string().contains("north"));
    }

    #[test]
    fn test_parse_error_display() {
        let err = GeocodingError::ParseError("expected array".to_string());
        assert_eq!(err.to_string(), "Geocoding parse error: expected array");
    }
}
