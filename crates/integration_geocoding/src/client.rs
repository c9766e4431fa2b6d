//! Nominatim geocoding client
//!
//! Issues a single `GET /search?format=json&q=...` per lookup and keeps the
//! first candidate of the returned array. There is no caching, throttling or
//! retrying; one failed attempt is final for that call.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::GeocoderConfig;
use crate::error::GeocodingError;
use crate::models::{GeocodeResult, NominatimPlace};

/// Trait for address geocoders
#[async_trait]
pub trait AddressGeocoder: Send + Sync {
    /// Resolve a free-form address to the first matching place
    ///
    /// Returns `None` when nothing matched or when the lookup failed for any
    /// reason. Never panics and never surfaces an error.
    async fn geocode(&self, address: &str) -> Option<GeocodeResult>;
}

/// Geocoder backed by the Nominatim search API
#[derive(Debug)]
pub struct NominatimGeocoder {
    client: Client,
    search_endpoint: Url,
}

impl NominatimGeocoder {
    /// Create a new Nominatim geocoder
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &GeocoderConfig) -> Result<Self, GeocodingError> {
        config.validate().map_err(GeocodingError::Configuration)?;

        let mut search_endpoint = Url::parse(&config.base_url)
            .map_err(|e| GeocodingError::Configuration(e.to_string()))?;
        search_endpoint
            .path_segments_mut()
            .map_err(|()| {
                GeocodingError::Configuration("base_url cannot carry a path".to_string())
            })?
            .pop_if_empty()
            .push("search");

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| GeocodingError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            search_endpoint,
        })
    }

    /// Build the search URL for an address
    ///
    /// The address is form-encoded into the `q` parameter, so spaces and
    /// `&` cannot split the query string.
    fn search_url(&self, address: &str) -> Url {
        let mut url = self.search_endpoint.clone();
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("q", address);
        url
    }

    /// Resolve an address, reporting why a lookup failed
    ///
    /// `Ok(None)` means the service answered with no matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the service answers with a
    /// non-success status, or the first candidate cannot be decoded.
    #[instrument(skip(self))]
    pub async fn try_geocode(
        &self,
        address: &str,
    ) -> Result<Option<GeocodeResult>, GeocodingError> {
        let url = self.search_url(address);
        debug!(%url, "Geocoding address");

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodingError::RequestFailed {
                status: status.as_u16(),
            });
        }

        // Only the first candidate has to be well-formed
        let candidates: Vec<serde_json::Value> = response.json().await?;

        let Some(first) = candidates.into_iter().next() else {
            debug!("No geocoding candidates");
            return Ok(None);
        };

        let place: NominatimPlace =
            serde_json::from_value(first).map_err(|e| GeocodingError::ParseError(e.to_string()))?;
        let result = place.into_result()?;

        debug!(
            lat = result.latitude(),
            lon = result.longitude(),
            "Geocoded address"
        );
        Ok(Some(result))
    }
}

#[async_trait]
impl AddressGeocoder for NominatimGeocoder {
    async fn geocode(&self, address: &str) -> Option<GeocodeResult> {
        match self.try_geocode(address).await {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, %address, "Geocoding failed");
                None
            },
        }
    }
}
