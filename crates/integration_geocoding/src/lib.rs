//! Address geocoding
//!
//! Resolves free-form address strings to coordinates using the
//! [Nominatim/OpenStreetMap](https://nominatim.openstreetmap.org) search API.
//!
//! # Architecture
//!
//! [`AddressGeocoder`] defines the interface, implemented by
//! [`NominatimGeocoder`]. A lookup either yields the first candidate the
//! service returns as a [`GeocodeResult`], or `None`. Failures are logged and
//! never surface through [`AddressGeocoder::geocode`]; callers that need the
//! cause can use [`NominatimGeocoder::try_geocode`].
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_geocoding::{AddressGeocoder, GeocoderConfig, NominatimGeocoder};
//!
//! let geocoder = NominatimGeocoder::new(&GeocoderConfig::default())?;
//!
//! if let Some(result) = geocoder.geocode("1600 Pennsylvania Ave").await {
//!     println!("{result}");
//! }
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{AddressGeocoder, NominatimGeocoder};
pub use config::GeocoderConfig;
pub use error::GeocodingError;
pub use models::GeocodeResult;
