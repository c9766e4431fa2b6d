//! Geocoder configuration

use serde::{Deserialize, Serialize};
use url::Url;

/// Configuration for the Nominatim geocoding service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocoderConfig {
    /// Base URL for the Nominatim API (the `/search` path is appended)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Value sent in the `User-Agent` header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("geocoder/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl GeocoderConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Create a configuration pointing at a different endpoint
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        let url = match Url::parse(&self.base_url) {
            Ok(url) => url,
            Err(e) => return Err(format!("base_url is not a valid URL: {e}")),
        };

        if url.cannot_be_a_base() {
            return Err("base_url must be a hierarchical URL such as https://host/".to_string());
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err("base_url must not contain a query string or fragment".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.user_agent.trim().is_empty() {
            return Err("user_agent must not be empty".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeocoderConfig::default();
        assert_eq!(config.base_url, "https://nominatim.openstreetmap.org");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.user_agent.starts_with("geocoder/"));
    }

    #[test]
    fn test_testing_config() {
        let config = GeocoderConfig::for_testing();
        assert_eq!(config.timeout_secs, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_base_url() {
        let config = GeocoderConfig::with_base_url("http://127.0.0.1:8080");
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_validation_success() {
        let config = GeocoderConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_base_url() {
        let config = GeocoderConfig {
            base_url: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_malformed_base_url() {
        let config = GeocoderConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("base_url"));
    }

    #[test]
    fn test_validation_rejects_query_string() {
        let config = GeocoderConfig::with_base_url("https://geo.example.org/api?key=1");
        let err = config.validate().unwrap_err();
        assert!(err.contains("query string"));
    }

    #[test]
    fn test_validation_rejects_fragment() {
        let config = GeocoderConfig::with_base_url("https://geo.example.org/api#top");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_opaque_url() {
        let config = GeocoderConfig::with_base_url("mailto:maps@example.org");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = GeocoderConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_blank_user_agent() {
        let config = GeocoderConfig {
            user_agent: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: GeocoderConfig =
            serde_json::from_str(r#"{ "base_url": "http://localhost:9000" }"#).unwrap();
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout_secs, 10);
        assert!(!config.user_agent.is_empty());
    }
}
