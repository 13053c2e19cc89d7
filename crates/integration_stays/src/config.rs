//! Accommodation provider configuration

use serde::{Deserialize, Serialize};
use url::Url;

/// What to do with a listing whose calendar has no data for the stay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownAvailability {
    /// Drop the listing
    #[default]
    Exclude,
    /// Keep the listing
    Include,
}

/// Configuration for the Airbnb listings API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirbnbConfig {
    /// Base URL for the API
    #[serde(default = "default_airbnb_base_url")]
    pub base_url: String,

    /// Value of the `x-rapidapi-host` header
    #[serde(default = "default_airbnb_host")]
    pub host: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Minimum guest capacity of returned listings
    #[serde(default = "default_max_guest_capacity")]
    pub max_guest_capacity: u32,

    /// Policy for listings without calendar data
    #[serde(default)]
    pub unknown_availability: UnknownAvailability,
}

fn default_airbnb_base_url() -> String {
    "https://airbnb-listings.p.rapidapi.com".to_string()
}

fn default_airbnb_host() -> String {
    "airbnb-listings.p.rapidapi.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_max_guest_capacity() -> u32 {
    6
}

impl Default for AirbnbConfig {
    fn default() -> Self {
        Self {
            base_url: default_airbnb_base_url(),
            host: default_airbnb_host(),
            timeout_secs: default_timeout_secs(),
            max_guest_capacity: default_max_guest_capacity(),
            unknown_availability: UnknownAvailability::default(),
        }
    }
}

impl AirbnbConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        validate_endpoint(&self.base_url, &self.host, self.timeout_secs)?;

        if self.max_guest_capacity == 0 {
            return Err("max_guest_capacity must be greater than 0".to_string());
        }

        Ok(())
    }
}

/// Configuration for the Priceline API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricelineConfig {
    /// Base URL for the API
    #[serde(default = "default_priceline_base_url")]
    pub base_url: String,

    /// Value of the `x-rapidapi-host` header
    #[serde(default = "default_priceline_host")]
    pub host: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_priceline_base_url() -> String {
    "https://priceline-com2.p.rapidapi.com".to_string()
}

fn default_priceline_host() -> String {
    "priceline-com2.p.rapidapi.com".to_string()
}

impl Default for PricelineConfig {
    fn default() -> Self {
        Self {
            base_url: default_priceline_base_url(),
            host: default_priceline_host(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl PricelineConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        validate_endpoint(&self.base_url, &self.host, self.timeout_secs)
    }
}

fn validate_endpoint(base_url: &str, host: &str, timeout_secs: u64) -> Result<(), String> {
    Url::parse(base_url).map_err(|e| format!("base_url is not a valid URL: {e}"))?;

    if host.is_empty() {
        return Err("host must not be empty".to_string());
    }

    if timeout_secs == 0 {
        return Err("timeout_secs must be greater than 0".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs() {
        let airbnb = AirbnbConfig::default();
        assert_eq!(airbnb.host, "airbnb-listings.p.rapidapi.com");
        assert_eq!(airbnb.max_guest_capacity, 6);
        assert_eq!(airbnb.unknown_availability, UnknownAvailability::Exclude);

        let priceline = PricelineConfig::default();
        assert_eq!(priceline.host, "priceline-com2.p.rapidapi.com");
        assert_eq!(priceline.timeout_secs, 30);
    }

    #[test]
    fn test_validation() {
        assert!(AirbnbConfig::for_testing().validate().is_ok());
        assert!(PricelineConfig::for_testing().validate().is_ok());

        let config = AirbnbConfig {
            max_guest_capacity: 0,
            ..AirbnbConfig::default()
        };
        assert!(config.validate().is_err());

        let config = PricelineConfig {
            host: String::new(),
            ..PricelineConfig::default()
        };
        assert!(config.validate().is_err());

        let config = PricelineConfig {
            base_url: "://".to_string(),
            ..PricelineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_availability_serialization() {
        let config: AirbnbConfig =
            serde_json::from_str(r#"{"unknown_availability": "include"}"#).unwrap();
        assert_eq!(config.unknown_availability, UnknownAvailability::Include);
        assert_eq!(config.timeout_secs, 30);
    }
}
