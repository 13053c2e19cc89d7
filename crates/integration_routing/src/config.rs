//! OpenRouteService configuration

use serde::{Deserialize, Serialize};
use url::Url;

/// Configuration for the OpenRouteService directions and isochrone APIs
#[derive(Clone, Serialize, Deserialize)]
pub struct OpenRouteConfig {
    /// Base URL for the OpenRouteService API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key, sent in the `Authorization` header
    #[serde(default, skip_serializing)]
    pub api_key: String,

    /// Routing profile
    #[serde(default = "default_profile")]
    pub profile: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for OpenRouteConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenRouteConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("profile", &self.profile)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://api.openrouteservice.org".to_string()
}

fn default_profile() -> String {
    "driving-car".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for OpenRouteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            profile: default_profile(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl OpenRouteConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            api_key: "test-key".to_string(),
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
        Url::parse(&self.base_url).map_err(|e| format!("base_url is not a valid URL: {e}"))?;

        if self.api_key.is_empty() {
            return Err("api_key must not be empty".to_string());
        }

        if self.profile.is_empty() {
            return Err("profile must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OpenRouteConfig::default();
        assert_eq!(config.base_url, "https://api.openrouteservice.org");
        assert_eq!(config.profile, "driving-car");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn test_validation() {
        assert!(OpenRouteConfig::for_testing().validate().is_ok());
        assert!(OpenRouteConfig::default().validate().is_err());

        let config = OpenRouteConfig {
            base_url: "not a url".to_string(),
            ..OpenRouteConfig::for_testing()
        };
        assert!(config.validate().is_err());

        let config = OpenRouteConfig {
            timeout_secs: 0,
            ..OpenRouteConfig::for_testing()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_api_key_is_not_serialized_or_printed() {
        let config = OpenRouteConfig::for_testing();
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("test-key"));
        assert!(!format!("{config:?}").contains("test-key"));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: OpenRouteConfig = serde_json::from_str(r#"{"api_key": "k"}"#).unwrap();
        assert_eq!(config.api_key, "k");
        assert_eq!(config.profile, "driving-car");
    }
}
