//! Provider configurations: Geoapify, OpenRouteService, RapidAPI keys.

use integration_routing::{GeoapifyConfig, OpenRouteConfig};
use integration_stays::{CredentialRotation, StaysError};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

fn redacted(secret: Option<&SecretString>) -> Option<&'static str> {
    secret.map(|_| "[REDACTED]")
}

fn exposed(secret: Option<&SecretString>) -> String {
    secret.map(|s| s.expose_secret().to_string()).unwrap_or_default()
}

// ==============================
// Geoapify Configuration
// ==============================

/// Geoapify geocoding configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct GeoapifyAppConfig {
    /// Geoapify API base URL
    #[serde(default = "default_geoapify_base_url")]
    pub base_url: String,

    /// API key (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Connection timeout in seconds
    #[serde(default = "default_geoapify_timeout")]
    pub timeout_secs: u64,

    /// Geocoding cache TTL in hours (0 disables the cache)
    #[serde(default = "default_geoapify_cache_ttl")]
    pub cache_ttl_hours: u64,
}

impl std::fmt::Debug for GeoapifyAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeoapifyAppConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &redacted(self.api_key.as_ref()))
            .field("timeout_secs", &self.timeout_secs)
            .field("cache_ttl_hours", &self.cache_ttl_hours)
            .finish()
    }
}

fn default_geoapify_base_url() -> String {
    GeoapifyConfig::default().base_url
}

fn default_geoapify_timeout() -> u64 {
    GeoapifyConfig::default().timeout_secs
}

fn default_geoapify_cache_ttl() -> u64 {
    GeoapifyConfig::default().cache_ttl_hours
}

impl Default for GeoapifyAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_geoapify_base_url(),
            api_key: None,
            timeout_secs: default_geoapify_timeout(),
            cache_ttl_hours: default_geoapify_cache_ttl(),
        }
    }
}

impl GeoapifyAppConfig {
    /// Convert to `integration_routing`'s `GeoapifyConfig`
    #[must_use]
    pub fn to_geoapify_config(&self) -> GeoapifyConfig {
        GeoapifyConfig {
            base_url: self.base_url.clone(),
            api_key: exposed(self.api_key.as_ref()),
            timeout_secs: self.timeout_secs,
            cache_ttl_hours: self.cache_ttl_hours,
        }
    }
}

// ==============================
// OpenRouteService Configuration
// ==============================

/// OpenRouteService directions and isochrone configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct OpenRouteAppConfig {
    /// OpenRouteService API base URL
    #[serde(default = "default_openroute_base_url")]
    pub base_url: String,

    /// API key (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Routing profile
    #[serde(default = "default_openroute_profile")]
    pub profile: String,

    /// Connection timeout in seconds
    #[serde(default = "default_openroute_timeout")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for OpenRouteAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenRouteAppConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &redacted(self.api_key.as_ref()))
            .field("profile", &self.profile)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_openroute_base_url() -> String {
    OpenRouteConfig::default().base_url
}

fn default_openroute_profile() -> String {
    OpenRouteConfig::default().profile
}

fn default_openroute_timeout() -> u64 {
    OpenRouteConfig::default().timeout_secs
}

impl Default for OpenRouteAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_openroute_base_url(),
            api_key: None,
            profile: default_openroute_profile(),
            timeout_secs: default_openroute_timeout(),
        }
    }
}

impl OpenRouteAppConfig {
    /// Convert to `integration_routing`'s `OpenRouteConfig`
    #[must_use]
    pub fn to_openroute_config(&self) -> OpenRouteConfig {
        OpenRouteConfig {
            base_url: self.base_url.clone(),
            api_key: exposed(self.api_key.as_ref()),
            profile: self.profile.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

// ==============================
// RapidAPI Configuration
// ==============================

/// RapidAPI keys shared by the Airbnb and Priceline clients
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct RapidApiAppConfig {
    /// Key tried first (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub primary_key: Option<SecretString>,

    /// Key tried when the primary is rejected or throttled
    #[serde(default, skip_serializing)]
    pub secondary_key: Option<SecretString>,
}

impl std::fmt::Debug for RapidApiAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RapidApiAppConfig")
            .field("primary_key", &redacted(self.primary_key.as_ref()))
            .field("secondary_key", &redacted(self.secondary_key.as_ref()))
            .finish()
    }
}

impl RapidApiAppConfig {
    /// Build the key rotation used by both RapidAPI clients
    ///
    /// # Errors
    ///
    /// Returns an error if no primary key is configured.
    pub fn to_credentials(&self) -> Result<CredentialRotation, StaysError> {
        CredentialRotation::new(
            exposed(self.primary_key.as_ref()),
            self.secondary_key
                .as_ref()
                .map(|s| s.expose_secret().to_string()),
        )
    }
}
