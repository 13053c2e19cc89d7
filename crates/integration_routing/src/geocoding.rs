//! Geoapify geocoding client
//!
//! Converts free-form address strings to coordinates using the
//! [Geoapify](https://apidocs.geoapify.com/docs/geocoding/forward-geocoding/)
//! forward geocoding API. The best match is cached per address.

use std::time::Duration;

use async_trait::async_trait;
use domain::Coordinate;
use moka::future::Cache;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

/// Configuration for the Geoapify geocoding service
#[derive(Clone, Serialize, Deserialize)]
pub struct GeoapifyConfig {
    /// Base URL for the Geoapify API
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,

    /// API key, sent as the `apiKey` query parameter
    #[serde(default, skip_serializing)]
    pub api_key: String,

    /// Connection timeout in seconds
    #[serde(default = "default_geocoding_timeout_secs")]
    pub timeout_secs: u64,

    /// Cache TTL in hours (0 to disable)
    #[serde(default = "default_cache_ttl_hours")]
    pub cache_ttl_hours: u64,
}

impl std::fmt::Debug for GeoapifyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeoapifyConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .field("cache_ttl_hours", &self.cache_ttl_hours)
            .finish()
    }
}

fn default_geocoding_base_url() -> String {
    "https://api.geoapify.com".to_string()
}

const fn default_geocoding_timeout_secs() -> u64 {
    10
}

const fn default_cache_ttl_hours() -> u64 {
    24
}

impl Default for GeoapifyConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            api_key: String::new(),
            timeout_secs: default_geocoding_timeout_secs(),
            cache_ttl_hours: default_cache_ttl_hours(),
        }
    }
}

impl GeoapifyConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            api_key: "test-key".to_string(),
            timeout_secs: 5,
            cache_ttl_hours: 0,
            ..Default::default()
        }
    }

    /// Check if caching is enabled
    #[must_use]
    pub const fn caching_enabled(&self) -> bool {
        self.cache_ttl_hours > 0
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

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}

/// Errors that can occur during geocoding
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Connection to geocoding service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to geocoding service failed
    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse geocoding response
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// Address could not be resolved to coordinates
    #[error("Address not found: {0}")]
    AddressNotFound(String),

    /// The API key was rejected
    #[error("Geocoding unauthorized: {0}")]
    Unauthorized(String),

    /// Rate limit exceeded
    #[error("Geocoding rate limit exceeded")]
    RateLimitExceeded,

    /// Configuration error
    #[error("Geocoding configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Geocoding request timed out")]
    Timeout,
}

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Convert a free-form address to the provider's best match
    async fn geocode(&self, address: &str) -> Result<Coordinate, GeocodingError>;
}

/// Geoapify-based geocoding client with result caching
#[derive(Debug)]
pub struct GeoapifyGeocodingClient {
    client: Client,
    config: GeoapifyConfig,
    cache: Option<Cache<String, Coordinate>>,
}

impl GeoapifyGeocodingClient {
    /// Create a new Geoapify geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &GeoapifyConfig) -> Result<Self, GeocodingError> {
        config
            .validate()
            .map_err(GeocodingError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("roadtrip-planner/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        let cache = config.caching_enabled().then(|| {
            Cache::builder()
                .max_capacity(1000)
                .time_to_live(Duration::from_secs(config.cache_ttl_hours * 3600))
                .build()
        });

        Ok(Self {
            client,
            config: config.clone(),
            cache,
        })
    }
}

#[async_trait]
impl GeocodingClient for GeoapifyGeocodingClient {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Coordinate, GeocodingError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(GeocodingError::AddressNotFound(
                "Address must not be empty".to_string(),
            ));
        }

        let cache_key = address.to_lowercase();
        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(&cache_key).await {
                debug!(%address, "Geocoding cache hit");
                return Ok(hit);
            }
        }

        let url = format!("{}/v1/geocode/search", self.config.base_url);
        let params = [
            ("text", address),
            ("limit", "1"),
            ("apiKey", self.config.api_key.as_str()),
        ];

        debug!(%address, "Geocoding address");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout
                } else {
                    GeocodingError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(GeocodingError::Unauthorized(format!("HTTP {status}")));
            },
            StatusCode::TOO_MANY_REQUESTS => return Err(GeocodingError::RateLimitExceeded),
            s if !s.is_success() => {
                return Err(GeocodingError::RequestFailed(format!("HTTP {status}")));
            },
            _ => {},
        }

        let result: GeoapifyResponse = response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let best = result
            .features
            .first()
            .ok_or_else(|| GeocodingError::AddressNotFound(address.to_string()))?;

        let coordinate = Coordinate::new(best.properties.lat, best.properties.lon)
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        if let Some(cache) = &self.cache {
            cache.insert(cache_key, coordinate).await;
        }
        debug!(%address, %coordinate, "Geocoded address");

        Ok(coordinate)
    }
}

/// Raw Geoapify response (GeoJSON `FeatureCollection`)
#[derive(Debug, Deserialize)]
struct GeoapifyResponse {
    #[serde(default)]
    features: Vec<GeoapifyFeature>,
}

#[derive(Debug, Deserialize)]
struct GeoapifyFeature {
    properties: GeoapifyProperties,
}

#[derive(Debug, Deserialize)]
struct GeoapifyProperties {
    lat: f64,
    lon: f64,
}
