//! Application configuration
//!
//! Split into focused sub-modules:
//! - `providers`: Geoapify, OpenRouteService and RapidAPI credentials
//! - `planner`: Daily budget, stay search sizes, rest policy
//!
//! The Airbnb and Priceline sections use the integration crate's own
//! configuration types, since they carry no secrets.

mod planner;
mod providers;

use std::path::Path;

use integration_stays::{AirbnbConfig, PricelineConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use planner::PlannerAppConfig;
pub use providers::{GeoapifyAppConfig, OpenRouteAppConfig, RapidApiAppConfig};

use crate::telemetry::LoggingConfig;

/// Prefix for environment variable overrides (e.g., `ROADTRIP__PLANNER__MAX_ITERATIONS`)
pub const ENV_PREFIX: &str = "ROADTRIP";

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "roadtrip.toml";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Geocoding configuration
    #[serde(default)]
    pub geoapify: GeoapifyAppConfig,

    /// Directions and isochrone configuration
    #[serde(default)]
    pub openroute: OpenRouteAppConfig,

    /// RapidAPI keys for the accommodation providers
    #[serde(default)]
    pub rapidapi: RapidApiAppConfig,

    /// Airbnb listings configuration
    #[serde(default)]
    pub airbnb: AirbnbConfig,

    /// Priceline hotels configuration
    #[serde(default)]
    pub priceline: PricelineConfig,

    /// Planner settings
    #[serde(default)]
    pub planner: PlannerAppConfig,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `roadtrip.toml` (if present) and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit file, or the default one if `None`
    ///
    /// An explicit file must exist; the default file is optional. Environment
    /// variables override both.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config = config::Config::builder()
            .add_source(file)
            // Override with environment variables (e.g., ROADTRIP__GEOAPIFY__API_KEY)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        debug!(?path, "Configuration loaded");
        Ok(loaded)
    }

    /// Validate every section
    ///
    /// API keys are not checked here; a missing key surfaces when the
    /// provider that needs it is built.
    ///
    /// # Errors
    ///
    /// Returns the section name and the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        self.planner
            .validate()
            .map_err(|e| format!("planner: {e}"))?;
        self.airbnb.validate().map_err(|e| format!("airbnb: {e}"))?;
        self.priceline
            .validate()
            .map_err(|e| format!("priceline: {e}"))?;
        Ok(())
    }
}
