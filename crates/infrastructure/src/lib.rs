//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports on top of the routing and accommodation
//! clients, and owns configuration loading and logging setup.

pub mod adapters;
pub mod config;
pub mod providers;
pub mod telemetry;

pub use adapters::*;
pub use config::{
    AppConfig, GeoapifyAppConfig, OpenRouteAppConfig, PlannerAppConfig, RapidApiAppConfig,
};
pub use telemetry::{LoggingConfig, TelemetryError, init_tracing};
