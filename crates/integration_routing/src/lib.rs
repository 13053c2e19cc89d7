//! Routing integration for the road trip planner
//!
//! Provides driving directions and reachability polygons via the
//! [OpenRouteService](https://openrouteservice.org) API and address geocoding
//! via [Geoapify](https://www.geoapify.com).
//!
//! # Architecture
//!
//! [`DirectionsClient`] and [`IsochroneClient`] are implemented by
//! [`OpenRouteClient`]; [`GeocodingClient`] is implemented by
//! [`GeoapifyGeocodingClient`]. Both providers speak `[longitude, latitude]`;
//! the [`axis`] module is the only place where that order is converted to and
//! from [`domain::Coordinate`].
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_routing::{DirectionsClient, OpenRouteClient, OpenRouteConfig};
//!
//! let config = OpenRouteConfig {
//!     api_key: "ors-key".to_string(),
//!     ..OpenRouteConfig::default()
//! };
//! let client = OpenRouteClient::new(&config)?;
//! let route = client.directions(&[bellingham, calgary]).await?;
//! ```

pub mod axis;
mod client;
mod config;
mod error;
mod geocoding;
mod isochrone;
mod models;

pub use client::{DirectionsClient, OpenRouteClient};
pub use config::OpenRouteConfig;
pub use error::RoutingError;
pub use geocoding::{GeoapifyConfig, GeoapifyGeocodingClient, GeocodingClient, GeocodingError};
pub use isochrone::{IsochroneClient, IsochronePolygon};
