//! Wiring of adapters from configuration
//!
//! Each builder only needs the sections of [`AppConfig`] its providers use,
//! so a geocoding-only command works without RapidAPI keys.

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::DirectionsPort;
use application::{RoadTripPlanner, StayAggregator};
use tracing::debug;

use crate::adapters::{GeocodingAdapter, HotelAdapter, RentalAdapter, RoutingAdapter};
use crate::config::AppConfig;

/// Build the geocoding adapter
///
/// # Errors
///
/// Returns `ApplicationError::Configuration` if the Geoapify section is
/// incomplete.
pub fn geocoder(config: &AppConfig) -> Result<Arc<GeocodingAdapter>, ApplicationError> {
    GeocodingAdapter::new(&config.geoapify.to_geoapify_config()).map(Arc::new)
}

/// Build the directions and isochrone adapter
///
/// # Errors
///
/// Returns `ApplicationError::Configuration` if the OpenRouteService section
/// is incomplete.
pub fn routing(config: &AppConfig) -> Result<Arc<RoutingAdapter>, ApplicationError> {
    RoutingAdapter::new(&config.openroute.to_openroute_config()).map(Arc::new)
}

/// Build the stay aggregator over both accommodation providers
///
/// # Errors
///
/// Returns `ApplicationError::Configuration` if no RapidAPI key is set or a
/// provider section is invalid.
pub fn stay_aggregator(
    config: &AppConfig,
    directions: Arc<dyn DirectionsPort>,
) -> Result<StayAggregator, ApplicationError> {
    let credentials = config
        .rapidapi
        .to_credentials()
        .map_err(|e| ApplicationError::Configuration(format!("rapidapi: {e}")))?;
    debug!(keys = credentials.len(), "RapidAPI credentials loaded");

    let rentals = RentalAdapter::new(&config.airbnb, credentials.clone())?;
    let hotels = HotelAdapter::new(&config.priceline, credentials)?;

    Ok(
        StayAggregator::new(Arc::new(rentals), Arc::new(hotels), directions)
            .with_options(config.planner.to_search_options()),
    )
}

/// Build the road trip planner with every provider
///
/// # Errors
///
/// Returns `ApplicationError::Configuration` if the configuration is invalid
/// or any provider section is incomplete.
pub fn road_trip_planner(config: &AppConfig) -> Result<RoadTripPlanner, ApplicationError> {
    config.validate().map_err(ApplicationError::Configuration)?;

    let geocoder = geocoder(config)?;
    let directions: Arc<dyn DirectionsPort> = routing(config)?;
    let stays = stay_aggregator(config, Arc::clone(&directions))?;

    Ok(RoadTripPlanner::new(geocoder, directions, stays)
        .with_config(config.planner.to_planner_config()))
}
