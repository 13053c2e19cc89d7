//! Routing adapters - Implement GeocodingPort, DirectionsPort and IsochronePort
//! using integration_routing

use application::error::ApplicationError;
use application::ports::{DirectionsPort, GeocodingPort, Isochrone, IsochronePort};
use async_trait::async_trait;
use domain::{Coordinate, Route};
use integration_routing::{
    DirectionsClient, GeoapifyConfig, GeoapifyGeocodingClient, GeocodingClient, GeocodingError,
    IsochroneClient, OpenRouteClient, OpenRouteConfig, RoutingError,
};
use tracing::{debug, instrument, warn};

/// Adapter for address lookup via Geoapify
#[derive(Debug)]
pub struct GeocodingAdapter {
    client: GeoapifyGeocodingClient,
}

impl GeocodingAdapter {
    /// Create a new adapter with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn new(config: &GeoapifyConfig) -> Result<Self, ApplicationError> {
        let client = GeoapifyGeocodingClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Map integration geocoding error to application error
    fn map_error(err: GeocodingError) -> ApplicationError {
        match err {
            GeocodingError::AddressNotFound(address) => ApplicationError::NotFound(address),
            GeocodingError::ConfigurationError(e) => {
                ApplicationError::Configuration(format!("geoapify: {e}"))
            },
            other => ApplicationError::Provider(format!("Geocoding failed: {other}")),
        }
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Coordinate, ApplicationError> {
        self.client.geocode(address).await.map_err(|e| {
            warn!(%address, error = %e, "Geocoding failed");
            Self::map_error(e)
        })
    }
}

/// Adapter for directions and isochrones via OpenRouteService
#[derive(Debug)]
pub struct RoutingAdapter {
    client: OpenRouteClient,
}

impl RoutingAdapter {
    /// Create a new adapter with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn new(config: &OpenRouteConfig) -> Result<Self, ApplicationError> {
        let client = OpenRouteClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Map integration routing error to application error
    fn map_error(err: RoutingError) -> ApplicationError {
        match err {
            RoutingError::RouteNotFound(e) => ApplicationError::RouteNotFound(e),
            RoutingError::ConfigurationError(e) => {
                ApplicationError::Configuration(format!("openroute: {e}"))
            },
            RoutingError::RateLimitExceeded { retry_after_secs } => {
                debug!(retry_after = ?retry_after_secs, "Routing rate limited");
                ApplicationError::Provider(format!("Routing failed: {err}"))
            },
            other => ApplicationError::Provider(format!("Routing failed: {other}")),
        }
    }
}

#[async_trait]
impl DirectionsPort for RoutingAdapter {
    #[instrument(skip(self), fields(waypoints = waypoints.len()))]
    async fn directions(&self, waypoints: &[Coordinate]) -> Result<Route, ApplicationError> {
        self.client
            .directions(waypoints)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl IsochronePort for RoutingAdapter {
    #[instrument(skip(self))]
    async fn isochrones(
        &self,
        center: &Coordinate,
        hours: &[f64],
    ) -> Result<Vec<Isochrone>, ApplicationError> {
        let polygons = self
            .client
            .isochrones(center, hours)
            .await
            .map_err(Self::map_error)?;

        Ok(polygons
            .into_iter()
            .map(|p| Isochrone {
                range_secs: p.range_secs,
                ring: p.ring,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_requires_api_key() {
        let result = GeocodingAdapter::new(&GeoapifyConfig::default());
        assert!(matches!(result, Err(ApplicationError::Configuration(_))));

        let result = RoutingAdapter::new(&OpenRouteConfig::default());
        assert!(matches!(result, Err(ApplicationError::Configuration(_))));
    }

    #[test]
    fn new_creates_adapters() {
        assert!(GeocodingAdapter::new(&GeoapifyConfig::for_testing()).is_ok());
        assert!(RoutingAdapter::new(&OpenRouteConfig::for_testing()).is_ok());
    }

    #[test]
    fn map_geocoding_errors() {
        let err = GeocodingAdapter::map_error(GeocodingError::AddressNotFound("Atlantis".into()));
        assert!(matches!(err, ApplicationError::NotFound(ref a) if a == "Atlantis"));

        let err = GeocodingAdapter::map_error(GeocodingError::Timeout);
        assert!(matches!(err, ApplicationError::Provider(_)));

        let err = GeocodingAdapter::map_error(GeocodingError::Unauthorized("HTTP 401".into()));
        assert!(matches!(err, ApplicationError::Provider(_)));
    }

    #[test]
    fn map_routing_errors() {
        let err = RoutingAdapter::map_error(RoutingError::RouteNotFound("code 2010".into()));
        assert!(matches!(err, ApplicationError::RouteNotFound(_)));

        let err = RoutingAdapter::map_error(RoutingError::RateLimitExceeded {
            retry_after_secs: Some(5),
        });
        assert!(matches!(err, ApplicationError::Provider(_)));

        let err = RoutingAdapter::map_error(RoutingError::ParseError("bad json".into()));
        assert!(matches!(err, ApplicationError::Provider(ref m) if m.contains("bad json")));
    }

    #[test]
    fn adapters_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GeocodingAdapter>();
        assert_send_sync::<RoutingAdapter>();
    }
}
