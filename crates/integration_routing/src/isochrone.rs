//! OpenRouteService isochrones
//!
//! Areas reachable from a point within given driving times.

use async_trait::async_trait;
use domain::{BoundingBox, Coordinate};
use tracing::{debug, instrument};

use crate::{
    axis,
    client::OpenRouteClient,
    error::RoutingError,
    models::{IsochroneRequest, RawIsochroneResponse},
};

/// One reachability polygon
#[derive(Debug, Clone, PartialEq)]
pub struct IsochronePolygon {
    /// Driving time in seconds
    pub range_secs: f64,
    /// Outer ring of the polygon
    pub ring: Vec<Coordinate>,
}

impl IsochronePolygon {
    /// Rectangle that just fits the polygon
    #[must_use]
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(&self.ring)
    }
}

/// Trait for isochrone clients
#[async_trait]
pub trait IsochroneClient: Send + Sync {
    /// Compute one polygon per driving time in `hours`
    async fn isochrones(
        &self,
        center: &Coordinate,
        hours: &[f64],
    ) -> Result<Vec<IsochronePolygon>, RoutingError>;
}

#[async_trait]
impl IsochroneClient for OpenRouteClient {
    #[instrument(skip(self))]
    async fn isochrones(
        &self,
        center: &Coordinate,
        hours: &[f64],
    ) -> Result<Vec<IsochronePolygon>, RoutingError> {
        if hours.is_empty() || hours.iter().any(|h| !h.is_finite() || *h <= 0.0) {
            return Err(RoutingError::InvalidRequest(
                "isochrone ranges must be positive".to_string(),
            ));
        }

        let path = format!("/v2/isochrones/{}", self.profile());
        let body = IsochroneRequest {
            locations: vec![axis::to_lon_lat(center)],
            range: hours.iter().map(|h| h * 3600.0).collect(),
        };

        let raw: RawIsochroneResponse = self.post_json(&path, &body).await?;

        let polygons = raw
            .features
            .into_iter()
            .map(|feature| {
                let ring = feature
                    .geometry
                    .coordinates
                    .first()
                    .map(|ring| {
                        ring.iter()
                            .map(|p| axis::from_lon_lat(p))
                            .collect::<Result<Vec<_>, _>>()
                    })
                    .transpose()?
                    .unwrap_or_default();
                Ok(IsochronePolygon {
                    range_secs: feature.properties.value,
                    ring,
                })
            })
            .collect::<Result<Vec<_>, RoutingError>>()?;

        debug!(count = polygons.len(), "Isochrones received");
        Ok(polygons)
    }
}
