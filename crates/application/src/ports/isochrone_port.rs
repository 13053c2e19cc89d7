//! Reachability (isochrone) port

use async_trait::async_trait;
use domain::{BoundingBox, Coordinate};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Area reachable from a center within a driving time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Isochrone {
    /// Driving time the polygon was computed for, in seconds
    pub range_secs: f64,
    /// Outer ring of the polygon
    pub ring: Vec<Coordinate>,
}

impl Isochrone {
    /// Corners of the rectangle that just fits the polygon
    #[must_use]
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(&self.ring)
    }
}

/// Port for driving-time reachability polygons
#[cfg_attr(test, automock)]
#[async_trait]
pub trait IsochronePort: Send + Sync {
    /// Compute one polygon per driving time in `hours`
    async fn isochrones(
        &self,
        center: &Coordinate,
        hours: &[f64],
    ) -> Result<Vec<Isochrone>, ApplicationError>;
}
