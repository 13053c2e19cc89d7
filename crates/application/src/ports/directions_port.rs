//! Driving directions port

use async_trait::async_trait;
use domain::{Coordinate, Route};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for driving directions through an ordered list of waypoints
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DirectionsPort: Send + Sync {
    /// Request a driving route visiting `waypoints` in order
    ///
    /// Implementations return one segment per consecutive waypoint pair.
    /// Returns `ApplicationError::RouteNotFound` when the waypoints cannot be
    /// connected by road.
    async fn directions(&self, waypoints: &[Coordinate]) -> Result<Route, ApplicationError>;
}
