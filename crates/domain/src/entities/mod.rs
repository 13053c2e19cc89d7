//! Domain entities

mod bounding_box;
mod planned_route;
mod route;
mod stay;

pub use bounding_box::BoundingBox;
pub use planned_route::{PlannedRoute, PlannedStop, StopKind};
pub use route::{Route, RouteSegment, RouteStep};
pub use stay::{HotelListing, ProviderListing, RentalListing, Stay};
