//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod directions_port;
mod geocoding_port;
mod isochrone_port;
mod stay_search_port;

pub use directions_port::DirectionsPort;
#[cfg(test)]
pub use directions_port::MockDirectionsPort;
pub use geocoding_port::GeocodingPort;
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
#[cfg(test)]
pub use isochrone_port::MockIsochronePort;
pub use isochrone_port::{Isochrone, IsochronePort};
pub use stay_search_port::{HotelQuery, HotelSearchPort, RentalQuery, RentalSearchPort};
#[cfg(test)]
pub use stay_search_port::{MockHotelSearchPort, MockRentalSearchPort};
