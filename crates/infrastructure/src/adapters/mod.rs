//! Adapters implementing the application ports

mod routing_adapter;
mod stays_adapter;

pub use routing_adapter::{GeocodingAdapter, RoutingAdapter};
pub use stays_adapter::{HotelAdapter, RentalAdapter};
