//! Value Objects - Immutable, identity-less domain primitives

mod coordinate;
mod stay_provider;

pub use coordinate::Coordinate;
pub use stay_provider::StayProvider;
