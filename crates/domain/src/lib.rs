//! Domain layer for the road-trip planner
//!
//! Contains the coordinate value object, route and accommodation entities,
//! and domain errors. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
