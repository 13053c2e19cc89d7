//! Application layer - Use cases and orchestration
//!
//! Contains the road-trip planning logic and the port definitions it needs.
//! Orchestrates domain objects and infrastructure adapters.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
