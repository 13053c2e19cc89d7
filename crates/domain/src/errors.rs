//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Latitude or longitude outside the valid range
    #[error("Invalid coordinates: ({latitude}, {longitude})")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    /// Route data violates a structural invariant
    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
