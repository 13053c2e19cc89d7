//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
///
/// Every failure is fatal to the planning call that raised it; no partial
/// plan is ever returned.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Transport or HTTP failure from an external provider
    #[error("Provider error: {0}")]
    Provider(String),

    /// Address could not be resolved
    #[error("Not found: {0}")]
    NotFound(String),

    /// The directions provider could not connect the waypoints
    #[error("Route not found: {0}")]
    RouteNotFound(String),

    /// No accommodation candidates at a required overnight stop
    #[error("No stays available near {near}")]
    NoStaysAvailable {
        /// Where the stay was searched for
        near: String,
    },

    /// The planning loop hit its iteration bound
    #[error("Planning did not reach the destination within {iterations} iterations")]
    PlanningDiverged {
        /// Number of iterations performed
        iterations: usize,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Provider(_))
    }
}
