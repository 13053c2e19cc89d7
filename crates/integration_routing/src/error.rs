//! Routing error types

use thiserror::Error;

/// Errors that can occur during directions and isochrone requests
#[derive(Debug, Error)]
pub enum RoutingError {
    /// Connection to the routing service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the routing service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the routing service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// The waypoints cannot be connected by road
    #[error("Route not found: {0}")]
    RouteNotFound(String),

    /// The API key was rejected
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The request was rejected before sending
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl RoutingError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_)
                | Self::RequestFailed(_)
                | Self::Timeout { .. }
                | Self::RateLimitExceeded { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(RoutingError::ConnectionFailed("test".to_string()).is_retryable());
        assert!(RoutingError::Timeout { timeout_secs: 30 }.is_retryable());
        assert!(
            RoutingError::RateLimitExceeded {
                retry_after_secs: None
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_non_retryable_errors() {
        assert!(!RoutingError::RouteNotFound("island".to_string()).is_retryable());
        assert!(!RoutingError::Unauthorized("HTTP 403".to_string()).is_retryable());
        assert!(!RoutingError::ParseError("test".to_string()).is_retryable());
        assert!(!RoutingError::InvalidRequest("test".to_string()).is_retryable());
    }

    #[test]
    fn test_error_display() {
        let err = RoutingError::RouteNotFound("Could not find routable point".to_string());
        assert!(err.to_string().contains("routable point"));

        let err = RoutingError::Timeout { timeout_secs: 10 };
        assert!(err.to_string().contains("10"));
    }
}
