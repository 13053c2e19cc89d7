//! Accommodation search error types

use thiserror::Error;

/// Errors that can occur during accommodation searches
#[derive(Debug, Error)]
pub enum StaysError {
    /// Connection to the provider failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the provider failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the provider
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Rate limit exceeded on every configured key
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// Every configured key was rejected
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The request was rejected before sending
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl StaysError {
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
        assert!(StaysError::ConnectionFailed("test".to_string()).is_retryable());
        assert!(StaysError::Timeout { timeout_secs: 30 }.is_retryable());
        assert!(
            StaysError::RateLimitExceeded {
                retry_after_secs: Some(60)
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_non_retryable_errors() {
        assert!(!StaysError::Unauthorized("HTTP 403".to_string()).is_retryable());
        assert!(!StaysError::ParseError("test".to_string()).is_retryable());
        assert!(!StaysError::ConfigurationError("test".to_string()).is_retryable());
    }

    #[test]
    fn test_error_display() {
        let err = StaysError::RateLimitExceeded {
            retry_after_secs: Some(60),
        };
        assert!(err.to_string().contains("60"));
    }
}
