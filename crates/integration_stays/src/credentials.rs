//! RapidAPI key rotation
//!
//! Requests go out with the primary key first. When the provider rejects the
//! key or throttles it, the same request is sent again with the next key.

use std::fmt;

use reqwest::StatusCode;

use crate::error::StaysError;

/// Ordered set of API keys tried in turn
#[derive(Clone)]
pub struct CredentialRotation {
    keys: Vec<String>,
}

impl fmt::Debug for CredentialRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialRotation")
            .field("keys", &format_args!("[REDACTED; {}]", self.keys.len()))
            .finish()
    }
}

impl CredentialRotation {
    /// Build a rotation from a primary and an optional secondary key
    ///
    /// An empty secondary key is ignored.
    ///
    /// # Errors
    ///
    /// Returns `StaysError::ConfigurationError` if the primary key is empty.
    pub fn new(primary: impl Into<String>, secondary: Option<String>) -> Result<Self, StaysError> {
        let primary = primary.into();
        if primary.trim().is_empty() {
            return Err(StaysError::ConfigurationError(
                "a RapidAPI key is required".to_string(),
            ));
        }

        let mut keys = vec![primary];
        keys.extend(secondary.filter(|k| !k.trim().is_empty()));
        Ok(Self { keys })
    }

    /// Keys in the order they are tried
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Number of keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always false: a rotation holds at least the primary key
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Whether a response status means the next key should be tried
    #[must_use]
    pub fn should_rotate(status: StatusCode) -> bool {
        matches!(
            status,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS
        )
    }
}
