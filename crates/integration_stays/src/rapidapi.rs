//! Shared RapidAPI transport
//!
//! Sends GET requests with the RapidAPI headers, rotating through the
//! configured keys on authentication and throttling responses.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{credentials::CredentialRotation, error::StaysError};

/// HTTP client for one RapidAPI-hosted provider
#[derive(Debug)]
pub struct RapidApiClient {
    client: Client,
    base_url: String,
    host: String,
    timeout_secs: u64,
    credentials: CredentialRotation,
}

impl RapidApiClient {
    /// Create a client for the API at `base_url`, announced as `host`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(
        base_url: &str,
        host: &str,
        timeout_secs: u64,
        credentials: CredentialRotation,
    ) -> Result<Self, StaysError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("roadtrip-planner/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| StaysError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            host: host.to_string(),
            timeout_secs,
            credentials,
        })
    }

    /// GET `path` with `params` and parse the JSON body
    ///
    /// # Errors
    ///
    /// Transport failures are returned immediately. Authentication and
    /// throttling responses move on to the next key; once every key has been
    /// tried, the last such status is returned as an error.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, StaysError> {
        let url = format!("{}{path}", self.base_url);
        let mut rejected: Option<Response> = None;

        for (attempt, key) in self.credentials.keys().iter().enumerate() {
            debug!(?url, attempt, "Sending RapidAPI request");

            let response = self
                .client
                .get(&url)
                .query(params)
                .header("x-rapidapi-key", key)
                .header("x-rapidapi-host", &self.host)
                .send()
                .await
                .map_err(|e| {
                    if e.is_timeout() {
                        StaysError::Timeout {
                            timeout_secs: self.timeout_secs,
                        }
                    } else {
                        StaysError::ConnectionFailed(e.to_string())
                    }
                })?;

            let status = response.status();
            if CredentialRotation::should_rotate(status) {
                warn!(%status, attempt, host = %self.host, "RapidAPI key rejected, rotating");
                rejected = Some(response);
                continue;
            }

            if !status.is_success() {
                return Err(StaysError::RequestFailed(format!("HTTP {status}")));
            }

            let body = response
                .text()
                .await
                .map_err(|e| StaysError::ParseError(e.to_string()))?;
            return serde_json::from_str(&body).map_err(|e| StaysError::ParseError(e.to_string()));
        }

        Err(rejected.map_or_else(
            || StaysError::ConfigurationError("no RapidAPI keys configured".to_string()),
            |response| exhausted_error(&response),
        ))
    }
}

/// Error for the last rejected response once every key has been tried
fn exhausted_error(response: &Response) -> StaysError {
    let status = response.status();
    if status == StatusCode::TOO_MANY_REQUESTS {
        StaysError::RateLimitExceeded {
            retry_after_secs: response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok()),
        }
    } else {
        StaysError::Unauthorized(format!("HTTP {status}"))
    }
}
