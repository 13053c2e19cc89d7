//! OpenRouteService directions client
//!
//! Requests driving routes in GeoJSON form from the
//! [OpenRouteService](https://openrouteservice.org/dev/#/api-docs/v2/directions)
//! v2 API.

use std::time::Duration;

use async_trait::async_trait;
use domain::{Coordinate, Route};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::{
    axis,
    config::OpenRouteConfig,
    error::RoutingError,
    models::{DirectionsRequest, RawDirectionsResponse, RawErrorResponse},
};

/// ORS error codes that mean the waypoints cannot be routed
const ROUTE_NOT_FOUND_CODES: [u32; 2] = [2009, 2010];

/// Trait for driving directions clients
#[async_trait]
pub trait DirectionsClient: Send + Sync {
    /// Request a route through `waypoints` in order
    ///
    /// The returned route has exactly one segment per consecutive waypoint
    /// pair.
    async fn directions(&self, waypoints: &[Coordinate]) -> Result<Route, RoutingError>;
}

/// OpenRouteService client for directions and isochrones
#[derive(Debug)]
pub struct OpenRouteClient {
    client: Client,
    config: OpenRouteConfig,
}

impl OpenRouteClient {
    /// Create a new OpenRouteService client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &OpenRouteConfig) -> Result<Self, RoutingError> {
        config.validate().map_err(RoutingError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("roadtrip-planner/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RoutingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Configured routing profile
    #[must_use]
    pub fn profile(&self) -> &str {
        &self.config.profile
    }

    /// POST a JSON body to an API path and parse the JSON answer
    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, RoutingError>
    where
        B: serde::Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{path}", self.config.base_url);
        debug!(?url, "Sending OpenRouteService request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", &self.config.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RoutingError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    RoutingError::ConnectionFailed(e.to_string())
                }
            })?;

        let response = Self::check_status(response).await?;

        let text = response
            .text()
            .await
            .map_err(|e| RoutingError::ParseError(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| RoutingError::ParseError(e.to_string()))
    }

    /// Map non-success statuses onto the error taxonomy
    async fn check_status(response: Response) -> Result<Response, RoutingError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(RoutingError::RateLimitExceeded {
                retry_after_secs: response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok()),
            });
        }

        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<RawErrorResponse>(&body).ok();
        let code = detail.as_ref().and_then(|d| d.error.code());
        let message = detail
            .as_ref()
            .and_then(|d| d.error.message())
            .map_or_else(|| format!("HTTP {status}"), |m| format!("HTTP {status}: {m}"));

        warn!(%status, ?code, "OpenRouteService request rejected");

        Err(classify_failure(status, code, message))
    }
}

/// Pick the error variant for a rejected request
fn classify_failure(status: StatusCode, code: Option<u32>, message: String) -> RoutingError {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        RoutingError::Unauthorized(message)
    } else if status == StatusCode::NOT_FOUND
        || code.is_some_and(|c| ROUTE_NOT_FOUND_CODES.contains(&c))
    {
        RoutingError::RouteNotFound(message)
    } else {
        RoutingError::RequestFailed(message)
    }
}

#[async_trait]
impl DirectionsClient for OpenRouteClient {
    #[instrument(skip(self, waypoints), fields(waypoints = waypoints.len()))]
    async fn directions(&self, waypoints: &[Coordinate]) -> Result<Route, RoutingError> {
        if waypoints.len() < 2 {
            return Err(RoutingError::InvalidRequest(format!(
                "directions need at least two waypoints, got {}",
                waypoints.len()
            )));
        }

        let path = format!("/v2/directions/{}/geojson", self.config.profile);
        let body = DirectionsRequest {
            coordinates: axis::to_lon_lat_list(waypoints),
            instructions: true,
        };

        let raw: RawDirectionsResponse = self.post_json(&path, &body).await?;
        let feature = raw
            .features
            .into_iter()
            .next()
            .ok_or_else(|| RoutingError::RouteNotFound("response has no route".to_string()))?;

        let route = feature.into_route()?;
        route
            .ensure_waypoint_count(waypoints.len())
            .map_err(|e| RoutingError::ParseError(e.to_string()))?;

        debug!(
            segments = route.segments().len(),
            duration_secs = route.total_duration_secs(),
            "Route received"
        );
        Ok(route)
    }
}
