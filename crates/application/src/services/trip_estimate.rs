//! Rough trip duration estimate
//!
//! Derives how many driving days a route needs and how much rest to budget
//! for, without consulting any provider.

use domain::{DomainError, Route};
use serde::{Deserialize, Serialize};

/// How often and how long the driver rests
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RestPolicy {
    /// Driving hours between breaks
    pub rest_every_hours: f64,
    /// Length of one break in hours
    pub rest_duration_hours: f64,
}

impl Default for RestPolicy {
    fn default() -> Self {
        Self {
            rest_every_hours: 3.0,
            rest_duration_hours: 0.33,
        }
    }
}

/// Estimated shape of a trip
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripEstimate {
    /// Total driving time in hours
    pub total_driving_hours: f64,
    /// Fewest driving days that respect the daily limit
    pub min_driving_days: u32,
    /// Break time per full driving day in hours
    pub rest_hours_per_day: f64,
    /// Break time over the whole trip in hours
    pub total_rest_hours: f64,
    /// Longest day on the road including breaks, in hours
    pub max_day_hours: f64,
}

/// Estimate driving days and rest for `route`
///
/// # Errors
///
/// Returns `DomainError::ValidationError` for a non-positive daily limit or
/// rest interval.
pub fn estimate_trip(
    route: &Route,
    daily_limit_hours: f64,
    rest: &RestPolicy,
) -> Result<TripEstimate, DomainError> {
    if !daily_limit_hours.is_finite() || daily_limit_hours <= 0.0 {
        return Err(DomainError::ValidationError(format!(
            "daily driving limit must be positive, got {daily_limit_hours}"
        )));
    }
    if !rest.rest_every_hours.is_finite() || rest.rest_every_hours <= 0.0 {
        return Err(DomainError::ValidationError(format!(
            "rest interval must be positive, got {}",
            rest.rest_every_hours
        )));
    }

    let total_driving_hours = route
        .segments()
        .iter()
        .map(|s| s.duration_secs)
        .sum::<f64>()
        / 3600.0;
    let min_driving_days = (total_driving_hours / daily_limit_hours).ceil() as u32;

    let rest_hours_per_day = if total_driving_hours < rest.rest_every_hours {
        0.0
    } else {
        (daily_limit_hours / rest.rest_every_hours).floor() * rest.rest_duration_hours
    };

    Ok(TripEstimate {
        total_driving_hours,
        min_driving_days,
        rest_hours_per_day,
        total_rest_hours: rest_hours_per_day * f64::from(min_driving_days),
        max_day_hours: daily_limit_hours + rest_hours_per_day,
    })
}
