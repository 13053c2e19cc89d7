//! Planner configuration: daily budget, search sizes, rest policy.

use application::{PlannerConfig, RestPolicy, StaySearchOptions};
use serde::{Deserialize, Serialize};

/// Road trip planner settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerAppConfig {
    /// Maximum driving hours per day
    #[serde(default = "default_daily_driving_limit_hours")]
    pub daily_driving_limit_hours: f64,

    /// Upper bound on directions requests per plan
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Rental search radius in meters
    #[serde(default = "default_search_radius_m")]
    pub search_radius_m: u32,

    /// Rentals expanded into details per search
    #[serde(default = "default_rental_limit")]
    pub rental_limit: usize,

    /// Hotels requested per search
    #[serde(default = "default_hotel_limit")]
    pub hotel_limit: u32,

    /// Hotel result page
    #[serde(default = "default_hotel_page")]
    pub hotel_page: u32,

    /// Driving hours between rest breaks (trip estimate only)
    #[serde(default = "default_rest_every_hours")]
    pub rest_every_hours: f64,

    /// Length of one rest break in hours (trip estimate only)
    #[serde(default = "default_rest_duration_hours")]
    pub rest_duration_hours: f64,
}

const fn default_daily_driving_limit_hours() -> f64 {
    7.0
}

fn default_max_iterations() -> usize {
    PlannerConfig::default().max_iterations
}

fn default_search_radius_m() -> u32 {
    StaySearchOptions::default().radius_m
}

fn default_rental_limit() -> usize {
    StaySearchOptions::default().rental_limit
}

fn default_hotel_limit() -> u32 {
    StaySearchOptions::default().hotel_limit
}

fn default_hotel_page() -> u32 {
    StaySearchOptions::default().hotel_page
}

fn default_rest_every_hours() -> f64 {
    RestPolicy::default().rest_every_hours
}

fn default_rest_duration_hours() -> f64 {
    RestPolicy::default().rest_duration_hours
}

impl Default for PlannerAppConfig {
    fn default() -> Self {
        Self {
            daily_driving_limit_hours: default_daily_driving_limit_hours(),
            max_iterations: default_max_iterations(),
            search_radius_m: default_search_radius_m(),
            rental_limit: default_rental_limit(),
            hotel_limit: default_hotel_limit(),
            hotel_page: default_hotel_page(),
            rest_every_hours: default_rest_every_hours(),
            rest_duration_hours: default_rest_duration_hours(),
        }
    }
}

impl PlannerAppConfig {
    /// Convert to the planner's loop settings
    #[must_use]
    pub const fn to_planner_config(&self) -> PlannerConfig {
        PlannerConfig {
            max_iterations: self.max_iterations,
        }
    }

    /// Convert to the stay aggregator's search sizes
    #[must_use]
    pub const fn to_search_options(&self) -> StaySearchOptions {
        StaySearchOptions {
            radius_m: self.search_radius_m,
            rental_limit: self.rental_limit,
            hotel_limit: self.hotel_limit,
            hotel_page: self.hotel_page,
        }
    }

    /// Convert to the trip estimate's rest policy
    #[must_use]
    pub const fn to_rest_policy(&self) -> RestPolicy {
        RestPolicy {
            rest_every_hours: self.rest_every_hours,
            rest_duration_hours: self.rest_duration_hours,
        }
    }

    /// Validate the planner settings
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        if !self.daily_driving_limit_hours.is_finite() || self.daily_driving_limit_hours <= 0.0 {
            return Err("daily_driving_limit_hours must be a positive number".to_string());
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be greater than 0".to_string());
        }
        if self.rental_limit == 0 && self.hotel_limit == 0 {
            return Err("rental_limit and hotel_limit cannot both be 0".to_string());
        }
        if self.rest_every_hours <= 0.0 || self.rest_duration_hours < 0.0 {
            return Err("rest policy hours must not be negative".to_string());
        }
        Ok(())
    }
}
