//! Road trip planner
//!
//! Repeatedly asks for directions from the current position through the
//! remaining waypoints, finds where today's driving ends, and either closes the
//! trip, moves on to the next waypoint, or books a stay for the night.

use std::{fmt, sync::Arc};

use chrono::NaiveDate;
use domain::{Coordinate, DomainError, PlannedRoute};
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::{
    boundary::{DayBoundary, classify},
    end_of_day::find_end_of_day_step,
    state::RoutePlanningState,
};
use crate::{
    error::ApplicationError,
    ports::{DirectionsPort, GeocodingPort},
    services::stay_aggregator::StayAggregator,
};

/// Planner limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Upper bound on directions requests per plan
    pub max_iterations: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self { max_iterations: 64 }
    }
}

/// Outcome of one planning iteration
enum Transition {
    Continue(RoutePlanningState),
    Finished(PlannedRoute),
}

/// Plans multi-day road trips with overnight stays
pub struct RoadTripPlanner {
    geocoder: Arc<dyn GeocodingPort>,
    directions: Arc<dyn DirectionsPort>,
    stays: StayAggregator,
    config: PlannerConfig,
}

impl fmt::Debug for RoadTripPlanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoadTripPlanner")
            .field("stays", &self.stays)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl RoadTripPlanner {
    /// Create a planner with default limits
    pub fn new(
        geocoder: Arc<dyn GeocodingPort>,
        directions: Arc<dyn DirectionsPort>,
        stays: StayAggregator,
    ) -> Self {
        Self {
            geocoder,
            directions,
            stays,
            config: PlannerConfig::default(),
        }
    }

    /// Replace the planner limits
    #[must_use]
    pub const fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Plan a trip between two addresses
    ///
    /// # Errors
    ///
    /// Fails if an address cannot be resolved, a provider call fails, no stay
    /// is found at a required overnight stop, or the iteration bound is hit.
    #[instrument(skip(self))]
    pub async fn plan_road_trip(
        &self,
        start_address: &str,
        finish_address: &str,
        daily_limit_hours: f64,
        trip_start_date: NaiveDate,
    ) -> Result<PlannedRoute, ApplicationError> {
        let (start, finish) = futures::try_join!(
            self.geocoder.geocode(start_address),
            self.geocoder.geocode(finish_address),
        )?;
        debug!(%start, %finish, "Endpoints resolved");

        self.plan_coordinates(vec![start, finish], daily_limit_hours, trip_start_date)
            .await
    }

    /// Plan a trip through an ordered list of addresses
    ///
    /// Intermediate addresses become waypoints that are visited in order.
    #[instrument(skip(self, addresses), fields(stops = addresses.len()))]
    pub async fn plan_via(
        &self,
        addresses: &[String],
        daily_limit_hours: f64,
        trip_start_date: NaiveDate,
    ) -> Result<PlannedRoute, ApplicationError> {
        let waypoints =
            try_join_all(addresses.iter().map(|a| self.geocoder.geocode(a))).await?;
        self.plan_coordinates(waypoints, daily_limit_hours, trip_start_date)
            .await
    }

    /// Plan a trip through already resolved waypoints
    pub async fn plan_coordinates(
        &self,
        waypoints: Vec<Coordinate>,
        daily_limit_hours: f64,
        trip_start_date: NaiveDate,
    ) -> Result<PlannedRoute, ApplicationError> {
        if !daily_limit_hours.is_finite() || daily_limit_hours <= 0.0 {
            return Err(DomainError::ValidationError(format!(
                "daily driving limit must be positive, got {daily_limit_hours}"
            ))
            .into());
        }

        let mut state = RoutePlanningState::new(waypoints, trip_start_date)?;

        for iteration in 1..=self.config.max_iterations {
            debug!(
                iteration,
                date = %state.current_date(),
                remaining = state.remaining_waypoints().len(),
                "Planning iteration"
            );
            match self.advance(state, daily_limit_hours).await? {
                Transition::Finished(plan) => {
                    info!(
                        stops = plan.len(),
                        nights = plan.overnight_count(),
                        iterations = iteration,
                        "Road trip planned"
                    );
                    return Ok(plan);
                },
                Transition::Continue(next) => state = next,
            }
        }

        warn!(
            max_iterations = self.config.max_iterations,
            "Destination not reached"
        );
        Err(ApplicationError::PlanningDiverged {
            iterations: self.config.max_iterations,
        })
    }

    /// Plan one driving day
    async fn advance(
        &self,
        state: RoutePlanningState,
        daily_limit_hours: f64,
    ) -> Result<Transition, ApplicationError> {
        let waypoints = state.remaining_waypoints();
        let route = self.directions.directions(waypoints).await?;
        route.ensure_waypoint_count(waypoints.len())?;

        let end_of_day = find_end_of_day_step(route.first_segment(), daily_limit_hours)
            .ok_or_else(|| ApplicationError::RouteNotFound("segment has no steps".to_string()))?;
        if end_of_day.is_overrun() {
            warn!(
                overrun_secs = -end_of_day.remaining_secs,
                "Single step exceeds the daily limit"
            );
        }

        let boundary = classify(&end_of_day.step, &route, 0);
        debug!(%boundary, step = end_of_day.step_index, elapsed_secs = end_of_day.elapsed_secs, "Day ends");

        match boundary {
            DayBoundary::EndOfTrip => Ok(Transition::Finished(state.finish())),
            DayBoundary::EndOfSegment => Ok(Transition::Continue(state.complete_segment())),
            DayBoundary::EndOfDay => {
                let stop = route
                    .coordinate_at(end_of_day.step.end_index)
                    .ok_or_else(|| {
                        DomainError::InvalidRoute(format!(
                            "step ends at missing point {}",
                            end_of_day.step.end_index
                        ))
                    })?;
                let check_in = state.current_date();
                let check_out = check_in.succ_opt().ok_or_else(|| {
                    DomainError::ValidationError(format!("no day after {check_in}"))
                })?;

                let candidates = self.stays.search_stays(&stop, check_in, check_out).await?;
                let stay = self.stays.select_best_stay(&candidates, &stop).await?;
                info!(stay_id = %stay.id, provider = %stay.provider, date = %check_in, "Overnight stay booked");

                Ok(Transition::Continue(state.overnight_at(&stay)?))
            },
        }
    }
}
