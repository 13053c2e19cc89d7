//! Planning state and its transitions
//!
//! Each transition consumes the state and returns the next one, so a state
//! value never changes once built.

use chrono::NaiveDate;
use domain::{Coordinate, DomainError, PlannedRoute, Stay, StopKind};

/// Where planning stands between two directions requests
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlanningState {
    remaining_waypoints: Vec<Coordinate>,
    planned_route: PlannedRoute,
    current_date: NaiveDate,
}

impl RoutePlanningState {
    /// Start planning from the first of `waypoints`
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` for fewer than two waypoints.
    pub fn new(waypoints: Vec<Coordinate>, start_date: NaiveDate) -> Result<Self, DomainError> {
        let origin = match waypoints.as_slice() {
            [origin, _, ..] => *origin,
            _ => {
                return Err(DomainError::ValidationError(
                    "a trip needs at least two waypoints".to_string(),
                ));
            },
        };
        Ok(Self {
            remaining_waypoints: waypoints,
            planned_route: PlannedRoute::starting_at(origin),
            current_date: start_date,
        })
    }

    /// Waypoints still to visit, current position first
    #[must_use]
    pub fn remaining_waypoints(&self) -> &[Coordinate] {
        &self.remaining_waypoints
    }

    /// Stops planned so far
    #[must_use]
    pub const fn planned_route(&self) -> &PlannedRoute {
        &self.planned_route
    }

    /// Date of the day currently being driven
    #[must_use]
    pub const fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    /// The destination is within today's reach: close the plan
    #[must_use]
    pub fn finish(self) -> PlannedRoute {
        match self.remaining_waypoints.last() {
            Some(&destination) => self
                .planned_route
                .with_stop(destination, StopKind::Destination),
            None => self.planned_route,
        }
    }

    /// The next waypoint is within today's reach: move on to it
    ///
    /// The date does not advance; driving continues on the same day.
    #[must_use]
    pub fn complete_segment(self) -> Self {
        let mut remaining = self.remaining_waypoints;
        let planned_route = match remaining.get(1) {
            Some(&next) => self.planned_route.with_stop(next, StopKind::Waypoint),
            None => self.planned_route,
        };
        if !remaining.is_empty() {
            remaining.remove(0);
        }
        Self {
            remaining_waypoints: remaining,
            planned_route,
            current_date: self.current_date,
        }
    }

    /// Stop for the night at `stay` and resume from there the next day
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if the next date is out of range.
    pub fn overnight_at(self, stay: &Stay) -> Result<Self, DomainError> {
        let next_date = self.current_date.succ_opt().ok_or_else(|| {
            DomainError::ValidationError(format!("no day after {}", self.current_date))
        })?;

        let mut remaining = self.remaining_waypoints;
        if let Some(head) = remaining.first_mut() {
            *head = stay.coordinate;
        }

        let planned_route = self.planned_route.with_stop(
            stay.coordinate,
            StopKind::Overnight {
                stay_id: stay.id.clone(),
                title: stay.title.clone(),
                provider: stay.provider,
                check_in: self.current_date,
            },
        );

        Ok(Self {
            remaining_waypoints: remaining,
            planned_route,
            current_date: next_date,
        })
    }
}
