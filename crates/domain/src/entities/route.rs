//! Driving route entity
//!
//! A [`Route`] is produced once per directions request and never mutated.
//! Steps and segments refer to points of the route geometry by index, which is
//! how stopping points are located and compared.

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::Coordinate;

/// One atomic driving instruction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    /// Driving time in seconds
    pub duration_secs: f64,
    /// Driving distance in meters
    pub distance_m: f64,
    /// Geometry index where the step starts
    pub start_index: usize,
    /// Geometry index where the step ends
    pub end_index: usize,
    /// Human-readable instruction, if the provider supplied one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
    /// Road name, if the provider supplied one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RouteStep {
    /// Create a step without instruction text
    #[must_use]
    pub const fn new(
        duration_secs: f64,
        distance_m: f64,
        start_index: usize,
        end_index: usize,
    ) -> Self {
        Self {
            duration_secs,
            distance_m,
            start_index,
            end_index,
            instruction: None,
            name: None,
        }
    }
}

/// The steps between two consecutive input waypoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSegment {
    /// Steps in driving order
    pub steps: Vec<RouteStep>,
    /// Segment driving time in seconds
    pub duration_secs: f64,
    /// Segment distance in meters
    pub distance_m: f64,
}

impl RouteSegment {
    /// Build a segment whose totals are the sum of its steps
    #[must_use]
    pub fn from_steps(steps: Vec<RouteStep>) -> Self {
        let duration_secs = steps.iter().map(|s| s.duration_secs).sum();
        let distance_m = steps.iter().map(|s| s.distance_m).sum();
        Self {
            steps,
            duration_secs,
            distance_m,
        }
    }

    /// Geometry index of the last step's end
    #[must_use]
    pub fn end_index(&self) -> Option<usize> {
        self.steps.last().map(|s| s.end_index)
    }
}

/// A complete driving route for an ordered list of waypoints
///
/// Only constructed through [`Route::new`], so it is serializable but not
/// deserializable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    segments: Vec<RouteSegment>,
    geometry: Vec<Coordinate>,
    waypoint_indices: Vec<usize>,
    total_duration_secs: f64,
    total_distance_m: f64,
}

impl Route {
    /// Create a route, checking its structural invariants
    ///
    /// `waypoint_indices` holds the geometry index of every input waypoint; it
    /// may be empty when the provider does not report it.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRoute` if there are no segments, the
    /// geometry is empty, a step or waypoint index falls outside the geometry,
    /// or the segment count does not equal waypoint count − 1.
    pub fn new(
        segments: Vec<RouteSegment>,
        geometry: Vec<Coordinate>,
        waypoint_indices: Vec<usize>,
        total_duration_secs: f64,
        total_distance_m: f64,
    ) -> Result<Self, DomainError> {
        if segments.is_empty() {
            return Err(DomainError::InvalidRoute(
                "route has no segments".to_string(),
            ));
        }
        if geometry.is_empty() {
            return Err(DomainError::InvalidRoute(
                "route has no geometry".to_string(),
            ));
        }
        if !waypoint_indices.is_empty() && waypoint_indices.len() != segments.len() + 1 {
            return Err(DomainError::InvalidRoute(format!(
                "{} segments for {} waypoints",
                segments.len(),
                waypoint_indices.len()
            )));
        }

        let last = geometry.len() - 1;
        let step_out_of_range = segments
            .iter()
            .flat_map(|seg| seg.steps.iter())
            .any(|s| s.start_index > last || s.end_index > last);
        if step_out_of_range || waypoint_indices.iter().any(|&i| i > last) {
            return Err(DomainError::InvalidRoute(format!(
                "index outside geometry of {} points",
                geometry.len()
            )));
        }

        Ok(Self {
            segments,
            geometry,
            waypoint_indices,
            total_duration_secs,
            total_distance_m,
        })
    }

    /// Check the segment count against the number of requested waypoints
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRoute` if `segments != waypoints - 1`.
    pub fn ensure_waypoint_count(&self, waypoints: usize) -> Result<(), DomainError> {
        if self.segments.len() + 1 == waypoints {
            Ok(())
        } else {
            Err(DomainError::InvalidRoute(format!(
                "{} segments returned for {waypoints} waypoints",
                self.segments.len()
            )))
        }
    }

    /// All segments in driving order
    #[must_use]
    pub fn segments(&self) -> &[RouteSegment] {
        &self.segments
    }

    /// The first segment (always present)
    #[must_use]
    pub fn first_segment(&self) -> &RouteSegment {
        &self.segments[0]
    }

    /// The flattened route polyline
    #[must_use]
    pub fn geometry(&self) -> &[Coordinate] {
        &self.geometry
    }

    /// Geometry index of each input waypoint, if reported
    #[must_use]
    pub fn waypoint_indices(&self) -> &[usize] {
        &self.waypoint_indices
    }

    /// Coordinate at a geometry index
    #[must_use]
    pub fn coordinate_at(&self, index: usize) -> Option<Coordinate> {
        self.geometry.get(index).copied()
    }

    /// Geometry index of the final destination
    #[must_use]
    pub fn destination_index(&self) -> usize {
        self.waypoint_indices
            .last()
            .copied()
            .unwrap_or(self.geometry.len() - 1)
    }

    /// Geometry index where the given segment ends
    #[must_use]
    pub fn segment_end_index(&self, segment: usize) -> Option<usize> {
        self.waypoint_indices
            .get(segment + 1)
            .copied()
            .or_else(|| self.segments.get(segment).and_then(RouteSegment::end_index))
    }

    /// Total driving time in seconds
    #[must_use]
    pub const fn total_duration_secs(&self) -> f64 {
        self.total_duration_secs
    }

    /// Total driving time in hours
    #[must_use]
    pub fn total_duration_hours(&self) -> f64 {
        self.total_duration_secs / 3600.0
    }

    /// Total distance in meters
    #[must_use]
    pub const fn total_distance_m(&self) -> f64 {
        self.total_distance_m
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(points: usize) -> Vec<Coordinate> {
        (0..points)
            .map(|i| Coordinate::new_unchecked(45.0, i as f64))
            .collect()
    }

    fn two_segment_route() -> Route {
        let first = RouteSegment::from_steps(vec![
            RouteStep::new(600.0, 1000.0, 0, 1),
            RouteStep::new(900.0, 1500.0, 1, 2),
        ]);
        let second = RouteSegment::from_steps(vec![RouteStep::new(300.0, 500.0, 2, 3)]);
        Route::new(vec![first, second], line(4), vec![0, 2, 3], 1800.0, 3000.0).unwrap()
    }

    #[test]
    fn segment_totals_are_step_sums() {
        let route = two_segment_route();
        assert!((route.first_segment().duration_secs - 1500.0).abs() < f64::EPSILON);
        assert!((route.first_segment().distance_m - 2500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn indices_resolve_against_geometry() {
        let route = two_segment_route();
        assert_eq!(route.destination_index(), 3);
        assert_eq!(route.segment_end_index(0), Some(2));
        assert_eq!(route.segment_end_index(1), Some(3));
        assert_eq!(
            route.coordinate_at(2),
            Some(Coordinate::new_unchecked(45.0, 2.0))
        );
        assert_eq!(route.coordinate_at(10), None);
    }

    #[test]
    fn segment_end_falls_back_to_last_step() {
        let seg = RouteSegment::from_steps(vec![RouteStep::new(60.0, 100.0, 0, 2)]);
        let route = Route::new(vec![seg], line(3), vec![], 60.0, 100.0).unwrap();
        assert_eq!(route.segment_end_index(0), Some(2));
        assert_eq!(route.destination_index(), 2);
    }

    #[test]
    fn rejects_route_without_segments() {
        assert!(Route::new(vec![], line(2), vec![], 0.0, 0.0).is_err());
    }

    #[test]
    fn rejects_step_outside_geometry() {
        let seg = RouteSegment::from_steps(vec![RouteStep::new(60.0, 100.0, 0, 5)]);
        assert!(Route::new(vec![seg], line(3), vec![], 60.0, 100.0).is_err());
    }

    #[test]
    fn rejects_waypoint_segment_mismatch() {
        let seg = RouteSegment::from_steps(vec![RouteStep::new(60.0, 100.0, 0, 1)]);
        assert!(Route::new(vec![seg], line(3), vec![0, 1, 2], 60.0, 100.0).is_err());
    }

    #[test]
    fn ensure_waypoint_count_checks_invariant() {
        let route = two_segment_route();
        assert!(route.ensure_waypoint_count(3).is_ok());
        assert!(route.ensure_waypoint_count(2).is_err());
    }

    #[test]
    fn duration_in_hours() {
        let route = two_segment_route();
        assert!((route.total_duration_hours() - 0.5).abs() < f64::EPSILON);
    }
}
