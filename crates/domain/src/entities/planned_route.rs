//! Planned road trip
//!
//! An append-only list of stops, starting at the origin and, once planning
//! finishes, ending at the destination.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::value_objects::{Coordinate, StayProvider};

/// Why the trip stops at a point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StopKind {
    /// Where the trip starts
    Origin,
    /// An overnight stay chosen by the planner
    Overnight {
        stay_id: String,
        title: String,
        provider: StayProvider,
        check_in: NaiveDate,
    },
    /// An intermediate destination supplied by the traveller
    Waypoint,
    /// The final destination
    Destination,
}

/// One stop of a planned trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedStop {
    pub coordinate: Coordinate,
    #[serde(flatten)]
    pub kind: StopKind,
}

/// Ordered stops of a road trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedRoute {
    stops: Vec<PlannedStop>,
}

impl PlannedRoute {
    /// Start a plan at the origin
    #[must_use]
    pub fn starting_at(origin: Coordinate) -> Self {
        Self {
            stops: vec![PlannedStop {
                coordinate: origin,
                kind: StopKind::Origin,
            }],
        }
    }

    /// Return a new plan with one more stop appended
    #[must_use]
    pub fn with_stop(mut self, coordinate: Coordinate, kind: StopKind) -> Self {
        self.stops.push(PlannedStop { coordinate, kind });
        self
    }

    /// All stops in order
    #[must_use]
    pub fn stops(&self) -> &[PlannedStop] {
        &self.stops
    }

    /// Stop coordinates in order, origin first
    #[must_use]
    pub fn coordinates(&self) -> Vec<Coordinate> {
        self.stops.iter().map(|s| s.coordinate).collect()
    }

    /// Number of overnight stays
    #[must_use]
    pub fn overnight_count(&self) -> usize {
        self.stops
            .iter()
            .filter(|s| matches!(s.kind, StopKind::Overnight { .. }))
            .count()
    }

    /// Whether the plan reaches its destination
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.stops
            .last()
            .is_some_and(|s| s.kind == StopKind::Destination)
    }

    /// Number of stops including the origin
    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always false: a plan holds at least its origin
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_origin_only() {
        let origin = Coordinate::new_unchecked(48.75, -122.48);
        let plan = PlannedRoute::starting_at(origin);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.coordinates(), vec![origin]);
        assert!(!plan.is_complete());
    }

    #[test]
    fn appends_in_order() {
        let a = Coordinate::new_unchecked(48.75, -122.48);
        let s = Coordinate::new_unchecked(50.67, -120.33);
        let b = Coordinate::new_unchecked(51.04, -114.07);

        let plan = PlannedRoute::starting_at(a)
            .with_stop(
                s,
                StopKind::Overnight {
                    stay_id: "h1".to_string(),
                    title: "Motel".to_string(),
                    provider: StayProvider::Hotel,
                    check_in: NaiveDate::from_ymd_opt(2025, 4, 10).unwrap(),
                },
            )
            .with_stop(b, StopKind::Destination);

        assert_eq!(plan.coordinates(), vec![a, s, b]);
        assert_eq!(plan.overnight_count(), 1);
        assert!(plan.is_complete());
    }

    #[test]
    fn serializes_stop_kind_inline() {
        let plan = PlannedRoute::starting_at(Coordinate::new_unchecked(1.0, 2.0));
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["stops"][0]["kind"], "origin");
        assert_eq!(json["stops"][0]["coordinate"]["latitude"], 1.0);
    }
}
