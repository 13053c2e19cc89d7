//! Classifying where a driving day ends

use std::fmt;

use domain::{Route, RouteStep};

/// What the end of a driving day coincides with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayBoundary {
    /// The final destination is reached
    EndOfTrip,
    /// An intermediate waypoint is reached
    EndOfSegment,
    /// Neither; an overnight stay is needed
    EndOfDay,
}

impl fmt::Display for DayBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::EndOfTrip => "end of trip",
            Self::EndOfSegment => "end of segment",
            Self::EndOfDay => "end of day",
        };
        f.write_str(s)
    }
}

/// Classify the end point of `step`, taken from segment `segment` of `route`
///
/// Points are compared by geometry index. The final destination takes
/// precedence over a segment end.
#[must_use]
pub fn classify(step: &RouteStep, route: &Route, segment: usize) -> DayBoundary {
    if step.end_index == route.destination_index() {
        DayBoundary::EndOfTrip
    } else if route.segment_end_index(segment) == Some(step.end_index) {
        DayBoundary::EndOfSegment
    } else {
        DayBoundary::EndOfDay
    }
}
