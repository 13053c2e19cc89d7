//! Application services - Use case implementations

mod road_trip;
mod stay_aggregator;
mod trip_estimate;

pub use road_trip::{
    DayBoundary, EndOfDayStep, PlannerConfig, RoadTripPlanner, RoutePlanningState, classify,
    find_end_of_day_step,
};
pub use stay_aggregator::{StayAggregator, StaySearchOptions, fastest_index};
pub use trip_estimate::{RestPolicy, TripEstimate, estimate_trip};
