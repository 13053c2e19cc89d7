//! Multi-day road trip planning

mod boundary;
mod end_of_day;
mod planner;
mod state;

pub use boundary::{DayBoundary, classify};
pub use end_of_day::{EndOfDayStep, find_end_of_day_step};
pub use planner::{PlannerConfig, RoadTripPlanner};
pub use state::RoutePlanningState;
