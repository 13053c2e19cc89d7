//! Locating the last step of a driving day

use domain::{RouteSegment, RouteStep};

/// The step where a driving day ends
#[derive(Debug, Clone, PartialEq)]
pub struct EndOfDayStep {
    /// Position of the step within its segment
    pub step_index: usize,
    /// The step itself
    pub step: RouteStep,
    /// Driving time up to and including this step, in seconds
    pub elapsed_secs: f64,
    /// Daily budget left after this step, in seconds
    ///
    /// Negative when a single step is longer than the whole day.
    pub remaining_secs: f64,
}

impl EndOfDayStep {
    /// Whether the day ends past its budget
    #[must_use]
    pub fn is_overrun(&self) -> bool {
        self.remaining_secs < 0.0
    }
}

/// Find the last step that keeps the day within `daily_limit_hours`
///
/// Steps accumulate until the running total would strictly exceed the limit;
/// the step before that one ends the day. If the segment fits, its last step
/// is returned. If the very first step alone exceeds the limit it is returned
/// anyway, with a negative remaining budget, so that the trip still advances.
///
/// Returns `None` for a segment without steps.
#[must_use]
pub fn find_end_of_day_step(
    segment: &RouteSegment,
    daily_limit_hours: f64,
) -> Option<EndOfDayStep> {
    let limit_secs = daily_limit_hours * 3600.0;
    let mut elapsed = 0.0;

    for (i, step) in segment.steps.iter().enumerate() {
        let next = elapsed + step.duration_secs;
        if next > limit_secs {
            return Some(match i {
                0 => EndOfDayStep {
                    step_index: 0,
                    step: step.clone(),
                    elapsed_secs: next,
                    remaining_secs: limit_secs - next,
                },
                _ => EndOfDayStep {
                    step_index: i - 1,
                    step: segment.steps[i - 1].clone(),
                    elapsed_secs: elapsed,
                    remaining_secs: limit_secs - elapsed,
                },
            });
        }
        elapsed = next;
    }

    let last = segment.steps.len().checked_sub(1)?;
    Some(EndOfDayStep {
        step_index: last,
        step: segment.steps[last].clone(),
        elapsed_secs: elapsed,
        remaining_secs: limit_secs - elapsed,
    })
}
