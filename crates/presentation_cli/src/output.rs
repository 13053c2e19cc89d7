//! Human-readable rendering of planner results

use std::fmt::Write as _;

use application::{Isochrone, TripEstimate};
use domain::{PlannedRoute, Route, Stay, StopKind};

/// Render a planned trip, one stop per line
pub fn format_plan(plan: &PlannedRoute) -> String {
    let mut out = format!(
        "🚗 Road trip: {} stops, {} overnight stays\n",
        plan.len(),
        plan.overnight_count()
    );

    for (i, stop) in plan.stops().iter().enumerate() {
        let label = match &stop.kind {
            StopKind::Origin => "Start".to_string(),
            StopKind::Waypoint => "Waypoint".to_string(),
            StopKind::Destination => "Destination".to_string(),
            StopKind::Overnight {
                stay_id,
                title,
                provider,
                check_in,
            } => format!("Night of {check_in}: {title} ({provider} {stay_id})"),
        };
        let _ = writeln!(out, "  {:>2}. {label}  [{}]", i + 1, stop.coordinate);
    }

    if !plan.is_complete() {
        out.push_str("  ⚠️  Plan does not reach the destination\n");
    }
    out
}

/// Render one stay candidate
pub fn format_stay(stay: &Stay) -> String {
    let mut line = format!("[{}] {} ({})", stay.provider, stay.title, stay.id);
    if let Some(city) = &stay.city {
        let _ = write!(line, ", {city}");
    }
    if let Some(rating) = stay.rating {
        let _ = write!(line, ", rated {rating:.1}");
    }
    if let Some(rate) = stay.nightly_rate {
        let _ = write!(line, ", {rate:.2}/night");
    }
    let _ = write!(line, "  [{}]", stay.coordinate);
    line
}

/// Render route totals and one line per leg
pub fn format_route(route: &Route) -> String {
    let mut out = format!(
        "🛣️  {:.1} km, {}\n",
        route.total_distance_m() / 1000.0,
        format_hours(route.total_duration_hours())
    );
    for (i, segment) in route.segments().iter().enumerate() {
        let _ = writeln!(
            out,
            "  Leg {}: {:.1} km, {}, {} steps",
            i + 1,
            segment.distance_m / 1000.0,
            format_hours(segment.duration_secs / 3600.0),
            segment.steps.len()
        );
    }
    out
}

/// Render a trip estimate
pub fn format_estimate(estimate: &TripEstimate) -> String {
    format!(
        "⏱️  Driving time: {}\n\
         📅 Minimum driving days: {}\n\
         ☕ Rest per day: {}\n\
         ☕ Rest in total: {}\n\
         🕐 Longest day on the road: {}\n",
        format_hours(estimate.total_driving_hours),
        estimate.min_driving_days,
        format_hours(estimate.rest_hours_per_day),
        format_hours(estimate.total_rest_hours),
        format_hours(estimate.max_day_hours),
    )
}

/// Render an isochrone with its bounding box
pub fn format_isochrone(isochrone: &Isochrone) -> String {
    let range = format_hours(isochrone.range_secs / 3600.0);
    match isochrone.bounding_box() {
        Some(bbox) => format!(
            "Within {range}: {} points, NE [{}], SW [{}]",
            isochrone.ring.len(),
            bbox.north_east,
            bbox.south_west
        ),
        None => format!("Within {range}: empty area"),
    }
}

/// Format fractional hours as `Hh MMm`
pub fn format_hours(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round().max(0.0) as u64;
    format!("{}h {:02}m", total_minutes / 60, total_minutes % 60)
}
