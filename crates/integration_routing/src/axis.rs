//! Axis order conversion
//!
//! The domain works in latitude/longitude; the providers send and expect
//! `[longitude, latitude]` pairs.

use domain::Coordinate;

use crate::error::RoutingError;

/// Provider order for a coordinate
#[must_use]
pub fn to_lon_lat(coordinate: &Coordinate) -> [f64; 2] {
    [coordinate.longitude(), coordinate.latitude()]
}

/// Provider order for a list of coordinates
#[must_use]
pub fn to_lon_lat_list(coordinates: &[Coordinate]) -> Vec<[f64; 2]> {
    coordinates.iter().map(to_lon_lat).collect()
}

/// Read a provider position; extra members such as elevation are ignored
///
/// # Errors
///
/// Returns `RoutingError::ParseError` for fewer than two members or an
/// out-of-range value.
pub fn from_lon_lat(position: &[f64]) -> Result<Coordinate, RoutingError> {
    match position {
        [lon, lat, ..] => Coordinate::new(*lat, *lon)
            .map_err(|e| RoutingError::ParseError(e.to_string())),
        _ => Err(RoutingError::ParseError(format!(
            "position needs two members, got {}",
            position.len()
        ))),
    }
}
