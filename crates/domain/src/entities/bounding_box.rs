//! Axis-aligned box around a set of points

use serde::{Deserialize, Serialize};

use crate::value_objects::Coordinate;

/// Rectangle that just fits a polygon, described by its four corners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub north_east: Coordinate,
    pub north_west: Coordinate,
    pub south_east: Coordinate,
    pub south_west: Coordinate,
}

impl BoundingBox {
    /// Build the box from the extreme latitudes and longitudes of `points`
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn from_points(points: &[Coordinate]) -> Option<Self> {
        let first = points.first()?;
        let (mut north, mut south) = (first.latitude(), first.latitude());
        let (mut east, mut west) = (first.longitude(), first.longitude());

        for p in &points[1..] {
            north = north.max(p.latitude());
            south = south.min(p.latitude());
            east = east.max(p.longitude());
            west = west.min(p.longitude());
        }

        Some(Self {
            north_east: Coordinate::new_unchecked(north, east),
            north_west: Coordinate::new_unchecked(north, west),
            south_east: Coordinate::new_unchecked(south, east),
            south_west: Coordinate::new_unchecked(south, west),
        })
    }
}
