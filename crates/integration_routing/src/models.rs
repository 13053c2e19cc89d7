//! Raw OpenRouteService response models
//!
//! These mirror the GeoJSON documents returned by the directions and
//! isochrone endpoints and are converted into domain types right after
//! parsing.

use domain::{Route, RouteSegment, RouteStep};
use serde::{Deserialize, Serialize};

use crate::{axis, error::RoutingError};

/// Directions request body
#[derive(Debug, Serialize)]
pub(crate) struct DirectionsRequest {
    pub coordinates: Vec<[f64; 2]>,
    pub instructions: bool,
}

/// Isochrone request body
#[derive(Debug, Serialize)]
pub(crate) struct IsochroneRequest {
    pub locations: Vec<[f64; 2]>,
    pub range: Vec<f64>,
}

/// Directions response (`FeatureCollection`)
#[derive(Debug, Deserialize)]
pub(crate) struct RawDirectionsResponse {
    #[serde(default)]
    pub features: Vec<RawRouteFeature>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawRouteFeature {
    pub geometry: RawLineString,
    pub properties: RawRouteProperties,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawLineString {
    #[serde(default)]
    pub coordinates: Vec<Vec<f64>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawRouteProperties {
    #[serde(default)]
    pub segments: Vec<RawSegment>,
    #[serde(default)]
    pub summary: RawSummary,
    #[serde(default)]
    pub way_points: Vec<usize>,
}

/// Zero-length routes come back with an empty summary
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawSummary {
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub duration: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSegment {
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub steps: Vec<RawStep>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawStep {
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub duration: f64,
    pub instruction: Option<String>,
    pub name: Option<String>,
    pub way_points: [usize; 2],
}

/// Error document returned with non-success statuses
#[derive(Debug, Deserialize)]
pub(crate) struct RawErrorResponse {
    pub error: RawErrorDetail,
}

/// ORS sends either `{code, message}` or a bare string
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawErrorDetail {
    Coded {
        code: Option<u32>,
        message: Option<String>,
    },
    Message(String),
}

impl RawErrorDetail {
    pub fn code(&self) -> Option<u32> {
        match self {
            Self::Coded { code, .. } => *code,
            Self::Message(_) => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Coded { message, .. } => message.as_deref(),
            Self::Message(m) => Some(m),
        }
    }
}

/// Isochrone response (`FeatureCollection` of polygons)
#[derive(Debug, Deserialize)]
pub(crate) struct RawIsochroneResponse {
    #[serde(default)]
    pub features: Vec<RawIsochroneFeature>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawIsochroneFeature {
    pub geometry: RawPolygon,
    pub properties: RawIsochroneProperties,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawPolygon {
    #[serde(default)]
    pub coordinates: Vec<Vec<Vec<f64>>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawIsochroneProperties {
    pub value: f64,
}

impl RawRouteFeature {
    /// Convert into a validated domain route
    pub fn into_route(self) -> Result<Route, RoutingError> {
        let geometry = self
            .geometry
            .coordinates
            .iter()
            .map(|p| axis::from_lon_lat(p))
            .collect::<Result<Vec<_>, _>>()?;

        let segments = self
            .properties
            .segments
            .into_iter()
            .map(RawSegment::into_segment)
            .collect();

        Route::new(
            segments,
            geometry,
            self.properties.way_points,
            self.properties.summary.duration,
            self.properties.summary.distance,
        )
        .map_err(|e| RoutingError::ParseError(e.to_string()))
    }
}

impl RawSegment {
    fn into_segment(self) -> RouteSegment {
        let steps = self
            .steps
            .into_iter()
            .map(|s| RouteStep {
                duration_secs: s.duration,
                distance_m: s.distance,
                start_index: s.way_points[0],
                end_index: s.way_points[1],
                instruction: s.instruction,
                name: s.name.filter(|n| n != "-"),
            })
            .collect();
        RouteSegment {
            steps,
            duration_secs: self.duration,
            distance_m: self.distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROUTE_JSON: &str = r#"{
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "geometry": {
                "type": "LineString",
                "coordinates": [[8.681495, 49.41461], [8.686507, 49.41943], [8.687872, 49.420318]]
            },
            "properties": {
                "segments": [{
                    "distance": 1400.0,
                    "duration": 281.9,
                    "steps": [
                        {"distance": 1000.0, "duration": 200.0, "type": 11, "instruction": "Head north", "name": "-", "way_points": [0, 1]},
                        {"distance": 400.0, "duration": 81.9, "type": 1, "instruction": "Turn right onto Wielandtstraße", "name": "Wielandtstraße", "way_points": [1, 2]},
                        {"distance": 0.0, "duration": 0.0, "type": 10, "instruction": "Arrive", "name": "-", "way_points": [2, 2]}
                    ]
                }],
                "summary": {"distance": 1400.0, "duration": 281.9},
                "way_points": [0, 2]
            }
        }]
    }"#;

    #[test]
    fn parses_directions_document() {
        let raw: RawDirectionsResponse = serde_json::from_str(ROUTE_JSON).unwrap();
        let route = raw.features.into_iter().next().unwrap().into_route().unwrap();

        assert_eq!(route.geometry().len(), 3);
        assert!((route.geometry()[0].latitude() - 49.41461).abs() < 1e-9);
        assert_eq!(route.segments().len(), 1);
        assert_eq!(route.first_segment().steps.len(), 3);
        assert_eq!(route.destination_index(), 2);
        assert!((route.total_duration_secs() - 281.9).abs() < 1e-9);

        let step = &route.first_segment().steps[0];
        assert_eq!(step.name, None);
        assert_eq!(step.instruction.as_deref(), Some("Head north"));
        assert_eq!(route.first_segment().steps[1].name.as_deref(), Some("Wielandtstraße"));
    }

    #[test]
    fn empty_summary_is_zero() {
        let json = r#"{"features": [{
            "geometry": {"coordinates": [[8.68, 49.41]]},
            "properties": {
                "segments": [{"steps": [{"way_points": [0, 0]}]}],
                "summary": {},
                "way_points": [0, 0]
            }
        }]}"#;
        let raw: RawDirectionsResponse = serde_json::from_str(json).unwrap();
        let route = raw.features.into_iter().next().unwrap().into_route().unwrap();
        assert!(route.total_duration_secs().abs() < f64::EPSILON);
    }

    #[test]
    fn step_outside_geometry_is_a_parse_error() {
        let json = r#"{"features": [{
            "geometry": {"coordinates": [[8.68, 49.41], [8.69, 49.42]]},
            "properties": {"segments": [{"steps": [{"way_points": [0, 7]}]}]}
        }]}"#;
        let raw: RawDirectionsResponse = serde_json::from_str(json).unwrap();
        let result = raw.features.into_iter().next().unwrap().into_route();
        assert!(matches!(result, Err(RoutingError::ParseError(_))));
    }

    #[test]
    fn error_detail_variants() {
        let coded: RawErrorResponse =
            serde_json::from_str(r#"{"error": {"code": 2010, "message": "no routable point"}}"#)
                .unwrap();
        assert_eq!(coded.error.code(), Some(2010));
        assert_eq!(coded.error.message(), Some("no routable point"));

        let bare: RawErrorResponse =
            serde_json::from_str(r#"{"error": "Access to this API has been disallowed"}"#).unwrap();
        assert_eq!(bare.error.code(), None);
        assert!(bare.error.message().unwrap().contains("disallowed"));
    }

    #[test]
    fn request_body_shape() {
        let body = DirectionsRequest {
            coordinates: vec![[8.68, 49.41], [8.69, 49.42]],
            instructions: true,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["coordinates"][0][0], 8.68);
        assert_eq!(json["instructions"], true);
    }
}
