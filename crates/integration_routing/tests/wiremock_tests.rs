//! Integration tests for the routing clients (wiremock-based)

use domain::Coordinate;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_routing::{
    DirectionsClient, GeoapifyConfig, GeoapifyGeocodingClient, GeocodingClient, GeocodingError,
    IsochroneClient, OpenRouteClient, OpenRouteConfig, RoutingError,
};

fn ors_config_for_mock(base_url: &str) -> OpenRouteConfig {
    OpenRouteConfig {
        base_url: base_url.to_string(),
        api_key: "ors-test-key".to_string(),
        timeout_secs: 5,
        ..OpenRouteConfig::default()
    }
}

fn geoapify_config_for_mock(base_url: &str, cache_ttl_hours: u64) -> GeoapifyConfig {
    GeoapifyConfig {
        base_url: base_url.to_string(),
        api_key: "geo-test-key".to_string(),
        timeout_secs: 5,
        cache_ttl_hours,
    }
}

fn bellingham() -> Coordinate {
    Coordinate::new(48.7544, -122.4788).unwrap()
}

fn kamloops() -> Coordinate {
    Coordinate::new(50.6745, -120.3273).unwrap()
}

fn calgary() -> Coordinate {
    Coordinate::new(51.0447, -114.0719).unwrap()
}

/// Two segments: Bellingham -> Kamloops -> Calgary, five geometry points
const fn sample_directions_json() -> &'static str {
    r#"{
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "geometry": {
                "type": "LineString",
                "coordinates": [
                    [-122.4788, 48.7544],
                    [-121.5, 49.6],
                    [-120.3273, 50.6745],
                    [-117.2, 51.0],
                    [-114.0719, 51.0447]
                ]
            },
            "properties": {
                "segments": [
                    {
                        "distance": 420000.0,
                        "duration": 16200.0,
                        "steps": [
                            {"distance": 200000.0, "duration": 7200.0, "instruction": "Head north on I-5", "name": "I-5", "way_points": [0, 1]},
                            {"distance": 220000.0, "duration": 9000.0, "instruction": "Continue onto BC-5", "name": "BC-5", "way_points": [1, 2]},
                            {"distance": 0.0, "duration": 0.0, "instruction": "Arrive at Kamloops", "name": "-", "way_points": [2, 2]}
                        ]
                    },
                    {
                        "distance": 610000.0,
                        "duration": 23400.0,
                        "steps": [
                            {"distance": 300000.0, "duration": 11000.0, "instruction": "Head east on BC-1", "name": "BC-1", "way_points": [2, 3]},
                            {"distance": 310000.0, "duration": 12400.0, "instruction": "Continue onto AB-1", "name": "AB-1", "way_points": [3, 4]},
                            {"distance": 0.0, "duration": 0.0, "instruction": "Arrive at Calgary", "name": "-", "way_points": [4, 4]}
                        ]
                    }
                ],
                "summary": {"distance": 1030000.0, "duration": 39600.0},
                "way_points": [0, 2, 4]
            }
        }]
    }"#
}

#[tokio::test]
async fn test_directions_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/directions/driving-car/geojson"))
        .and(header("Authorization", "ors-test-key"))
        .and(body_partial_json(serde_json::json!({
            "coordinates": [[-122.4788, 48.7544], [-120.3273, 50.6745], [-114.0719, 51.0447]]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_directions_json()))
        .mount(&server)
        .await;

    let client = OpenRouteClient::new(&ors_config_for_mock(&server.uri())).unwrap();
    let route = client
        .directions(&[bellingham(), kamloops(), calgary()])
        .await
        .unwrap();

    assert_eq!(route.segments().len(), 2);
    assert_eq!(route.first_segment().steps.len(), 3);
    assert_eq!(route.segment_end_index(0), Some(2));
    assert_eq!(route.destination_index(), 4);
    assert!((route.total_duration_hours() - 11.0).abs() < 1e-9);

    let stop = route.coordinate_at(2).unwrap();
    assert!((stop.latitude() - 50.6745).abs() < 1e-9);
    assert!((stop.longitude() + 120.3273).abs() < 1e-9);
}

#[tokio::test]
async fn test_directions_segment_count_mismatch() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/directions/driving-car/geojson"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_directions_json()))
        .mount(&server)
        .await;

    let client = OpenRouteClient::new(&ors_config_for_mock(&server.uri())).unwrap();
    // Two waypoints requested, two segments returned
    let result = client.directions(&[bellingham(), calgary()]).await;

    assert!(matches!(result, Err(RoutingError::ParseError(_))));
}

#[tokio::test]
async fn test_directions_unroutable_point() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/directions/driving-car/geojson"))
        .respond_with(ResponseTemplate::new(404).set_body_string(
            r#"{"error": {"code": 2010, "message": "Could not find routable point within a radius of 350.0 meters of specified coordinate 1"}}"#,
        ))
        .mount(&server)
        .await;

    let client = OpenRouteClient::new(&ors_config_for_mock(&server.uri())).unwrap();
    let result = client.directions(&[bellingham(), calgary()]).await;

    match result {
        Err(RoutingError::RouteNotFound(msg)) => assert!(msg.contains("routable point")),
        other => panic!("expected RouteNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_directions_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/directions/driving-car/geojson"))
        .respond_with(ResponseTemplate::new(403).set_body_string(
            r#"{"error": "Access to this API has been disallowed"}"#,
        ))
        .mount(&server)
        .await;

    let client = OpenRouteClient::new(&ors_config_for_mock(&server.uri())).unwrap();
    let result = client.directions(&[bellingham(), calgary()]).await;

    assert!(matches!(result, Err(RoutingError::Unauthorized(_))));
}

#[tokio::test]
async fn test_directions_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/directions/driving-car/geojson"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "30"))
        .mount(&server)
        .await;

    let client = OpenRouteClient::new(&ors_config_for_mock(&server.uri())).unwrap();
    let err = client
        .directions(&[bellingham(), calgary()])
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        RoutingError::RateLimitExceeded {
            retry_after_secs: Some(30)
        }
    ));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_directions_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/directions/driving-car/geojson"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = OpenRouteClient::new(&ors_config_for_mock(&server.uri())).unwrap();
    let result = client.directions(&[bellingham(), calgary()]).await;

    assert!(matches!(result, Err(RoutingError::RequestFailed(_))));
}

#[tokio::test]
async fn test_directions_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/directions/driving-car/geojson"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = OpenRouteClient::new(&ors_config_for_mock(&server.uri())).unwrap();
    let result = client.directions(&[bellingham(), calgary()]).await;

    assert!(matches!(result, Err(RoutingError::ParseError(_))));
}

#[tokio::test]
async fn test_isochrones_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/isochrones/driving-car"))
        .and(body_partial_json(serde_json::json!({
            "locations": [[8.681495, 49.41461]],
            "range": [3600.0]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "properties": {"group_index": 0, "value": 3600.0},
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[8.60, 49.30], [8.80, 49.35], [8.75, 49.55], [8.55, 49.50], [8.60, 49.30]]]
                    }
                }]
            }"#,
        ))
        .mount(&server)
        .await;

    let client = OpenRouteClient::new(&ors_config_for_mock(&server.uri())).unwrap();
    let center = Coordinate::new(49.41461, 8.681495).unwrap();
    let polygons = client.isochrones(&center, &[1.0]).await.unwrap();

    assert_eq!(polygons.len(), 1);
    assert!((polygons[0].range_secs - 3600.0).abs() < f64::EPSILON);
    assert_eq!(polygons[0].ring.len(), 5);

    let bbox = polygons[0].bounding_box().unwrap();
    assert!((bbox.north_east.latitude() - 49.55).abs() < 1e-9);
    assert!((bbox.north_east.longitude() - 8.80).abs() < 1e-9);
    assert!((bbox.south_west.latitude() - 49.30).abs() < 1e-9);
    assert!((bbox.south_west.longitude() - 8.55).abs() < 1e-9);
}

#[tokio::test]
async fn test_geocode_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/geocode/search"))
        .and(query_param("text", "Bellingham, WA"))
        .and(query_param("apiKey", "geo-test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"type": "FeatureCollection", "features": [
                {"type": "Feature", "properties": {"lat": 48.7544, "lon": -122.4788}},
                {"type": "Feature", "properties": {"lat": 10.0, "lon": 10.0}}
            ]}"#,
        ))
        .mount(&server)
        .await;

    let client = GeoapifyGeocodingClient::new(&geoapify_config_for_mock(&server.uri(), 0)).unwrap();
    let c = client.geocode("Bellingham, WA").await.unwrap();

    assert!((c.latitude() - 48.7544).abs() < 1e-9);
    assert!((c.longitude() + 122.4788).abs() < 1e-9);
}

#[tokio::test]
async fn test_geocode_no_result() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/geocode/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"features": []}"#))
        .mount(&server)
        .await;

    let client = GeoapifyGeocodingClient::new(&geoapify_config_for_mock(&server.uri(), 0)).unwrap();
    let result = client.geocode("Nowhere at all").await;

    assert!(matches!(result, Err(GeocodingError::AddressNotFound(_))));
}

#[tokio::test]
async fn test_geocode_uses_cache() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/geocode/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"features": [{"properties": {"lat": 51.0447, "lon": -114.0719}}]}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeoapifyGeocodingClient::new(&geoapify_config_for_mock(&server.uri(), 1)).unwrap();
    let first = client.geocode("Calgary, AB").await.unwrap();
    let second = client.geocode("calgary, ab").await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_geocode_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/geocode/search"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = GeoapifyGeocodingClient::new(&geoapify_config_for_mock(&server.uri(), 0)).unwrap();
    let result = client.geocode("Calgary, AB").await;

    assert!(matches!(result, Err(GeocodingError::Unauthorized(_))));
}

mod proptest_tests {
    use domain::Coordinate;
    use integration_routing::axis::{from_lon_lat, to_lon_lat};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn axis_conversion_roundtrip(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let c = Coordinate::new(lat, lon).unwrap();
            let back = from_lon_lat(&to_lon_lat(&c)).unwrap();
            prop_assert_eq!(c, back);
        }

        #[test]
        fn provider_pair_puts_longitude_first(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let pair = to_lon_lat(&Coordinate::new(lat, lon).unwrap());
            prop_assert!((pair[0] - lon).abs() < f64::EPSILON);
            prop_assert!((pair[1] - lat).abs() < f64::EPSILON);
        }
    }
}
