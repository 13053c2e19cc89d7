//! Stay aggregation
//!
//! Queries every accommodation provider around a stopping point, normalizes
//! the results into [`Stay`] records and picks the one with the shortest
//! drive to the target.

use std::{fmt, sync::Arc};

use chrono::NaiveDate;
use domain::{Coordinate, DomainError, ProviderListing, Stay};
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
    error::ApplicationError,
    ports::{DirectionsPort, HotelQuery, HotelSearchPort, RentalQuery, RentalSearchPort},
};

/// Tunables for the provider queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaySearchOptions {
    /// Rental search radius in meters
    pub radius_m: u32,
    /// Maximum rentals to fetch details for
    pub rental_limit: usize,
    /// Hotels per page
    pub hotel_limit: u32,
    /// Hotel result page
    pub hotel_page: u32,
}

impl Default for StaySearchOptions {
    fn default() -> Self {
        Self {
            radius_m: 2000,
            rental_limit: 5,
            hotel_limit: 2,
            hotel_page: 1,
        }
    }
}

/// Combines the rental and hotel providers
pub struct StayAggregator {
    rentals: Arc<dyn RentalSearchPort>,
    hotels: Arc<dyn HotelSearchPort>,
    directions: Arc<dyn DirectionsPort>,
    options: StaySearchOptions,
}

impl fmt::Debug for StayAggregator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StayAggregator")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl StayAggregator {
    /// Create an aggregator with default search options
    pub fn new(
        rentals: Arc<dyn RentalSearchPort>,
        hotels: Arc<dyn HotelSearchPort>,
        directions: Arc<dyn DirectionsPort>,
    ) -> Self {
        Self {
            rentals,
            hotels,
            directions,
            options: StaySearchOptions::default(),
        }
    }

    /// Replace the search options
    #[must_use]
    pub const fn with_options(mut self, options: StaySearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Current search options
    #[must_use]
    pub const fn options(&self) -> &StaySearchOptions {
        &self.options
    }

    /// Query both providers concurrently and merge the results
    ///
    /// Rentals come first, then hotels, each in provider order. Fails if
    /// either provider fails or any record carries invalid coordinates.
    #[instrument(skip(self), fields(center = %center))]
    pub async fn search_stays(
        &self,
        center: &Coordinate,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Vec<Stay>, ApplicationError> {
        if check_out <= check_in {
            return Err(DomainError::ValidationError(format!(
                "check-out {check_out} must be after check-in {check_in}"
            ))
            .into());
        }

        let rental_query = RentalQuery {
            center: *center,
            check_in,
            check_out,
            radius_m: self.options.radius_m,
            limit: self.options.rental_limit,
        };
        let hotel_query = HotelQuery {
            center: *center,
            check_in,
            check_out,
            limit: self.options.hotel_limit,
            page: self.options.hotel_page,
        };

        let (rentals, hotels) = futures::try_join!(
            self.rentals.search_rentals(&rental_query),
            self.hotels.search_hotels(&hotel_query),
        )?;

        debug!(
            rentals = rentals.len(),
            hotels = hotels.len(),
            "Stay candidates received"
        );

        let stays = rentals
            .into_iter()
            .map(ProviderListing::Rental)
            .chain(hotels.into_iter().map(ProviderListing::Hotel))
            .map(Stay::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(stays)
    }

    /// Pick the stay with the shortest driving time to `target`
    ///
    /// Driving times are requested concurrently. Ties go to the earlier
    /// candidate.
    #[instrument(skip(self, stays), fields(candidates = stays.len(), target = %target))]
    pub async fn select_best_stay(
        &self,
        stays: &[Stay],
        target: &Coordinate,
    ) -> Result<Stay, ApplicationError> {
        if stays.is_empty() {
            return Err(ApplicationError::NoStaysAvailable {
                near: target.to_string(),
            });
        }

        let durations = try_join_all(stays.iter().map(|stay| async move {
            let route = self.directions.directions(&[stay.coordinate, *target]).await?;
            Ok::<_, ApplicationError>(route.total_duration_secs())
        }))
        .await?;

        let best = fastest_index(&durations).ok_or_else(|| ApplicationError::NoStaysAvailable {
            near: target.to_string(),
        })?;

        debug!(
            stay_id = %stays[best].id,
            duration_secs = durations[best],
            straight_line_km = stays[best].coordinate.distance_km(target),
            "Selected stay"
        );
        Ok(stays[best].clone())
    }
}

/// Index of the smallest duration, the first one winning ties
#[must_use]
pub fn fastest_index(durations: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &d) in durations.iter().enumerate() {
        match best {
            Some((_, current)) if d >= current => {},
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use domain::{HotelListing, RentalListing, Route, RouteSegment, RouteStep, StayProvider};

    use super::*;
    use crate::ports::{MockDirectionsPort, MockHotelSearchPort, MockRentalSearchPort};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, d).unwrap()
    }

    fn rental(id: &str, lat: f64, lng: f64) -> RentalListing {
        RentalListing {
            airbnb_id: id.to_string(),
            listing_title: format!("Rental {id}"),
            city: None,
            star_rating: Some(4.5),
            listing_lat: lat,
            listing_lng: lng,
            check_in: date(10),
            check_out: date(11),
        }
    }

    fn hotel(id: &str, lat: f64, lng: f64) -> HotelListing {
        HotelListing {
            hotel_id: id.to_string(),
            hotel_name: format!("Hotel {id}"),
            city_name: Some("Kamloops".to_string()),
            overall_guest_rating: Some(8.1),
            latitude: lat,
            longitude: lng,
            nightly_rate: Some(120.0),
            check_in: date(10),
            check_out: date(11),
        }
    }

    fn route_taking(secs: f64) -> Route {
        let seg = RouteSegment::from_steps(vec![RouteStep::new(secs, secs * 25.0, 0, 1)]);
        let geometry = vec![
            Coordinate::new_unchecked(50.0, -120.0),
            Coordinate::new_unchecked(50.1, -120.1),
        ];
        Route::new(vec![seg], geometry, vec![0, 1], secs, secs * 25.0).unwrap()
    }

    fn stay(id: &str, lat: f64) -> Stay {
        Stay::try_from(hotel(id, lat, -120.0)).unwrap()
    }

    fn aggregator(
        rentals: MockRentalSearchPort,
        hotels: MockHotelSearchPort,
        directions: MockDirectionsPort,
    ) -> StayAggregator {
        StayAggregator::new(Arc::new(rentals), Arc::new(hotels), Arc::new(directions))
    }

    #[test]
    fn fastest_index_prefers_first_on_tie() {
        assert_eq!(fastest_index(&[300.0, 120.0, 120.0]), Some(1));
        assert_eq!(fastest_index(&[50.0]), Some(0));
        assert_eq!(fastest_index(&[]), None);
    }

    #[test]
    fn default_options() {
        let opts = StaySearchOptions::default();
        assert_eq!(opts.radius_m, 2000);
        assert_eq!(opts.hotel_limit, 2);
        assert_eq!(opts.hotel_page, 1);
    }

    #[tokio::test]
    async fn search_puts_rentals_before_hotels() {
        let mut rentals = MockRentalSearchPort::new();
        rentals
            .expect_search_rentals()
            .withf(|q| q.radius_m == 2000 && q.check_in == date(10))
            .returning(|_| Ok(vec![rental("r1", 50.6, -120.3), rental("r2", 50.7, -120.4)]));
        let mut hotels = MockHotelSearchPort::new();
        hotels
            .expect_search_hotels()
            .withf(|q| q.limit == 2 && q.page == 1)
            .returning(|_| Ok(vec![hotel("h1", 50.65, -120.35)]));

        let agg = aggregator(rentals, hotels, MockDirectionsPort::new());
        let stays = agg
            .search_stays(&Coordinate::new_unchecked(50.67, -120.33), date(10), date(11))
            .await
            .unwrap();

        let ids: Vec<_> = stays.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r2", "h1"]);
        assert_eq!(stays[0].provider, StayProvider::Rental);
        assert_eq!(stays[2].provider, StayProvider::Hotel);
    }

    #[tokio::test]
    async fn search_normalizes_each_provider_vocabulary() {
        let mut rentals = MockRentalSearchPort::new();
        rentals
            .expect_search_rentals()
            .returning(|_| Ok(vec![rental("r1", 50.6, -120.3)]));
        let mut hotels = MockHotelSearchPort::new();
        hotels
            .expect_search_hotels()
            .returning(|_| Ok(vec![hotel("h1", 50.65, -120.35)]));

        let agg = aggregator(rentals, hotels, MockDirectionsPort::new());
        let stays = agg
            .search_stays(&Coordinate::new_unchecked(50.67, -120.33), date(10), date(11))
            .await
            .unwrap();

        assert_eq!(stays[0].title, "Rental r1");
        assert_eq!(stays[0].rating, Some(4.5));
        assert_eq!(stays[0].nightly_rate, None);
        assert_eq!(stays[1].title, "Hotel h1");
        assert_eq!(stays[1].city.as_deref(), Some("Kamloops"));
        assert_eq!(stays[1].nightly_rate, Some(120.0));
        assert_eq!(stays[1].coordinate, Coordinate::new_unchecked(50.65, -120.35));
    }

    #[tokio::test]
    async fn search_fails_when_a_provider_fails() {
        let mut rentals = MockRentalSearchPort::new();
        rentals
            .expect_search_rentals()
            .returning(|_| Err(ApplicationError::Provider("HTTP 500".to_string())));
        let mut hotels = MockHotelSearchPort::new();
        hotels.expect_search_hotels().returning(|_| Ok(vec![]));

        let agg = aggregator(rentals, hotels, MockDirectionsPort::new());
        let result = agg
            .search_stays(&Coordinate::new_unchecked(50.0, -120.0), date(10), date(11))
            .await;
        assert!(matches!(result, Err(ApplicationError::Provider(_))));
    }

    #[tokio::test]
    async fn search_rejects_inverted_dates() {
        let agg = aggregator(
            MockRentalSearchPort::new(),
            MockHotelSearchPort::new(),
            MockDirectionsPort::new(),
        );
        let result = agg
            .search_stays(&Coordinate::new_unchecked(50.0, -120.0), date(11), date(11))
            .await;
        assert!(matches!(result, Err(ApplicationError::Domain(_))));
    }

    #[tokio::test]
    async fn search_rejects_invalid_listing_coordinates() {
        let mut rentals = MockRentalSearchPort::new();
        rentals
            .expect_search_rentals()
            .returning(|_| Ok(vec![rental("bad", 95.0, 0.0)]));
        let mut hotels = MockHotelSearchPort::new();
        hotels.expect_search_hotels().returning(|_| Ok(vec![]));

        let agg = aggregator(rentals, hotels, MockDirectionsPort::new());
        let result = agg
            .search_stays(&Coordinate::new_unchecked(50.0, -120.0), date(10), date(11))
            .await;
        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::InvalidCoordinates { .. }))
        ));
    }

    #[tokio::test]
    async fn empty_candidates_are_an_error() {
        let agg = aggregator(
            MockRentalSearchPort::new(),
            MockHotelSearchPort::new(),
            MockDirectionsPort::new(),
        );
        let result = agg
            .select_best_stay(&[], &Coordinate::new_unchecked(50.0, -120.0))
            .await;
        assert!(matches!(
            result,
            Err(ApplicationError::NoStaysAvailable { .. })
        ));
    }

    #[tokio::test]
    async fn selects_shortest_drive() {
        let mut directions = MockDirectionsPort::new();
        directions.expect_directions().returning(|waypoints| {
            // Candidate latitude encodes its drive time
            let secs = if (waypoints[0].latitude() - 50.2).abs() < 1e-9 {
                240.0
            } else {
                900.0
            };
            Ok(route_taking(secs))
        });

        let agg = aggregator(
            MockRentalSearchPort::new(),
            MockHotelSearchPort::new(),
            directions,
        );
        let stays = vec![stay("far", 50.1), stay("near", 50.2), stay("farther", 50.3)];
        let best = agg
            .select_best_stay(&stays, &Coordinate::new_unchecked(50.0, -120.0))
            .await
            .unwrap();
        assert_eq!(best.id, "near");
    }

    #[tokio::test]
    async fn tie_goes_to_first_candidate() {
        let mut directions = MockDirectionsPort::new();
        directions
            .expect_directions()
            .times(2)
            .returning(|_| Ok(route_taking(600.0)));

        let agg = aggregator(
            MockRentalSearchPort::new(),
            MockHotelSearchPort::new(),
            directions,
        );
        let stays = vec![stay("first", 50.1), stay("second", 50.2)];
        let best = agg
            .select_best_stay(&stays, &Coordinate::new_unchecked(50.0, -120.0))
            .await
            .unwrap();
        assert_eq!(best.id, "first");
    }

    #[tokio::test]
    async fn directions_failure_aborts_selection() {
        let mut directions = MockDirectionsPort::new();
        directions
            .expect_directions()
            .returning(|_| Err(ApplicationError::RouteNotFound("island".to_string())));

        let agg = aggregator(
            MockRentalSearchPort::new(),
            MockHotelSearchPort::new(),
            directions,
        );
        let result = agg
            .select_best_stay(&[stay("a", 50.1)], &Coordinate::new_unchecked(50.0, -120.0))
            .await;
        assert!(matches!(result, Err(ApplicationError::RouteNotFound(_))));
    }
}
