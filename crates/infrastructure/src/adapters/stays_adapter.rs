//! Accommodation adapters - Implement RentalSearchPort and HotelSearchPort
//! using integration_stays

use application::error::ApplicationError;
use application::ports::{HotelQuery, HotelSearchPort, RentalQuery, RentalSearchPort};
use async_trait::async_trait;
use chrono::NaiveDate;
use domain::{HotelListing, RentalListing};
use integration_stays::{
    AirbnbClient, AirbnbConfig, AirbnbListing, CredentialRotation, HotelClient, HotelSearch,
    PricelineClient, PricelineConfig, PricelineHotel, RentalClient, RentalSearch, StaysError,
};
use tracing::{debug, instrument};

/// Map integration accommodation error to application error
fn map_error(provider: &str, err: StaysError) -> ApplicationError {
    match err {
        StaysError::ConfigurationError(e) => {
            ApplicationError::Configuration(format!("{provider}: {e}"))
        },
        other => ApplicationError::Provider(format!("{provider} search failed: {other}")),
    }
}

/// Adapter for short-term rentals via the Airbnb listings API
#[derive(Debug)]
pub struct RentalAdapter {
    client: AirbnbClient,
}

impl RentalAdapter {
    /// Create a new adapter
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn new(
        config: &AirbnbConfig,
        credentials: CredentialRotation,
    ) -> Result<Self, ApplicationError> {
        let client =
            AirbnbClient::new(config, credentials).map_err(|e| map_error("airbnb", e))?;
        Ok(Self { client })
    }

    /// Convert a listing into the domain record for the searched dates
    fn to_listing(
        listing: AirbnbListing,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> RentalListing {
        RentalListing {
            airbnb_id: listing.airbnb_id,
            listing_title: listing.listing_title,
            city: listing.city,
            star_rating: listing.star_rating,
            listing_lat: listing.listing_lat,
            listing_lng: listing.listing_lng,
            check_in,
            check_out,
        }
    }
}

#[async_trait]
impl RentalSearchPort for RentalAdapter {
    #[instrument(skip(self), fields(center = %query.center))]
    async fn search_rentals(
        &self,
        query: &RentalQuery,
    ) -> Result<Vec<RentalListing>, ApplicationError> {
        let search = RentalSearch {
            latitude: query.center.latitude(),
            longitude: query.center.longitude(),
            check_in: query.check_in,
            check_out: query.check_out,
            radius_m: query.radius_m,
            limit: query.limit,
        };

        let listings = self
            .client
            .search_available(&search)
            .await
            .map_err(|e| map_error("airbnb", e))?;
        debug!(count = listings.len(), "Rentals found");

        Ok(listings
            .into_iter()
            .map(|l| Self::to_listing(l, query.check_in, query.check_out))
            .collect())
    }
}

/// Adapter for hotels via the Priceline API
#[derive(Debug)]
pub struct HotelAdapter {
    client: PricelineClient,
}

impl HotelAdapter {
    /// Create a new adapter
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn new(
        config: &PricelineConfig,
        credentials: CredentialRotation,
    ) -> Result<Self, ApplicationError> {
        let client =
            PricelineClient::new(config, credentials).map_err(|e| map_error("priceline", e))?;
        Ok(Self { client })
    }

    fn to_listing(hotel: PricelineHotel) -> HotelListing {
        HotelListing {
            hotel_id: hotel.hotel_id,
            hotel_name: hotel.name,
            city_name: hotel.city_name,
            overall_guest_rating: hotel.overall_guest_rating,
            latitude: hotel.latitude,
            longitude: hotel.longitude,
            nightly_rate: hotel.nightly_rate,
            check_in: hotel.check_in,
            check_out: hotel.check_out,
        }
    }
}

#[async_trait]
impl HotelSearchPort for HotelAdapter {
    #[instrument(skip(self), fields(center = %query.center))]
    async fn search_hotels(
        &self,
        query: &HotelQuery,
    ) -> Result<Vec<HotelListing>, ApplicationError> {
        let search = HotelSearch {
            latitude: query.center.latitude(),
            longitude: query.center.longitude(),
            check_in: query.check_in,
            check_out: query.check_out,
            limit: query.limit,
            page: query.page,
        };

        let hotels = self
            .client
            .search_hotels(&search)
            .await
            .map_err(|e| map_error("priceline", e))?;
        debug!(count = hotels.len(), "Hotels found");

        Ok(hotels.into_iter().map(Self::to_listing).collect())
    }
}
