//! Accommodation entities
//!
//! Each provider reports listings in its own vocabulary. [`RentalListing`] and
//! [`HotelListing`] keep that vocabulary as typed records, and the `TryFrom`
//! conversions are the only place where provider fields are mapped onto the
//! common [`Stay`] shape.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::{Coordinate, StayProvider};

/// A short-term rental as reported by the rental provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalListing {
    pub airbnb_id: String,
    pub listing_title: String,
    pub city: Option<String>,
    pub star_rating: Option<f64>,
    pub listing_lat: f64,
    pub listing_lng: f64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

/// A hotel as reported by the hotel provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelListing {
    pub hotel_id: String,
    pub hotel_name: String,
    pub city_name: Option<String>,
    pub overall_guest_rating: Option<f64>,
    pub latitude: f64,
    pub longitude: f64,
    /// Nightly rate including taxes and fees
    pub nightly_rate: Option<f64>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

/// A raw listing tagged with its provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum ProviderListing {
    Rental(RentalListing),
    Hotel(HotelListing),
}

/// A normalized accommodation candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stay {
    pub id: String,
    pub title: String,
    pub city: Option<String>,
    pub provider: StayProvider,
    pub coordinate: Coordinate,
    pub rating: Option<f64>,
    pub nightly_rate: Option<f64>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl TryFrom<RentalListing> for Stay {
    type Error = DomainError;

    fn try_from(listing: RentalListing) -> Result<Self, Self::Error> {
        Ok(Self {
            coordinate: Coordinate::new(listing.listing_lat, listing.listing_lng)?,
            id: listing.airbnb_id,
            title: listing.listing_title,
            city: listing.city,
            provider: StayProvider::Rental,
            rating: listing.star_rating,
            nightly_rate: None,
            check_in: listing.check_in,
            check_out: listing.check_out,
        })
    }
}

impl TryFrom<HotelListing> for Stay {
    type Error = DomainError;

    fn try_from(listing: HotelListing) -> Result<Self, Self::Error> {
        Ok(Self {
            coordinate: Coordinate::new(listing.latitude, listing.longitude)?,
            id: listing.hotel_id,
            title: listing.hotel_name,
            city: listing.city_name,
            provider: StayProvider::Hotel,
            rating: listing.overall_guest_rating,
            nightly_rate: listing.nightly_rate,
            check_in: listing.check_in,
            check_out: listing.check_out,
        })
    }
}

impl TryFrom<ProviderListing> for Stay {
    type Error = DomainError;

    fn try_from(listing: ProviderListing) -> Result<Self, Self::Error> {
        match listing {
            ProviderListing::Rental(rental) => rental.try_into(),
            ProviderListing::Hotel(hotel) => hotel.try_into(),
        }
    }
}
