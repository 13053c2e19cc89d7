//! Accommodation models
//!
//! Raw response shapes for both providers, plus the typed listings the
//! clients return.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A rental listing with the details the planner uses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirbnbListing {
    pub airbnb_id: String,
    pub listing_title: String,
    pub city: Option<String>,
    pub star_rating: Option<f64>,
    pub review_count: Option<u32>,
    pub max_guest_capacity: Option<u32>,
    pub bedrooms: Option<u32>,
    pub property_type: Option<String>,
    pub listing_lat: f64,
    pub listing_lng: f64,
    pub check_in_time: Option<String>,
    pub check_out_time: Option<String>,
    pub listing_status: Option<String>,
}

/// One calendar day of a rental listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityDay {
    pub date: NaiveDate,
    pub available: bool,
}

/// A hotel offer for the requested dates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricelineHotel {
    pub hotel_id: String,
    pub name: String,
    pub city_name: Option<String>,
    pub province_code: Option<String>,
    pub address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub overall_guest_rating: Option<f64>,
    pub nightly_rate: Option<f64>,
    pub grand_total: Option<f64>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

/// Provider APIs send identifiers and amounts either as strings or numbers
pub(crate) mod raw {
    use serde::Deserialize;

    /// Identifier that may be a JSON string or number
    #[derive(Debug, Clone, Deserialize)]
    #[serde(untagged)]
    pub enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    impl RawId {
        pub fn into_string(self) -> String {
            match self {
                Self::Text(s) => s,
                Self::Number(n) => n.to_string(),
            }
        }
    }

    /// Scalar that may be a JSON string or number
    #[derive(Debug, Clone, Deserialize)]
    #[serde(untagged)]
    pub enum RawScalar {
        Number(f64),
        Text(String),
    }

    impl RawScalar {
        pub fn as_f64(&self) -> Option<f64> {
            match self {
                Self::Number(n) => Some(*n),
                Self::Text(s) => s.trim().parse().ok(),
            }
        }

        pub fn into_text(self) -> String {
            match self {
                Self::Number(n) => n.to_string(),
                Self::Text(s) => s,
            }
        }
    }

    // ----- Airbnb -----

    #[derive(Debug, Deserialize)]
    pub struct ListingsByLatLng {
        pub results: Option<Vec<ListingRef>>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ListingRef {
        pub airbnb_id: RawId,
        #[allow(dead_code)]
        pub distance: Option<f64>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ListingDetailsResponse {
        pub results: Option<Vec<ListingDetails>>,
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ListingDetails {
        #[serde(rename = "airbnb_id")]
        pub airbnb_id: RawId,
        pub listing_title: Option<String>,
        pub city: Option<String>,
        pub star_rating: Option<RawScalar>,
        pub review_count: Option<u32>,
        pub max_guest_capacity: Option<u32>,
        pub bedrooms: Option<u32>,
        pub property_type: Option<String>,
        pub listing_lat: Option<RawScalar>,
        pub listing_lng: Option<RawScalar>,
        #[serde(rename = "check_in_time")]
        pub check_in_time: Option<RawScalar>,
        #[serde(rename = "check_out_time")]
        pub check_out_time: Option<RawScalar>,
        #[serde(rename = "listingstatus")]
        pub listing_status: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct AvailabilityResponse {
        pub results: Option<Vec<AvailabilityEntry>>,
    }

    #[derive(Debug, Deserialize)]
    pub struct AvailabilityEntry {
        pub date: String,
        #[serde(default)]
        pub available: bool,
    }

    // ----- Priceline -----

    #[derive(Debug, Deserialize)]
    pub struct Envelope<T> {
        pub data: Option<T>,
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct NearbyData {
        pub exact_match: Option<ExactMatch>,
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ExactMatch {
        pub matched_city: Option<MatchedCity>,
    }

    #[derive(Debug, Deserialize)]
    pub struct MatchedCity {
        #[serde(rename = "cityID")]
        pub city_id: Option<RawId>,
    }

    #[derive(Debug, Deserialize)]
    pub struct HotelSearchData {
        #[serde(default)]
        pub hotels: Option<Vec<Hotel>>,
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Hotel {
        pub hotel_id: RawId,
        pub name: Option<String>,
        pub location: Option<HotelLocation>,
        pub overall_guest_rating: Option<RawScalar>,
        pub rates_summary: Option<RatesSummary>,
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct HotelLocation {
        pub address: Option<HotelAddress>,
        pub latitude: Option<RawScalar>,
        pub longitude: Option<RawScalar>,
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct HotelAddress {
        pub address_line1: Option<String>,
        pub city_name: Option<String>,
        pub province_code: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RatesSummary {
        pub nightly_rate_including_taxes_and_fees: Option<RawScalar>,
        pub grand_total: Option<RawScalar>,
    }
}
