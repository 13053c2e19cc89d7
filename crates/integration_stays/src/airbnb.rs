//! Airbnb listings client
//!
//! Finds listings around a point, fetches their details and keeps only those
//! whose calendar shows every night of the stay as available.

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{debug, info, instrument, warn};

use crate::{
    config::{AirbnbConfig, UnknownAvailability},
    credentials::CredentialRotation,
    error::StaysError,
    models::{
        AirbnbListing, AvailabilityDay,
        raw::{
            AvailabilityResponse, ListingDetails, ListingDetailsResponse, ListingsByLatLng,
            RawScalar,
        },
    },
    rapidapi::RapidApiClient,
};

/// Parameters of a rental search
#[derive(Debug, Clone, PartialEq)]
pub struct RentalSearch {
    pub latitude: f64,
    pub longitude: f64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    /// Search radius in meters
    pub radius_m: u32,
    /// Maximum number of listings to expand into details
    pub limit: usize,
}

/// Calendar verdict for one stay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// Every night is available
    Available,
    /// At least one night is booked
    Unavailable,
    /// The calendar does not cover every night
    Unknown,
}

/// Decide whether a listing can be booked for `[check_in, check_out)`
///
/// Starts from "not available" and only turns available once every night has
/// been seen as free.
#[must_use]
pub fn evaluate_availability(
    days: &[AvailabilityDay],
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> Availability {
    let mut available = false;
    let mut night = check_in;

    while night < check_out {
        match days.iter().find(|d| d.date == night) {
            Some(day) if !day.available => return Availability::Unavailable,
            Some(_) => available = true,
            None => return Availability::Unknown,
        }
        match night.succ_opt() {
            Some(next) => night = next,
            None => break,
        }
    }

    if available {
        Availability::Available
    } else {
        Availability::Unknown
    }
}

/// Trait for rental search clients
#[async_trait]
pub trait RentalClient: Send + Sync {
    /// Find listings near a point that are available for the whole stay
    async fn search_available(
        &self,
        search: &RentalSearch,
    ) -> Result<Vec<AirbnbListing>, StaysError>;
}

/// Airbnb listings API client
#[derive(Debug)]
pub struct AirbnbClient {
    api: RapidApiClient,
    config: AirbnbConfig,
}

impl AirbnbClient {
    /// Create a new Airbnb client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &AirbnbConfig, credentials: CredentialRotation) -> Result<Self, StaysError> {
        config.validate().map_err(StaysError::ConfigurationError)?;
        let api = RapidApiClient::new(
            &config.base_url,
            &config.host,
            config.timeout_secs,
            credentials,
        )?;
        Ok(Self {
            api,
            config: config.clone(),
        })
    }

    /// Ids of listings within `radius_m` of a point, nearest first
    #[instrument(skip(self))]
    pub async fn listings_near(
        &self,
        latitude: f64,
        longitude: f64,
        radius_m: u32,
    ) -> Result<Vec<String>, StaysError> {
        let params = [
            ("lat", latitude.to_string()),
            ("lng", longitude.to_string()),
            ("range", radius_m.to_string()),
            ("offset", "0".to_string()),
            ("maxGuestCapacity", self.config.max_guest_capacity.to_string()),
        ];
        let response: ListingsByLatLng = self.api.get_json("/v2/listingsByLatLng", &params).await?;

        let ids: Vec<String> = response
            .results
            .unwrap_or_default()
            .into_iter()
            .map(|r| r.airbnb_id.into_string())
            .collect();
        debug!(count = ids.len(), "Listings found");
        Ok(ids)
    }

    /// Details of one listing
    ///
    /// `None` if the provider no longer knows the listing or reports it
    /// without coordinates.
    #[instrument(skip(self))]
    pub async fn listing_details(&self, id: &str) -> Result<Option<AirbnbListing>, StaysError> {
        let params = [("id", id.to_string())];
        let response: ListingDetailsResponse = self.api.get_json("/v2/listing", &params).await?;

        Ok(response
            .results
            .and_then(|r| r.into_iter().next())
            .and_then(convert_listing))
    }

    /// Calendar of one listing
    #[instrument(skip(self))]
    pub async fn availability(&self, id: &str) -> Result<Vec<AvailabilityDay>, StaysError> {
        let params = [("id", id.to_string())];
        let response: AvailabilityResponse = self
            .api
            .get_json("/v2/listingAvailabilityFull", &params)
            .await?;

        response
            .results
            .unwrap_or_default()
            .into_iter()
            .map(|entry| {
                let date = NaiveDate::parse_from_str(&entry.date, "%Y-%m-%d")
                    .map_err(|e| StaysError::ParseError(format!("date {}: {e}", entry.date)))?;
                Ok(AvailabilityDay {
                    date,
                    available: entry.available,
                })
            })
            .collect()
    }

    fn keeps(&self, availability: Availability) -> bool {
        match availability {
            Availability::Available => true,
            Availability::Unavailable => false,
            Availability::Unknown => {
                self.config.unknown_availability == UnknownAvailability::Include
            },
        }
    }
}

#[async_trait]
impl RentalClient for AirbnbClient {
    #[instrument(skip(self), fields(lat = search.latitude, lng = search.longitude))]
    async fn search_available(
        &self,
        search: &RentalSearch,
    ) -> Result<Vec<AirbnbListing>, StaysError> {
        if search.check_out <= search.check_in {
            return Err(StaysError::InvalidRequest(format!(
                "check-out {} must be after check-in {}",
                search.check_out, search.check_in
            )));
        }

        let ids = self
            .listings_near(search.latitude, search.longitude, search.radius_m)
            .await?;

        let mut listings = Vec::new();
        for id in ids.iter().take(search.limit) {
            let Some(listing) = self.listing_details(id).await? else {
                warn!(%id, "Listing has no usable details, skipping");
                continue;
            };

            let calendar = self.availability(id).await?;
            let verdict = evaluate_availability(&calendar, search.check_in, search.check_out);
            if self.keeps(verdict) {
                listings.push(listing);
            } else {
                debug!(%id, ?verdict, "Listing dropped");
            }
        }

        info!(
            candidates = ids.len(),
            available = listings.len(),
            "Rental search finished"
        );
        Ok(listings)
    }
}

fn convert_listing(raw: ListingDetails) -> Option<AirbnbListing> {
    let listing_lat = raw.listing_lat.as_ref().and_then(RawScalar::as_f64)?;
    let listing_lng = raw.listing_lng.as_ref().and_then(RawScalar::as_f64)?;

    Some(AirbnbListing {
        listing_title: raw.listing_title.unwrap_or_default(),
        city: raw.city,
        star_rating: raw.star_rating.as_ref().and_then(RawScalar::as_f64),
        review_count: raw.review_count,
        max_guest_capacity: raw.max_guest_capacity,
        bedrooms: raw.bedrooms,
        property_type: raw.property_type,
        listing_lat,
        listing_lng,
        check_in_time: raw.check_in_time.map(RawScalar::into_text),
        check_out_time: raw.check_out_time.map(RawScalar::into_text),
        listing_status: raw.listing_status,
        airbnb_id: raw.airbnb_id.into_string(),
    })
}
