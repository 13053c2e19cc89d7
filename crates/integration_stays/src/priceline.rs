//! Priceline hotel client
//!
//! Hotel search is keyed on a city, so every search first resolves the city
//! nearest to the requested point and then lists hotels in it.

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{debug, info, instrument};

use crate::{
    config::PricelineConfig,
    credentials::CredentialRotation,
    error::StaysError,
    models::{
        PricelineHotel,
        raw::{Envelope, Hotel, HotelSearchData, NearbyData, RawScalar},
    },
    rapidapi::RapidApiClient,
};

/// Parameters of a hotel search
#[derive(Debug, Clone, PartialEq)]
pub struct HotelSearch {
    pub latitude: f64,
    pub longitude: f64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub limit: u32,
    pub page: u32,
}

/// Trait for hotel search clients
#[async_trait]
pub trait HotelClient: Send + Sync {
    /// Find hotels in the city nearest to a point
    async fn search_hotels(&self, search: &HotelSearch) -> Result<Vec<PricelineHotel>, StaysError>;
}

/// Priceline API client
#[derive(Debug)]
pub struct PricelineClient {
    api: RapidApiClient,
}

impl PricelineClient {
    /// Create a new Priceline client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(
        config: &PricelineConfig,
        credentials: CredentialRotation,
    ) -> Result<Self, StaysError> {
        config.validate().map_err(StaysError::ConfigurationError)?;
        let api = RapidApiClient::new(
            &config.base_url,
            &config.host,
            config.timeout_secs,
            credentials,
        )?;
        Ok(Self { api })
    }

    /// Priceline city id nearest to a point
    #[instrument(skip(self))]
    pub async fn nearest_city(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<String>, StaysError> {
        let params = [
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
        ];
        let response: Envelope<NearbyData> = self.api.get_json("/hotels/nearby", &params).await?;

        Ok(response
            .data
            .and_then(|d| d.exact_match)
            .and_then(|m| m.matched_city)
            .and_then(|c| c.city_id)
            .map(|id| id.into_string()))
    }
}

#[async_trait]
impl HotelClient for PricelineClient {
    #[instrument(skip(self), fields(lat = search.latitude, lng = search.longitude))]
    async fn search_hotels(&self, search: &HotelSearch) -> Result<Vec<PricelineHotel>, StaysError> {
        if search.check_out <= search.check_in {
            return Err(StaysError::InvalidRequest(format!(
                "check-out {} must be after check-in {}",
                search.check_out, search.check_in
            )));
        }

        let Some(city_id) = self.nearest_city(search.latitude, search.longitude).await? else {
            info!("No Priceline city near the requested point");
            return Ok(Vec::new());
        };
        debug!(%city_id, "Resolved Priceline city");

        let params = [
            ("locationId", city_id),
            ("checkIn", search.check_in.format("%Y-%m-%d").to_string()),
            ("checkOut", search.check_out.format("%Y-%m-%d").to_string()),
            ("limit", search.limit.to_string()),
            ("page", search.page.to_string()),
        ];
        let response: Envelope<HotelSearchData> =
            self.api.get_json("/hotels/search", &params).await?;

        let hotels: Vec<PricelineHotel> = response
            .data
            .and_then(|d| d.hotels)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|h| convert_hotel(h, search.check_in, search.check_out))
            .collect();

        info!(count = hotels.len(), "Hotel search finished");
        Ok(hotels)
    }
}

/// Hotels without coordinates cannot be routed to and are dropped
fn convert_hotel(raw: Hotel, check_in: NaiveDate, check_out: NaiveDate) -> Option<PricelineHotel> {
    let location = raw.location?;
    let latitude = location.latitude.as_ref().and_then(RawScalar::as_f64)?;
    let longitude = location.longitude.as_ref().and_then(RawScalar::as_f64)?;
    let address = location.address;
    let rates = raw.rates_summary;

    Some(PricelineHotel {
        hotel_id: raw.hotel_id.into_string(),
        name: raw.name.unwrap_or_default(),
        city_name: address.as_ref().and_then(|a| a.city_name.clone()),
        province_code: address.as_ref().and_then(|a| a.province_code.clone()),
        address: address.and_then(|a| a.address_line1),
        latitude,
        longitude,
        overall_guest_rating: raw.overall_guest_rating.as_ref().and_then(RawScalar::as_f64),
        nightly_rate: rates
            .as_ref()
            .and_then(|r| r.nightly_rate_including_taxes_and_fees.as_ref())
            .and_then(RawScalar::as_f64),
        grand_total: rates
            .as_ref()
            .and_then(|r| r.grand_total.as_ref())
            .and_then(RawScalar::as_f64),
        check_in,
        check_out,
    })
}
