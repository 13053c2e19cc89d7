//! Accommodation search ports
//!
//! One port per provider family. Each returns listings in the provider's own
//! vocabulary; normalization happens in the application layer.

use async_trait::async_trait;
use chrono::NaiveDate;
use domain::{Coordinate, HotelListing, RentalListing};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Search parameters for short-term rentals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalQuery {
    /// Search center
    pub center: Coordinate,
    /// First night
    pub check_in: NaiveDate,
    /// Departure day
    pub check_out: NaiveDate,
    /// Search radius in meters
    pub radius_m: u32,
    /// Maximum number of listings to return
    pub limit: usize,
}

/// Search parameters for hotels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelQuery {
    /// Search center
    pub center: Coordinate,
    /// First night
    pub check_in: NaiveDate,
    /// Departure day
    pub check_out: NaiveDate,
    /// Results per page
    pub limit: u32,
    /// Result page, starting at 1
    pub page: u32,
}

/// Port for short-term rental search
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RentalSearchPort: Send + Sync {
    /// Find rentals near the query center that are available for the stay
    async fn search_rentals(
        &self,
        query: &RentalQuery,
    ) -> Result<Vec<RentalListing>, ApplicationError>;
}

/// Port for hotel search
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HotelSearchPort: Send + Sync {
    /// Find hotels in the city nearest to the query center
    async fn search_hotels(&self, query: &HotelQuery)
    -> Result<Vec<HotelListing>, ApplicationError>;
}
