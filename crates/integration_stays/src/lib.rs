#![forbid(unsafe_code)]
//! Accommodation search for the road trip planner
//!
//! Provides short-term rental search via the Airbnb listings API and hotel
//! search via the Priceline API, both hosted on
//! [RapidAPI](https://rapidapi.com).
//!
//! # Architecture
//!
//! [`RapidApiClient`] owns the HTTP client and the [`CredentialRotation`]
//! policy shared by both providers. [`AirbnbClient`] implements
//! [`RentalClient`] and filters listings by their availability calendar;
//! [`PricelineClient`] implements [`HotelClient`] and resolves the nearest
//! city before searching.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_stays::{AirbnbClient, AirbnbConfig, CredentialRotation, RentalClient};
//!
//! let keys = CredentialRotation::new("primary-key", Some("secondary-key".into()))?;
//! let client = AirbnbClient::new(&AirbnbConfig::default(), keys)?;
//! let listings = client.search_available(&query).await?;
//! ```

mod airbnb;
mod config;
mod credentials;
mod error;
mod models;
mod priceline;
mod rapidapi;

pub use airbnb::{AirbnbClient, Availability, RentalClient, RentalSearch, evaluate_availability};
pub use config::{AirbnbConfig, PricelineConfig, UnknownAvailability};
pub use credentials::CredentialRotation;
pub use error::StaysError;
pub use models::{AirbnbListing, AvailabilityDay, PricelineHotel};
pub use priceline::{HotelClient, HotelSearch, PricelineClient};
pub use rapidapi::RapidApiClient;
