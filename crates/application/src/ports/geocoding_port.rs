//! Geocoding port
//!
//! Resolves a free-form address to a coordinate.

use async_trait::async_trait;
use domain::Coordinate;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for forward geocoding
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve an address to the provider's best match
    ///
    /// Returns `ApplicationError::NotFound` when the provider has no result.
    async fn geocode(&self, address: &str) -> Result<Coordinate, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn GeocodingPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn GeocodingPort>();
    }

    #[tokio::test]
    async fn mock_returns_configured_coordinate() {
        let mut mock = MockGeocodingPort::new();
        mock.expect_geocode()
            .withf(|address| address == "Bellingham, WA")
            .returning(|_| Ok(Coordinate::new_unchecked(48.75, -122.48)));

        let c = mock.geocode("Bellingham, WA").await.unwrap();
        assert!((c.latitude() - 48.75).abs() < f64::EPSILON);
    }
}
