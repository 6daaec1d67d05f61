use std::sync::Arc;

use async_trait::async_trait;

use crate::db::{HotelStore, StoreError};
use crate::models::hotel::Hotel;

/// Hotel lookups offered to the HTTP layer.
///
/// Collection lookups never report "nothing found": an empty result is an
/// empty `Vec`. The single-hotel lookup does report it, as
/// [`StoreError::NotFound`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HotelService: Send + Sync {
    async fn find_by_hotel_id(&self, hotel_id: String) -> Result<Hotel, StoreError>;

    async fn find_by_destination_id(&self, destination_id: String)
        -> Result<Vec<Hotel>, StoreError>;

    async fn find_by_hotel_ids(&self, hotel_ids: Vec<String>) -> Result<Vec<Hotel>, StoreError>;

    async fn find_by_destination_and_hotel_ids(
        &self,
        destination_id: String,
        hotel_ids: Vec<String>,
    ) -> Result<Vec<Hotel>, StoreError>;
}

pub struct HotelLookupService {
    store: Arc<dyn HotelStore>,
}

impl HotelLookupService {
    pub fn new(store: Arc<dyn HotelStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl HotelService for HotelLookupService {
    async fn find_by_hotel_id(&self, hotel_id: String) -> Result<Hotel, StoreError> {
        self.store.find_hotel_by_hotel_id(hotel_id).await
    }

    async fn find_by_destination_id(
        &self,
        destination_id: String,
    ) -> Result<Vec<Hotel>, StoreError> {
        let hotels = self
            .store
            .find_hotels_by_destination_id(destination_id)
            .await?;
        Ok(hotels.unwrap_or_default())
    }

    async fn find_by_hotel_ids(&self, hotel_ids: Vec<String>) -> Result<Vec<Hotel>, StoreError> {
        let hotels = self.store.find_hotels_by_hotel_ids(hotel_ids).await?;
        Ok(hotels.unwrap_or_default())
    }

    async fn find_by_destination_and_hotel_ids(
        &self,
        destination_id: String,
        hotel_ids: Vec<String>,
    ) -> Result<Vec<Hotel>, StoreError> {
        let hotels = self
            .store
            .find_hotels_by_destination_and_hotel_ids(destination_id, hotel_ids)
            .await?;
        Ok(hotels.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MockHotelStore;
    use crate::models::hotel::HotelLocation;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn hotel(id: i64, hotel_id: &str, destination_id: &str) -> Hotel {
        Hotel {
            id,
            hotel_id: hotel_id.to_string(),
            destination_id: destination_id.to_string(),
            name: format!("Test Hotel {id}"),
            location: Some(HotelLocation {
                latitude: Some(10.762622),
                longitude: Some(106.660172),
                address: Some("123 Test St, Test City".to_string()),
                city: Some("Test City".to_string()),
                country: Some("Test Country".to_string()),
            }),
            description: None,
            images: None,
            amenities: None,
            booking_conditions: vec!["No smoking".to_string()],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn service(store: MockHotelStore) -> HotelLookupService {
        HotelLookupService::new(Arc::new(store))
    }

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[tokio::test]
    async fn find_by_hotel_id_returns_hotel() {
        let mut store = MockHotelStore::new();
        store
            .expect_find_hotel_by_hotel_id()
            .with(eq("hotel_123".to_string()))
            .times(1)
            .returning(|_| Ok(hotel(1, "hotel_123", "dest_456")));

        let found = service(store)
            .find_by_hotel_id("hotel_123".to_string())
            .await
            .unwrap();
        assert_eq!(found.hotel_id, "hotel_123");
    }

    #[tokio::test]
    async fn find_by_hotel_id_propagates_not_found() {
        let mut store = MockHotelStore::new();
        store
            .expect_find_hotel_by_hotel_id()
            .returning(|_| Err(StoreError::NotFound));

        let err = service(store)
            .find_by_hotel_id("missing".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }

    #[tokio::test]
    async fn find_by_destination_id_returns_hotels() {
        let mut store = MockHotelStore::new();
        store
            .expect_find_hotels_by_destination_id()
            .with(eq("dest_456".to_string()))
            .times(1)
            .returning(|_| {
                Ok(Some(vec![
                    hotel(1, "hotel_123", "dest_456"),
                    hotel(2, "hotel_124", "dest_456"),
                ]))
            });

        let hotels = service(store)
            .find_by_destination_id("dest_456".to_string())
            .await
            .unwrap();
        assert_eq!(hotels.len(), 2);
        assert!(hotels.iter().all(|h| h.destination_id == "dest_456"));
    }

    #[tokio::test]
    async fn find_by_destination_id_turns_no_rows_into_empty_vec() {
        let mut store = MockHotelStore::new();
        store
            .expect_find_hotels_by_destination_id()
            .returning(|_| Ok(None));

        let hotels = service(store)
            .find_by_destination_id("dest_no_hotels".to_string())
            .await
            .unwrap();
        assert!(hotels.is_empty());
    }

    #[tokio::test]
    async fn find_by_destination_id_propagates_store_error() {
        let mut store = MockHotelStore::new();
        store
            .expect_find_hotels_by_destination_id()
            .returning(|_| Err(StoreError::Database(sqlx::Error::PoolClosed)));

        let err = service(store)
            .find_by_destination_id("dest_error".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Database(sqlx::Error::PoolClosed)));
    }

    #[tokio::test]
    async fn find_by_hotel_ids_returns_hotels() {
        let mut store = MockHotelStore::new();
        store
            .expect_find_hotels_by_hotel_ids()
            .with(eq(ids(&["hotel_123", "hotel_124"])))
            .times(1)
            .returning(|_| {
                Ok(Some(vec![
                    hotel(1, "hotel_123", "dest_456"),
                    hotel(2, "hotel_124", "dest_456"),
                ]))
            });

        let hotels = service(store)
            .find_by_hotel_ids(ids(&["hotel_123", "hotel_124"]))
            .await
            .unwrap();
        let codes: Vec<_> = hotels.iter().map(|h| h.hotel_id.as_str()).collect();
        assert_eq!(codes, ["hotel_123", "hotel_124"]);
    }

    #[tokio::test]
    async fn find_by_hotel_ids_turns_no_rows_into_empty_vec() {
        let mut store = MockHotelStore::new();
        store
            .expect_find_hotels_by_hotel_ids()
            .returning(|_| Ok(None));

        let hotels = service(store)
            .find_by_hotel_ids(ids(&["non_existent_hotel"]))
            .await
            .unwrap();
        assert!(hotels.is_empty());
    }

    #[tokio::test]
    async fn find_by_hotel_ids_propagates_store_error() {
        let mut store = MockHotelStore::new();
        store
            .expect_find_hotels_by_hotel_ids()
            .returning(|_| Err(StoreError::Database(sqlx::Error::PoolTimedOut)));

        let err = service(store)
            .find_by_hotel_ids(ids(&["hotel_error"]))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Database(sqlx::Error::PoolTimedOut)));
    }

    #[tokio::test]
    async fn find_by_destination_and_hotel_ids_passes_both_selectors() {
        let mut store = MockHotelStore::new();
        store
            .expect_find_hotels_by_destination_and_hotel_ids()
            .with(eq("dest_456".to_string()), eq(ids(&["hotel_123"])))
            .times(1)
            .returning(|_, _| Ok(Some(vec![hotel(1, "hotel_123", "dest_456")])));

        let hotels = service(store)
            .find_by_destination_and_hotel_ids("dest_456".to_string(), ids(&["hotel_123"]))
            .await
            .unwrap();
        assert_eq!(hotels.len(), 1);
    }

    #[tokio::test]
    async fn find_by_destination_and_hotel_ids_turns_no_rows_into_empty_vec() {
        let mut store = MockHotelStore::new();
        store
            .expect_find_hotels_by_destination_and_hotel_ids()
            .returning(|_, _| Ok(None));

        let hotels = service(store)
            .find_by_destination_and_hotel_ids("dest_456".to_string(), ids(&["hotel_999"]))
            .await
            .unwrap();
        assert!(hotels.is_empty());
    }
}
