use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::SqlitePool;

use super::{HotelStore, StoreError};
use crate::models::hotel::{Hotel, HotelAmenities, HotelImages, HotelLocation};

const HOTEL_COLUMNS: &str = "id, hotel_id, destination_id, name, location, description, \
     images, amenities, booking_conditions, created_at, updated_at";

// Binds a whole id list as a single JSON array parameter.
const HOTEL_ID_LIST: &str = "(SELECT value FROM json_each(?))";

#[derive(sqlx::FromRow)]
struct HotelRow {
    id: i64,
    hotel_id: String,
    destination_id: String,
    name: String,
    location: Option<Json<HotelLocation>>,
    description: Option<String>,
    images: Option<Json<HotelImages>>,
    amenities: Option<Json<HotelAmenities>>,
    booking_conditions: Json<Vec<String>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<HotelRow> for Hotel {
    fn from(row: HotelRow) -> Self {
        Hotel {
            id: row.id,
            hotel_id: row.hotel_id,
            destination_id: row.destination_id,
            name: row.name,
            location: row.location.map(|Json(location)| location),
            description: row.description,
            images: row.images.map(|Json(images)| images),
            amenities: row.amenities.map(|Json(amenities)| amenities),
            booking_conditions: row.booking_conditions.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

// No rows means no collection.
fn into_hotels(rows: Vec<HotelRow>) -> Option<Vec<Hotel>> {
    if rows.is_empty() {
        return None;
    }
    Some(rows.into_iter().map(Hotel::from).collect())
}

#[derive(Clone)]
pub struct SqliteHotelStore {
    pool: SqlitePool,
}

impl SqliteHotelStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HotelStore for SqliteHotelStore {
    async fn find_hotel_by_hotel_id(&self, hotel_id: String) -> Result<Hotel, StoreError> {
        let sql = format!("SELECT {HOTEL_COLUMNS} FROM hotels WHERE hotel_id = ?");
        sqlx::query_as::<_, HotelRow>(&sql)
            .bind(hotel_id)
            .fetch_optional(&self.pool)
            .await?
            .map(Hotel::from)
            .ok_or(StoreError::NotFound)
    }

    async fn find_hotels_by_destination_id(
        &self,
        destination_id: String,
    ) -> Result<Option<Vec<Hotel>>, StoreError> {
        let sql = format!(
            "SELECT {HOTEL_COLUMNS} FROM hotels WHERE destination_id = ? ORDER BY id"
        );
        let rows = sqlx::query_as::<_, HotelRow>(&sql)
            .bind(destination_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(into_hotels(rows))
    }

    async fn find_hotels_by_hotel_ids(
        &self,
        hotel_ids: Vec<String>,
    ) -> Result<Option<Vec<Hotel>>, StoreError> {
        if hotel_ids.is_empty() {
            return Ok(None);
        }

        let sql = format!(
            "SELECT {HOTEL_COLUMNS} FROM hotels WHERE hotel_id IN {HOTEL_ID_LIST} ORDER BY id"
        );
        let rows = sqlx::query_as::<_, HotelRow>(&sql)
            .bind(Json(hotel_ids))
            .fetch_all(&self.pool)
            .await?;
        Ok(into_hotels(rows))
    }

    async fn find_hotels_by_destination_and_hotel_ids(
        &self,
        destination_id: String,
        hotel_ids: Vec<String>,
    ) -> Result<Option<Vec<Hotel>>, StoreError> {
        if hotel_ids.is_empty() {
            return Ok(None);
        }

        let sql = format!(
            "SELECT {HOTEL_COLUMNS} FROM hotels \
             WHERE destination_id = ? AND hotel_id IN {HOTEL_ID_LIST} ORDER BY id"
        );
        let rows = sqlx::query_as::<_, HotelRow>(&sql)
            .bind(destination_id)
            .bind(Json(hotel_ids))
            .fetch_all(&self.pool)
            .await?;
        Ok(into_hotels(rows))
    }
}
