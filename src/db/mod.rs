use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;

use crate::config::Config;
use crate::models::hotel::Hotel;

mod hotels;

pub use hotels::SqliteHotelStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no rows in result set")]
    NotFound,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Read queries over the `hotels` table.
///
/// Collection queries return `Ok(None)` when the store has nothing to hand
/// back; callers decide how to present that.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HotelStore: Send + Sync {
    async fn find_hotel_by_hotel_id(&self, hotel_id: String) -> Result<Hotel, StoreError>;

    async fn find_hotels_by_destination_id(
        &self,
        destination_id: String,
    ) -> Result<Option<Vec<Hotel>>, StoreError>;

    async fn find_hotels_by_hotel_ids(
        &self,
        hotel_ids: Vec<String>,
    ) -> Result<Option<Vec<Hotel>>, StoreError>;

    async fn find_hotels_by_destination_and_hotel_ids(
        &self,
        destination_id: String,
        hotel_ids: Vec<String>,
    ) -> Result<Option<Vec<Hotel>>, StoreError>;
}

pub async fn get_db_pool(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.db_uri)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_with(options)
        .await
}
