use crate::db::StoreError;
use crate::error::ApiError;
use crate::models::query::{HotelQuery, Selector};
use crate::services::HotelService;
use actix_web::{web, HttpResponse};

pub async fn get_hotels(
    service: web::Data<dyn HotelService>,
    query: HotelQuery,
) -> Result<HttpResponse, ApiError> {
    log::info!("GET /api/v1/hotels - validating query params");
    let selector = query.into_selector().map_err(|err| {
        log::error!("GET /api/v1/hotels - rejected query: {err}");
        err
    })?;

    let hotels = match selector {
        Selector::Destination(destination_id) => {
            log::info!("GET /api/v1/hotels - finding hotels by destination_id={destination_id}");
            service
                .find_by_destination_id(destination_id.clone())
                .await
                .map_err(|err| {
                    log::error!(
                        "could not fetch hotels for destination_id={destination_id}: {err}"
                    );
                    ApiError::HotelsLookup
                })?
        }
        Selector::HotelIds(hotel_ids) => {
            log::info!("GET /api/v1/hotels - finding hotels by hotel_ids={hotel_ids:?}");
            service
                .find_by_hotel_ids(hotel_ids.clone())
                .await
                .map_err(|err| {
                    log::error!("could not fetch hotels for hotel_ids={hotel_ids:?}: {err}");
                    ApiError::HotelsLookup
                })?
        }
    };

    Ok(HttpResponse::Ok().json(hotels))
}

pub async fn get_hotel_by_id(
    service: web::Data<dyn HotelService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let hotel_id = path.into_inner();

    match service.find_by_hotel_id(hotel_id.clone()).await {
        Ok(hotel) => Ok(HttpResponse::Ok().json(hotel)),
        Err(StoreError::NotFound) => Err(ApiError::HotelNotFound),
        Err(err) => {
            log::error!("could not fetch hotel_id={hotel_id}: {err}");
            Err(ApiError::HotelLookup)
        }
    }
}
