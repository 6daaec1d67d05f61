use actix_web::{http::StatusCode, web, HttpResponse};

use crate::error::ErrorEnvelope;

pub mod hotels;

/// Registers the v1 API under `/api/v1`.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1").service(
            web::scope("/hotels")
                .route("", web::get().to(hotels::get_hotels))
                .route("/{hotel_id}", web::get().to(hotels::get_hotel_by_id)),
        ),
    );
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorEnvelope::new(
        StatusCode::NOT_FOUND,
        "Resource not found",
    ))
}
