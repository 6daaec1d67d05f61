use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body returned for every failed request.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorEnvelope {
    pub code: u16,
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            message: message.into(),
        }
    }
}

/// Failures surfaced to HTTP callers. Messages are safe to return as is;
/// store errors are logged by the handler before being mapped here.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("Either destination or list of hotel ids need to be provided")]
    MissingSelector,
    #[error("Could not fetch list of hotels. Please retry again")]
    HotelsLookup,
    #[error("Hotel not found")]
    HotelNotFound,
    #[error("Could not fetch hotel. Please retry again")]
    HotelLookup,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MissingSelector => StatusCode::BAD_REQUEST,
            ApiError::HotelNotFound => StatusCode::NOT_FOUND,
            ApiError::HotelsLookup | ApiError::HotelLookup => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorEnvelope::new(status, self.to_string()))
    }
}

/// Failures that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("could not connect to database: {0}")]
    Database(#[from] sqlx::Error),
    #[error("could not run migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}
