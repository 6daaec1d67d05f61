use std::collections::BTreeMap;
use std::future::{ready, Ready};

use actix_web::{dev::Payload, FromRequest, HttpRequest};
use url::form_urlencoded;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::ApiError;

/// Query parameters accepted by `GET /api/v1/hotels`.
///
/// Both selectors are optional on their own; [`HotelQuery::into_selector`]
/// enforces that at least one of them is present.
#[derive(Debug, Default, Clone, PartialEq, Validate)]
pub struct HotelQuery {
    #[validate(length(min = 1))]
    pub destination_id: Option<String>,
    #[validate(length(min = 1), custom(function = "validate_hotel_ids"))]
    pub hotel_ids: Option<Vec<String>>,
}

/// The single lookup a valid query resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Destination(String),
    HotelIds(Vec<String>),
}

fn validate_hotel_ids(hotel_ids: &[String]) -> Result<(), ValidationError> {
    if hotel_ids.iter().any(|id| id.is_empty()) {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

impl HotelQuery {
    /// Parses a raw URL query string. `hotel_ids` may repeat; a repeated
    /// `destination_id` keeps its last value. Keys given without a value are
    /// kept as empty strings so validation can reject them.
    pub fn from_query_string(query: &str) -> Self {
        let mut parsed = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "destination_id" => parsed.destination_id = Some(value.into_owned()),
                "hotel_ids" => parsed
                    .hotel_ids
                    .get_or_insert_with(Vec::new)
                    .push(value.into_owned()),
                _ => {}
            }
        }
        parsed
    }

    /// Validates the query and picks the lookup to run. A destination wins
    /// over a list of hotel ids when both are supplied.
    pub fn into_selector(self) -> Result<Selector, ApiError> {
        self.validate()
            .map_err(|errors| ApiError::Validation(describe(&errors)))?;

        match (self.destination_id, self.hotel_ids) {
            (Some(destination_id), _) => Ok(Selector::Destination(destination_id)),
            (None, Some(hotel_ids)) => Ok(Selector::HotelIds(hotel_ids)),
            (None, None) => Err(ApiError::MissingSelector),
        }
    }
}

fn describe(errors: &ValidationErrors) -> String {
    let by_field: BTreeMap<String, Vec<String>> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let codes = errors.iter().map(|e| e.code.to_string()).collect();
            (field.to_string(), codes)
        })
        .collect();

    by_field
        .iter()
        .flat_map(|(field, codes)| {
            codes.iter().map(move |code| {
                format!("Field validation for '{field}' failed on the '{code}' tag")
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}

impl FromRequest for HotelQuery {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(Self::from_query_string(req.query_string())))
    }
}
