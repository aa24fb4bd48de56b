//! API error body and response mapping
//!
//! Every non-2xx response carries `{"error": ...}`, plus a single-entry
//! `details` map for rejected bookings.

use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::booking::BookingError;

pub const INVALID_DATA: &str = "Invalid data.";
pub const NO_JSON_PAYLOAD: &str = "No JSON payload sent.";
pub const COULD_NOT_LIST_SERVICES: &str = "Could not list services.";
pub const ENDPOINT_NOT_FOUND: &str = "Endpoint not found.";
pub const SERVER_ERROR: &str = "Server error occurred.";

/// Detail key used when the whole request is rejected
pub const REQUEST_FIELD: &str = "request";

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Invalid data.")]
    pub error: String,
    /// Offending field -> message (one entry at most)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = json!({"event_date": "event_date is required."}))]
    pub details: Option<BTreeMap<String, String>>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    /// `400 Invalid data.` body naming one field
    pub fn invalid_data(field: &str, message: &str) -> Self {
        Self {
            error: INVALID_DATA.to_string(),
            details: Some(BTreeMap::from([(field.to_string(), message.to_string())])),
        }
    }

    pub fn no_payload() -> Self {
        Self::invalid_data(REQUEST_FIELD, NO_JSON_PAYLOAD)
    }
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let body = match &self {
            BookingError::MissingPayload => {
                tracing::warn!("Booking attempt with empty payload");
                ErrorResponse::no_payload()
            }
            BookingError::Validation(errors) => {
                tracing::warn!("Booking validation failed: {}", errors);
                match errors.first() {
                    Some((field, message)) => ErrorResponse::invalid_data(field, message),
                    None => ErrorResponse::no_payload(),
                }
            }
            BookingError::Malformed(detail) => {
                tracing::error!("Booking creation failed: {}", detail);
                ErrorResponse::no_payload()
            }
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
