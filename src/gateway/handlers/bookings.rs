//! Booking handler

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::booking::{self, BookingAck, BookingError, BookingRequest};

use super::super::state::AppState;
use super::super::types::{BookingPayload, ErrorResponse};

/// Submit a booking request
///
/// POST /api/v1/bookings
///
/// Nothing is stored; the returned `booking_id` is random.
#[utoipa::path(
    post,
    path = "/api/v1/bookings",
    request_body = BookingRequest,
    responses(
        (status = 201, description = "Booking request received", body = BookingAck),
        (status = 400, description = "Missing payload or invalid field", body = ErrorResponse)
    ),
    tag = "Bookings"
)]
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    BookingPayload(payload): BookingPayload,
) -> Result<(StatusCode, Json<BookingAck>), BookingError> {
    let payload = payload.ok_or(BookingError::MissingPayload)?;
    let ack = booking::process_booking(&payload, state.today(), &mut rand::thread_rng())?;
    Ok((StatusCode::CREATED, Json(ack)))
}
