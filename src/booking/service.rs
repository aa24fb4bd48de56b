//! Booking flow: validate, then acknowledge with a random ID
//!
//! No booking is stored. Two identical requests get unrelated IDs, and an ID
//! may repeat across requests.

use std::ops::RangeInclusive;

use chrono::NaiveDate;
use rand::Rng;
use serde_json::Value;

use super::error::BookingError;
use super::types::{BookingAck, BookingRequest};
use super::validation::validate_booking;

pub const BOOKING_ID_RANGE: RangeInclusive<u16> = 1000..=9999;

/// Draw a booking ID uniformly from [`BOOKING_ID_RANGE`]
pub fn generate_booking_id<R: Rng + ?Sized>(rng: &mut R) -> u16 {
    rng.gen_range(BOOKING_ID_RANGE)
}

/// Validate a raw payload and acknowledge it.
///
/// Anything the validator cannot inspect, and every failure past
/// validation, collapses into [`BookingError::Malformed`].
pub fn process_booking<R: Rng + ?Sized>(
    payload: &Value,
    today: NaiveDate,
    rng: &mut R,
) -> Result<BookingAck, BookingError> {
    let errors = validate_booking(payload, today)?;
    if !errors.is_empty() {
        return Err(BookingError::Validation(errors));
    }

    let request: BookingRequest = serde_json::from_value(payload.clone())
        .map_err(|e| BookingError::Malformed(e.to_string()))?;

    let booking_id = generate_booking_id(rng);
    tracing::info!(
        booking_id,
        event_date = %request.event_date,
        service_ids = %request.service_ids_display(),
        "Booking created"
    );

    Ok(BookingAck::received(booking_id))
}
