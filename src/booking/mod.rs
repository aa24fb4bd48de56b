//! Booking requests
//!
//! - [`validation`]: field rules for raw booking payloads
//! - [`service`]: validate-then-acknowledge flow
//! - [`types`]: request/acknowledgment shapes
//! - [`error`]: booking failure taxonomy

pub mod error;
pub mod service;
pub mod types;
pub mod validation;

pub use error::BookingError;
pub use service::{BOOKING_ID_RANGE, generate_booking_id, process_booking};
pub use types::{BookingAck, BookingRequest};
pub use validation::{ValidationErrors, validate_booking};
