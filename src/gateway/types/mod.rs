//! Gateway types module
//!
//! - [`payload`]: lenient booking body extractor
//! - [`response`]: error body, messages and `BookingError` mapping

pub mod payload;
pub mod response;

pub use payload::BookingPayload;
pub use response::ErrorResponse;
