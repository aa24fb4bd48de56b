//! HTTP handlers
//!
//! - [`index`]: welcome object at `/`
//! - [`services`]: catalog listing
//! - [`bookings`]: booking creation
//! - [`fallback`]: unmatched routes

pub mod bookings;
pub mod fallback;
pub mod index;
pub mod services;

pub use bookings::create_booking;
pub use fallback::not_found;
pub use index::{EndpointsInfo, IndexResponse, index};
pub use services::list_services;
