//! Orgzaar API - event-services catalog and booking requests
//!
//! # Modules
//!
//! - [`catalog`] - Fixed service catalog
//! - [`booking`] - Booking validation and acknowledgment
//! - [`gateway`] - Axum HTTP gateway (routes, handlers, OpenAPI)
//! - [`config`] - YAML application config
//! - [`logging`] - tracing subscriber setup

pub mod booking;
pub mod catalog;
pub mod config;
pub mod gateway;
pub mod logging;

// Convenient re-exports at crate root
pub use booking::{BookingAck, BookingError, BookingRequest, ValidationErrors};
pub use catalog::{SERVICES, Service, list_services};
pub use config::{AppConfig, ConfigError};
pub use gateway::{build_router, run_server, state::AppState};
