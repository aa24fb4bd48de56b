//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:5000/docs`
//! - OpenAPI JSON: `http://localhost:5000/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::booking::{BookingAck, BookingRequest};
use crate::catalog::Service;
use crate::gateway::handlers::{EndpointsInfo, IndexResponse};
use crate::gateway::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Orgzaar API",
        version = "1.0.0",
        description = "Event-services catalog and booking requests.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:5000", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::index::index,
        crate::gateway::handlers::services::list_services,
        crate::gateway::handlers::bookings::create_booking,
    ),
    components(
        schemas(
            Service,
            BookingRequest,
            BookingAck,
            ErrorResponse,
            IndexResponse,
            EndpointsInfo,
        )
    ),
    tags(
        (name = "Catalog", description = "Bookable services"),
        (name = "Bookings", description = "Booking requests (not persisted)"),
        (name = "System", description = "API info")
    )
)]
pub struct ApiDoc;
