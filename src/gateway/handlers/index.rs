//! Index handler

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

pub const API_VERSION: &str = "1.0";

/// Welcome object
#[derive(Debug, Serialize, ToSchema)]
pub struct IndexResponse {
    #[schema(value_type = String, example = "Welcome to the Orgzaar API!")]
    pub message: &'static str,
    #[schema(value_type = String, example = "1.0")]
    pub version: &'static str,
    pub endpoints: EndpointsInfo,
}

/// Public endpoints, `path (METHOD)`
#[derive(Debug, Serialize, ToSchema)]
pub struct EndpointsInfo {
    #[schema(value_type = String, example = "/api/v1/services (GET)")]
    pub services: &'static str,
    #[schema(value_type = String, example = "/api/v1/bookings (POST)")]
    pub bookings: &'static str,
}

/// API welcome
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome object", body = IndexResponse)
    ),
    tag = "System"
)]
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Welcome to the Orgzaar API!",
        version: API_VERSION,
        endpoints: EndpointsInfo {
            services: "/api/v1/services (GET)",
            bookings: "/api/v1/bookings (POST)",
        },
    })
}
