//! Catalog handler

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use serde_json::Value;

use super::super::state::AppState;
use super::super::types::ErrorResponse;
use super::super::types::response::COULD_NOT_LIST_SERVICES;

/// List all services
///
/// GET /api/v1/services
///
/// Serialization is done up front so a failure becomes the documented 500
/// body instead of axum's plain-text one.
#[utoipa::path(
    get,
    path = "/api/v1/services",
    responses(
        (status = 200, description = "All services in catalog order", body = Vec<crate::catalog::Service>),
        (status = 500, description = "Could not list services", body = ErrorResponse)
    ),
    tag = "Catalog"
)]
pub async fn list_services(
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<ErrorResponse>)> {
    let services = serde_json::to_value(state.catalog).map_err(|e| {
        tracing::error!("Failed to list services: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(COULD_NOT_LIST_SERVICES)),
        )
    })?;

    tracing::info!("Services listed: {}", state.catalog.len());
    Ok((StatusCode::OK, Json(services)))
}
