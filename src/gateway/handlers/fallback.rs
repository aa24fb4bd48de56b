use axum::{Json, http::StatusCode};

use super::super::types::ErrorResponse;
use super::super::types::response::ENDPOINT_NOT_FOUND;

/// Unmatched routes
pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(ENDPOINT_NOT_FOUND)),
    )
}
