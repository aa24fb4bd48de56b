//! Lenient JSON body extractor for booking creation
//!
//! `axum::Json` rejects a missing content type, an empty body and broken
//! JSON with its own responses. Booking creation reports all of those as
//! "no payload", so the rejection is swallowed here and the handler decides.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde_json::Value;
use std::convert::Infallible;

/// Request body as untyped JSON, `None` when absent or unreadable
#[derive(Debug)]
pub struct BookingPayload(pub Option<Value>);

impl<S> FromRequest<S> for BookingPayload
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Value>::from_request(req, state).await {
            Ok(Json(Value::Null)) => Ok(BookingPayload(None)),
            Ok(Json(value)) => Ok(BookingPayload(Some(value))),
            Err(rejection) => {
                tracing::debug!("Booking body rejected: {}", rejection);
                Ok(BookingPayload(None))
            }
        }
    }
}
