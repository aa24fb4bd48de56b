use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

pub const BOOKING_RECEIVED: &str = "Booking request received.";

/// Booking request body
///
/// Only built after the raw payload passed validation, so element types of
/// `service_ids` and the shape of `notes` are left open.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct BookingRequest {
    /// Catalog service IDs (not checked against the catalog)
    #[schema(value_type = Vec<u32>, example = json!([1, 3]))]
    pub service_ids: Vec<Value>,
    /// Event day, `YYYY-MM-DD`, today or later
    #[schema(example = "2030-06-15")]
    pub event_date: String,
    /// Free text, never validated
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub notes: Option<Value>,
}

impl BookingRequest {
    /// Comma-separated service IDs for log lines
    pub fn service_ids_display(&self) -> String {
        self.service_ids
            .iter()
            .map(Value::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Booking acknowledgment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BookingAck {
    #[schema(example = "Booking request received.")]
    pub message: String,
    /// Random, not persisted, may repeat across calls
    #[schema(example = 4821)]
    pub booking_id: u16,
}

impl BookingAck {
    pub fn received(booking_id: u16) -> Self {
        Self {
            message: BOOKING_RECEIVED.to_string(),
            booking_id,
        }
    }
}
