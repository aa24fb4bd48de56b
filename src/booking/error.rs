use thiserror::Error;

use super::validation::ValidationErrors;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("No JSON payload sent")]
    MissingPayload,

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// Anything unexpected while handling a present payload.
    /// Reported to the caller exactly like `MissingPayload`.
    #[error("Malformed booking payload: {0}")]
    Malformed(String),
}
