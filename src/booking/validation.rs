//! Booking payload validation
//!
//! Rules run field by field in a fixed order. Each field stops at its first
//! failing rule, but every field is checked, so the error list keeps the
//! check order: `service_ids` first, then `event_date`. Structures the
//! rules cannot inspect abort validation as a whole.

use std::fmt;

use chrono::NaiveDate;
use serde_json::Value;

use super::error::BookingError;

pub const SERVICE_IDS: &str = "service_ids";
pub const EVENT_DATE: &str = "event_date";

pub const SERVICE_IDS_REQUIRED: &str = "service_ids is required.";
pub const SERVICE_IDS_NOT_A_LIST: &str = "service_ids must be a list.";
pub const EVENT_DATE_REQUIRED: &str = "event_date is required.";
pub const EVENT_DATE_INVALID: &str = "Date format must be YYYY-MM-DD and must be a future date.";

const EVENT_DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// ValidationErrors
// ============================================================================

/// Field name -> message, in check order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: Vec<(&'static str, &'static str)>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: &'static str) {
        self.entries.push((field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The entry surfaced to callers
    pub fn first(&self) -> Option<(&'static str, &'static str)> {
        self.entries.first().copied()
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| *m)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
        }
        Ok(())
    }
}

// ============================================================================
// Rules
// ============================================================================

/// Validate a raw booking payload against `today`.
///
/// An empty result means the payload is acceptable. `notes` is ignored.
/// Arrays and strings are accepted as payloads and simply lack both fields.
/// A payload or `event_date` the rules cannot inspect at all (a number,
/// a bool, a non-string date) aborts the whole check with
/// [`BookingError::Malformed`], discarding errors found so far.
pub fn validate_booking(
    payload: &Value,
    today: NaiveDate,
) -> Result<ValidationErrors, BookingError> {
    let mut errors = ValidationErrors::new();

    match lookup(payload, SERVICE_IDS)? {
        None => errors.add(SERVICE_IDS, SERVICE_IDS_REQUIRED),
        Some(value) if !value.is_array() => errors.add(SERVICE_IDS, SERVICE_IDS_NOT_A_LIST),
        Some(_) => {}
    }

    match lookup(payload, EVENT_DATE)? {
        None => errors.add(EVENT_DATE, EVENT_DATE_REQUIRED),
        Some(value) => {
            let raw = value.as_str().ok_or_else(|| {
                BookingError::Malformed(format!(
                    "event_date must be a string, got {}",
                    json_kind(value)
                ))
            })?;
            let on_or_after_today = parse_event_date(raw).is_some_and(|date| date >= today);
            if !on_or_after_today {
                errors.add(EVENT_DATE, EVENT_DATE_INVALID);
            }
        }
    }

    Ok(errors)
}

/// Field lookup over an untyped payload.
///
/// Arrays match a key by an equal string element, strings by substring.
/// A match in either means the payload names the field but cannot be
/// indexed by it.
fn lookup<'a>(payload: &'a Value, key: &str) -> Result<Option<&'a Value>, BookingError> {
    let named = match payload {
        Value::Object(fields) => return Ok(fields.get(key)),
        Value::Array(items) => items.iter().any(|item| item.as_str() == Some(key)),
        Value::String(s) => s.contains(key),
        other => {
            return Err(BookingError::Malformed(format!(
                "cannot look up {} in a {} payload",
                key,
                json_kind(other)
            )));
        }
    };
    if named {
        Err(BookingError::Malformed(format!(
            "{} payload names {} but has no fields",
            json_kind(payload),
            key
        )))
    } else {
        Ok(None)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parse a strict `YYYY-MM-DD` date.
///
/// chrono alone accepts unpadded months/days and signed years, so the shape
/// is checked before parsing.
pub fn parse_event_date(raw: &str) -> Option<NaiveDate> {
    let bytes = raw.as_bytes();
    if bytes.len() != 10 {
        return None;
    }
    let shape_ok = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !shape_ok {
        return None;
    }
    NaiveDate::parse_from_str(raw, EVENT_DATE_FORMAT).ok()
}
