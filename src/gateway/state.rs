use chrono::{Local, NaiveDate};

use crate::catalog::{self, Service};

/// Gateway application state (shared, read-only)
#[derive(Clone)]
pub struct AppState {
    /// Service catalog (read-only, process lifetime)
    pub catalog: &'static [Service],
    /// Source of "today" for event date checks
    today: fn() -> NaiveDate,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            catalog: catalog::list_services(),
            today: local_today,
        }
    }

    /// Replace the clock, e.g. to pin "today" in tests
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Current calendar day, time of day truncated
    pub fn today(&self) -> NaiveDate {
        (self.today)()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Local process time truncated to midnight
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
