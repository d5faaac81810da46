//! Session-scoped diagnostics for swallowed check failures
//!
//! A failed check never surfaces as a user-facing error; the failure is
//! recorded here and can be inspected through the diagnostics overlay.

use chrono::{DateTime, Local};

/// One recorded failure
#[derive(Debug, Clone)]
pub struct DiagnosticEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
}

impl DiagnosticEntry {
    pub fn new(message: String) -> Self {
        Self {
            timestamp: Local::now(),
            message,
        }
    }

    pub fn formatted_time(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}
