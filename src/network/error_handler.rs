//! Centralized error classification for stats API calls

use crate::logging::LogLevel;
use crate::stats_api::error::StatsApiError;

/// Maps stats API failures to the level they are reported at
#[derive(Debug, Clone, Default)]
pub struct ErrorHandler;

impl ErrorHandler {
    pub fn new() -> Self {
        Self
    }

    /// Classify error and determine appropriate log level
    pub fn classify_error(&self, error: &StatsApiError) -> LogLevel {
        match error.status() {
            // Rate limiting - low priority
            Some(429) => LogLevel::Debug,

            // Server errors - temporary issues
            Some(500..=599) => LogLevel::Warn,

            // Session expired or not permitted - the dashboard cannot recover on its own
            Some(401 | 403) => LogLevel::Error,

            // Network issues, malformed bodies and other client errors
            _ => LogLevel::Warn,
        }
    }

    /// Short, single-line description suitable for the activity log
    pub fn describe(&self, error: &StatsApiError) -> String {
        match error {
            StatsApiError::Http { status, .. } => format!("HTTP error! status: {}", status),
            StatsApiError::Reqwest(e) if e.is_timeout() => "Request timed out".to_string(),
            StatsApiError::Reqwest(e) if e.is_connect() => "Connection refused".to_string(),
            StatsApiError::Reqwest(_) => "Network error".to_string(),
            StatsApiError::Decode(e) => format!("Malformed response: {}", e),
        }
    }
}
