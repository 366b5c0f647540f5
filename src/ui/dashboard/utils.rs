//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Worker;
use ratatui::prelude::Color;

const SPINNER_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

/// Get a ratatui color for a worker based on its type
pub fn get_worker_color(worker: &Worker) -> Color {
    match worker {
        Worker::Scheduler => Color::Cyan,
        Worker::Fetcher => Color::Yellow,
        Worker::Dashboard => Color::Green,
    }
}

/// Spinner glyph for the given animation tick
pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    timestamp.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_timestamp() {
        assert_eq!(format_compact_timestamp("2025-03-14 09:26:53"), "03-14 09:26");
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(spinner_frame(0), spinner_frame(SPINNER_FRAMES.len()));
    }
}
