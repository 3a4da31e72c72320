//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Worker;
use crate::user::Role;
use ratatui::prelude::Color;

/// Get a ratatui color for a worker based on its type
pub fn get_worker_color(worker: &Worker) -> Color {
    match worker {
        Worker::Fetcher => Color::Cyan,
        Worker::Mutator => Color::Yellow,
    }
}

/// Get a ratatui color for a role badge
pub fn get_role_color(role: Role) -> Color {
    match role {
        Role::User => Color::Gray,
        Role::Admin => Color::LightMagenta,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // Extract MM-DD from date and HH:MM from time
            if let Some(month_day) = date_part.get(5..10) {
                // Get MM-DD
                if let Some(hour_min) = time_part.get(0..5) {
                    // Get HH:MM
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Clean HTTP error messages for the activity log
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("Reqwest error") && msg.contains("timed out") {
        return "Request timed out".to_string();
    }
    if msg.contains("Reqwest error") {
        return "Network error".to_string();
    }
    // Return original message if no HTTP error pattern detected
    msg.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_timestamp_drops_year_and_seconds() {
        assert_eq!(
            format_compact_timestamp("2026-08-24 13:37:59"),
            "08-24 13:37"
        );
    }

    #[test]
    fn compact_timestamp_falls_back_on_unexpected_input() {
        assert_eq!(format_compact_timestamp("boom"), "boom");
    }

    #[test]
    fn reqwest_errors_are_cleaned() {
        assert_eq!(
            clean_http_error_message("Reqwest error: error sending request: connection refused"),
            "Network error"
        );
        assert_eq!(
            clean_http_error_message("HTTP error with status 404: not found"),
            "HTTP error with status 404: not found"
        );
    }
}
