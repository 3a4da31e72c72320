//! Event System
//!
//! Types carried over the channel between the API worker and the UI, and the
//! activity-log entry type derived from them.

use crate::logging::{LogLevel, should_log_with_env};
use crate::user::User;
use chrono::Local;
use std::fmt::Display;

/// Which worker produced an activity-log line.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Worker {
    /// Fetches the full user list from the backend.
    Fetcher,
    /// Performs add/update/delete calls against the backend.
    Mutator,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
}

/// Dashboard busy indicator states. Every worker action enters `Loading` on
/// start and returns to `Idle` on every exit path, success or failure.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
}

/// A single activity-log line.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LogEvent {
    pub worker: Worker,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl LogEvent {
    fn new(worker: Worker, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            worker,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn fetcher_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::Fetcher, msg, event_type, log_level)
    }

    pub fn mutator_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::Mutator, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for LogEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

/// Messages from the API worker to the UI.
#[derive(Debug, Clone)]
pub enum Event {
    /// Busy-indicator transition.
    Phase(Phase),
    /// A completed full refetch; replaces the local user list wholesale.
    Users(Vec<User>),
    /// An activity-log line.
    Log(LogEvent),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_event_display_includes_type_and_message() {
        let event = LogEvent::fetcher_with_level(
            "Fetched 3 users".to_string(),
            EventType::Refresh,
            LogLevel::Info,
        );
        let rendered = event.to_string();
        assert!(rendered.starts_with("Refresh ["));
        assert!(rendered.ends_with("] Fetched 3 users"));
    }

    #[test]
    fn success_events_always_display() {
        let event = LogEvent::mutator_with_level(
            "Deleted user".to_string(),
            EventType::Success,
            LogLevel::Debug,
        );
        assert!(event.should_display());
    }
}
