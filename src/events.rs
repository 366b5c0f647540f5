//! Event System
//!
//! Types and implementations for worker events and logging

use crate::logging::{LogLevel, should_log_with_env};
use crate::stats::FetchOutcome;
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Worker {
    /// Worker that owns the refresh timer and starts cycles.
    Scheduler,
    /// Worker that fetches stats from the backend.
    Fetcher,
    /// The dashboard itself, reporting render results.
    Dashboard,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Waiting,
    StateChange,
    Stats,
}

/// Phase of a refresh cycle as seen by the worker
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum CyclePhase {
    /// A cycle started; the display should show its loading placeholders
    Loading,
    /// The worker is idle until the next trigger
    Idle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub worker: Worker,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// Optional phase information for state change events
    pub cycle_phase: Option<CyclePhase>,
    /// Fetch result carried by stats events
    pub outcome: Option<FetchOutcome>,
}

impl Event {
    fn new(worker: Worker, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            worker,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            cycle_phase: None,
            outcome: None,
        }
    }

    pub fn state_change(phase: CyclePhase, msg: String) -> Self {
        Self {
            cycle_phase: Some(phase),
            ..Self::new(Worker::Scheduler, msg, EventType::StateChange, LogLevel::Info)
        }
    }

    /// A completed fetch, ready to be rendered.
    pub fn stats(outcome: FetchOutcome) -> Self {
        let (msg, log_level) = match &outcome {
            FetchOutcome::Live(stats) => (format!("Received stats: {}", stats), LogLevel::Info),
            FetchOutcome::Fallback { reason, .. } => (
                format!("Using fallback stats ({})", reason),
                LogLevel::Warn,
            ),
        };
        Self {
            outcome: Some(outcome),
            ..Self::new(Worker::Fetcher, msg, EventType::Stats, log_level)
        }
    }

    pub fn scheduler_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::Scheduler, msg, event_type, log_level)
    }

    pub fn fetcher_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::Fetcher, msg, event_type, log_level)
    }

    pub fn dashboard_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::Dashboard, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events
        if self.event_type == EventType::Success {
            return true;
        }
        // StateChange events drive the placeholders, not the log
        if self.event_type == EventType::StateChange {
            return false;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
