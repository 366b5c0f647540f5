//! Core worker utilities

use crate::environment::Environment;
use crate::events::{CyclePhase, Event, EventType};
use crate::logging::LogLevel;
use crate::stats::FetchOutcome;
use std::time::Duration;
use tokio::sync::mpsc;

/// Common event sending utilities for workers
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    pub async fn send_scheduler_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        let _ = self
            .sender
            .send(Event::scheduler_with_level(message, event_type, log_level))
            .await;
    }

    pub async fn send_fetch_event(&self, message: String, event_type: EventType, log_level: LogLevel) {
        let _ = self
            .sender
            .send(Event::fetcher_with_level(message, event_type, log_level))
            .await;
    }

    pub async fn send_phase(&self, phase: CyclePhase, message: String) {
        let _ = self.sender.send(Event::state_change(phase, message)).await;
    }

    pub async fn send_outcome(&self, outcome: FetchOutcome) {
        let _ = self.sender.send(Event::stats(outcome)).await;
    }
}

/// Worker configuration shared across the refresh loop
#[derive(Clone, Debug)]
pub struct WorkerConfig {
    pub environment: Environment,
    pub refresh_interval: Duration,
}

impl WorkerConfig {
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            refresh_interval: crate::consts::cli_consts::refresh::refresh_interval(),
        }
    }

    pub fn with_refresh_interval(mut self, refresh_interval: Duration) -> Self {
        // A zero period would make tokio's interval panic
        if !refresh_interval.is_zero() {
            self.refresh_interval = refresh_interval;
        }
        self
    }
}
