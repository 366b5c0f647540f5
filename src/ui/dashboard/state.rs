//! Dashboard state management
//!
//! Contains the main dashboard state struct and related enums

use super::surfaces::DashboardView;
use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::ui::app::UIConfig;

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Lifecycle of the most recent refresh cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardPhase {
    Loading,
    Loaded,
    Failed { message: String },
}

/// Dashboard state fed by worker events.
#[derive(Debug)]
pub struct DashboardState {
    /// The environment the stats are fetched from.
    pub environment: Environment,
    /// Time between scheduled refreshes.
    pub refresh_interval: Duration,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Text fields, chart host and placeholders.
    pub view: DashboardView,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<WorkerEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,
    /// Static message shown over the dashboard until the next key press
    pub popup: Option<String>,

    phase: DashboardPhase,
    /// Role reported by the last fetch
    role: Option<String>,
    /// When the last cycle finished
    last_refresh: Option<Instant>,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(environment: Environment, start_time: Instant, ui_config: UIConfig) -> Self {
        Self {
            environment,
            refresh_interval: ui_config.refresh_interval,
            start_time,
            view: DashboardView::standard(),
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            tick: 0,
            popup: None,
            phase: DashboardPhase::Loading,
            role: None,
            last_refresh: None,
        }
    }

    pub fn phase(&self) -> &DashboardPhase {
        &self.phase
    }

    pub fn set_phase(&mut self, phase: DashboardPhase) {
        self.phase = phase;
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    pub fn set_role(&mut self, role: Option<String>) {
        self.role = role;
    }

    pub fn last_refresh(&self) -> Option<Instant> {
        self.last_refresh
    }

    pub fn set_last_refresh(&mut self, at: Instant) {
        self.last_refresh = Some(at);
    }

    /// Seconds until the next scheduled refresh, if a cycle has completed.
    pub fn next_refresh_in(&self) -> Option<u64> {
        self.last_refresh.map(|at| {
            self.refresh_interval
                .saturating_sub(at.elapsed())
                .as_secs()
        })
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }

    pub fn show_popup(&mut self, message: impl Into<String>) {
        self.popup = Some(message.into());
    }

    /// Close the popup. Returns whether one was open.
    pub fn dismiss_popup(&mut self) -> bool {
        self.popup.take().is_some()
    }
}
