//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from events

use super::state::{DashboardPhase, DashboardState};
use super::surfaces::render_stats;

use crate::events::{CyclePhase, Event as WorkerEvent, EventType};
use crate::logging::LogLevel;
use crate::stats::FetchOutcome;

use std::time::Instant;

const LOAD_FAILED_MESSAGE: &str = "Failed to load dashboard data";

impl DashboardState {
    /// Advance the animation tick and apply all queued events.
    pub fn update(&mut self) {
        self.tick += 1;

        // Process all queued events one by one
        while let Some(event) = self.pending_events.pop_front() {
            self.add_to_activity_log(event.clone());
            self.process_event(&event);
        }
    }

    /// Process a single event and update relevant state
    fn process_event(&mut self, event: &WorkerEvent) {
        match event.event_type {
            EventType::StateChange => {
                if let Some(phase) = event.cycle_phase {
                    self.handle_cycle_phase(phase);
                }
            }
            EventType::Stats => {
                if let Some(outcome) = &event.outcome {
                    self.handle_outcome(outcome);
                }
            }
            _ => {}
        }
    }

    fn handle_cycle_phase(&mut self, phase: CyclePhase) {
        match phase {
            CyclePhase::Loading => {
                self.set_phase(DashboardPhase::Loading);
                self.view.show_loading();
            }
            CyclePhase::Idle => self.set_last_refresh(Instant::now()),
        }
    }

    /// Render a fetch outcome into the view and settle the phase.
    fn handle_outcome(&mut self, outcome: &FetchOutcome) {
        let stats = outcome.stats();
        self.set_role(stats.role.clone());

        match render_stats(stats, &mut self.view) {
            Ok(()) => {
                self.view.show_stats();
                self.set_phase(DashboardPhase::Loaded);
                self.add_to_activity_log(WorkerEvent::dashboard_with_level(
                    "Dashboard loaded successfully!".to_string(),
                    EventType::Success,
                    LogLevel::Info,
                ));
            }
            Err(e) => {
                log::error!("Error rendering dashboard: {}", e);
                self.view.show_error(LOAD_FAILED_MESSAGE);
                self.set_phase(DashboardPhase::Failed {
                    message: e.to_string(),
                });
                self.add_to_activity_log(WorkerEvent::dashboard_with_level(
                    format!("{}: {}", LOAD_FAILED_MESSAGE, e),
                    EventType::Error,
                    LogLevel::Error,
                ));
            }
        }
    }
}
