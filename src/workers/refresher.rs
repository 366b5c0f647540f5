//! Refresh scheduler: startup, timer and manual triggers feeding fetch cycles

use super::core::{EventSender, WorkerConfig};
use super::fetcher::StatsFetcher;
use super::gate::{CycleGuard, RefreshGate};
use crate::events::{CyclePhase, Event, EventType};
use crate::logging::LogLevel;
use crate::stats_api::StatsApi;

use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};

/// What started a refresh cycle
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum RefreshTrigger {
    Startup,
    Timer,
    Manual,
}

/// Drives the fetch cycle once at startup, then on every timer tick or manual request.
pub struct RefreshWorker {
    fetcher: Arc<StatsFetcher>,
    event_sender: EventSender,
    gate: RefreshGate,
    config: WorkerConfig,
}

impl RefreshWorker {
    pub fn new(
        api: Box<dyn StatsApi>,
        config: WorkerConfig,
        event_sender: mpsc::Sender<Event>,
    ) -> Self {
        let event_sender = EventSender::new(event_sender);
        let fetcher = StatsFetcher::new(api).with_events(event_sender.clone());

        Self {
            fetcher: Arc::new(fetcher),
            event_sender,
            gate: RefreshGate::new(),
            config,
        }
    }

    /// Start the worker
    pub async fn run(
        self,
        mut shutdown: broadcast::Receiver<()>,
        mut refresh_requests: mpsc::Receiver<()>,
    ) -> Vec<JoinHandle<()>> {
        let mut join_handles = Vec::new();

        self.event_sender
            .send_scheduler_event(
                format!(
                    "Polling {} every {}s",
                    self.config.environment.base_url(),
                    self.config.refresh_interval.as_secs()
                ),
                EventType::Waiting,
                LogLevel::Info,
            )
            .await;

        let worker_handle = tokio::spawn(async move {
            let mut ticker = interval(self.config.refresh_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut started = false;
            let mut current: Option<JoinHandle<()>> = None;

            loop {
                let trigger = tokio::select! {
                    _ = shutdown.recv() => break,
                    _ = ticker.tick() => {
                        if started { RefreshTrigger::Timer } else { RefreshTrigger::Startup }
                    }
                    Some(()) = refresh_requests.recv() => RefreshTrigger::Manual,
                };
                started = true;

                if let Some(handle) = self.trigger(trigger).await {
                    current = Some(handle);
                }
            }

            if let Some(handle) = current {
                handle.abort();
            }
        });
        join_handles.push(worker_handle);

        join_handles
    }

    /// Start a cycle unless one is already in flight.
    async fn trigger(&self, trigger: RefreshTrigger) -> Option<JoinHandle<()>> {
        match self.gate.try_begin() {
            Some(guard) => {
                let fetcher = Arc::clone(&self.fetcher);
                let event_sender = self.event_sender.clone();
                Some(tokio::spawn(run_cycle(guard, fetcher, event_sender, trigger)))
            }
            None => {
                log::debug!("{} refresh skipped: a cycle is already in flight", trigger);
                self.event_sender
                    .send_scheduler_event(
                        format!("{} refresh skipped, previous cycle still running", trigger),
                        EventType::Waiting,
                        LogLevel::Debug,
                    )
                    .await;
                None
            }
        }
    }
}

/// One Loading → fetch → outcome cycle. The guard is held until the outcome is queued.
async fn run_cycle(
    _guard: CycleGuard,
    fetcher: Arc<StatsFetcher>,
    event_sender: EventSender,
    trigger: RefreshTrigger,
) {
    event_sender
        .send_phase(
            CyclePhase::Loading,
            format!("{} refresh: loading dashboard data...", trigger),
        )
        .await;

    let outcome = fetcher.fetch_stats().await;
    event_sender.send_outcome(outcome).await;

    event_sender
        .send_phase(CyclePhase::Idle, "Waiting for next refresh".to_string())
        .await;
}
