//! Session setup and initialization

use crate::environment::Environment;
use crate::events::Event;
use crate::runtime::start_refresh_worker;
use crate::stats_api::StatsClient;
use crate::workers::core::WorkerConfig;
use std::error::Error;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Event receiver for worker events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Requests an immediate refresh cycle
    pub refresh_sender: mpsc::Sender<()>,
    /// Join handles for worker tasks
    pub join_handles: Vec<JoinHandle<()>>,
    /// Shutdown sender to stop the worker
    pub shutdown_sender: broadcast::Sender<()>,
    /// Backend being polled
    pub environment: Environment,
    /// Time between scheduled refreshes
    pub refresh_interval: Duration,
}

/// Sets up a refresh session
///
/// Builds the stats client, creates the shutdown channel and starts the refresh
/// worker. The returned session is handed to the TUI or headless runner.
pub async fn setup_session(
    env: Environment,
    refresh_interval: Duration,
) -> Result<SessionData, Box<dyn Error>> {
    let client = StatsClient::new(env.clone())?;
    let config = WorkerConfig::new(env.clone()).with_refresh_interval(refresh_interval);
    let refresh_interval = config.refresh_interval;

    // Create shutdown channel - only one shutdown signal needed
    let (shutdown_sender, _) = broadcast::channel(1);

    let (event_receiver, refresh_sender, join_handles) =
        start_refresh_worker(Box::new(client), config, shutdown_sender.subscribe()).await;

    Ok(SessionData {
        event_receiver,
        refresh_sender,
        join_handles,
        shutdown_sender,
        environment: env,
        refresh_interval,
    })
}

/// Broadcasts shutdown and waits for every worker task to finish.
///
/// Safe to call when the workers have already stopped.
pub async fn stop_workers(
    shutdown_sender: &broadcast::Sender<()>,
    join_handles: Vec<JoinHandle<()>>,
) {
    // No receivers left means every worker already exited
    let _ = shutdown_sender.send(());
    for handle in join_handles {
        if let Err(e) = handle.await {
            log::warn!("Worker task ended abnormally: {}", e);
        }
    }
}
