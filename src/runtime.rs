//! Runtime wiring for the refresh worker

use crate::consts::cli_consts::{EVENT_QUEUE_SIZE, REFRESH_REQUEST_QUEUE_SIZE};
use crate::events::Event;
use crate::stats_api::StatsApi;
use crate::workers::core::WorkerConfig;
use crate::workers::refresher::RefreshWorker;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Start the refresh worker.
///
/// Returns the event stream for the display, a sender for manual refresh
/// requests, and the worker's join handles.
pub async fn start_refresh_worker(
    api: Box<dyn StatsApi>,
    config: WorkerConfig,
    shutdown: broadcast::Receiver<()>,
) -> (mpsc::Receiver<Event>, mpsc::Sender<()>, Vec<JoinHandle<()>>) {
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let (refresh_sender, refresh_receiver) = mpsc::channel::<()>(REFRESH_REQUEST_QUEUE_SIZE);

    let worker = RefreshWorker::new(api, config, event_sender);
    let join_handles = worker.run(shutdown, refresh_receiver).await;

    (event_receiver, refresh_sender, join_handles)
}
