//! Stats fetching with fallback on failure

use super::core::EventSender;
use crate::events::EventType;
use crate::logging::LogLevel;
use crate::network::ErrorHandler;
use crate::stats::{DashboardStats, FetchOutcome};
use crate::stats_api::StatsApi;

/// Fetches and normalizes loan statistics. Never fails: any error yields the fallback stats.
pub struct StatsFetcher {
    api: Box<dyn StatsApi>,
    error_handler: ErrorHandler,
    event_sender: Option<EventSender>,
}

impl StatsFetcher {
    pub fn new(api: Box<dyn StatsApi>) -> Self {
        Self {
            api,
            error_handler: ErrorHandler::new(),
            event_sender: None,
        }
    }

    /// Report progress and failures to the dashboard as well as the log.
    pub fn with_events(mut self, event_sender: EventSender) -> Self {
        self.event_sender = Some(event_sender);
        self
    }

    /// Fetch one snapshot of the stats
    pub async fn fetch_stats(&self) -> FetchOutcome {
        log::debug!(
            "Fetching data from {}",
            self.api.environment().base_url()
        );
        if let Some(sender) = &self.event_sender {
            sender
                .send_fetch_event(
                    "Fetching stats...".to_string(),
                    EventType::Refresh,
                    LogLevel::Debug,
                )
                .await;
        }

        match self.api.get_stats().await {
            Ok(body) => {
                log::debug!("Raw API response: {}", body);
                let stats = DashboardStats::from_json(&body);
                log::debug!("Processed data: {:?}", stats);
                FetchOutcome::Live(stats)
            }
            Err(e) => {
                let log_level = self.error_handler.classify_error(&e);
                let reason = self.error_handler.describe(&e);
                log::log!(log::Level::from(log_level), "API call failed: {}", e);

                if let Some(sender) = &self.event_sender {
                    sender
                        .send_fetch_event(
                            format!("Failed to fetch stats: {}", reason),
                            EventType::Error,
                            log_level,
                        )
                        .await;
                }

                FetchOutcome::fallback(reason)
            }
        }
    }
}
