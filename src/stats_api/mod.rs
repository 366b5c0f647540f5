use crate::environment::Environment;
use crate::stats_api::error::StatsApiError;
use serde::{Deserialize, Serialize};

pub(crate) mod client;
pub use client::StatsClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

/// Body of the backend's `/dashboard/health` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait StatsApi: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Fetch the raw loan statistics document.
    async fn get_stats(&self) -> Result<serde_json::Value, StatsApiError>;

    /// Query the backend health endpoint.
    async fn get_health(&self) -> Result<HealthStatus, StatsApiError>;
}
