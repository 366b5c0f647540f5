//! Loan Stats Client
//!
//! A JSON-over-HTTP client for the loan-management backend's dashboard endpoints.

use crate::consts::cli_consts::stats_api::{HEALTH_ENDPOINT, STATS_ENDPOINT, request_timeout};
use crate::environment::Environment;
use crate::stats_api::error::StatsApiError;
use crate::stats_api::{HealthStatus, StatsApi};
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;

// Build timestamp in milliseconds since epoch
const BUILD_TIMESTAMP: &str = env!("BUILD_TIMESTAMP", "Build timestamp not available");

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("loan-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct StatsClient {
    client: Client,
    environment: Environment,
}

impl StatsClient {
    pub fn new(environment: Environment) -> Result<Self, StatsApiError> {
        let client = ClientBuilder::new()
            .connect_timeout(request_timeout())
            .timeout(request_timeout())
            .build()?;
        Ok(Self {
            client,
            environment,
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.base_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, StatsApiError> {
        if !response.status().is_success() {
            return Err(StatsApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, StatsApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .header("User-Agent", USER_AGENT)
            .header("X-Build-Timestamp", BUILD_TIMESTAMP)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&response_bytes)?)
    }
}

#[async_trait::async_trait]
impl StatsApi for StatsClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn get_stats(&self) -> Result<serde_json::Value, StatsApiError> {
        self.get_json(STATS_ENDPOINT).await
    }

    async fn get_health(&self) -> Result<HealthStatus, StatsApiError> {
        self.get_json(HEALTH_ENDPOINT).await
    }
}
