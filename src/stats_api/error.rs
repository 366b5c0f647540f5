//! Error handling for the stats API module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsApiError {
    /// The response body was not valid JSON, or not the expected shape.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },
}

impl StatsApiError {
    pub async fn from_response(response: reqwest::Response) -> StatsApiError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        StatsApiError::Http { status, message }
    }

    /// HTTP status code, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            StatsApiError::Http { status, .. } => Some(*status),
            StatsApiError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            StatsApiError::Decode(_) => None,
        }
    }
}
