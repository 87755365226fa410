//! The single failure kind surfaced by the gateway.

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// Message used when a failure carries no text of its own.
pub const FALLBACK_MESSAGE: &str = "An error occurred";

/// Any failure of the remote query.
///
/// Network errors, store errors and malformed responses all collapse into
/// this one kind; only the message differs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchFailure {
    message: String,
}

impl FetchFailure {
    /// Blank messages are replaced by [`FALLBACK_MESSAGE`].
    pub fn new(message: impl Into<String>) -> Self {
        Self::from_message(Some(message.into()))
    }

    pub fn from_message(message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());
        Self { message }
    }

    pub fn timeout(after: Duration) -> Self {
        Self::new(format!("Request timed out after {}ms", after.as_millis()))
    }

    /// Builds a failure from a non-success response.
    ///
    /// Uses the `message` field of a JSON error body when there is one,
    /// otherwise the status line.
    pub fn from_status(status: StatusCode, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| {
                format!(
                    "{} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Error")
                )
            });
        Self::new(message)
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<reqwest::Error> for FetchFailure {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}

impl From<serde_json::Error> for FetchFailure {
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Invalid response body: {}", err))
    }
}
