use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;
use tokio::time::timeout;

use crate::config::{Config, SecureString};
use crate::gateway::error::FetchFailure;
use crate::gateway::AppGateway;
use crate::model::App;

/// Query string for "all columns, newest first".
const SELECT_ALL_NEWEST_FIRST: &str = "select=*&order=created_at.desc";

/// Gateway talking to a PostgREST endpoint (`{base_url}/rest/v1/{table}`).
pub struct RestGateway {
    client: Client,
    query_url: String,
    api_key: Option<SecureString>,
    request_timeout: Duration,
}

impl RestGateway {
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(config.defaults.connect_timeout())
            .build()?;

        let query_url = format!(
            "{}/rest/v1/{}?{}",
            config.store.base_url.trim().trim_end_matches('/'),
            config.store.table.trim(),
            SELECT_ALL_NEWEST_FIRST
        );

        Ok(Self {
            client,
            query_url,
            api_key: config.store.credential(),
            request_timeout: config.defaults.request_timeout(),
        })
    }

    /// Overrides the per-request timeout taken from config.
    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    pub fn query_url(&self) -> &str {
        &self.query_url
    }

    async fn do_fetch(&self) -> Result<Vec<App>, FetchFailure> {
        let mut builder = self
            .client
            .get(&self.query_url)
            .header(ACCEPT, "application/json");

        if let Some(key) = &self.api_key {
            builder = builder
                .header("apikey", key.expose())
                .header(AUTHORIZATION, format!("Bearer {}", key.expose()));
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(FetchFailure::from_status(status, &body));
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl AppGateway for RestGateway {
    async fn fetch_all_apps(&self) -> Result<Vec<App>, FetchFailure> {
        tracing::debug!(url = %self.query_url, "Fetching apps");

        let result = match timeout(self.request_timeout, self.do_fetch()).await {
            Ok(result) => result,
            Err(_) => Err(FetchFailure::timeout(self.request_timeout)),
        };

        match &result {
            Ok(apps) => tracing::debug!(count = apps.len(), "Fetched apps"),
            Err(err) => tracing::warn!(error = %err, "Fetching apps failed"),
        }

        result
    }
}
