//! transport.opendata.ch connections client.

use async_trait::async_trait;
use tracing::debug;

use super::error::OpenDataError;
use super::types::ConnectionsResponse;

/// Default base URL for the connections API.
const DEFAULT_BASE_URL: &str = "https://transport.opendata.ch";

/// Page requested from the connections API.
const PAGE: u32 = 1;

/// Number of connections requested per page.
const LIMIT: u32 = 1;

/// Source of connections between two named locations.
#[async_trait]
pub trait ConnectionProvider: Send + Sync {
    /// Fetch connections from `from` to `to`; names are passed through as-is.
    async fn connections(
        &self,
        from: &str,
        to: &str,
    ) -> Result<ConnectionsResponse, OpenDataError>;
}

/// Configuration for the connections client.
#[derive(Debug, Clone)]
pub struct OpenDataConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl OpenDataConfig {
    /// Create a config pointing at the public API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for OpenDataConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP client for transport.opendata.ch.
#[derive(Debug, Clone)]
pub struct OpenDataClient {
    http: reqwest::Client,
    base_url: String,
}

impl OpenDataClient {
    /// Create a new connections client.
    pub fn new(config: OpenDataConfig) -> Result<Self, OpenDataError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ConnectionProvider for OpenDataClient {
    async fn connections(
        &self,
        from: &str,
        to: &str,
    ) -> Result<ConnectionsResponse, OpenDataError> {
        let url = format!("{}/v1/connections", self.base_url);
        debug!(%url, from, to, "querying connections");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("from", from.to_string()),
                ("to", to.to_string()),
                ("page", PAGE.to_string()),
                ("limit", LIMIT.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OpenDataError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| OpenDataError::Json {
            message: e.to_string(),
        })
    }
}
