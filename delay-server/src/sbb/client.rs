//! Legacy station board HTTP client.
//!
//! The board is queried with a fixed set of parameters and answers with a
//! line-delimited body that is handed to [`parse_journeys`](super::parse_journeys).

use async_trait::async_trait;
use tracing::debug;

use crate::domain::{ProductFilter, StationId};

use super::error::SbbError;

/// Default base URL for the station board.
const DEFAULT_BASE_URL: &str = "https://fahrplan.sbb.ch";

/// Board path, relative to the base URL.
const BOARD_PATH: &str = "/bin/stboard.exe/dn";

/// Client tag selecting the line-delimited output format.
const CLIENT_TAG: &str = "vs_java3";

/// Number of departures requested per query.
pub const MAX_JOURNEYS: u8 = 10;

/// Parameters for one station board query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardQuery {
    /// Transport categories to include
    pub products: ProductFilter,
    /// Station whose departures are listed
    pub from: StationId,
    /// Optional direction station
    pub to: Option<StationId>,
    /// Number of departures to return
    pub max_journeys: u8,
}

impl BoardQuery {
    /// Query for the next [`MAX_JOURNEYS`] departures from `from`.
    pub fn departures(from: StationId, to: Option<StationId>, products: ProductFilter) -> Self {
        Self {
            products,
            from,
            to,
            max_journeys: MAX_JOURNEYS,
        }
    }

    /// Query-string pairs in the order the board expects them.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("productsFilter", self.products.to_string()),
            ("boardType", "dep".to_string()),
            ("start", "1".to_string()),
            ("maxJourneys", self.max_journeys.to_string()),
            ("disableEquivs", "1".to_string()),
            ("L", CLIENT_TAG.to_string()),
            ("timeOffset", "0".to_string()),
            ("input", self.from.to_string()),
        ];
        if let Some(to) = &self.to {
            params.push(("dirInput", to.to_string()));
        }
        params
    }
}

/// Source of raw station board bodies.
#[async_trait]
pub trait ScheduleProvider: Send + Sync {
    /// Fetch the raw board body for a query.
    async fn station_board(&self, query: &BoardQuery) -> Result<String, SbbError>;
}

/// Configuration for the station board client.
#[derive(Debug, Clone)]
pub struct SbbConfig {
    /// Base URL for the board
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl SbbConfig {
    /// Create a config pointing at the production board.
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

impl Default for SbbConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP client for the legacy station board.
#[derive(Debug, Clone)]
pub struct SbbClient {
    http: reqwest::Client,
    base_url: String,
}

impl SbbClient {
    /// Create a new station board client.
    pub fn new(config: SbbConfig) -> Result<Self, SbbError> {
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
impl ScheduleProvider for SbbClient {
    async fn station_board(&self, query: &BoardQuery) -> Result<String, SbbError> {
        let url = format!("{}{}", self.base_url, BOARD_PATH);
        debug!(%url, from = %query.from, products = %query.products, "querying station board");

        let response = self.http.get(&url).query(&query.params()).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SbbError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response.text().await?)
    }
}
