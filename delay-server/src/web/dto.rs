//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

/// Query for `GET /delay/sbb`.
#[derive(Debug, Deserialize)]
pub struct BoardRequest {
    /// Origin station identifier
    pub from: Option<String>,

    /// Optional direction station identifier
    pub to: Option<String>,

    /// 10-digit product mask (defaults to every category)
    pub products: Option<String>,
}

/// Query for `GET /delay/opendata`.
#[derive(Debug, Deserialize)]
pub struct ConnectionRequest {
    /// Origin station name
    pub from: Option<String>,

    /// Destination station name
    pub to: Option<String>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
