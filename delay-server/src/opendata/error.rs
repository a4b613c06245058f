//! Connections API error types.

/// Errors from the transport.opendata.ch client and summary builder.
#[derive(Debug, thiserror::Error)]
pub enum OpenDataError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// A field the summary needs is missing or unusable
    #[error("malformed connection: {0}")]
    MalformedConnection(String),
}
