//! Station board client error types.

/// Errors that can occur when querying the legacy station board.
#[derive(Debug, thiserror::Error)]
pub enum SbbError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Board returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
}
