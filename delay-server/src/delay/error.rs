//! Delay service error types.

use crate::domain::{InvalidCategory, InvalidMask, UnknownStation};
use crate::opendata::OpenDataError;
use crate::sbb::SbbError;

/// Errors surfaced by the delay service to its callers.
#[derive(Debug, thiserror::Error)]
pub enum DelayError {
    /// A category letter is not part of the filter alphabet
    #[error(transparent)]
    InvalidCategory(#[from] InvalidCategory),

    /// A station name has no known identifier
    #[error(transparent)]
    UnknownStation(#[from] UnknownStation),

    /// A required argument is missing or unusable
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The provider answered without a single usable departure
    #[error("no departures found from {from} to {to}")]
    EmptyResponse { from: String, to: String },

    /// The connection payload lacks a field the summary needs
    #[error("malformed connection: {0}")]
    MalformedConnection(String),

    /// Talking to a provider failed
    #[error("provider error: {0}")]
    Provider(String),
}

impl From<InvalidMask> for DelayError {
    fn from(e: InvalidMask) -> Self {
        DelayError::InvalidArgument(e.to_string())
    }
}

impl From<SbbError> for DelayError {
    fn from(e: SbbError) -> Self {
        DelayError::Provider(e.to_string())
    }
}

impl From<OpenDataError> for DelayError {
    fn from(e: OpenDataError) -> Self {
        match e {
            OpenDataError::MalformedConnection(reason) => DelayError::MalformedConnection(reason),
            other => DelayError::Provider(other.to_string()),
        }
    }
}
