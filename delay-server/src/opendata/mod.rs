//! transport.opendata.ch connections client and delay summary.
//!
//! Unlike the legacy station board, this API takes plain station names and
//! answers with JSON carrying live delay and platform data.

mod client;
mod error;
mod summary;
mod types;

pub use client::{ConnectionProvider, OpenDataClient, OpenDataConfig};
pub use error::OpenDataError;
pub use summary::{summarize, summarize_in};
pub use types::{Checkpoint, Connection, ConnectionsResponse, Location};
