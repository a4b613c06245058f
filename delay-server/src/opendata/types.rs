//! transport.opendata.ch response DTOs.
//!
//! Only the fields the delay summary reads are modelled; everything else in
//! the payload is ignored. Required fields are still `Option` so that a
//! missing one surfaces as a malformed connection rather than a JSON error.

use serde::Deserialize;

/// Response from `GET /v1/connections`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionsResponse {
    /// Connections in departure order
    #[serde(default)]
    pub connections: Vec<Connection>,
}

/// One connection between two locations.
#[derive(Debug, Clone, Deserialize)]
pub struct Connection {
    /// Departure checkpoint
    pub from: Option<Checkpoint>,
}

/// A stop on a connection with realtime information.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkpoint {
    /// Departure time as Unix epoch seconds
    pub departure_timestamp: Option<i64>,

    /// Delay in minutes; `null` when there is no realtime data
    pub delay: Option<i64>,

    /// Departure platform; `null` when unknown
    pub platform: Option<String>,

    /// The station at this checkpoint
    pub station: Option<Location>,
}

/// A named location.
#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    /// Station identifier
    pub id: Option<String>,

    /// Human-readable name
    pub name: Option<String>,
}
