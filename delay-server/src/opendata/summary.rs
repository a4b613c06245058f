//! One-line delay summary for a connection.

use std::fmt;

use chrono::{Local, TimeZone};

use super::error::OpenDataError;
use super::types::Connection;

/// Render the delay summary for a connection in the local time zone.
///
/// Produces e.g. `"7 minutes delay. Luzern dep 14:04:30 at platform 4"`.
pub fn summarize(connection: &Connection) -> Result<String, OpenDataError> {
    summarize_in(connection, &Local)
}

/// Render the delay summary, showing the departure time in `tz`.
pub fn summarize_in<Tz>(connection: &Connection, tz: &Tz) -> Result<String, OpenDataError>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let from = connection
        .from
        .as_ref()
        .ok_or_else(|| malformed("from missing"))?;

    let timestamp = from
        .departure_timestamp
        .ok_or_else(|| malformed("from.departureTimestamp missing"))?;
    let station = from
        .station
        .as_ref()
        .and_then(|s| s.name.as_deref())
        .ok_or_else(|| malformed("from.station.name missing"))?;

    let departure = tz
        .timestamp_opt(timestamp, 0)
        .single()
        .ok_or_else(|| malformed(&format!("departureTimestamp {timestamp} out of range")))?;

    let mut summary = match from.delay {
        None | Some(0) => "No delay".to_string(),
        Some(mins) => format!("{mins} minutes delay"),
    };
    summary.push_str(&format!(
        ". {station} dep {}",
        departure.format("%H:%M:%S")
    ));

    if let Some(platform) = &from.platform {
        summary.push_str(&format!(" at platform {platform}"));
    }

    Ok(summary)
}

fn malformed(reason: &str) -> OpenDataError {
    OpenDataError::MalformedConnection(reason.to_string())
}
