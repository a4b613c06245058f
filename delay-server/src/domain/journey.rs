//! A single departure on the legacy station board.

use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

/// One departure parsed from the station board.
///
/// Journeys are immutable once parsed and keep the provider's order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Journey {
    /// Line name as shown on the board (e.g. "IR 2530")
    pub line: Option<String>,

    /// Product category (e.g. "IR", "S", "BUS")
    pub category: Option<String>,

    /// Final destination of the service
    pub destination: String,

    /// Station identifier of the destination, when reported
    pub destination_id: Option<String>,

    /// Timetabled departure
    pub scheduled_departure: NaiveDateTime,

    /// Realtime delay in minutes; `None` when the board has no realtime data
    pub delay_mins: Option<i64>,

    /// Whether the departure is cancelled
    pub is_cancelled: bool,

    /// Departure platform
    pub platform: Option<String>,

    /// Reason given for a delay, if any
    pub delay_reason: Option<String>,
}

impl fmt::Display for Journey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.line {
            Some(line) => write!(f, "{line} to {}", self.destination)?,
            None => write!(f, "Departure to {}", self.destination)?,
        }
        write!(
            f,
            " dep {}",
            self.scheduled_departure.format("%d.%m.%Y %H:%M")
        )?;

        if self.is_cancelled {
            f.write_str(", cancelled")?;
        } else {
            match self.delay_mins {
                Some(0) => f.write_str(", no delay")?,
                Some(mins) if mins < 0 => write!(f, ", {} minutes early", -mins)?,
                Some(mins) => write!(f, ", {mins} minutes delay")?,
                None => {}
            }
        }

        if let Some(platform) = &self.platform {
            write!(f, " at platform {platform}")?;
        }
        Ok(())
    }
}
