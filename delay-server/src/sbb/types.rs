//! Station board record DTOs.
//!
//! The legacy board answers with one self-closing `<Journey .../>` element per
//! line. All data is carried in attributes, and the board omits attributes it
//! has no value for, so everything beyond the timetable fields is optional.

use serde::Deserialize;

/// One `<Journey>` element as sent by the station board.
#[derive(Debug, Clone, Deserialize)]
pub struct JourneyRecord {
    /// Timetabled departure time (`HH:MM`)
    #[serde(rename = "@fpTime")]
    pub fp_time: String,

    /// Timetabled departure date (`dd.mm.yy`)
    #[serde(rename = "@fpDate")]
    pub fp_date: String,

    /// Product, `"<line name>#<category>"` (e.g. `"IR 2530#IR"`)
    #[serde(rename = "@prod", default)]
    pub prod: Option<String>,

    /// Name of the final destination
    #[serde(rename = "@targetLoc")]
    pub target_loc: String,

    /// Station number of the final destination
    #[serde(rename = "@dirnr", default)]
    pub dirnr: Option<String>,

    /// Realtime delay: `"-"` for none, `"+ 2"` for minutes, `"cancel"`
    #[serde(rename = "@delay", default)]
    pub delay: Option<String>,

    /// Departure platform
    #[serde(rename = "@platform", default)]
    pub platform: Option<String>,

    /// Free-text reason for a delay
    #[serde(rename = "@delayReason", default)]
    pub delay_reason: Option<String>,
}
