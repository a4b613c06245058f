//! Legacy SBB station board client.
//!
//! This module queries the HAFAS station board (`stboard.exe`) and turns its
//! line-delimited answer into domain journeys.
//!
//! Key characteristics of the board:
//! - Transport categories are selected with a 10-digit product mask
//! - Each line of the body is one self-closing `<Journey .../>` element;
//!   header and footer lines are interleaved and must be skipped
//! - Departures arrive in timetable order and are never re-sorted here

mod client;
mod convert;
mod error;
mod parse;
mod types;

pub use client::{BoardQuery, MAX_JOURNEYS, SbbClient, SbbConfig, ScheduleProvider};
pub use convert::{ConversionError, convert_record};
pub use error::SbbError;
pub use parse::{LineError, decode_line, parse_journeys};
pub use types::JourneyRecord;
