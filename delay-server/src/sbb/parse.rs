//! Line-oriented parsing of station board responses.
//!
//! Each line of the body is decoded on its own. A line that cannot be decoded
//! is logged and skipped, so one broken record never hides the rest of the
//! board. Whether an empty result is acceptable is up to the caller.

use tracing::warn;

use crate::domain::Journey;

use super::convert::{ConversionError, convert_record};
use super::types::JourneyRecord;

/// Why a single board line was skipped.
#[derive(Debug, thiserror::Error)]
pub enum LineError {
    /// The line is not a `<Journey>` element (e.g. a station header)
    #[error("not a journey record")]
    NotAJourney,

    /// The XML could not be decoded into a record
    #[error("XML decode error: {0}")]
    Xml(#[from] quick_xml::DeError),

    /// The record decoded but holds invalid values
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Parse a station board body into journeys, preserving line order.
///
/// Never fails; undecodable lines are dropped with a warning.
pub fn parse_journeys(body: &str) -> Vec<Journey> {
    let mut journeys = Vec::new();

    for (idx, line) in body.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match decode_line(line) {
            Ok(journey) => journeys.push(journey),
            Err(e) => {
                warn!(line = idx + 1, error = %e, "skipping undecodable board line");
            }
        }
    }

    journeys
}

/// Decode one line of the board into a journey.
pub fn decode_line(line: &str) -> Result<Journey, LineError> {
    if !is_journey_element(line) {
        return Err(LineError::NotAJourney);
    }
    let record: JourneyRecord = quick_xml::de::from_str(line)?;
    Ok(convert_record(&record)?)
}

fn is_journey_element(line: &str) -> bool {
    line.strip_prefix("<Journey")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_whitespace() || c == '/' || c == '>')
}
