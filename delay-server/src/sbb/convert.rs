//! Conversion from station board records to domain journeys.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use crate::domain::Journey;

use super::types::JourneyRecord;

/// Error during record to domain conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Failed to parse the timetabled date
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// Failed to parse the timetabled time
    #[error("invalid time: {0}")]
    InvalidTime(String),

    /// Missing required field
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Realtime state decoded from the `delay` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Realtime {
    Unknown,
    Delayed(i64),
    Cancelled,
}

/// Convert a single board record to a domain journey.
pub fn convert_record(record: &JourneyRecord) -> Result<Journey, ConversionError> {
    let destination = record.target_loc.trim();
    if destination.is_empty() {
        return Err(ConversionError::MissingField("targetLoc"));
    }

    let date = parse_board_date(&record.fp_date)?;
    let time = NaiveTime::parse_from_str(record.fp_time.trim(), "%H:%M")
        .map_err(|_| ConversionError::InvalidTime(record.fp_time.clone()))?;

    let (line, category) = split_product(record.prod.as_deref());
    let realtime = parse_delay(record.delay.as_deref());

    Ok(Journey {
        line,
        category,
        destination: destination.to_string(),
        destination_id: non_blank(record.dirnr.as_deref()),
        scheduled_departure: NaiveDateTime::new(date, time),
        delay_mins: match realtime {
            Realtime::Delayed(mins) => Some(mins),
            _ => None,
        },
        is_cancelled: realtime == Realtime::Cancelled,
        platform: non_blank(record.platform.as_deref()),
        delay_reason: non_blank(record.delay_reason.as_deref()),
    })
}

/// Parse the board's `dd.mm.yy` date, accepting a four-digit year as well.
fn parse_board_date(s: &str) -> Result<NaiveDate, ConversionError> {
    let s = s.trim();
    // Two-digit years must be tried first: `%Y` happily reads "26" as year 26.
    NaiveDate::parse_from_str(s, "%d.%m.%y")
        .or_else(|_| NaiveDate::parse_from_str(s, "%d.%m.%Y"))
        .map_err(|_| ConversionError::InvalidDate(s.to_string()))
}

/// Split `"IR 2530#IR"` into line name and category.
fn split_product(prod: Option<&str>) -> (Option<String>, Option<String>) {
    let Some(prod) = prod else {
        return (None, None);
    };
    match prod.split_once('#') {
        Some((line, category)) => (non_blank(Some(line)), non_blank(Some(category))),
        None => (non_blank(Some(prod)), None),
    }
}

fn parse_delay(delay: Option<&str>) -> Realtime {
    let Some(raw) = delay.map(str::trim) else {
        return Realtime::Unknown;
    };

    if raw.is_empty() || raw == "-" {
        return Realtime::Unknown;
    }
    if raw.eq_ignore_ascii_case("cancel") {
        return Realtime::Cancelled;
    }

    let digits: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    match digits.trim_start_matches('+').parse::<i64>() {
        Ok(mins) => Realtime::Delayed(mins),
        Err(_) => {
            debug!(delay = raw, "unrecognised delay value, treating as unknown");
            Realtime::Unknown
        }
    }
}

fn non_blank(s: Option<&str>) -> Option<String> {
    s.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> JourneyRecord {
        JourneyRecord {
            fp_time: "14:04".to_string(),
            fp_date: "18.10.26".to_string(),
            prod: Some("IR 2530#IR".to_string()),
            target_loc: "Bern".to_string(),
            dirnr: Some("8507000".to_string()),
            delay: Some("-".to_string()),
            platform: Some("7".to_string()),
            delay_reason: Some(" ".to_string()),
        }
    }

    #[test]
    fn convert_full_record() {
        let journey = convert_record(&record()).unwrap();
        assert_eq!(journey.line.as_deref(), Some("IR 2530"));
        assert_eq!(journey.category.as_deref(), Some("IR"));
        assert_eq!(journey.destination, "Bern");
        assert_eq!(journey.destination_id.as_deref(), Some("8507000"));
        assert_eq!(
            journey.scheduled_departure,
            NaiveDate::from_ymd_opt(2026, 10, 18)
                .unwrap()
                .and_hms_opt(14, 4, 0)
                .unwrap()
        );
        assert_eq!(journey.delay_mins, None);
        assert!(!journey.is_cancelled);
        assert_eq!(journey.platform.as_deref(), Some("7"));
        assert_eq!(journey.delay_reason, None);
    }

    #[test]
    fn four_digit_year() {
        let r = JourneyRecord {
            fp_date: "18.10.2026".to_string(),
            ..record()
        };
        let journey = convert_record(&r).unwrap();
        assert_eq!(journey.scheduled_departure.date().to_string(), "2026-10-18");
    }

    #[test]
    fn delay_values() {
        assert_eq!(parse_delay(None), Realtime::Unknown);
        assert_eq!(parse_delay(Some("")), Realtime::Unknown);
        assert_eq!(parse_delay(Some("-")), Realtime::Unknown);
        assert_eq!(parse_delay(Some("0")), Realtime::Delayed(0));
        assert_eq!(parse_delay(Some("+ 2")), Realtime::Delayed(2));
        assert_eq!(parse_delay(Some("+12")), Realtime::Delayed(12));
        assert_eq!(parse_delay(Some("-1")), Realtime::Delayed(-1));
        assert_eq!(parse_delay(Some("cancel")), Realtime::Cancelled);
        assert_eq!(parse_delay(Some("soon")), Realtime::Unknown);
    }

    #[test]
    fn cancelled_record() {
        let r = JourneyRecord {
            delay: Some("cancel".to_string()),
            ..record()
        };
        let journey = convert_record(&r).unwrap();
        assert!(journey.is_cancelled);
        assert_eq!(journey.delay_mins, None);
    }

    #[test]
    fn product_without_category() {
        assert_eq!(
            split_product(Some("BUS 1")),
            (Some("BUS 1".to_string()), None)
        );
        assert_eq!(split_product(None), (None, None));
        assert_eq!(
            split_product(Some("#S")),
            (None, Some("S".to_string()))
        );
    }

    #[test]
    fn reject_bad_time() {
        let r = JourneyRecord {
            fp_time: "25:99".to_string(),
            ..record()
        };
        assert_eq!(
            convert_record(&r).unwrap_err(),
            ConversionError::InvalidTime("25:99".to_string())
        );
    }

    #[test]
    fn reject_bad_date() {
        let r = JourneyRecord {
            fp_date: "yesterday".to_string(),
            ..record()
        };
        assert!(matches!(
            convert_record(&r),
            Err(ConversionError::InvalidDate(_))
        ));
    }

    #[test]
    fn reject_blank_destination() {
        let r = JourneyRecord {
            target_loc: "  ".to_string(),
            ..record()
        };
        assert_eq!(
            convert_record(&r).unwrap_err(),
            ConversionError::MissingField("targetLoc")
        );
    }
}
