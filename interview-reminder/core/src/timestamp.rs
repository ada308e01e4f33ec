//! Reading the loosely formatted dates a record source hands out.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

const NAIVE_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parses `raw` into an instant.
///
/// RFC 3339 values carry their own offset. Values without one, including
/// bare dates (local midnight), are read as wall-clock time in `timezone`.
/// Returns `None` for anything else, and for local times skipped by a
/// daylight-saving jump.
#[must_use]
pub fn parse(raw: &str, timezone: Tz) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant);
    }

    let naive = NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;

    timezone.from_local_datetime(&naive).earliest().map(|local| local.fixed_offset())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kolkata(raw: &str) -> Option<String> {
        parse(raw, chrono_tz::Asia::Kolkata).map(|instant| instant.to_rfc3339())
    }

    #[test]
    fn test_parse_rfc3339_keeps_offset() {
        assert_eq!(
            kolkata("2024-01-10T09:30:00.000+05:30").as_deref(),
            Some("2024-01-10T09:30:00+05:30")
        );
        assert_eq!(kolkata("2024-01-10T04:00:00Z").as_deref(), Some("2024-01-10T04:00:00+00:00"));
    }

    #[test]
    fn test_parse_local_values() {
        assert_eq!(kolkata("2024-01-10T09:30:00").as_deref(), Some("2024-01-10T09:30:00+05:30"));
        assert_eq!(kolkata("2024-01-10").as_deref(), Some("2024-01-10T00:00:00+05:30"));
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(kolkata(""), None);
        assert_eq!(kolkata("next tuesday"), None);
        assert_eq!(kolkata("2024-13-40"), None);
    }
}
