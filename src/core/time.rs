use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Formats accepted for naive (zone-less) timestamps, interpreted as UTC
const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parse a timestamp leniently
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS` (with `T` or space) and bare
/// `YYYY-MM-DD` dates (midnight UTC). Anything else yields `None`.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Check that the outer window fully contains the inner one
///
/// Bounds are inclusive. A missing bound on either side is never a match.
#[inline]
pub fn window_contains(
    outer_start: Option<DateTime<Utc>>,
    outer_end: Option<DateTime<Utc>>,
    inner_start: Option<DateTime<Utc>>,
    inner_end: Option<DateTime<Utc>>,
) -> bool {
    match (outer_start, outer_end, inner_start, inner_end) {
        (Some(os), Some(oe), Some(is), Some(ie)) => os <= is && oe >= ie,
        _ => false,
    }
}

/// Serde adapter for optional timestamps that never fails
///
/// Strings go through [`parse_instant`]; integers are epoch milliseconds.
/// Anything unparseable becomes `None`.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(|v| match v {
        serde_json::Value::String(raw) => parse_instant(raw),
        serde_json::Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    }))
}
