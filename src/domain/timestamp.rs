// ISO-8601 rendering for timestamps in serialized records
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

/// Formats as `2026-10-18T07:30:00.000Z`.
pub fn to_iso(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn serialize<S: Serializer>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&to_iso(time))
}
