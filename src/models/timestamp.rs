//! Lenient timestamp decoding.
//!
//! The service emits either RFC 3339 strings or naive ISO-8601 strings without
//! an offset; the latter are taken to be UTC. A missing, null or unparsable
//! value decodes to `None` so one bad record cannot fail a whole list.

use chrono::{ DateTime, NaiveDateTime, TimeZone, Utc };
use log::warn;
use serde::{ Deserialize, Deserializer };
use serde_json::Value;

pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

pub fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where D: Deserializer<'de>
{
    let parsed = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(raw)) => parse(&raw),
        Some(_) => None,
    };
    if parsed.is_none() {
        warn!("Ignoring unparsable timestamp");
    }
    Ok(parsed)
}
