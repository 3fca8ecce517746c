//! Field extraction helpers for the response mappers. Absent or wrongly
//! typed fields always come back as `None`, never as an error.

use chrono::{DateTime, Utc};
use serde_json::Value;

static NULL: Value = Value::Null;

pub(crate) fn subtree<'a>(payload: &'a Value, field: &str) -> &'a Value {
    payload.get(field).unwrap_or(&NULL)
}

pub(crate) fn string(raw: &Value, field: &str) -> Option<String> {
    raw.get(field).and_then(Value::as_str).map(str::to_owned)
}

pub(crate) fn integer(raw: &Value, field: &str) -> Option<i64> {
    raw.get(field).and_then(Value::as_i64)
}

pub(crate) fn timestamp(raw: &Value, field: &str) -> Option<DateTime<Utc>> {
    raw.get(field)
        .and_then(Value::as_str)
        .and_then(|text| DateTime::parse_from_rfc3339(text).ok())
        .map(|parsed| parsed.with_timezone(&Utc))
}
