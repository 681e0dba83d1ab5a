//! Display formatters and default producers shared by field descriptors.
//!
//! Formatters take `Option<&Value>` so an absent key and an explicit `null`
//! both degrade to [`PLACEHOLDER`]. None of them can fail.

use crate::fragment::whole_i64;
use serde_json::{Number, Value};
use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};
use uuid::Uuid;

/// Rendered in place of a missing or empty value.
pub const PLACEHOLDER: &str = "-";

const DISPLAY_DATE: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short], [month repr:short] [day padding:none], [year], [hour repr:12 padding:none]:[minute] [period]"
);

const NANOS_PER_MILLI: i128 = 1_000_000;

//
// ============================================================================
// Time
// ============================================================================
//

/// Current wall-clock time in epoch milliseconds.
#[must_use]
pub fn now_millis() -> i64 {
    let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / NANOS_PER_MILLI;

    i64::try_from(millis).unwrap_or(i64::MAX)
}

/// Human display string for an epoch-millisecond timestamp (UTC).
#[must_use]
pub fn display_date(millis: i64) -> Option<String> {
    let nanos = i128::from(millis) * NANOS_PER_MILLI;
    let date = OffsetDateTime::from_unix_timestamp_nanos(nanos).ok()?;

    date.format(DISPLAY_DATE).ok()
}

//
// ============================================================================
// Defaults
// ============================================================================
//

pub(crate) fn default_none() -> Option<Value> {
    None
}

pub(crate) fn default_uuid() -> Option<Value> {
    Some(Value::String(Uuid::new_v4().to_string()))
}

pub(crate) fn default_now() -> Option<Value> {
    Some(Value::from(now_millis()))
}

pub(crate) fn default_empty_text() -> Option<Value> {
    Some(Value::String(String::new()))
}

pub(crate) fn default_empty_list() -> Option<Value> {
    Some(Value::Array(Vec::new()))
}

pub(crate) fn default_true() -> Option<Value> {
    Some(Value::Bool(true))
}

pub(crate) fn default_false() -> Option<Value> {
    Some(Value::Bool(false))
}

//
// ============================================================================
// Formatters
// ============================================================================
//

/// Text of a scalar; `-` for absent, null, or empty strings.
pub(crate) fn format_plain(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => PLACEHOLDER.to_string(),
        Some(Value::String(s)) if s.is_empty() => PLACEHOLDER.to_string(),
        Some(value) => scalar_text(value),
    }
}

/// Like [`format_plain`] but keeps empty strings and `false` visible.
pub(crate) fn format_any(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => PLACEHOLDER.to_string(),
        Some(value) => scalar_text(value),
    }
}

/// Object entries as `key: value` pairs.
pub(crate) fn format_details(value: Option<&Value>) -> String {
    match value {
        Some(Value::Object(map)) if !map.is_empty() => map
            .iter()
            .map(|(k, v)| format!("{k}: {}", scalar_text(v)))
            .collect::<Vec<_>>()
            .join(", "),
        Some(Value::Object(_)) => PLACEHOLDER.to_string(),
        other => format_plain(other),
    }
}

pub(crate) fn format_date(value: Option<&Value>) -> String {
    value
        .and_then(whole_i64)
        .and_then(display_date)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub(crate) fn format_yes_no(value: Option<&Value>) -> String {
    if value.and_then(Value::as_bool).unwrap_or(false) {
        "Yes".to_string()
    } else {
        "No".to_string()
    }
}

/// Array elements joined with `, `.
pub(crate) fn format_list(value: Option<&Value>) -> String {
    match value {
        Some(Value::Array(items)) if !items.is_empty() => join_items(items),
        Some(Value::Array(_)) => PLACEHOLDER.to_string(),
        other => format_plain(other),
    }
}

pub(crate) fn format_percent(value: Option<&Value>) -> String {
    match value {
        Some(Value::Number(n)) => format!("{}%", number_text(n)),
        other => format_plain(other),
    }
}

pub(crate) fn join_items(items: &[Value]) -> String {
    items.iter().map(scalar_text).collect::<Vec<_>>().join(", ")
}

/// Display text for one JSON value; strings are unquoted.
pub(crate) fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_text(n),
        other => other.to_string(),
    }
}

// whole floats print without a trailing `.0`
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn number_text(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }

    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() <= crate::MAX_SAFE_INTEGER => {
            (f as i64).to_string()
        }
        _ => n.to_string(),
    }
}

///
/// TESTS
///
