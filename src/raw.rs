//! Coercion helpers for the loosely-typed records the API returns.
//!
//! The service encodes almost every scalar as a JSON string (`"type": "1"`), but numbers are
//! accepted as well. "Absent" is decided here, once, per field kind.

use serde_json::{Map, Value};

use crate::error::{MonitorError, Result};

pub type RawRecord = Map<String, Value>;

pub(crate) const RATIO_SEPARATOR: char = '-';

fn required<'a>(raw: &'a RawRecord, field: &'static str) -> Result<&'a Value> {
    raw.get(field).ok_or(MonitorError::MissingField { field })
}

fn scalar(field: &'static str, value: &Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(MonitorError::format(field, other.to_string())),
    }
}

fn parse_int(field: &'static str, text: &str) -> Result<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| MonitorError::format(field, text))
}

fn parse_float(field: &'static str, text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| MonitorError::format(field, text))
}

/// Required, non-null scalar rendered as text.
pub(crate) fn text(raw: &RawRecord, field: &'static str) -> Result<String> {
    scalar(field, required(raw, field)?)?.ok_or_else(|| MonitorError::format(field, "null"))
}

/// Required key whose empty value means "not set". Whitespace is kept, so `"   "` is set.
pub(crate) fn optional_text(raw: &RawRecord, field: &'static str) -> Result<Option<String>> {
    Ok(scalar(field, required(raw, field)?)?.filter(|s| !s.is_empty()))
}

pub(crate) fn int(raw: &RawRecord, field: &'static str) -> Result<i64> {
    parse_int(field, &text(raw, field)?)
}

/// Optional integer; only null and `""` count as absent, so a literal zero survives.
pub(crate) fn optional_int(raw: &RawRecord, field: &'static str) -> Result<Option<i64>> {
    optional_text(raw, field)?
        .map(|s| parse_int(field, &s))
        .transpose()
}

/// Optional port; zero is kept, anything outside `0..=65535` is malformed.
pub(crate) fn optional_port(raw: &RawRecord, field: &'static str) -> Result<Option<u16>> {
    optional_text(raw, field)?
        .map(|s| {
            let port = parse_int(field, &s)?;
            u16::try_from(port).map_err(|_| MonitorError::format(field, s.as_str()))
        })
        .transpose()
}

/// Optional table code. No table uses 0, so the API's zero placeholder is absent too.
pub(crate) fn optional_code(raw: &RawRecord, field: &'static str) -> Result<Option<i64>> {
    Ok(optional_int(raw, field)?.filter(|code| *code != 0))
}

pub(crate) fn float(raw: &RawRecord, field: &'static str) -> Result<f64> {
    parse_float(field, &text(raw, field)?)
}

/// Sequence of nested records under an optional key. Absent or null yields nothing.
pub(crate) fn records<'a>(raw: &'a RawRecord, field: &'static str) -> Result<Vec<&'a RawRecord>> {
    match raw.get(field) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_object()
                    .ok_or_else(|| MonitorError::format(field, item.to_string()))
            })
            .collect(),
        Some(other) => Err(MonitorError::format(field, other.to_string())),
    }
}

/// Splits a `-` joined list of ratios. A negative ratio cannot be expressed: its sign is read
/// as a separator and leaves an empty segment, which is rejected.
pub(crate) fn ratios(field: &'static str, joined: &str) -> Result<Vec<f64>> {
    if joined.is_empty() {
        return Ok(Vec::new());
    }
    joined
        .split(RATIO_SEPARATOR)
        .map(|segment| parse_float(field, segment.trim()))
        .collect()
}

/// `ratios` over an optional key. An empty string is read as "no ratios" rather than as one
/// malformed segment.
pub(crate) fn optional_ratios(raw: &RawRecord, field: &'static str) -> Result<Vec<f64>> {
    match raw.get(field) {
        None => Ok(Vec::new()),
        Some(value) => match scalar(field, value)? {
            Some(joined) => ratios(field, &joined),
            None => Ok(Vec::new()),
        },
    }
}
