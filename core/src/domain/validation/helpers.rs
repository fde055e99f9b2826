use chrono::NaiveDate;
use serde_json::{Map, Value};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Digit-only check. A leading minus sign makes the value non-numeric.
pub fn is_number(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

pub fn is_float(value: &str) -> bool {
    value.trim().parse::<f64>().is_ok()
}

pub fn is_alphabetic(value: &str) -> bool {
    !value.is_empty() && value.chars().all(char::is_alphabetic)
}

/// Looks up a key, treating an explicit `null` as absent.
pub(crate) fn present<'a>(payload: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    payload.get(key).filter(|value| !value.is_null())
}

pub(crate) fn non_negative_integer(value: &Value) -> Option<i32> {
    match value {
        Value::Number(number) => number.as_u64().and_then(|n| i32::try_from(n).ok()),
        Value::String(text) if is_number(text) => text.parse().ok(),
        _ => None,
    }
}

pub(crate) fn parse_decimal(text: &str) -> Option<f64> {
    let text = text.trim();
    if !is_float(text) || is_alphabetic(text) {
        return None;
    }
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

pub(crate) fn decimal(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64().filter(|value| value.is_finite()),
        Value::String(text) => parse_decimal(text),
        _ => None,
    }
}

pub(crate) fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}

pub(crate) fn date(value: &Value) -> Option<NaiveDate> {
    value.as_str().and_then(parse_date)
}
