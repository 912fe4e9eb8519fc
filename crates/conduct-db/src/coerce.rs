//! Value coercion at the store boundary.
//!
//! Inbound, every JSON boolean becomes `1`/`0` regardless of kind, and the
//! payload is checked against the kind's column whitelist. Outbound, SQL NULL
//! is dropped (absent and NULL are the same thing), and incident rows get
//! their contact flags surfaced as booleans and `createdAt` as an integer.

use conduct_core::enums::Kind;
use conduct_core::record::Payload;
use serde_json::Value;

use crate::error::StoreError;

/// Validate a write payload and convert it to storage form.
///
/// Returns the primary key alongside the coerced payload.
///
/// # Errors
///
/// - `MalformedPayload` for an empty payload, an unknown column, or a nested
///   array/object value.
/// - `MissingKey` if `id` is absent, null, or empty.
pub fn inbound(kind: Kind, payload: Payload) -> Result<(String, Payload), StoreError> {
    if payload.is_empty() {
        return Err(StoreError::MalformedPayload("no data received".into()));
    }

    let id = match payload.get(Kind::PRIMARY_KEY) {
        None | Some(Value::Null) => return Err(StoreError::MissingKey(Kind::PRIMARY_KEY)),
        Some(Value::String(s)) if s.is_empty() => {
            return Err(StoreError::MissingKey(Kind::PRIMARY_KEY));
        }
        Some(Value::String(s)) => s.clone(),
        Some(other) => {
            return Err(StoreError::MalformedPayload(format!(
                "primary key must be a string, got {other}"
            )));
        }
    };

    let mut stored = Payload::new();
    for (field, value) in payload {
        if !kind.has_column(&field) {
            return Err(StoreError::MalformedPayload(format!(
                "unknown field '{field}' for {kind}"
            )));
        }
        let value = match value {
            Value::Bool(b) => Value::from(i64::from(b)),
            Value::Array(_) | Value::Object(_) => {
                return Err(StoreError::MalformedPayload(format!(
                    "field '{field}' must be a scalar"
                )));
            }
            scalar => scalar,
        };
        stored.insert(field, value);
    }

    Ok((id, stored))
}

/// Convert a stored row to its outbound shape.
#[must_use]
pub fn outbound(kind: Kind, stored: Payload) -> Payload {
    let mut out: Payload = stored.into_iter().filter(|(_, v)| !v.is_null()).collect();

    for flag in kind.flag_columns() {
        let value = out.get(*flag).is_some_and(truthy);
        out.insert((*flag).to_string(), Value::Bool(value));
    }
    for column in kind.integer_columns() {
        let value = out.get(*column).map_or(0, as_integer);
        out.insert((*column).to_string(), Value::from(value));
    }

    out
}

/// Interpret a stored flag. Anything other than a nonzero number, `true`, or
/// a numeric string that is nonzero counts as false.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => s.trim().parse::<f64>().is_ok_and(|f| f != 0.0),
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}

/// Interpret a stored integer column; unparseable values become 0.
#[allow(clippy::cast_possible_truncation)]
fn as_integer(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .ok()
            .or_else(|| s.trim().parse::<f64>().ok().map(|f| f as i64))
            .unwrap_or(0),
        Value::Bool(b) => i64::from(*b),
        Value::Null | Value::Array(_) | Value::Object(_) => 0,
    }
}
