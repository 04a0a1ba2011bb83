//! Ordered alias-chain accessors over raw JSON payloads.
//!
//! The backend's schema has drifted over time, so every attribute is read
//! through a fixed list of candidate field names tried in sequence. Each
//! accessor is pure: a candidate that is missing, null, empty, or fails to
//! coerce falls through to the next one.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;

/// First non-null value among the candidate keys.
#[must_use]
pub fn first_value<'a>(obj: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|k| obj.get(*k))
        .find(|v| !v.is_null())
}

/// First candidate that yields a non-empty string. JSON numbers are
/// stringified, so a numeric `id: 1` resolves to `"1"`.
#[must_use]
pub fn first_string(obj: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().filter_map(|k| obj.get(*k)).find_map(|v| match v {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// First candidate that coerces to a finite float. String values are
/// safe-parsed; unparsable strings fall through.
#[must_use]
pub fn first_f64(obj: &Value, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .filter_map(|k| obj.get(*k))
        .find_map(coerce_f64)
        .filter(|f| f.is_finite())
}

/// First candidate that coerces to a non-negative integer. Floats truncate.
#[must_use]
pub fn first_u32(obj: &Value, keys: &[&str]) -> Option<u32> {
    first_f64(obj, keys).and_then(|f| {
        if f < 0.0 {
            None
        } else {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            Some(f.min(f64::from(u32::MAX)) as u32)
        }
    })
}

/// First candidate that parses as a decimal. Strings parse exactly
/// (`"10"` stays `10`); floats convert with their nearest representation.
#[must_use]
pub fn first_decimal(obj: &Value, keys: &[&str]) -> Option<Decimal> {
    keys.iter()
        .filter_map(|k| obj.get(*k))
        .find_map(coerce_decimal)
}

/// True when any candidate holds a `true` flag. Mirrors the storefront's
/// `a || b || false` chains, where an explicit `false` falls through.
#[must_use]
pub fn truthy_flag(obj: &Value, keys: &[&str]) -> bool {
    keys.iter()
        .filter_map(|k| obj.get(*k))
        .any(|v| v.as_bool() == Some(true))
}

fn coerce_f64(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn coerce_decimal(v: &Value) -> Option<Decimal> {
    match v {
        Value::String(s) => s.trim().parse::<Decimal>().ok(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(Decimal::from(i))
            } else {
                n.as_f64().and_then(Decimal::from_f64)
            }
        }
        _ => None,
    }
}
