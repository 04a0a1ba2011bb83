//! Response-envelope probing.
//!
//! The backend wraps payloads inconsistently: sometimes `{"data": [...]}`,
//! sometimes a bare array, sometimes `{"products": [...]}` or similar. The
//! probes below try each known shape in a fixed precedence order; callers
//! surface `UnexpectedResponseShape` when none matches.

use serde_json::Value;

/// Envelope keys probed for list responses, in precedence order after the
/// bare-array check.
const LIST_KEYS: &[&str] = &["data", "products", "items", "results"];

/// Envelope keys probed for single-object responses, before falling back to
/// the bare object.
const OBJECT_KEYS: &[&str] = &["data", "product"];

/// Extracts the item array from a list response.
///
/// Precedence: bare array, then `data`, `products`, `items`, `results`.
/// A key whose value is not an array falls through to the next candidate.
#[must_use]
pub fn extract_list(body: &Value) -> Option<&Vec<Value>> {
    if let Value::Array(items) = body {
        return Some(items);
    }
    LIST_KEYS
        .iter()
        .filter_map(|k| body.get(*k))
        .find_map(Value::as_array)
}

/// Extracts the payload object from a single-resource response.
///
/// Precedence: `data` wrapper, `product` wrapper, then the bare object.
#[must_use]
pub fn extract_object(body: &Value) -> Option<&Value> {
    for key in OBJECT_KEYS {
        if let Some(inner) = body.get(*key) {
            if inner.is_object() {
                return Some(inner);
            }
        }
    }
    body.is_object().then_some(body)
}
