/*
 * compare.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Structural equality of JSON values.

use serde_json::Value;

/// Whether two values are structurally equal.
///
/// Numbers compare by numeric value, so `1` equals `1.0`. Objects compare
/// by key set regardless of key order; arrays compare element-wise.
pub fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => a == b || a.as_f64() == b.as_f64(),
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| values_equal(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| values_equal(x, y)))
        }
        _ => left == right,
    }
}
