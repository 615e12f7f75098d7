/*
 * diff.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Deriving, combining, and filtering override maps.

use crate::types::{OverrideMap, OverrideValue};
use override_path::{join_path, match_path, values_equal};
use serde_json::{Map, Value};

/// Derive the overrides that turn `original` into `customized`.
///
/// - A key added in `customized` is emitted at its path; an added non-empty
///   object is expanded into its leaf paths instead.
/// - A key removed in `customized` is emitted as `null`.
/// - Objects present on both sides are compared key by key. Arrays and
///   scalars compare as whole values.
///
/// Paths appear in `customized` key order, followed by removals. Only object
/// roots are compared; any other root yields an empty map.
pub fn extract_overrides(original: &Value, customized: &Value) -> OverrideMap {
    let mut overrides = OverrideMap::new();
    match (original, customized) {
        (Value::Object(original), Value::Object(customized)) => {
            diff_objects(original, customized, "", &mut overrides);
        }
        _ => {
            if !values_equal(original, customized) {
                tracing::debug!("Roots are not both objects; no paths to extract");
            }
        }
    }
    overrides
}

fn diff_objects(
    original: &Map<String, Value>,
    customized: &Map<String, Value>,
    prefix: &str,
    out: &mut OverrideMap,
) {
    for (key, new_value) in customized {
        let path = join_path(prefix, key);
        match (original.get(key), new_value) {
            (None, _) => emit_added(path, new_value, out),
            (Some(Value::Object(old)), Value::Object(new)) => diff_objects(old, new, &path, out),
            (Some(old_value), _) => {
                if !values_equal(old_value, new_value) {
                    out.insert(path, new_value.clone());
                }
            }
        }
    }

    for key in original.keys() {
        if !customized.contains_key(key) {
            out.insert(join_path(prefix, key), Value::Null);
        }
    }
}

fn emit_added(path: String, value: &OverrideValue, out: &mut OverrideMap) {
    match value {
        Value::Object(children) if !children.is_empty() => {
            for (key, child) in children {
                emit_added(join_path(&path, key), child, out);
            }
        }
        _ => {
            out.insert(path, value.clone());
        }
    }
}

/// Combine override maps, later maps winning.
///
/// A path keeps the position of its first appearance; its value is the
/// last one seen.
pub fn merge_overrides<'a>(maps: impl IntoIterator<Item = &'a OverrideMap>) -> OverrideMap {
    let mut merged = OverrideMap::new();
    for map in maps {
        for (path, value) in map {
            merged.insert(path.clone(), value.clone());
        }
    }
    merged
}

/// The entries whose path matches `pattern`, in their original order.
pub fn filter_overrides_by_pattern(overrides: &OverrideMap, pattern: &str) -> OverrideMap {
    overrides
        .iter()
        .filter(|(path, _)| match_path(path, pattern))
        .map(|(path, value)| (path.clone(), value.clone()))
        .collect()
}
