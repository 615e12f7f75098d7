/*
 * access.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Reading and writing values at override paths.
//!
//! All functions operate on `serde_json::Value`. Numeric segments index
//! arrays; on objects every segment, numeric or not, is a key.

use crate::error::PathError;
use crate::segment::{is_index_segment, join_path, parse};
use serde_json::{Map, Value};

/// Largest distance past the end of an array that a write may pad with nulls.
const MAX_INDEX_GAP: usize = 4096;

/// Get the value at `path`, or `None` if any segment is missing.
///
/// An empty path addresses the root.
pub fn get<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    parse(path)
        .iter()
        .try_fold(root, |current, segment| child(current, segment))
}

/// Mutable counterpart of [`get`].
pub fn get_mut<'a>(root: &'a mut Value, path: &str) -> Option<&'a mut Value> {
    parse(path)
        .iter()
        .try_fold(root, |current, segment| child_mut(current, segment))
}

/// Whether every segment of `path` is present. A present `null` counts.
pub fn exists(root: &Value, path: &str) -> bool {
    get(root, path).is_some()
}

/// Write `value` at `path`, creating missing intermediate containers.
///
/// A missing (or `null`) intermediate becomes an array when the following
/// segment is numeric and an object otherwise. An existing scalar is never
/// replaced: that case fails with [`PathError::NotAContainer`].
pub fn set(root: &mut Value, path: &str, value: Value) -> Result<(), PathError> {
    set_segments(root, &parse(path), value)
}

/// [`set`] over already-parsed segments.
pub fn set_segments(root: &mut Value, segments: &[String], value: Value) -> Result<(), PathError> {
    let Some((last, parents)) = segments.split_last() else {
        return Err(PathError::EmptyPath);
    };

    // Fail before touching the tree so a rejected write leaves no new containers behind.
    check_writable(root, segments)?;

    let mut current = root;
    for (depth, segment) in parents.iter().enumerate() {
        let walked = &segments[..depth];
        let next_is_index = is_index_segment(&segments[depth + 1]);
        current = child_or_insert(current, segment, next_is_index, walked)?;
    }

    match current {
        Value::Object(map) => {
            map.insert(last.clone(), value);
            Ok(())
        }
        Value::Array(items) => {
            let index = array_index(items.len(), last, parents)?;
            *slot_at(items, index) = value;
            Ok(())
        }
        other => Err(PathError::NotAContainer {
            path: display_path(parents),
            found: type_name(other),
        }),
    }
}

/// Remove the value at `path`. Returns whether anything was removed.
///
/// Object keys are removed preserving the order of the remaining keys.
/// Array elements are removed and later elements shift down.
pub fn delete(root: &mut Value, path: &str) -> bool {
    let segments = parse(path);
    let Some((last, parents)) = segments.split_last() else {
        return false;
    };

    let parent = parents
        .iter()
        .try_fold(root, |current, segment| child_mut(current, segment));

    match parent {
        Some(Value::Object(map)) => map.shift_remove(last.as_str()).is_some(),
        Some(Value::Array(items)) => match last.parse::<usize>() {
            Ok(index) if index < items.len() => {
                items.remove(index);
                true
            }
            _ => false,
        },
        _ => false,
    }
}

/// List the path of every leaf under `root`, in document order.
///
/// A leaf is a scalar, `null`, or an empty object/array. A scalar root has
/// no leaf paths. `prefix` is prepended to every emitted path.
pub fn flatten(root: &Value, prefix: &str) -> Vec<String> {
    let mut paths = Vec::new();
    flatten_children(root, prefix, &mut paths);
    paths
}

fn flatten_children(value: &Value, prefix: &str, paths: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, entry) in map {
                flatten_child(entry, join_path(prefix, key), paths);
            }
        }
        Value::Array(items) => {
            for (index, entry) in items.iter().enumerate() {
                flatten_child(entry, join_path(prefix, &index.to_string()), paths);
            }
        }
        _ => {}
    }
}

fn flatten_child(child: &Value, path: String, paths: &mut Vec<String>) {
    if is_nonempty_container(child) {
        flatten_children(child, &path, paths);
    } else {
        paths.push(path);
    }
}

/// JSON type name of a value, as used in error messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn is_nonempty_container(value: &Value) -> bool {
    match value {
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => false,
    }
}

fn child<'a>(current: &'a Value, segment: &str) -> Option<&'a Value> {
    match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

fn child_mut<'a>(current: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
    match current {
        Value::Object(map) => map.get_mut(segment),
        Value::Array(items) => segment
            .parse::<usize>()
            .ok()
            .and_then(move |i| items.get_mut(i)),
        _ => None,
    }
}

/// Read-only walk that fails exactly where [`set_segments`] would.
fn check_writable(root: &Value, segments: &[String]) -> Result<(), PathError> {
    let mut current = Some(root);
    for (depth, segment) in segments.iter().enumerate() {
        let walked = &segments[..depth];
        current = match current {
            Some(Value::Object(map)) => map.get(segment.as_str()),
            Some(Value::Array(items)) => {
                let index = array_index(items.len(), segment, walked)?;
                items.get(index)
            }
            // Missing (or null) intermediate: a fresh container is created here.
            None | Some(Value::Null) if depth > 0 => {
                if is_index_segment(segment) {
                    array_index(0, segment, walked)?;
                }
                None
            }
            Some(other) => {
                return Err(PathError::NotAContainer {
                    path: display_path(walked),
                    found: type_name(other),
                });
            }
            None => None,
        };
    }
    Ok(())
}

/// Descend into `segment`, creating a container if the slot is empty.
fn child_or_insert<'a>(
    current: &'a mut Value,
    segment: &str,
    next_is_index: bool,
    walked: &[String],
) -> Result<&'a mut Value, PathError> {
    let slot = match current {
        Value::Object(map) => map.entry(segment.to_string()).or_insert(Value::Null),
        Value::Array(items) => {
            let index = array_index(items.len(), segment, walked)?;
            slot_at(items, index)
        }
        other => {
            return Err(PathError::NotAContainer {
                path: display_path(walked),
                found: type_name(other),
            });
        }
    };

    match *slot {
        Value::Null => {
            *slot = if next_is_index {
                Value::Array(Vec::new())
            } else {
                Value::Object(Map::new())
            };
            Ok(slot)
        }
        Value::Object(_) | Value::Array(_) => Ok(slot),
        _ => {
            let mut offending = walked.to_vec();
            offending.push(segment.to_string());
            Err(PathError::NotAContainer {
                path: display_path(&offending),
                found: type_name(slot),
            })
        }
    }
}

fn array_index(len: usize, segment: &str, walked: &[String]) -> Result<usize, PathError> {
    match segment.parse::<usize>() {
        Ok(index) if is_index_segment(segment) && index <= len + MAX_INDEX_GAP => Ok(index),
        _ => Err(PathError::InvalidIndex {
            path: display_path(walked),
            segment: segment.to_string(),
        }),
    }
}

/// Slot `index` of `items`, padding with nulls when writing past the end.
fn slot_at(items: &mut Vec<Value>, index: usize) -> &mut Value {
    if index >= items.len() {
        items.resize(index + 1, Value::Null);
    }
    &mut items[index]
}

fn display_path(segments: &[String]) -> String {
    if segments.is_empty() {
        "(root)".to_string()
    } else {
        segments.join(".")
    }
}
