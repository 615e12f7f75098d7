/*
 * segment.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Path parsing.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a bracket index such as `[12]`.
static BRACKET_INDEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(\d+)\]").expect("bracket index regex is valid"));

/// Split an override path into segments.
///
/// `[n]` is rewritten to `.n` before splitting on `.`, and empty segments
/// are dropped, so `""` yields an empty list and `a..b` yields `["a", "b"]`.
pub fn parse(path: &str) -> Vec<String> {
    if path.is_empty() {
        return Vec::new();
    }

    let normalized = BRACKET_INDEX.replace_all(path, ".$1");
    normalized
        .split('.')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether a segment is a non-negative decimal integer (`^\d+$`).
///
/// Decides whether a missing intermediate container becomes an array.
pub fn is_index_segment(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// Join a prefix and a key with a dot, omitting the dot for an empty prefix.
pub fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}
