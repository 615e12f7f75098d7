/*
 * pattern.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Wildcard matching of override paths.
//!
//! Patterns are parsed like paths. Two segments are special:
//!
//! - `*` matches exactly one path segment
//! - `**` matches zero or more path segments
//!
//! A trailing `**` matches any remainder, including an empty one, so
//! `theme.**` matches `theme` itself. A `**` in the middle of a pattern is
//! resolved by backtracking over every split point of the remaining path.
//!
//! # Bounding
//!
//! Backtracking over several `**` segments can be combinatorial. Inputs
//! longer than [`MatchLimits::max_segments`] never match, and positions
//! already known to fail are memoized, which keeps the search polynomial in
//! the number of segments.

use crate::segment::parse;
use std::collections::HashSet;

/// Pattern segment matching exactly one path segment.
pub const SINGLE_WILDCARD: &str = "*";

/// Pattern segment matching zero or more path segments.
pub const DOUBLE_WILDCARD: &str = "**";

/// Limits applied while matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchLimits {
    /// Maximum number of segments in either the path or the pattern (default: 64).
    pub max_segments: usize,
}

impl Default for MatchLimits {
    fn default() -> Self {
        Self { max_segments: 64 }
    }
}

/// Whether `path` matches `pattern`, using [`MatchLimits::default`].
pub fn match_path(path: &str, pattern: &str) -> bool {
    match_path_with_limits(path, pattern, &MatchLimits::default())
}

/// Whether `path` matches `pattern` under explicit limits.
pub fn match_path_with_limits(path: &str, pattern: &str, limits: &MatchLimits) -> bool {
    let path_segments = parse(path);
    let pattern_segments = parse(pattern);

    if path_segments.len() > limits.max_segments || pattern_segments.len() > limits.max_segments {
        tracing::debug!(
            path,
            pattern,
            max_segments = limits.max_segments,
            "Path or pattern exceeds segment limit; treating as no match"
        );
        return false;
    }

    let mut matcher = Matcher {
        path: &path_segments,
        pattern: &pattern_segments,
        failed: HashSet::new(),
    };
    matcher.matches(0, 0)
}

/// Whether a pattern contains a `*` or `**` segment.
pub fn is_wildcard_pattern(pattern: &str) -> bool {
    parse(pattern)
        .iter()
        .any(|segment| segment == SINGLE_WILDCARD || segment == DOUBLE_WILDCARD)
}

struct Matcher<'a> {
    path: &'a [String],
    pattern: &'a [String],
    /// `(pattern_index, path_index)` positions known not to match
    failed: HashSet<(usize, usize)>,
}

impl Matcher<'_> {
    fn matches(&mut self, mut pattern_index: usize, mut path_index: usize) -> bool {
        while pattern_index < self.pattern.len() {
            let segment = self.pattern[pattern_index].as_str();

            if segment == DOUBLE_WILDCARD {
                if pattern_index == self.pattern.len() - 1 {
                    return true;
                }
                if self.failed.contains(&(pattern_index, path_index)) {
                    return false;
                }
                for split in path_index..=self.path.len() {
                    if self.matches(pattern_index + 1, split) {
                        return true;
                    }
                }
                self.failed.insert((pattern_index, path_index));
                return false;
            }

            let Some(actual) = self.path.get(path_index) else {
                return false;
            };
            if segment != SINGLE_WILDCARD && segment != actual.as_str() {
                return false;
            }

            pattern_index += 1;
            path_index += 1;
        }

        path_index == self.path.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_match() {
        assert!(match_path("theme.colors.primary", "theme.colors.primary"));
        assert!(!match_path("theme.colors.primary", "theme.colors.secondary"));
    }

    #[test]
    fn test_single_wildcard_consumes_one_segment() {
        assert!(match_path("a.b.c", "a.*.c"));
        assert!(!match_path("a.b.c", "a.*"));
        assert!(!match_path("a", "a.*"));
    }

    #[test]
    fn test_trailing_double_wildcard() {
        assert!(match_path("a.b.c", "a.**"));
        assert!(match_path("a", "a.**"));
        assert!(!match_path("x.y", "a.**"));
    }

    #[test]
    fn test_inner_double_wildcard_backtracks() {
        assert!(match_path("a.b.c.d", "a.**.d"));
        assert!(match_path("a.d", "a.**.d"));
        assert!(match_path("a.d.x.d", "a.**.d"));
        assert!(!match_path("a.d.x", "a.**.d"));
    }

    #[test]
    fn test_leading_double_wildcard() {
        assert!(match_path("theme.colors.primary", "**.primary"));
        assert!(!match_path("theme.colors.primary", "**.secondary"));
    }

    #[test]
    fn test_multiple_double_wildcards() {
        assert!(match_path("a.x.b.y.c", "a.**.b.**.c"));
        assert!(!match_path("a.x.c.y.b", "a.**.b.**.c"));
    }

    #[test]
    fn test_bracket_paths_match_dot_patterns() {
        assert!(match_path("nav.items[3].label", "nav.items.*.label"));
    }

    #[test]
    fn test_length_mismatch() {
        assert!(!match_path("a.b", "a.b.c"));
        assert!(!match_path("a.b.c", "a.b"));
        assert!(match_path("", ""));
    }

    #[test]
    fn test_segment_limit() {
        let limits = MatchLimits { max_segments: 3 };
        assert!(match_path_with_limits("a.b.c", "a.**", &limits));
        assert!(!match_path_with_limits("a.b.c.d", "a.**", &limits));
    }

    #[test]
    fn test_pathological_pattern_terminates() {
        let path = vec!["a"; 60].join(".");
        let pattern = format!("{}.b", vec!["**"; 30].join(".a."));
        assert!(!match_path(&path, &pattern));
    }

    #[test]
    fn test_is_wildcard_pattern() {
        assert!(is_wildcard_pattern("theme.*"));
        assert!(is_wildcard_pattern("content.**"));
        assert!(!is_wildcard_pattern("metadata.title"));
    }
}
