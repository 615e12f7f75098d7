/*
 * override-path
 * Copyright (c) 2025 Posit, PBC
 */

//! Path primitives for tenant overrides.
//!
//! An override path addresses a nested field inside a JSON tree using dot
//! notation (`theme.colors.primary`) with optional bracket indices
//! (`nav.items[2].label`). Bracket indices are normalized to plain segments,
//! so `a[0].b` and `a.0.b` are the same path.
//!
//! # Key Features
//!
//! - **Parsing**: [`parse`] splits a path into owned segments
//! - **Access**: [`get`], [`set`], [`exists`], [`delete`] walk a `serde_json::Value`
//! - **Enumeration**: [`flatten`] lists every leaf path of a tree
//! - **Wildcards**: [`match_path`] matches paths against `*` / `**` patterns
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//!
//! let mut tree = json!({ "theme": { "colors": { "primary": "#111111" } } });
//!
//! override_path::set(&mut tree, "theme.colors.secondary", json!("#ff9800")).unwrap();
//! assert_eq!(
//!     override_path::get(&tree, "theme.colors.secondary"),
//!     Some(&json!("#ff9800"))
//! );
//!
//! assert!(override_path::match_path("theme.colors.primary", "theme.**"));
//! assert!(!override_path::match_path("theme.colors.primary", "theme.*"));
//! ```

mod access;
mod compare;
mod error;
mod pattern;
mod segment;

pub use access::{delete, exists, flatten, get, get_mut, set, set_segments, type_name};

pub use compare::values_equal;

pub use error::PathError;

pub use pattern::{
    DOUBLE_WILDCARD,
    MatchLimits,
    SINGLE_WILDCARD,
    is_wildcard_pattern,
    match_path,
    match_path_with_limits,
};

pub use segment::{is_index_segment, join_path, parse};
