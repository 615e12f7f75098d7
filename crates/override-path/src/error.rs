/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Errors for path application.

use thiserror::Error;

/// Errors that can occur while writing a value at a path.
///
/// Reads never fail; they return `None` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The path has no segments.
    #[error("Cannot set a value at an empty path")]
    EmptyPath,

    /// An existing value along the path is a scalar and cannot hold children.
    #[error("Cannot descend into {found} at '{path}'")]
    NotAContainer {
        /// Path of the offending value (`(root)` for the tree itself)
        path: String,
        /// JSON type name of the offending value
        found: &'static str,
    },

    /// A segment addressing an array is not a usable index.
    #[error("Invalid array index '{segment}' at '{path}'")]
    InvalidIndex {
        /// Path of the array
        path: String,
        /// The segment that failed to resolve
        segment: String,
    },
}
