/*
 * paths.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Paths command implementation

use anyhow::Result;
use serde_json::Value;
use std::path::Path;
use tenant_override::{flatten, match_path};

use crate::input;

/// Leaf paths of `tree`, optionally restricted to those matching `pattern`.
pub fn leaf_paths(tree: &Value, pattern: Option<&str>) -> Vec<String> {
    let mut paths = flatten(tree, "");
    if let Some(pattern) = pattern {
        paths.retain(|path| match_path(path, pattern));
    }
    paths
}

/// Execute the paths command
pub fn execute(input: &Path, pattern: Option<&str>) -> Result<()> {
    let tree: Value = input::load(input)?;
    for path in leaf_paths(&tree, pattern) {
        println!("{}", path);
    }
    Ok(())
}
