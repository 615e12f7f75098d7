/*
 * diff.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Diff command implementation

use anyhow::Result;
use serde_json::Value;
use std::path::Path;
use tenant_override::extract_overrides;

use super::to_pretty_json;
use crate::input;

/// Execute the diff command
pub fn execute(original: &Path, customized: &Path) -> Result<()> {
    let original: Value = input::load(original)?;
    let customized: Value = input::load(customized)?;

    let overrides = extract_overrides(&original, &customized);
    tracing::debug!(overrides = overrides.len(), "Extracted overrides");
    print!("{}", to_pretty_json(&overrides)?);
    Ok(())
}
