/*
 * mod.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Command implementations for the tenant-override CLI
//!
//! Each command module loads its inputs, delegates to the `tenant-override`
//! library, and prints JSON to stdout.

pub mod apply;
pub mod diff;
pub mod paths;
pub mod validate;

use anyhow::Result;
use std::path::PathBuf;
use tenant_override::{OverrideSchema, default_template_schema};

use crate::input;

/// Where a command's schema comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaSource {
    None,
    /// The built-in template schema
    Default,
    File(PathBuf),
}

impl SchemaSource {
    /// Resolve `--schema` and `--default-schema`. An explicit file wins.
    pub fn from_flags(schema: Option<PathBuf>, default_schema: bool) -> Self {
        match schema {
            Some(path) => SchemaSource::File(path),
            None if default_schema => SchemaSource::Default,
            None => SchemaSource::None,
        }
    }

    pub fn load(&self) -> Result<Option<OverrideSchema>> {
        match self {
            SchemaSource::None => Ok(None),
            SchemaSource::Default => Ok(Some(default_template_schema())),
            SchemaSource::File(path) => input::load(path).map(Some),
        }
    }
}

/// Serialize `value` as pretty JSON followed by a newline.
pub fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<String> {
    let mut rendered = serde_json::to_string_pretty(value)?;
    rendered.push('\n');
    Ok(rendered)
}
