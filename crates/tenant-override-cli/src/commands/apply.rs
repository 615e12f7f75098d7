/*
 * apply.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Apply command implementation

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tenant_override::{ApplyOptions, ArrayMergeStrategy, TenantCustomization, apply};
use tracing::{info, warn};

use super::{SchemaSource, to_pretty_json};
use crate::input;

/// `--array-merge` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ArrayMerge {
    Replace,
    Concat,
}

impl From<ArrayMerge> for ArrayMergeStrategy {
    fn from(value: ArrayMerge) -> Self {
        match value {
            ArrayMerge::Replace => ArrayMergeStrategy::Replace,
            ArrayMerge::Concat => ArrayMergeStrategy::Concat,
        }
    }
}

/// Arguments for the apply command
#[derive(Debug)]
pub struct ApplyArgs {
    pub base: PathBuf,
    pub customization: PathBuf,
    pub schema: SchemaSource,
    pub strict: bool,
    pub validate: bool,
    pub array_merge: ArrayMerge,
    /// Output file; stdout when absent
    pub output: Option<PathBuf>,
}

/// Execute the apply command
pub fn execute(args: ApplyArgs) -> Result<()> {
    let base: Value = input::load(&args.base)?;
    let customization: TenantCustomization = input::load(&args.customization)?;
    let schema = args.schema.load()?;

    let mut options = ApplyOptions::new()
        .strict(args.strict)
        .validate(args.validate)
        .with_array_merge(args.array_merge.into());
    if let Some(schema) = &schema {
        options = options.with_schema(schema);
    }

    let applied = apply(&base, &customization, &options)
        .with_context(|| format!("Failed to apply {}", args.customization.display()))?;

    for warning in &applied.warnings {
        warn!("{}", warning);
    }
    info!(
        tenant = applied.tenant.id.as_str(),
        applied = applied.applied_paths.len(),
        warnings = applied.warnings.len(),
        "Applied customization"
    );

    let rendered = to_pretty_json(&applied.customized)?;
    match &args.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => std::io::stdout()
            .write_all(rendered.as_bytes())
            .context("Failed to write to stdout")?,
    }
    Ok(())
}
