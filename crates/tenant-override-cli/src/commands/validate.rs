/*
 * validate.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Validate command implementation

use anyhow::Result;
use std::path::PathBuf;
use tenant_override::{TenantCustomization, default_template_schema, validate_overrides};

use super::{SchemaSource, to_pretty_json};
use crate::input;

/// Arguments for the validate command
#[derive(Debug)]
pub struct ValidateArgs {
    pub customization: PathBuf,
    pub schema: SchemaSource,
}

/// Execute the validate command
///
/// Prints the full result, then fails if it has any errors.
pub fn execute(args: ValidateArgs) -> Result<()> {
    let customization: TenantCustomization = input::load(&args.customization)?;
    let schema = args.schema.load()?.unwrap_or_else(default_template_schema);

    let result = validate_overrides(&customization.overrides, &schema);
    print!("{}", to_pretty_json(&result)?);

    if !result.valid {
        anyhow::bail!(
            "Overrides for tenant '{}' failed validation with {} error(s)",
            customization.tenant_id,
            result.errors.len()
        );
    }
    Ok(())
}
