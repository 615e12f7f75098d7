/*
 * apply.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Applying a tenant customization to a base template.
//!
//! The base tree is borrowed, never mutated: overrides are written into a
//! structural clone. Each override is applied independently in map order,
//! so one bad path affects only itself unless `strict` is set.

use crate::error::ApplyError;
use crate::options::{ApplyOptions, ArrayMergeStrategy};
use crate::types::{OverrideValue, TenantCustomization, TenantRef};
use override_path::{PathError, get_mut, set};
use override_schema::{ValidationError, ValidationWarning, validate_overrides};
use serde_json::Value;
use std::fmt;

/// The result of applying a customization.
#[derive(Debug, Clone)]
pub struct AppliedCustomization<'a> {
    /// The base tree, exactly as passed in
    pub original: &'a Value,

    /// A fresh tree with every applicable override written in
    pub customized: Value,

    /// Paths that were applied, in application order
    pub applied_paths: Vec<String>,

    pub tenant: TenantRef,

    /// Non-fatal findings, in the order they were found
    pub warnings: Vec<ApplyWarning>,
}

/// A problem that did not stop a non-strict apply.
#[derive(Debug, Clone, PartialEq)]
pub enum ApplyWarning {
    /// A schema validation error, downgraded because `strict` is off
    Validation(ValidationError),

    /// A schema warning (for example an unknown path under an open schema)
    Schema(ValidationWarning),

    /// An override that could not be written and was skipped
    Skipped { path: String, error: PathError },
}

impl fmt::Display for ApplyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplyWarning::Validation(error) => write!(f, "{}", error),
            ApplyWarning::Schema(warning) => match &warning.suggestion {
                Some(suggestion) => {
                    write!(f, "{}: {} ({})", warning.path, warning.message, suggestion)
                }
                None => write!(f, "{}: {}", warning.path, warning.message),
            },
            ApplyWarning::Skipped { path, error } => write!(f, "{}: skipped: {}", path, error),
        }
    }
}

impl AppliedCustomization<'_> {
    /// Paths that were skipped because they could not be written.
    pub fn skipped_paths(&self) -> impl Iterator<Item = &str> {
        self.warnings.iter().filter_map(|warning| match warning {
            ApplyWarning::Skipped { path, .. } => Some(path.as_str()),
            _ => None,
        })
    }

    /// Whether every override was applied cleanly with no findings.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Apply `customization` to `data`.
///
/// 1. With `validate` and a schema, the overrides are validated first. In
///    strict mode an invalid map aborts with every error; otherwise the
///    errors become warnings.
/// 2. `data` is cloned.
/// 3. Each override is written in map order. A strict apply aborts on the
///    first failure and discards the clone; a non-strict apply skips it.
pub fn apply<'a>(
    data: &'a Value,
    customization: &TenantCustomization,
    options: &ApplyOptions<'_>,
) -> Result<AppliedCustomization<'a>, ApplyError> {
    let tenant_id = customization.tenant_id.as_str();
    let mut warnings = Vec::new();

    if options.validate
        && let Some(schema) = options.schema
    {
        let report = validate_overrides(&customization.overrides, schema);
        if !report.valid {
            if options.strict {
                return Err(ApplyError::Validation {
                    tenant_id: tenant_id.to_string(),
                    errors: report.errors,
                });
            }
            tracing::warn!(
                tenant = tenant_id,
                errors = report.errors.len(),
                "Overrides failed validation; applying best effort"
            );
        }
        warnings.extend(report.errors.into_iter().map(ApplyWarning::Validation));
        warnings.extend(report.warnings.into_iter().map(ApplyWarning::Schema));
    }

    let mut customized = data.clone();
    let mut applied_paths = Vec::with_capacity(customization.overrides.len());

    for (path, value) in &customization.overrides {
        match apply_override(&mut customized, path, value, options.array_merge) {
            Ok(()) => {
                tracing::debug!(tenant = tenant_id, path = path.as_str(), "Applied override");
                applied_paths.push(path.clone());
            }
            Err(source) if options.strict => {
                return Err(ApplyError::PathApplication {
                    tenant_id: tenant_id.to_string(),
                    path: path.clone(),
                    source,
                });
            }
            Err(error) => {
                tracing::warn!(
                    tenant = tenant_id,
                    path = path.as_str(),
                    %error,
                    "Skipping override"
                );
                warnings.push(ApplyWarning::Skipped {
                    path: path.clone(),
                    error,
                });
            }
        }
    }

    Ok(AppliedCustomization {
        original: data,
        customized,
        applied_paths,
        tenant: customization.tenant(),
        warnings,
    })
}

fn apply_override(
    tree: &mut Value,
    path: &str,
    value: &OverrideValue,
    array_merge: ArrayMergeStrategy,
) -> Result<(), PathError> {
    if array_merge == ArrayMergeStrategy::Concat
        && let Value::Array(additions) = value
        && let Some(Value::Array(existing)) = get_mut(tree, path)
    {
        existing.extend(additions.iter().cloned());
        return Ok(());
    }
    set(tree, path, value.clone())
}
