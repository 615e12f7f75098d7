/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Errors returned when a customization cannot be applied.

use override_path::PathError;
use override_schema::ValidationError;
use thiserror::Error;

/// Errors that abort an apply.
///
/// Only strict mode produces the first two; non-strict mode reports the
/// same problems as warnings instead.
#[derive(Debug, Clone, Error)]
pub enum ApplyError {
    /// Overrides failed schema validation.
    #[error(
        "Overrides for tenant '{tenant_id}' failed validation with {} error(s)",
        errors.len()
    )]
    Validation {
        tenant_id: String,
        /// Every error found, in override order
        errors: Vec<ValidationError>,
    },

    /// An override could not be written into the tree.
    #[error("Cannot apply override '{path}' for tenant '{tenant_id}': {source}")]
    PathApplication {
        tenant_id: String,
        path: String,
        #[source]
        source: PathError,
    },

    /// No customization is registered for the tenant.
    #[error("Unknown tenant '{tenant_id}'")]
    UnknownTenant { tenant_id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let error = ApplyError::PathApplication {
            tenant_id: "acme".into(),
            path: "theme.radius.px".into(),
            source: PathError::NotAContainer {
                path: "theme.radius".into(),
                found: "number",
            },
        };
        insta::assert_snapshot!(
            error,
            @"Cannot apply override 'theme.radius.px' for tenant 'acme': Cannot descend into number at 'theme.radius'"
        );

        let error = ApplyError::Validation {
            tenant_id: "acme".into(),
            errors: vec![ValidationError::custom("a", "bad"), ValidationError::custom("b", "bad")],
        };
        insta::assert_snapshot!(error, @"Overrides for tenant 'acme' failed validation with 2 error(s)");
    }
}
