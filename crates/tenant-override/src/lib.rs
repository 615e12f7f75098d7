/*
 * tenant-override
 * Copyright (c) 2025 Posit, PBC
 */

//! Tenant override engine.
//!
//! Applies a tenant's override map to a base template without touching the
//! base, optionally validating it against an [`OverrideSchema`] first.
//!
//! # Key Features
//!
//! - **Apply**: [`apply`] returns the customized tree with applied paths and warnings
//! - **Diff**: [`extract_overrides`] recovers the override map between two trees
//! - **Merge**: [`merge_overrides`] layers maps, later ones winning
//! - **Registry**: [`TenantRegistry`] holds customizations per tenant
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use tenant_override::{ApplyOptions, TenantCustomization, apply, default_template_schema};
//!
//! let base = json!({ "theme": { "colors": { "primary": "#000000" } } });
//! let customization = TenantCustomization::new("acme", "Acme Corp", "storefront")
//!     .with_override("theme.colors.primary", json!("#ff5722"))
//!     .with_override("theme.colors.secondary", json!("#ff9800"));
//!
//! let schema = default_template_schema();
//! let applied = apply(&base, &customization, &ApplyOptions::new().with_schema(&schema)).unwrap();
//!
//! assert_eq!(
//!     applied.customized["theme"]["colors"],
//!     json!({ "primary": "#ff5722", "secondary": "#ff9800" })
//! );
//! assert_eq!(base["theme"]["colors"]["primary"], json!("#000000"));
//! ```

pub mod apply;
pub mod diff;
pub mod error;
pub mod options;
pub mod registry;
pub mod types;

pub use apply::{AppliedCustomization, ApplyWarning, apply};
pub use diff::{extract_overrides, filter_overrides_by_pattern, merge_overrides};
pub use error::ApplyError;
pub use options::{ApplyOptions, ArrayMergeStrategy};
pub use registry::TenantRegistry;
pub use types::{CustomizationMetadata, OverrideMap, OverrideValue, TenantCustomization, TenantRef};

pub use override_path::{
    PathError,
    delete,
    exists,
    flatten,
    get,
    match_path,
    parse,
    set,
};
pub use override_schema::{
    OverrideSchema,
    SchemaProperty,
    SchemaType,
    ValidationError,
    ValidationResult,
    ValidationWarning,
    default_template_schema,
    validate_overrides,
};
