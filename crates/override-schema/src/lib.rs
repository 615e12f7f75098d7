/*
 * override-schema
 * Copyright (c) 2025 Posit, PBC
 */

//! Schema validation for tenant override maps.
//!
//! A schema declares which override paths a tenant may set and what their
//! values must satisfy. Validation never stops at the first problem: every
//! error and warning is collected into one [`ValidationResult`].
//!
//! # Example
//!
//! ```rust
//! use indexmap::IndexMap;
//! use override_schema::{OverrideSchema, SchemaProperty, validate_overrides};
//! use serde_json::json;
//!
//! let schema = OverrideSchema::new()
//!     .with_path("theme.colors.*", SchemaProperty::string().with_pattern("^#"))
//!     .with_path("metadata.title", SchemaProperty::string().required());
//!
//! let mut overrides = IndexMap::new();
//! overrides.insert("theme.colors.primary".to_string(), json!("#ff5722"));
//!
//! let result = validate_overrides(&overrides, &schema);
//! assert!(!result.valid);
//! assert_eq!(result.errors[0].path, "metadata.title");
//! ```

pub mod error;
pub mod schema;
pub mod validator;
pub mod validators;

pub use error::{ValidationError, ValidationErrorKind, ValidationResult, ValidationWarning};
pub use schema::{
    CustomValidator,
    OverrideSchema,
    PatternPrecedence,
    PropertyMatch,
    SchemaProperty,
    SchemaType,
    default_template_schema,
};
pub use validator::{ValidationContext, validate_overrides, validate_property};
pub use validators::{HEX_COLOR_PATTERN, validate_hex_color};
