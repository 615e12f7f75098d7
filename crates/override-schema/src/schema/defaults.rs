/*
 * defaults.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Schema for the paths common to most site templates.

use super::{OverrideSchema, SchemaProperty};
use crate::validators::HEX_COLOR_PATTERN;
use serde_json::json;

/// Build the default schema for common template paths.
///
/// Covers metadata, theme colors/typography/spacing, layout, navigation,
/// feature flags and free-form content. Unknown paths are tolerated with a
/// warning so templates can add fields ahead of the schema.
pub fn default_template_schema() -> OverrideSchema {
    OverrideSchema::new()
        .with_path(
            "metadata.title",
            SchemaProperty::string().with_description("Site title shown in the header and tab"),
        )
        .with_path("metadata.description", SchemaProperty::string())
        .with_path(
            "metadata.favicon",
            SchemaProperty::string().with_pattern(r"^(https?://|/)"),
        )
        .with_path(
            "theme.colors.*",
            SchemaProperty::string().with_pattern(HEX_COLOR_PATTERN),
        )
        .with_path("theme.typography.fontFamily", SchemaProperty::string())
        .with_path(
            "theme.typography.fontSize",
            SchemaProperty::number()
                .with_range(Some(8.0), Some(72.0))
                .with_default(json!(16)),
        )
        .with_path(
            "theme.spacing.*",
            SchemaProperty::number().with_range(Some(0.0), None),
        )
        .with_path(
            "theme.borderRadius",
            SchemaProperty::number().with_range(Some(0.0), Some(64.0)),
        )
        .with_path(
            "layout.variant",
            SchemaProperty::string()
                .with_enum(vec![json!("full-width"), json!("boxed"), json!("split")])
                .with_default(json!("full-width")),
        )
        .with_path(
            "layout.maxWidth",
            SchemaProperty::number().with_range(Some(320.0), Some(3840.0)),
        )
        .with_path(
            "layout.sidebar",
            SchemaProperty::object()
                .with_property("enabled", SchemaProperty::boolean())
                .with_property(
                    "position",
                    SchemaProperty::string().with_enum(vec![json!("left"), json!("right")]),
                ),
        )
        .with_path(
            "navigation.items",
            SchemaProperty::array().with_items(
                SchemaProperty::object()
                    .with_property("label", SchemaProperty::string().required())
                    .with_property("href", SchemaProperty::string().required()),
            ),
        )
        .with_path("features.*", SchemaProperty::boolean())
        .with_path("content.**", SchemaProperty::any())
        .allow_unknown_paths(true)
}
