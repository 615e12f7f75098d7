/*
 * types.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Core type definitions for tenant customization.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A JSON value usable as an override or as part of a base template.
///
/// The closed set of JSON variants means a clone can never drop data.
pub type OverrideValue = Value;

/// Override path to value. Iteration order is application order.
pub type OverrideMap = IndexMap<String, OverrideValue>;

/// One tenant's overrides against a named base template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantCustomization {
    pub tenant_id: String,
    pub tenant_name: String,

    /// Identifier of the template the overrides target
    pub base_template: String,

    #[serde(default)]
    pub overrides: OverrideMap,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<CustomizationMetadata>,
}

/// Bookkeeping attached to a customization. Not interpreted by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomizationMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Any other keys, preserved as-is
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Tenant identity reported with an applied customization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantRef {
    pub id: String,
    pub name: String,
}

impl TenantCustomization {
    /// Create a customization with no overrides.
    pub fn new(
        tenant_id: impl Into<String>,
        tenant_name: impl Into<String>,
        base_template: impl Into<String>,
    ) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            tenant_name: tenant_name.into(),
            base_template: base_template.into(),
            overrides: OverrideMap::new(),
            metadata: None,
        }
    }

    /// Append an override. Re-setting a path keeps its original position.
    pub fn with_override(mut self, path: impl Into<String>, value: OverrideValue) -> Self {
        self.overrides.insert(path.into(), value);
        self
    }

    /// Replace the override map.
    pub fn with_overrides(mut self, overrides: OverrideMap) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn with_metadata(mut self, metadata: CustomizationMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn tenant(&self) -> TenantRef {
        TenantRef {
            id: self.tenant_id.clone(),
            name: self.tenant_name.clone(),
        }
    }
}
