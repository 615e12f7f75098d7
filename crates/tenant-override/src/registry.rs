/*
 * registry.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! In-memory store of tenant customizations.

use crate::apply::{AppliedCustomization, apply};
use crate::error::ApplyError;
use crate::options::ApplyOptions;
use crate::types::TenantCustomization;
use indexmap::IndexMap;
use serde_json::Value;

/// Customizations keyed by tenant id, in registration order.
///
/// A registry is an ordinary value: create one where it is needed and pass
/// it to whatever applies customizations.
#[derive(Debug, Clone, Default)]
pub struct TenantRegistry {
    tenants: IndexMap<String, TenantCustomization>,
}

impl TenantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a customization, returning the one it replaced.
    ///
    /// A replaced tenant keeps its registration position.
    pub fn register(&mut self, customization: TenantCustomization) -> Option<TenantCustomization> {
        let previous = self
            .tenants
            .insert(customization.tenant_id.clone(), customization);
        if let Some(previous) = &previous {
            tracing::debug!(tenant = previous.tenant_id.as_str(), "Replaced customization");
        }
        previous
    }

    pub fn get(&self, tenant_id: &str) -> Option<&TenantCustomization> {
        self.tenants.get(tenant_id)
    }

    pub fn remove(&mut self, tenant_id: &str) -> Option<TenantCustomization> {
        self.tenants.shift_remove(tenant_id)
    }

    pub fn contains(&self, tenant_id: &str) -> bool {
        self.tenants.contains_key(tenant_id)
    }

    /// Registered tenant ids, in registration order.
    pub fn tenant_ids(&self) -> impl Iterator<Item = &str> {
        self.tenants.keys().map(String::as_str)
    }

    /// Customizations targeting `base_template`.
    pub fn customizations_for_template<'r>(
        &'r self,
        base_template: &'r str,
    ) -> impl Iterator<Item = &'r TenantCustomization> {
        self.tenants
            .values()
            .filter(move |customization| customization.base_template == base_template)
    }

    pub fn len(&self) -> usize {
        self.tenants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tenants.is_empty()
    }

    /// Apply the customization registered for `tenant_id` to `data`.
    pub fn apply_for<'a>(
        &self,
        tenant_id: &str,
        data: &'a Value,
        options: &ApplyOptions<'_>,
    ) -> Result<AppliedCustomization<'a>, ApplyError> {
        let customization = self.get(tenant_id).ok_or_else(|| ApplyError::UnknownTenant {
            tenant_id: tenant_id.to_string(),
        })?;
        apply(data, customization, options)
    }
}

impl FromIterator<TenantCustomization> for TenantRegistry {
    fn from_iter<I: IntoIterator<Item = TenantCustomization>>(iter: I) -> Self {
        let mut registry = Self::new();
        for customization in iter {
            registry.register(customization);
        }
        registry
    }
}
