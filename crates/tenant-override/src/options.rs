/*
 * options.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Options for applying a customization.

use override_schema::OverrideSchema;
use serde::{Deserialize, Serialize};

/// How an array-valued override combines with an existing array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrayMergeStrategy {
    /// The override array replaces the existing value.
    #[default]
    Replace,

    /// The override's elements are appended when the target is already an
    /// array. Any other target is replaced.
    Concat,
}

/// Options for [`apply`](crate::apply).
#[derive(Debug, Clone, Copy)]
pub struct ApplyOptions<'s> {
    /// Validate overrides against `schema` before applying (default: true).
    pub validate: bool,

    /// Abort on the first validation or path failure (default: false).
    ///
    /// Without `strict`, failures become warnings and the remaining
    /// overrides are still applied.
    pub strict: bool,

    /// Schema to validate against. Validation is skipped without one.
    pub schema: Option<&'s OverrideSchema>,

    pub array_merge: ArrayMergeStrategy,
}

impl Default for ApplyOptions<'_> {
    fn default() -> Self {
        Self {
            validate: true,
            strict: false,
            schema: None,
            array_merge: ArrayMergeStrategy::Replace,
        }
    }
}

impl<'s> ApplyOptions<'s> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schema(mut self, schema: &'s OverrideSchema) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    pub fn with_array_merge(mut self, array_merge: ArrayMergeStrategy) -> Self {
        self.array_merge = array_merge;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ApplyOptions::default();
        assert!(options.validate);
        assert!(!options.strict);
        assert!(options.schema.is_none());
        assert_eq!(options.array_merge, ArrayMergeStrategy::Replace);
    }

    #[test]
    fn test_array_merge_names() {
        let strategy: ArrayMergeStrategy = serde_json::from_str("\"concat\"").unwrap();
        assert_eq!(strategy, ArrayMergeStrategy::Concat);
    }
}
