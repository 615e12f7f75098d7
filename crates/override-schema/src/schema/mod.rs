/*
 * mod.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Schema definitions for override maps
//!
//! An [`OverrideSchema`] maps path patterns to [`SchemaProperty`] rules.
//! Patterns use the wildcard syntax of [`override_path::match_path`]:
//! `theme.colors.*` governs every direct child of `theme.colors`, and
//! `content.**` governs everything beneath `content`.
//!
//! When several patterns match one path, [`PatternPrecedence`] picks the
//! governing rule deterministically.

mod defaults;
mod types;

pub use defaults::default_template_schema;
pub use types::{SchemaProperty, SchemaType};

use crate::error::ValidationResult;
use indexmap::IndexMap;
use override_path::{DOUBLE_WILDCARD, MatchLimits, SINGLE_WILDCARD, match_path_with_limits, parse};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Reverse;
use std::fmt;
use std::sync::Arc;

/// A validator run against the value of one exact override path.
///
/// Errors and warnings with an empty `path` are attributed to the override
/// path the validator is registered for.
pub type CustomValidator = Arc<dyn Fn(&Value) -> ValidationResult + Send + Sync>;

/// Rule for choosing among several matching wildcard patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PatternPrecedence {
    /// The most specific pattern wins: most literal segments, then fewest
    /// `**` segments, then most segments overall. Remaining ties go to the
    /// pattern declared first.
    #[default]
    MostSpecific,

    /// The first matching pattern in declaration order wins.
    DeclaredOrder,
}

/// Which override paths are allowed and what their values must satisfy
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideSchema {
    /// Path pattern to rule, in declaration order
    #[serde(default)]
    pub allowed_paths: IndexMap<String, SchemaProperty>,

    /// Whether undeclared paths are warnings instead of errors
    #[serde(default)]
    pub allow_unknown_paths: bool,

    #[serde(default)]
    pub precedence: PatternPrecedence,

    /// Bounds on wildcard matching during resolution
    #[serde(skip)]
    pub match_limits: MatchLimits,

    /// Validators keyed by exact override path (never pattern-matched)
    #[serde(skip)]
    pub custom_validators: IndexMap<String, CustomValidator>,
}

/// The rule governing one override path.
#[derive(Debug, Clone, Copy)]
pub struct PropertyMatch<'a> {
    /// The declared pattern that won
    pub pattern: &'a str,
    pub property: &'a SchemaProperty,
    /// How many declared patterns matched the path
    pub candidates: usize,
}

/// Ordering key for [`PatternPrecedence::MostSpecific`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Specificity {
    literals: usize,
    fewer_globs: Reverse<usize>,
    segments: usize,
}

impl Specificity {
    fn of(pattern: &str) -> Self {
        let segments = parse(pattern);
        let globs = segments.iter().filter(|s| *s == DOUBLE_WILDCARD).count();
        let singles = segments.iter().filter(|s| *s == SINGLE_WILDCARD).count();
        Self {
            literals: segments.len() - globs - singles,
            fewer_globs: Reverse(globs),
            segments: segments.len(),
        }
    }
}

impl OverrideSchema {
    /// Create an empty, closed schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a rule for a path pattern.
    pub fn with_path(mut self, pattern: impl Into<String>, property: SchemaProperty) -> Self {
        self.allowed_paths.insert(pattern.into(), property);
        self
    }

    /// Set whether undeclared paths are tolerated.
    pub fn allow_unknown_paths(mut self, allow: bool) -> Self {
        self.allow_unknown_paths = allow;
        self
    }

    /// Set the pattern precedence rule.
    pub fn with_precedence(mut self, precedence: PatternPrecedence) -> Self {
        self.precedence = precedence;
        self
    }

    pub fn with_match_limits(mut self, limits: MatchLimits) -> Self {
        self.match_limits = limits;
        self
    }

    /// Register a custom validator for an exact override path.
    pub fn with_custom_validator<F>(mut self, path: impl Into<String>, validator: F) -> Self
    where
        F: Fn(&Value) -> ValidationResult + Send + Sync + 'static,
    {
        self.custom_validators.insert(path.into(), Arc::new(validator));
        self
    }

    /// Find the rule governing `path`.
    ///
    /// An exact key wins outright. Otherwise every declared pattern is
    /// matched and [`Self::precedence`] picks among the candidates.
    pub fn resolve(&self, path: &str) -> Option<PropertyMatch<'_>> {
        if let Some((pattern, property)) = self.allowed_paths.get_key_value(path) {
            return Some(PropertyMatch {
                pattern,
                property,
                candidates: 1,
            });
        }

        let mut candidates = 0;
        let mut best: Option<(&str, &SchemaProperty, Specificity)> = None;

        for (pattern, property) in &self.allowed_paths {
            if !match_path_with_limits(path, pattern, &self.match_limits) {
                continue;
            }
            candidates += 1;
            let specificity = Specificity::of(pattern);
            let replace = match (&best, self.precedence) {
                (None, _) => true,
                (Some(_), PatternPrecedence::DeclaredOrder) => false,
                (Some((_, _, current)), PatternPrecedence::MostSpecific) => specificity > *current,
            };
            if replace {
                best = Some((pattern.as_str(), property, specificity));
            }
        }

        let (pattern, property, _) = best?;
        if candidates > 1 {
            tracing::debug!(
                path,
                pattern,
                candidates,
                precedence = ?self.precedence,
                "Multiple schema patterns match; resolved by precedence"
            );
        }
        Some(PropertyMatch {
            pattern,
            property,
            candidates,
        })
    }
}

impl fmt::Debug for OverrideSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverrideSchema")
            .field("allowed_paths", &self.allowed_paths)
            .field("allow_unknown_paths", &self.allow_unknown_paths)
            .field("precedence", &self.precedence)
            .field("match_limits", &self.match_limits)
            .field(
                "custom_validators",
                &self.custom_validators.keys().collect::<Vec<_>>(),
            )
            .finish()
    }
}
