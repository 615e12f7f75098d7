/*
 * validator.rs
 * Copyright (c) 2025 Posit, PBC
 */

// Override validation engine

use crate::error::{ValidationError, ValidationErrorKind, ValidationResult, ValidationWarning};
use crate::schema::{OverrideSchema, SchemaProperty};
use indexmap::IndexMap;
use override_path::{is_wildcard_pattern, join_path, parse, type_name, values_equal};
use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;

/// Validates every entry of an override map against a schema
///
/// Each path is checked against the rule [`OverrideSchema::resolve`] picks
/// for it. Undeclared paths are errors, or warnings when the schema allows
/// unknown paths. Required literal paths with no override are reported at
/// the declared path.
pub fn validate_overrides(
    overrides: &IndexMap<String, Value>,
    schema: &OverrideSchema,
) -> ValidationResult {
    let mut context = ValidationContext::new();

    for (path, value) in overrides {
        match schema.resolve(path) {
            Some(found) => context.check_property(path, value, found.property),
            None if schema.allow_unknown_paths => {
                let mut warning = ValidationWarning::new(path, "Path is not declared in the schema");
                if let Some(pattern) = closest_pattern(path, schema) {
                    warning = warning.with_suggestion(format!("Did you mean '{}'?", pattern));
                }
                context.add_warning(warning);
            }
            None => context.add_error(
                ValidationError::new(path, ValidationErrorKind::UnknownPath)
                    .with_value(value.clone()),
            ),
        }

        if let Some(validator) = schema.custom_validators.get(path) {
            context.absorb(path, validator(value));
        }
    }

    for (pattern, property) in &schema.allowed_paths {
        if !property.required || is_wildcard_pattern(pattern) {
            continue;
        }
        let declared = parse(pattern);
        if !overrides.keys().any(|path| parse(path) == declared) {
            context.add_error(ValidationError::new(
                pattern,
                ValidationErrorKind::RequiredValueMissing,
            ));
        }
    }

    context.finish()
}

/// Validates one value against one property rule
///
/// Nested object properties and array items produce errors at sub-paths
/// (`layout.sidebar.position`, `navigation.items[2]`).
pub fn validate_property(path: &str, value: &Value, property: &SchemaProperty) -> ValidationResult {
    let mut context = ValidationContext::new();
    context.check_property(path, value, property);
    context.finish()
}

/// Validation context accumulates findings during one validation call
pub struct ValidationContext {
    errors: Vec<ValidationError>,
    warnings: Vec<ValidationWarning>,
    /// Compiled schema patterns, keyed by source
    regexes: HashMap<String, Result<Regex, String>>,
}

impl ValidationContext {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
            regexes: HashMap::new(),
        }
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Append a custom validator's findings, attributing pathless ones to `path`
    pub fn absorb(&mut self, path: &str, result: ValidationResult) {
        for mut error in result.errors {
            if error.path.is_empty() {
                error.path = path.to_string();
            }
            self.errors.push(error);
        }
        for mut warning in result.warnings {
            if warning.path.is_empty() {
                warning.path = path.to_string();
            }
            self.warnings.push(warning);
        }
    }

    pub fn finish(self) -> ValidationResult {
        ValidationResult::from_parts(self.errors, self.warnings)
    }

    /// Check a value against a rule, recursing into objects and arrays
    fn check_property(&mut self, path: &str, value: &Value, property: &SchemaProperty) {
        if value.is_null() {
            if property.required {
                self.add_error(
                    ValidationError::new(path, ValidationErrorKind::RequiredValueMissing)
                        .with_value(Value::Null),
                );
            }
            return;
        }

        if !property.kind.accepts(value) {
            self.add_error(
                ValidationError::new(
                    path,
                    ValidationErrorKind::TypeMismatch {
                        expected: property.kind.name().to_string(),
                        got: type_name(value).to_string(),
                    },
                )
                .with_value(value.clone()),
            );
            return;
        }

        match value {
            Value::String(s) => {
                if let Some(pattern) = &property.pattern {
                    self.check_pattern(path, s, pattern);
                }
            }
            Value::Number(n) => {
                if let Some(number) = n.as_f64() {
                    self.check_range(path, number, property);
                }
            }
            _ => {}
        }

        if let Some(allowed) = &property.allowed_values
            && !allowed.iter().any(|candidate| values_equal(candidate, value))
        {
            self.add_error(
                ValidationError::new(
                    path,
                    ValidationErrorKind::InvalidEnumValue {
                        value: value.to_string(),
                        allowed: allowed.iter().map(Value::to_string).collect(),
                    },
                )
                .with_value(value.clone()),
            );
        }

        match value {
            Value::Object(map) => {
                if let Some(properties) = &property.properties {
                    for (key, nested) in properties {
                        let nested_path = join_path(path, key);
                        match map.get(key) {
                            Some(nested_value) => {
                                self.check_property(&nested_path, nested_value, nested)
                            }
                            None if nested.required => self.add_error(ValidationError::new(
                                nested_path,
                                ValidationErrorKind::RequiredValueMissing,
                            )),
                            None => {}
                        }
                    }
                }
            }
            Value::Array(items) => {
                if let Some(item_property) = &property.items {
                    for (index, item) in items.iter().enumerate() {
                        let item_path = format!("{}[{}]", path, index);
                        self.check_property(&item_path, item, item_property);
                    }
                }
            }
            _ => {}
        }
    }

    fn check_pattern(&mut self, path: &str, value: &str, pattern: &str) {
        let compiled = self
            .regexes
            .entry(pattern.to_string())
            .or_insert_with(|| Regex::new(pattern).map_err(|e| e.to_string()));

        let error = match compiled {
            Ok(re) if re.is_match(value) => return,
            Ok(_) => ValidationErrorKind::PatternMismatch {
                value: value.to_string(),
                pattern: pattern.to_string(),
            },
            // Schema pattern failed to compile
            Err(message) => ValidationErrorKind::InvalidPattern {
                pattern: pattern.to_string(),
                message: message.clone(),
            },
        };
        self.add_error(ValidationError::new(path, error).with_value(Value::String(value.to_string())));
    }

    fn check_range(&mut self, path: &str, number: f64, property: &SchemaProperty) {
        let below = property.min.is_some_and(|min| number < min);
        let above = property.max.is_some_and(|max| number > max);
        if below || above {
            self.add_error(
                ValidationError::new(
                    path,
                    ValidationErrorKind::NumberOutOfRange {
                        value: number,
                        minimum: property.min,
                        maximum: property.max,
                    },
                )
                .with_value(Value::from(number)),
            );
        }
    }
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self::new()
    }
}

/// The declared pattern sharing the longest leading run of segments with `path`
fn closest_pattern<'a>(path: &str, schema: &'a OverrideSchema) -> Option<&'a str> {
    let segments = parse(path);
    schema
        .allowed_paths
        .keys()
        .map(|pattern| {
            let shared = parse(pattern)
                .iter()
                .zip(&segments)
                .take_while(|(a, b)| a == b)
                .count();
            (shared, pattern.as_str())
        })
        .filter(|(shared, _)| *shared > 0)
        .fold(None, |best: Option<(usize, &str)>, candidate| match best {
            Some((shared, _)) if shared >= candidate.0 => best,
            _ => Some(candidate),
        })
        .map(|(_, pattern)| pattern)
}
