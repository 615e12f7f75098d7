/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

// Error and result types for override validation

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Structured validation error kinds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ValidationErrorKind {
    /// Type mismatch
    TypeMismatch { expected: String, got: String },

    /// Required value is null or absent
    RequiredValueMissing,

    /// String doesn't match pattern
    PatternMismatch { value: String, pattern: String },

    /// The schema's pattern is not a valid regular expression
    InvalidPattern { pattern: String, message: String },

    /// Number outside the inclusive bounds
    NumberOutOfRange {
        value: f64,
        minimum: Option<f64>,
        maximum: Option<f64>,
    },

    /// Value not in enum
    InvalidEnumValue { value: String, allowed: Vec<String> },

    /// Path not declared by a closed schema
    UnknownPath,

    /// Error reported by a custom validator
    Custom { message: String },
}

impl ValidationErrorKind {
    /// Get the error code for this error kind
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationErrorKind::RequiredValueMissing => "TO-1-10",
            ValidationErrorKind::TypeMismatch { .. } => "TO-1-11",
            ValidationErrorKind::InvalidEnumValue { .. } => "TO-1-12",
            ValidationErrorKind::PatternMismatch { .. } => "TO-1-14",
            ValidationErrorKind::NumberOutOfRange { .. } => "TO-1-15",
            ValidationErrorKind::UnknownPath => "TO-1-18",
            ValidationErrorKind::InvalidPattern { .. } => "TO-1-21",
            ValidationErrorKind::Custom { .. } => "TO-1-99",
        }
    }

    /// Format a human-readable message from this error kind
    pub fn message(&self) -> String {
        match self {
            ValidationErrorKind::TypeMismatch { expected, got } => {
                format!("Expected {}, got {}", expected, got)
            }
            ValidationErrorKind::RequiredValueMissing => "Required value is missing".to_string(),
            ValidationErrorKind::PatternMismatch { value, pattern } => {
                format!("String '{}' does not match pattern '{}'", value, pattern)
            }
            ValidationErrorKind::InvalidPattern { pattern, message } => {
                format!("Invalid regex pattern '{}': {}", pattern, message)
            }
            ValidationErrorKind::NumberOutOfRange {
                value,
                minimum,
                maximum,
            } => match (minimum, maximum) {
                (Some(min), _) if value < min => {
                    format!("Number {} is less than minimum {}", value, min)
                }
                (_, Some(max)) if value > max => {
                    format!("Number {} is greater than maximum {}", value, max)
                }
                _ => format!("Number {} is out of range", value),
            },
            ValidationErrorKind::InvalidEnumValue { value, allowed } => {
                format!(
                    "Value must be one of: {}, got {}",
                    allowed.join(", "),
                    value
                )
            }
            ValidationErrorKind::UnknownPath => "Path is not allowed by the schema".to_string(),
            ValidationErrorKind::Custom { message } => message.clone(),
        }
    }
}

/// A single validation failure at an override path
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{path}: {message}")]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    /// Override path (or nested sub-path) the error refers to
    pub path: String,
    /// Human-readable message
    pub message: String,
    /// Stable error code (e.g. `TO-1-11`)
    pub code: String,
    /// The structured error kind
    pub kind: ValidationErrorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received_type: Option<String>,
    /// The offending value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl ValidationError {
    /// Create a new validation error with a structured kind
    pub fn new(path: impl Into<String>, kind: ValidationErrorKind) -> Self {
        let (expected_type, received_type) = match &kind {
            ValidationErrorKind::TypeMismatch { expected, got } => {
                (Some(expected.clone()), Some(got.clone()))
            }
            _ => (None, None),
        };
        Self {
            path: path.into(),
            message: kind.message(),
            code: kind.error_code().to_string(),
            kind,
            expected_type,
            received_type,
            value: None,
        }
    }

    /// Create an error with a free-form message, for custom validators
    pub fn custom(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            path,
            ValidationErrorKind::Custom {
                message: message.into(),
            },
        )
    }

    /// Attach the offending value
    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }
}

/// A non-fatal finding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Outcome of validating an override map (or a single value)
///
/// `valid` is true exactly when `errors` is empty. `warnings` is omitted
/// from serialized output when empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// A passing result with no findings
    pub fn ok() -> Self {
        Self::from_parts(Vec::new(), Vec::new())
    }

    /// Build a result, deriving `valid` from the errors
    pub fn from_parts(errors: Vec<ValidationError>, warnings: Vec<ValidationWarning>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// A failing result with a single error
    pub fn failure(error: ValidationError) -> Self {
        Self::from_parts(vec![error], Vec::new())
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Append another result's findings to this one
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.valid = self.errors.is_empty();
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}
