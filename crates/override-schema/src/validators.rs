/*
 * validators.rs
 * Copyright (c) 2025 Posit, PBC
 */

// Standalone value validators usable as custom validators

use crate::error::{ValidationError, ValidationErrorKind, ValidationResult, ValidationWarning};
use once_cell::sync::Lazy;
use override_path::type_name;
use regex::Regex;
use serde_json::Value;

/// Pattern accepted by [`validate_hex_color`]: `#rgb`, `#rrggbb`, or `#rrggbbaa`.
pub const HEX_COLOR_PATTERN: &str = r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$";

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(HEX_COLOR_PATTERN).expect("hex color regex is valid"));

/// Validate a CSS hex color.
///
/// Errors carry an empty path; when registered as a custom validator they
/// are attributed to the override path. Null is accepted, matching how
/// schema properties treat it. The three-digit shorthand is accepted with a
/// warning suggesting the expanded form.
pub fn validate_hex_color(value: &Value) -> ValidationResult {
    if value.is_null() {
        return ValidationResult::ok();
    }

    let Some(color) = value.as_str() else {
        return ValidationResult::failure(
            ValidationError::new(
                "",
                ValidationErrorKind::TypeMismatch {
                    expected: "string".to_string(),
                    got: type_name(value).to_string(),
                },
            )
            .with_value(value.clone()),
        );
    };

    if !HEX_COLOR.is_match(color) {
        return ValidationResult::failure(
            ValidationError::new(
                "",
                ValidationErrorKind::PatternMismatch {
                    value: color.to_string(),
                    pattern: HEX_COLOR_PATTERN.to_string(),
                },
            )
            .with_value(value.clone()),
        );
    }

    if color.len() == 4 {
        let expanded: String = color[1..].chars().flat_map(|c| [c, c]).collect();
        let warning = ValidationWarning::new("", "Shorthand hex color")
            .with_suggestion(format!("#{}", expanded));
        return ValidationResult::from_parts(Vec::new(), vec![warning]);
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_colors() {
        assert!(validate_hex_color(&json!("#ff5722")).valid);
        assert!(validate_hex_color(&json!("#FF572280")).valid);
    }

    #[test]
    fn test_shorthand_warns() {
        let result = validate_hex_color(&json!("#abc"));
        assert!(result.valid);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].suggestion.as_deref(), Some("#aabbcc"));
    }

    #[test]
    fn test_invalid_color() {
        let result = validate_hex_color(&json!("orange"));
        assert!(!result.valid);
        assert_eq!(result.errors[0].code, "TO-1-14");
    }

    #[test]
    fn test_null_is_accepted() {
        let result = validate_hex_color(&Value::Null);
        assert!(result.valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_non_string() {
        let result = validate_hex_color(&json!(255));
        assert!(!result.valid);
        assert_eq!(result.errors[0].received_type.as_deref(), Some("number"));
    }
}
