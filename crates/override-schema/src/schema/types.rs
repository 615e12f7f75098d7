/*
 * types.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Schema property definitions
//!
//! A [`SchemaProperty`] is one rule: a type tag plus optional constraints.
//! Object rules nest further properties; array rules carry an item rule.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Declared type of an override value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Number,
    Boolean,
    Object,
    Array,
    /// Any value (no type check)
    Any,
}

impl SchemaType {
    /// Name used in error messages
    pub fn name(self) -> &'static str {
        match self {
            SchemaType::String => "string",
            SchemaType::Number => "number",
            SchemaType::Boolean => "boolean",
            SchemaType::Object => "object",
            SchemaType::Array => "array",
            SchemaType::Any => "any",
        }
    }

    /// Whether a (non-null) value has this type
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            SchemaType::String => value.is_string(),
            SchemaType::Number => value.is_number(),
            SchemaType::Boolean => value.is_boolean(),
            SchemaType::Object => value.is_object(),
            SchemaType::Array => value.is_array(),
            SchemaType::Any => true,
        }
    }
}

/// A validation rule for one override path (or a nested field)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaProperty {
    #[serde(rename = "type")]
    pub kind: SchemaType,

    /// `null` (or absence, for nested properties) is an error when set
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,

    /// Regular expression a string value must match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Inclusive lower bound for numbers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Inclusive upper bound for numbers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    /// Allowed values, compared structurally
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<Value>>,

    /// Nested rules for object values. Undeclared keys are not checked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, SchemaProperty>>,

    /// Rule applied to every element of an array value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaProperty>>,

    /// Value the template uses when no override is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SchemaProperty {
    pub fn new(kind: SchemaType) -> Self {
        Self {
            kind,
            required: false,
            pattern: None,
            min: None,
            max: None,
            allowed_values: None,
            properties: None,
            items: None,
            default: None,
            description: None,
        }
    }

    pub fn string() -> Self {
        Self::new(SchemaType::String)
    }

    pub fn number() -> Self {
        Self::new(SchemaType::Number)
    }

    pub fn boolean() -> Self {
        Self::new(SchemaType::Boolean)
    }

    pub fn object() -> Self {
        Self::new(SchemaType::Object)
    }

    pub fn array() -> Self {
        Self::new(SchemaType::Array)
    }

    pub fn any() -> Self {
        Self::new(SchemaType::Any)
    }

    /// Mark the value as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Set inclusive numeric bounds.
    pub fn with_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn with_enum(mut self, values: Vec<Value>) -> Self {
        self.allowed_values = Some(values);
        self
    }

    /// Declare a nested property of an object rule.
    pub fn with_property(mut self, key: impl Into<String>, property: SchemaProperty) -> Self {
        self.properties
            .get_or_insert_with(IndexMap::new)
            .insert(key.into(), property);
        self
    }

    pub fn with_items(mut self, items: SchemaProperty) -> Self {
        self.items = Some(Box::new(items));
        self
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
