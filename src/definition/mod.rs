//! Parameter definitions
//!
//! A [`ParameterDefinition`] is one entry of a bundle's parameter schema. It
//! carries required-ness and a default, and knows how to validate a raw
//! caller-supplied value and coerce it to the declared type.

mod coerce;
mod validate;


use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::bundle::Location;

/// Declared type of a parameter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    #[default]
    String,
    Int,
    Bool,
}

impl ParameterType {
    /// Every supported parameter type
    pub const ALL: [ParameterType; 3] = [
        ParameterType::String,
        ParameterType::Int,
        ParameterType::Bool,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ParameterType::String => "string",
            ParameterType::Int => "int",
            ParameterType::Bool => "bool",
        }
    }
}

impl std::fmt::Display for ParameterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptive metadata for a parameter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterMetadata {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl ParameterMetadata {
    fn is_empty(&self) -> bool {
        self.description.is_empty()
    }
}

/// Schema entry for a single bundle parameter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDefinition {
    #[serde(rename = "type")]
    pub data_type: ParameterType,

    /// Value used when the caller supplies none
    #[serde(
        rename = "defaultValue",
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_values: Vec<serde_json::Value>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    #[serde(default, skip_serializing_if = "ParameterMetadata::is_empty")]
    pub metadata: ParameterMetadata,

    /// Where the resolved value is written inside the invocation image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<Location>,
}

impl ParameterDefinition {
    /// Create an optional parameter of the given type with no default
    pub fn new(data_type: ParameterType) -> Self {
        Self {
            data_type,
            ..Self::default()
        }
    }

    /// Mark the parameter as required
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the default value
    #[must_use]
    pub fn with_default(mut self, value: serde_json::Value) -> Self {
        self.default = Some(value);
        self
    }

    /// Restrict the parameter to a set of allowed values
    #[must_use]
    pub fn with_allowed_values(mut self, values: Vec<serde_json::Value>) -> Self {
        self.allowed_values = values;
        self
    }

    /// Check a raw value against the definition
    ///
    /// The value must be acceptable for the declared type and, once coerced,
    /// satisfy the allowed values and bounds.
    pub fn validate_value(
        &self,
        value: &serde_json::Value,
    ) -> std::result::Result<(), ParameterValueError> {
        validate::validate_value(self, value)
    }

    /// Normalize a raw value to the declared type
    ///
    /// Values that cannot be converted are returned unchanged.
    pub fn coerce_value(&self, value: &serde_json::Value) -> serde_json::Value {
        coerce::coerce_value(self.data_type, value)
    }
}

/// A present key is `Some`, even when its value is `null`
fn present_value<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(b: &bool) -> bool {
    !*b
}

/// Why a value was rejected by a parameter definition
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterValueError {
    #[error("expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    #[error("value is not one of the allowed values: {allowed}")]
    NotAllowed { allowed: String },

    #[error("value {value} is less than the minimum {minimum}")]
    BelowMinimum { value: i64, minimum: i64 },

    #[error("value {value} is greater than the maximum {maximum}")]
    AboveMaximum { value: i64, maximum: i64 },

    #[error("length {length} is shorter than the minimum length {minimum}")]
    TooShort { length: usize, minimum: usize },

    #[error("length {length} is longer than the maximum length {maximum}")]
    TooLong { length: usize, maximum: usize },
}
