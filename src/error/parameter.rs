//! Parameter resolution errors

use super::BundleError;
use crate::definition::ParameterValueError;

/// Creates an error for a supplied value rejected by its definition
pub fn invalid_value(
    name: impl Into<String>,
    value: serde_json::Value,
    reason: ParameterValueError,
) -> BundleError {
    BundleError::InvalidParameterValue {
        name: name.into(),
        value,
        reason,
    }
}

/// Creates an error for a required parameter with no supplied value
pub fn missing_required(name: impl Into<String>) -> BundleError {
    BundleError::MissingRequiredParameter { name: name.into() }
}
