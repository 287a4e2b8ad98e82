//! Validation of raw values against a parameter definition

use serde_json::Value;

use super::coerce::{as_bool, as_int};
use super::{ParameterDefinition, ParameterType, ParameterValueError};

pub(super) fn validate_value(
    def: &ParameterDefinition,
    value: &Value,
) -> Result<(), ParameterValueError> {
    check_type(def.data_type, value)?;

    let coerced = def.coerce_value(value);
    check_allowed(&def.allowed_values, &coerced)?;

    match (&coerced, def.data_type) {
        (Value::Number(n), ParameterType::Int) => {
            if let Some(n) = n.as_i64() {
                check_range(n, def.min_value, def.max_value)?;
            }
        }
        (Value::String(s), ParameterType::String) => {
            check_length(s.chars().count(), def.min_length, def.max_length)?;
        }
        _ => {}
    }

    Ok(())
}

fn check_type(data_type: ParameterType, value: &Value) -> Result<(), ParameterValueError> {
    let accepted = match data_type {
        ParameterType::String => value.is_string(),
        ParameterType::Int => as_int(value).is_some(),
        ParameterType::Bool => as_bool(value).is_some(),
    };

    if accepted {
        Ok(())
    } else {
        Err(ParameterValueError::TypeMismatch {
            expected: data_type.to_string(),
            actual: json_type_name(value).to_string(),
        })
    }
}

fn check_allowed(allowed: &[Value], value: &Value) -> Result<(), ParameterValueError> {
    if allowed.is_empty() || allowed.contains(value) {
        return Ok(());
    }

    let allowed = allowed
        .iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    Err(ParameterValueError::NotAllowed { allowed })
}

fn check_range(value: i64, min: Option<i64>, max: Option<i64>) -> Result<(), ParameterValueError> {
    if let Some(minimum) = min.filter(|m| value < *m) {
        return Err(ParameterValueError::BelowMinimum { value, minimum });
    }
    if let Some(maximum) = max.filter(|m| value > *m) {
        return Err(ParameterValueError::AboveMaximum { value, maximum });
    }
    Ok(())
}

fn check_length(
    length: usize,
    min: Option<usize>,
    max: Option<usize>,
) -> Result<(), ParameterValueError> {
    if let Some(minimum) = min.filter(|m| length < *m) {
        return Err(ParameterValueError::TooShort { length, minimum });
    }
    if let Some(maximum) = max.filter(|m| length > *m) {
        return Err(ParameterValueError::TooLong { length, maximum });
    }
    Ok(())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "number",
        Value::Number(_) => "int",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
