//! Coercion of raw values to a parameter's declared type

use serde_json::Value;

use super::ParameterType;

pub(super) fn coerce_value(data_type: ParameterType, value: &Value) -> Value {
    match data_type {
        ParameterType::Int => as_int(value).map_or_else(|| value.clone(), Value::from),
        ParameterType::Bool => as_bool(value).map_or_else(|| value.clone(), Value::Bool),
        ParameterType::String => value.clone(),
    }
}

/// Interpret a value as an integer: JSON integers, floats without a
/// fractional part, and strings that parse as `i64`
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub(super) fn as_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Interpret a value as a boolean: JSON booleans and the strings
/// `"true"` and `"false"`
pub(super) fn as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}
