//! Parameter resolution
//!
//! Computes the effective parameter values for an invocation by merging
//! caller-supplied values with the defaults declared in the bundle's
//! parameter schema.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::debug;

use crate::bundle::Bundle;
use crate::definition::ParameterDefinition;
use crate::error::{self, Result};

/// Resolved parameter values keyed by parameter name
pub type ParameterValues = BTreeMap<String, Value>;

/// Return the supplied parameter values, or the defaults for those missing
pub fn values_or_defaults(supplied: &ParameterValues, bundle: &Bundle) -> Result<ParameterValues> {
    resolve_values(supplied, &bundle.parameters)
}

/// Resolve values against a parameter schema
///
/// The result holds exactly one entry per schema parameter. Supplied names
/// without a definition are ignored. A supplied value is validated and then
/// coerced to the declared type; an absent one falls back to the declared
/// default (`null` when there is none) unless the parameter is required.
/// The first failure aborts resolution and no partial result is returned.
pub fn resolve_values(
    supplied: &ParameterValues,
    parameters: &BTreeMap<String, ParameterDefinition>,
) -> Result<ParameterValues> {
    let mut resolved = ParameterValues::new();

    for (name, def) in parameters {
        let value = resolve_one(name, def, supplied.get(name))?;
        resolved.insert(name.clone(), value);
    }

    for name in supplied.keys().filter(|k| !parameters.contains_key(*k)) {
        debug!(parameter = %name, "ignoring value for undeclared parameter");
    }

    Ok(resolved)
}

fn resolve_one(name: &str, def: &ParameterDefinition, supplied: Option<&Value>) -> Result<Value> {
    if let Some(value) = supplied {
        def.validate_value(value)
            .map_err(|reason| error::invalid_parameter_value(name, value.clone(), reason))?;
        debug!(parameter = %name, "using supplied value");
        return Ok(def.coerce_value(value));
    }

    if def.required {
        return Err(error::missing_required(name));
    }

    debug!(parameter = %name, "using default value");
    Ok(def.default.clone().unwrap_or(Value::Null))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::definition::ParameterType;
    use crate::error::BundleError;
    use serde_json::json;

    fn values(pairs: &[(&str, Value)]) -> ParameterValues {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    fn schema(pairs: Vec<(&str, ParameterDefinition)>) -> BTreeMap<String, ParameterDefinition> {
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    #[test]
    fn test_default_used_when_not_supplied() {
        let params = schema(vec![(
            "replicas",
            ParameterDefinition::new(ParameterType::Int).with_default(json!(3)),
        )]);

        let resolved = resolve_values(&ParameterValues::new(), &params).unwrap();
        assert_eq!(resolved, values(&[("replicas", json!(3))]));
    }

    #[test]
    fn test_missing_default_resolves_to_null() {
        let params = schema(vec![("label", ParameterDefinition::new(ParameterType::String))]);

        let resolved = resolve_values(&ParameterValues::new(), &params).unwrap();
        assert_eq!(resolved.get("label"), Some(&Value::Null));
    }

    #[test]
    fn test_required_parameter_missing() {
        let params = schema(vec![(
            "token",
            ParameterDefinition::new(ParameterType::String).required(),
        )]);

        let err = resolve_values(&ParameterValues::new(), &params).unwrap_err();
        assert!(matches!(
            err,
            BundleError::MissingRequiredParameter { ref name } if name == "token"
        ));
    }

    #[test]
    fn test_required_parameter_ignores_default() {
        let params = schema(vec![(
            "token",
            ParameterDefinition::new(ParameterType::String)
                .required()
                .with_default(json!("unused")),
        )]);

        assert!(resolve_values(&ParameterValues::new(), &params).is_err());
    }

    #[test]
    fn test_supplied_value_is_coerced() {
        let params = schema(vec![("count", ParameterDefinition::new(ParameterType::Int))]);

        let resolved = resolve_values(&values(&[("count", json!("5"))]), &params).unwrap();
        assert_eq!(resolved, values(&[("count", json!(5))]));
    }

    #[test]
    fn test_extraneous_values_are_ignored() {
        let params = schema(vec![(
            "a",
            ParameterDefinition::new(ParameterType::Int).with_default(json!(1)),
        )]);

        let supplied = values(&[("a", json!(2)), ("b", json!(99))]);
        let resolved = resolve_values(&supplied, &params).unwrap();
        assert_eq!(resolved, values(&[("a", json!(2))]));
    }

    #[test]
    fn test_invalid_value_aborts_resolution() {
        let params = schema(vec![
            ("a", ParameterDefinition::new(ParameterType::Int)),
            (
                "b",
                ParameterDefinition::new(ParameterType::String).with_default(json!("x")),
            ),
        ]);

        let err = resolve_values(&values(&[("a", json!("not a number"))]), &params).unwrap_err();
        match err {
            BundleError::InvalidParameterValue { name, value, .. } => {
                assert_eq!(name, "a");
                assert_eq!(value, json!("not a number"));
            }
            other => panic!("expected invalid value error, got {other:?}"),
        }
    }

    #[test]
    fn test_result_keys_match_schema() {
        let params = schema(vec![
            ("a", ParameterDefinition::new(ParameterType::Bool)),
            ("b", ParameterDefinition::new(ParameterType::String)),
        ]);

        let supplied = values(&[("a", json!(true)), ("z", json!(1))]);
        let resolved = resolve_values(&supplied, &params).unwrap();
        let keys: Vec<_> = resolved.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_values_or_defaults_uses_bundle_parameters() {
        let mut bundle = Bundle::new("app", "0.1.0");
        bundle.parameters.insert(
            "debug".to_string(),
            ParameterDefinition::new(ParameterType::Bool).with_default(json!(false)),
        );

        let resolved = values_or_defaults(&values(&[("debug", json!("true"))]), &bundle).unwrap();
        assert_eq!(resolved, values(&[("debug", json!(true))]));
    }
}
