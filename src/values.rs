//! Caller-supplied parameter values
//!
//! Values come from a YAML or JSON values file and from `name=value` pairs
//! given on the command line. Pair values are read as YAML scalars, so `3`
//! is an integer, `true` a boolean and anything unparseable a string.

use std::path::Path;

use serde_json::Value;

use crate::error::{self, Result};
use crate::resolver::ParameterValues;

/// Parse a single `name=value` pair
pub fn parse_set_value(input: &str) -> Result<(String, Value)> {
    let (name, raw) = input
        .split_once('=')
        .ok_or_else(|| error::invalid_set_value(input))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(error::invalid_set_value(input));
    }

    Ok((name.to_string(), parse_scalar(raw)))
}

/// Parse a list of `name=value` pairs, later pairs overriding earlier ones
pub fn parse_set_values<S: AsRef<str>>(inputs: &[S]) -> Result<ParameterValues> {
    let mut values = ParameterValues::new();
    for input in inputs {
        let (name, value) = parse_set_value(input.as_ref())?;
        values.insert(name, value);
    }
    Ok(values)
}

fn parse_scalar(raw: &str) -> Value {
    if raw.is_empty() {
        return Value::String(String::new());
    }
    match serde_yaml::from_str::<Value>(raw) {
        Ok(value @ (Value::Bool(_) | Value::Number(_) | Value::String(_))) => value,
        _ => Value::String(raw.to_string()),
    }
}

/// Parse a values document (a YAML or JSON mapping)
pub fn parse_values(content: &str, origin: &str) -> Result<ParameterValues> {
    if content.trim().is_empty() {
        return Ok(ParameterValues::new());
    }

    let value: Value = serde_yaml::from_str(content)
        .map_err(|e| error::values_parse_failed(origin, e.to_string()))?;

    match value {
        Value::Null => Ok(ParameterValues::new()),
        Value::Object(map) => Ok(map.into_iter().collect()),
        other => Err(error::values_parse_failed(
            origin,
            format!("expected a mapping, found {other}"),
        )),
    }
}

/// Read a values file
pub fn read_values_file(path: &Path) -> Result<ParameterValues> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => error::file_not_found(path.display().to_string()),
        _ => error::file_read_failed(path.display().to_string(), e.to_string()),
    })?;
    parse_values(&content, &path.display().to_string())
}

/// Collect supplied values from an optional file and `name=value` overrides
pub fn collect(file: Option<&Path>, sets: &[String]) -> Result<ParameterValues> {
    let mut values = match file {
        Some(path) => read_values_file(path)?,
        None => ParameterValues::new(),
    };
    values.extend(parse_set_values(sets)?);
    Ok(values)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::BundleError;
    use serde_json::json;

    #[test]
    fn test_parse_set_value_types() {
        assert_eq!(parse_set_value("n=3").unwrap(), ("n".to_string(), json!(3)));
        assert_eq!(
            parse_set_value("flag=true").unwrap(),
            ("flag".to_string(), json!(true))
        );
        assert_eq!(
            parse_set_value("name=web").unwrap(),
            ("name".to_string(), json!("web"))
        );
    }

    #[test]
    fn test_parse_set_value_keeps_equals_in_value() {
        assert_eq!(
            parse_set_value("conn=a=b").unwrap(),
            ("conn".to_string(), json!("a=b"))
        );
    }

    #[test]
    fn test_parse_set_value_empty_value() {
        assert_eq!(parse_set_value("x=").unwrap(), ("x".to_string(), json!("")));
    }

    #[test]
    fn test_parse_set_value_non_scalar_stays_string() {
        assert_eq!(
            parse_set_value("list=[1, 2]").unwrap(),
            ("list".to_string(), json!("[1, 2]"))
        );
    }

    #[test]
    fn test_parse_set_value_invalid() {
        assert!(matches!(
            parse_set_value("novalue"),
            Err(BundleError::InvalidSetValue { .. })
        ));
        assert!(matches!(
            parse_set_value("=value"),
            Err(BundleError::InvalidSetValue { .. })
        ));
    }

    #[test]
    fn test_later_sets_override() {
        let values = parse_set_values(&["a=1", "a=2"]).unwrap();
        assert_eq!(values.get("a"), Some(&json!(2)));
    }

    #[test]
    fn test_parse_values_yaml() {
        let values = parse_values("replicas: 3\nname: web\n", "values.yaml").unwrap();
        assert_eq!(values.get("replicas"), Some(&json!(3)));
        assert_eq!(values.get("name"), Some(&json!("web")));
    }

    #[test]
    fn test_parse_values_json() {
        let values = parse_values(r#"{"debug": false}"#, "values.json").unwrap();
        assert_eq!(values.get("debug"), Some(&json!(false)));
    }

    #[test]
    fn test_parse_values_empty_document() {
        assert!(parse_values("", "values.yaml").unwrap().is_empty());
    }

    #[test]
    fn test_parse_values_rejects_sequence() {
        assert!(matches!(
            parse_values("- a\n- b\n", "values.yaml"),
            Err(BundleError::ValuesParseFailed { .. })
        ));
    }

    #[test]
    fn test_collect_sets_override_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("values.yaml");
        std::fs::write(&path, "a: 1\nb: 2\n").unwrap();

        let values = collect(Some(&path), &["b=3".to_string()]).unwrap();
        assert_eq!(values.get("a"), Some(&json!(1)));
        assert_eq!(values.get("b"), Some(&json!(3)));
    }
}
