//! Output formatting for diff trees.
//!
//! # Examples
//!
//! ```
//! use gendiff::{format_diff, DiffNode, OutputFormat, Value};
//!
//! let diff = vec![DiffNode::Changed {
//!     key: "timeout".to_string(),
//!     old_value: Value::number(50),
//!     new_value: Value::number(20),
//! }];
//!
//! let output = format_diff(&diff, &OutputFormat::Stylish).unwrap();
//! assert_eq!(output, "{\n  - timeout: 50\n  + timeout: 20\n}");
//! ```

use crate::diff::DiffNode;
use crate::error::OutputError;
use crate::stylish;
use crate::value::{integral, Scalar, Value};
use serde_json::json;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Indented tree with `+`/`-` markers
    #[default]
    Stylish,
    /// Status-tagged JSON tree, readable back with [`parse_tree`](crate::parse_tree)
    Json,
}

/// Formats a diff tree in the requested format.
pub fn format_diff(nodes: &[DiffNode], format: &OutputFormat) -> Result<String, OutputError> {
    match format {
        OutputFormat::Stylish => Ok(stylish::render(nodes)),
        OutputFormat::Json => format_json(nodes),
    }
}

fn format_json(nodes: &[DiffNode]) -> Result<String, OutputError> {
    let tree = nodes_to_json(nodes)?;
    serde_json::to_string_pretty(&tree)
        .map_err(|e| OutputError::JsonSerializationError { source: e })
}

fn nodes_to_json(nodes: &[DiffNode]) -> Result<serde_json::Value, OutputError> {
    let nodes = nodes.iter().map(node_to_json).collect::<Result<_, _>>()?;
    Ok(serde_json::Value::Array(nodes))
}

fn node_to_json(node: &DiffNode) -> Result<serde_json::Value, OutputError> {
    let status = node.status().as_str();
    let json = match node {
        DiffNode::Added { key, value }
        | DiffNode::Removed { key, value }
        | DiffNode::Unchanged { key, value } => json!({
            "key": key,
            "status": status,
            "value": value_to_json(key, value)?,
        }),
        DiffNode::Changed {
            key,
            old_value,
            new_value,
        } => json!({
            "key": key,
            "status": status,
            "oldValue": value_to_json(key, old_value)?,
            "newValue": value_to_json(key, new_value)?,
        }),
        DiffNode::Nested { key, children } => json!({
            "key": key,
            "status": status,
            "children": nodes_to_json(children)?,
        }),
    };
    Ok(json)
}

/// Integral numbers are written as JSON integers. JSON has no spelling for
/// infinities or NaN, so those fail instead of degrading to `null`.
fn value_to_json(key: &str, value: &Value) -> Result<serde_json::Value, OutputError> {
    let json = match value {
        Value::Scalar(Scalar::Null) => json!(null),
        Value::Scalar(Scalar::Bool(b)) => json!(b),
        Value::Scalar(Scalar::Number(n)) => match integral(*n) {
            Some(i) => json!(i),
            None => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .ok_or_else(|| OutputError::non_finite_number(key, *n))?,
        },
        Value::Scalar(Scalar::String(s)) => json!(s),
        Value::Nested(map) => {
            let obj = map
                .iter()
                .map(|(k, v)| Ok((k.clone(), value_to_json(k, v)?)))
                .collect::<Result<serde_json::Map<String, serde_json::Value>, OutputError>>()?;
            serde_json::Value::Object(obj)
        }
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_to_json() {
        assert_eq!(value_to_json("k", &Value::null()).unwrap(), json!(null));
        assert_eq!(value_to_json("k", &Value::bool(true)).unwrap(), json!(true));
        assert_eq!(value_to_json("k", &Value::number(42)).unwrap(), json!(42));
        assert_eq!(value_to_json("k", &Value::number(1.5)).unwrap(), json!(1.5));
        assert_eq!(value_to_json("k", &Value::string("test")).unwrap(), json!("test"));
        assert_eq!(
            value_to_json("k", &Value::object([("key", Value::string("value"))])).unwrap(),
            json!({"key": "value"})
        );
    }

    #[test]
    fn test_node_to_json_uses_wire_field_names() {
        let node = DiffNode::Changed {
            key: "x".to_string(),
            old_value: Value::number(1),
            new_value: Value::null(),
        };
        assert_eq!(
            node_to_json(&node).unwrap(),
            json!({"key": "x", "status": "changed", "oldValue": 1, "newValue": null})
        );
    }

    #[test]
    fn test_format_json_nested() {
        let diff = vec![DiffNode::Nested {
            key: "group".to_string(),
            children: vec![DiffNode::Removed {
                key: "abc".to_string(),
                value: Value::number(12345),
            }],
        }];
        let output = format_diff(&diff, &OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["status"], "nested");
        assert_eq!(parsed[0]["children"][0]["status"], "removed");
        assert_eq!(parsed[0]["children"][0]["value"], 12345);
    }

    #[test]
    fn test_format_json_writes_integers_without_fraction() {
        let diff = vec![DiffNode::Added {
            key: "timeout".to_string(),
            value: Value::number(50),
        }];
        let output = format_diff(&diff, &OutputFormat::Json).unwrap();
        assert!(output.contains("\"value\": 50\n"), "got:\n{}", output);
    }

    #[test]
    fn test_format_json_rejects_non_finite_numbers() {
        let diff = vec![DiffNode::Unchanged {
            key: "limits".to_string(),
            value: Value::object([("max", Value::number(f64::INFINITY))]),
        }];
        match format_diff(&diff, &OutputFormat::Json).unwrap_err() {
            OutputError::NonFiniteNumber { key, .. } => assert_eq!(key, "max"),
            other => panic!("Expected NonFiniteNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_format_stylish_is_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Stylish);
        let output = format_diff(&[], &OutputFormat::default()).unwrap();
        assert_eq!(output, "{\n}");
    }
}
