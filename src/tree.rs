//! Reading pre-computed diff trees from JSON.
//!
//! A diff tree is a JSON array of nodes. Every node has a `key` and a `status`; the
//! status decides which other fields must be present:
//!
//! | status                             | fields                  |
//! |------------------------------------|-------------------------|
//! | `added`, `removed`, `unchanged`    | `value`                 |
//! | `changed`                          | `oldValue`, `newValue`  |
//! | `nested`                           | `children`              |
//!
//! `deleted` is accepted as another name for `removed`. This is the shape produced by
//! [`OutputFormat::Json`](crate::OutputFormat::Json).
//!
//! # Examples
//!
//! ```
//! use gendiff::{parse_tree, stylish};
//!
//! let json = r#"[{"key": "a", "status": "added", "value": 1}]"#;
//! let diff = parse_tree(json).unwrap();
//!
//! assert_eq!(stylish::render(&diff), "{\n  + a: 1\n}");
//! ```

use crate::diff::DiffNode;
use crate::error::TreeError;
use crate::parser::json_to_value;
use serde::{Deserialize, Deserializer};

/// A node as it appears on the wire, before its status is checked.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNode {
    key: String,
    status: String,
    #[serde(default, deserialize_with = "present")]
    value: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "present")]
    old_value: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "present")]
    new_value: Option<serde_json::Value>,
    #[serde(default)]
    children: Option<Vec<RawNode>>,
}

/// Maps an explicit `null` to `Some(Null)` so it stays distinct from a missing field.
fn present<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

/// Parses a JSON diff tree into [`DiffNode`]s.
///
/// The whole tree is validated before anything is returned, so a caller never
/// renders a partially decoded tree.
///
/// # Errors
///
/// - `TreeError::InvalidJson` if the input is not an array of node objects
/// - `TreeError::InvalidNodeStatus` if any node has an unknown status
/// - `TreeError::MissingField` if a node lacks a field its status requires
pub fn parse_tree(json: &str) -> Result<Vec<DiffNode>, TreeError> {
    let raw: Vec<RawNode> =
        serde_json::from_str(json).map_err(|source| TreeError::InvalidJson { source })?;
    let nodes = decode_nodes(raw)?;
    tracing::debug!(nodes = nodes.len(), "decoded diff tree");
    Ok(nodes)
}

fn decode_nodes(raw: Vec<RawNode>) -> Result<Vec<DiffNode>, TreeError> {
    raw.into_iter().map(decode_node).collect()
}

fn decode_node(raw: RawNode) -> Result<DiffNode, TreeError> {
    let RawNode {
        key,
        status,
        value,
        old_value,
        new_value,
        children,
    } = raw;

    let require = |field: Option<serde_json::Value>, name: &'static str| {
        field
            .map(json_to_value)
            .ok_or_else(|| TreeError::missing_field(key.as_str(), status.as_str(), name))
    };

    let node = match status.as_str() {
        "added" => DiffNode::Added {
            value: require(value, "value")?,
            key,
        },
        "removed" | "deleted" => DiffNode::Removed {
            value: require(value, "value")?,
            key,
        },
        "unchanged" => DiffNode::Unchanged {
            value: require(value, "value")?,
            key,
        },
        "changed" => DiffNode::Changed {
            old_value: require(old_value, "oldValue")?,
            new_value: require(new_value, "newValue")?,
            key,
        },
        "nested" => {
            let children = children
                .ok_or_else(|| TreeError::missing_field(key.as_str(), "nested", "children"))?;
            DiffNode::Nested {
                children: decode_nodes(children)?,
                key,
            }
        }
        _ => return Err(TreeError::invalid_status(status)),
    };
    Ok(node)
}
