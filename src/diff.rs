//! Diff tree model and the comparator that builds it.
//!
//! [`compute_diff`] walks two [`PlainObject`]s key by key and produces an ordered
//! sequence of [`DiffNode`]s. Objects present on both sides become `Nested` nodes
//! holding the diff of their contents; everything else becomes a leaf node.
//!
//! # Examples
//!
//! ```
//! use gendiff::{compute_diff, DiffConfig, DiffNode, Value};
//!
//! let old = Value::object([("timeout", Value::number(50))]);
//! let new = Value::object([("timeout", Value::number(20))]);
//!
//! let diff = compute_diff(
//!     old.as_object().unwrap(),
//!     new.as_object().unwrap(),
//!     &DiffConfig::default(),
//! );
//!
//! assert!(matches!(diff[0], DiffNode::Changed { .. }));
//! ```

use std::cmp::Ordering;

use crate::value::{PlainObject, Value};

/// Status tag of a diff node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStatus {
    Added,
    Removed,
    Unchanged,
    Changed,
    Nested,
}

impl NodeStatus {
    /// The tag used for this status in serialized diff trees.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeStatus::Added => "added",
            NodeStatus::Removed => "removed",
            NodeStatus::Unchanged => "unchanged",
            NodeStatus::Changed => "changed",
            NodeStatus::Nested => "nested",
        }
    }
}

/// One key of a diff tree.
///
/// The variant decides which payload exists, so a node can never carry both a
/// value and children.
#[derive(Debug, Clone, PartialEq)]
pub enum DiffNode {
    /// Key exists in new but not old
    Added { key: String, value: Value },
    /// Key exists in old but not new
    Removed { key: String, value: Value },
    /// Key exists in both with the same value
    Unchanged { key: String, value: Value },
    /// Key exists in both with different values
    Changed {
        key: String,
        old_value: Value,
        new_value: Value,
    },
    /// Key holds an object on both sides; children are the diff of the two objects
    Nested { key: String, children: Vec<DiffNode> },
}

impl DiffNode {
    pub fn key(&self) -> &str {
        match self {
            DiffNode::Added { key, .. }
            | DiffNode::Removed { key, .. }
            | DiffNode::Unchanged { key, .. }
            | DiffNode::Changed { key, .. }
            | DiffNode::Nested { key, .. } => key,
        }
    }

    pub fn status(&self) -> NodeStatus {
        match self {
            DiffNode::Added { .. } => NodeStatus::Added,
            DiffNode::Removed { .. } => NodeStatus::Removed,
            DiffNode::Unchanged { .. } => NodeStatus::Unchanged,
            DiffNode::Changed { .. } => NodeStatus::Changed,
            DiffNode::Nested { .. } => NodeStatus::Nested,
        }
    }
}

/// Leaf counts over a whole diff tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub changed: usize,
    pub unchanged: usize,
}

impl DiffStats {
    /// Counts leaf statuses at every depth. `Nested` nodes only contribute their children.
    pub fn from_nodes(nodes: &[DiffNode]) -> Self {
        let mut stats = Self::default();
        stats.collect(nodes);
        stats
    }

    fn collect(&mut self, nodes: &[DiffNode]) {
        for node in nodes {
            match node {
                DiffNode::Added { .. } => self.added += 1,
                DiffNode::Removed { .. } => self.removed += 1,
                DiffNode::Unchanged { .. } => self.unchanged += 1,
                DiffNode::Changed { .. } => self.changed += 1,
                DiffNode::Nested { children, .. } => self.collect(children),
            }
        }
    }

    /// Returns the total number of changes (excluding unchanged).
    pub fn total_changes(&self) -> usize {
        self.added + self.removed + self.changed
    }
}

/// Configuration for the comparator.
#[derive(Debug, Clone)]
pub struct DiffConfig {
    /// Emit keys in sorted order (see [`compare_keys`]). When false, old's keys come first in source
    /// order, followed by keys only present in new.
    pub sort_keys: bool,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self { sort_keys: true }
    }
}

/// Computes the diff tree between two objects.
///
/// # Examples
///
/// ```
/// use gendiff::{compute_diff, DiffConfig, DiffNode, Value};
///
/// let old = Value::object([("host", Value::string("hexlet.io"))]);
/// let new = Value::object([("host", Value::string("hexlet.io")), ("verbose", Value::bool(true))]);
///
/// let diff = compute_diff(old.as_object().unwrap(), new.as_object().unwrap(), &DiffConfig::default());
///
/// assert_eq!(diff.len(), 2);
/// assert_eq!(diff[1].key(), "verbose");
/// ```
pub fn compute_diff(old: &PlainObject, new: &PlainObject, config: &DiffConfig) -> Vec<DiffNode> {
    let nodes = diff_objects(old, new, config);
    tracing::debug!(stats = ?DiffStats::from_nodes(&nodes), "computed diff");
    nodes
}

fn diff_objects(old: &PlainObject, new: &PlainObject, config: &DiffConfig) -> Vec<DiffNode> {
    let mut keys: Vec<&String> = old
        .keys()
        .chain(new.keys().filter(|key| !old.contains_key(*key)))
        .collect();
    if config.sort_keys {
        keys.sort_by(|a, b| compare_keys(a, b));
    }

    keys.into_iter()
        .filter_map(|key| diff_key(key, old.get(key), new.get(key), config))
        .collect()
}

/// Orders diff keys: array index keys (`"0"`, `"1"`, ..., `"10"`) first and by
/// numeric value, then every other key lexically.
pub fn compare_keys(a: &str, b: &str) -> Ordering {
    match (index_key(a), index_key(b)) {
        (true, true) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}

/// A canonical non-negative integer: digits only, no leading zero except `"0"` itself.
fn index_key(key: &str) -> bool {
    !key.is_empty()
        && key.bytes().all(|b| b.is_ascii_digit())
        && (key == "0" || !key.starts_with('0'))
}

fn diff_key(
    key: &str,
    old: Option<&Value>,
    new: Option<&Value>,
    config: &DiffConfig,
) -> Option<DiffNode> {
    let key = key.to_string();
    let node = match (old, new) {
        (None, Some(value)) => DiffNode::Added {
            key,
            value: value.clone(),
        },
        (Some(value), None) => DiffNode::Removed {
            key,
            value: value.clone(),
        },
        (Some(Value::Nested(old_map)), Some(Value::Nested(new_map))) => DiffNode::Nested {
            key,
            children: diff_objects(old_map, new_map, config),
        },
        (Some(old_value), Some(new_value)) if old_value.semantic_equals(new_value) => {
            DiffNode::Unchanged {
                key,
                value: old_value.clone(),
            }
        }
        (Some(old_value), Some(new_value)) => DiffNode::Changed {
            key,
            old_value: old_value.clone(),
            new_value: new_value.clone(),
        },
        (None, None) => return None,
    };
    Some(node)
}

/// Returns true if any node at any depth is something other than `Unchanged`.
pub fn has_changes(nodes: &[DiffNode]) -> bool {
    nodes.iter().any(|node| match node {
        DiffNode::Unchanged { .. } => false,
        DiffNode::Nested { children, .. } => has_changes(children),
        _ => true,
    })
}
