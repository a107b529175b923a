//! The "stylish" diff format.
//!
//! Every key is printed on its own line, prefixed with a two-character marker:
//!
//! - `"+ "` for a key that was added
//! - `"- "` for a key that was removed
//! - `"  "` for an unchanged key or a key with nested differences
//!
//! Each depth level is indented by [`INDENT_WIDTH`] spaces. The marker takes the last
//! two columns of a keyed line's indent; closing braces carry no marker and use the
//! full indent of the block that opened them.
//!
//! # Examples
//!
//! ```
//! use gendiff::{stylish, DiffNode, Value};
//!
//! let diff = vec![
//!     DiffNode::Added { key: "a".to_string(), value: Value::number(1) },
//!     DiffNode::Removed { key: "b".to_string(), value: Value::number(2) },
//! ];
//!
//! assert_eq!(stylish::render(&diff), "{\n  + a: 1\n  - b: 2\n}");
//! ```

use crate::diff::DiffNode;
use crate::value::{PlainObject, Value};

/// Spaces per depth level.
pub const INDENT_WIDTH: usize = 4;

const MARKER_WIDTH: usize = 2;

const ADDED: &str = "+ ";
const REMOVED: &str = "- ";
const KEPT: &str = "  ";

/// Renders a diff tree in the stylish format.
///
/// `nodes` are the children of the implicit root. They are rendered at depth 1
/// inside an outer pair of braces.
pub fn render(nodes: &[DiffNode]) -> String {
    let mut writer = StylishWriter::default();
    writer.open();
    for node in nodes {
        writer.node(node, 1);
    }
    writer.close(0);
    tracing::debug!(nodes = nodes.len(), bytes = writer.out.len(), "rendered stylish diff");
    writer.out
}

/// Append-only output buffer shared by the whole render call.
#[derive(Default)]
struct StylishWriter {
    out: String,
}

impl StylishWriter {
    fn node(&mut self, node: &DiffNode, depth: usize) {
        match node {
            DiffNode::Added { key, value } => self.keyed(ADDED, key, value, depth),
            DiffNode::Removed { key, value } => self.keyed(REMOVED, key, value, depth),
            DiffNode::Unchanged { key, value } => self.keyed(KEPT, key, value, depth),
            DiffNode::Changed {
                key,
                old_value,
                new_value,
            } => {
                self.keyed(REMOVED, key, old_value, depth);
                self.keyed(ADDED, key, new_value, depth);
            }
            DiffNode::Nested { key, children } => {
                self.key_prefix(KEPT, key, depth);
                self.open();
                for child in children {
                    self.node(child, depth + 1);
                }
                self.close(depth);
            }
        }
    }

    /// One `marker key: value` line; a nested value continues over the following lines.
    fn keyed(&mut self, marker: &str, key: &str, value: &Value, depth: usize) {
        self.key_prefix(marker, key, depth);
        self.value(value, depth + 1);
    }

    fn key_prefix(&mut self, marker: &str, key: &str, depth: usize) {
        self.newline();
        self.indent(depth * INDENT_WIDTH - MARKER_WIDTH);
        self.out.push_str(marker);
        self.out.push_str(key);
        self.out.push_str(": ");
    }

    fn value(&mut self, value: &Value, depth: usize) {
        match value {
            Value::Scalar(scalar) => self.out.push_str(&scalar.to_string()),
            Value::Nested(map) => self.plain(map, depth),
        }
    }

    /// Renders an object with no diff metadata. Entries sit at `depth` with no marker;
    /// the closing brace sits one level out.
    fn plain(&mut self, map: &PlainObject, depth: usize) {
        self.open();
        for (key, value) in map {
            self.newline();
            self.indent(depth * INDENT_WIDTH);
            self.out.push_str(key);
            self.out.push_str(": ");
            self.value(value, depth + 1);
        }
        self.close(depth - 1);
    }

    fn open(&mut self) {
        self.out.push('{');
    }

    fn close(&mut self, depth: usize) {
        self.newline();
        self.indent(depth * INDENT_WIDTH);
        self.out.push('}');
    }

    fn newline(&mut self) {
        self.out.push('\n');
    }

    fn indent(&mut self, width: usize) {
        self.out.extend(std::iter::repeat(' ').take(width));
    }
}
