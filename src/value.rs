//! Plain value trees loaded from configuration files.
//!
//! A [`Value`] is either a [`Scalar`] leaf or a [`PlainObject`]. The split is made once,
//! when a document is parsed, so later stages match on the tag instead of inspecting types.

use indexmap::IndexMap;
use std::fmt;

/// An insertion-ordered mapping with no diff metadata.
pub type PlainObject = IndexMap<String, Value>;

/// A leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

/// A value inside a document: a leaf or a nested mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(Scalar),
    Nested(PlainObject),
}

impl Scalar {
    pub fn type_name(&self) -> &str {
        match self {
            Scalar::Null => "null",
            Scalar::Bool(_) => "boolean",
            Scalar::Number(_) => "number",
            Scalar::String(_) => "string",
        }
    }
}

/// Renders the scalar the way it appears in diff output: literals for
/// `true`/`false`/`null`, strings without quotes, integral numbers without
/// a fractional part.
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => f.write_str("null"),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Number(n) => match integral(*n) {
                Some(i) => write!(f, "{}", i),
                None if n.is_nan() => f.write_str("NaN"),
                None if n.is_infinite() && *n > 0.0 => f.write_str("Infinity"),
                None if n.is_infinite() => f.write_str("-Infinity"),
                None => write!(f, "{}", n),
            },
            Scalar::String(s) => f.write_str(s),
        }
    }
}

/// Returns the number as an `i64` when it is finite, integral and exactly representable.
pub(crate) fn integral(n: f64) -> Option<i64> {
    // 2^53: beyond this, f64 -> i64 stops being exact
    if n.fract() == 0.0 && n.is_finite() && n.abs() < 9_007_199_254_740_992.0 {
        Some(n as i64)
    } else {
        None
    }
}

impl Value {
    pub fn null() -> Self {
        Value::Scalar(Scalar::Null)
    }

    pub fn bool(b: bool) -> Self {
        Value::Scalar(Scalar::Bool(b))
    }

    pub fn number(n: impl Into<f64>) -> Self {
        Value::Scalar(Scalar::Number(n.into()))
    }

    pub fn string(s: impl Into<String>) -> Self {
        Value::Scalar(Scalar::String(s.into()))
    }

    /// Builds a nested value from `(key, value)` pairs, keeping their order.
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Nested(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn type_name(&self) -> &str {
        match self {
            Value::Scalar(scalar) => scalar.type_name(),
            Value::Nested(_) => "object",
        }
    }

    pub fn is_nested(&self) -> bool {
        matches!(self, Value::Nested(_))
    }

    pub fn as_object(&self) -> Option<&PlainObject> {
        match self {
            Value::Nested(map) => Some(map),
            Value::Scalar(_) => None,
        }
    }

    /// Checks if two values are semantically equal (ignores key ordering, uses epsilon for floats).
    pub fn semantic_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Scalar(Scalar::Number(a)), Value::Scalar(Scalar::Number(b))) => {
                const EPSILON: f64 = 1e-10;
                a == b || (a - b).abs() < EPSILON
            }
            (Value::Scalar(a), Value::Scalar(b)) => a == b,
            (Value::Nested(a), Value::Nested(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(key, value)| b.get(key).is_some_and(|v| value.semantic_equals(v)))
            }
            _ => false,
        }
    }
}
