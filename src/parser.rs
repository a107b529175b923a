//! File parsing for JSON, YAML and TOML formats.
//!
//! This module reads configuration documents into [`Value`] trees. Key order is kept
//! as written in the source document. Arrays have no diff representation of their
//! own: they are turned into objects keyed by element index (`"0"`, `"1"`, ...).
//!
//! # Examples
//!
//! ```no_run
//! use gendiff::parser::parse_file;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let before = parse_file(Path::new("file1.json"))?;
//! let after = parse_file(Path::new("file2.yml"))?;
//! # Ok(())
//! # }
//! ```

use crate::error::ParseError;
use crate::value::{PlainObject, Value};
use std::fs;
use std::path::Path;

/// Which parser to use for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatHint {
    Json,
    Yaml,
    Toml,
    /// Try JSON, then YAML, then TOML
    Auto,
}

impl FormatHint {
    /// Picks a format from a file extension (case-insensitive).
    pub fn from_extension(extension: Option<&str>) -> Self {
        match extension.map(|ext| ext.to_lowercase()).as_deref() {
            Some("json") => FormatHint::Json,
            Some("yaml") | Some("yml") => FormatHint::Yaml,
            Some("toml") => FormatHint::Toml,
            _ => FormatHint::Auto,
        }
    }
}

/// Parses a file into a [`PlainObject`].
///
/// The format is detected by file extension (.json, .yaml, .yml, .toml). For any other
/// extension the content is tried as JSON, then YAML, then TOML.
///
/// # Errors
///
/// This function will return an error if:
/// - The file does not exist (`ParseError::FileNotFound`)
/// - The file cannot be read (`ParseError::ReadError`)
/// - The content is invalid for its format (`JsonError`, `YamlError`, `TomlError`)
/// - No parser accepts the content (`ParseError::UnknownFormat`)
/// - The document's top-level value is not an object (`ParseError::NotAnObject`)
pub fn parse_file(path: &Path) -> Result<PlainObject, ParseError> {
    let origin = path.to_string_lossy().to_string();

    if !path.exists() {
        return Err(ParseError::file_not_found(origin));
    }

    let content = fs::read_to_string(path).map_err(|e| ParseError::read_error(&origin, e))?;

    let hint = FormatHint::from_extension(path.extension().and_then(|ext| ext.to_str()));
    tracing::debug!(path = %origin, format = ?hint, "parsing file");

    match parse_content(&content, hint, &origin)? {
        Value::Nested(map) => Ok(map),
        other => Err(ParseError::not_an_object(origin, other.type_name())),
    }
}

/// Parses document content with the given format hint.
///
/// `origin` names the document in error messages.
pub fn parse_content(content: &str, hint: FormatHint, origin: &str) -> Result<Value, ParseError> {
    match hint {
        FormatHint::Json => parse_json(content).map_err(|e| ParseError::json_error(origin, e)),
        FormatHint::Yaml => parse_yaml(content).map_err(|e| ParseError::yaml_error(origin, e)),
        FormatHint::Toml => parse_toml(content).map_err(|e| ParseError::toml_error(origin, e)),
        FormatHint::Auto => parse_auto(content, origin),
    }
}

/// Tries JSON, YAML and TOML in turn. The first result that is an object wins; this
/// stops YAML from swallowing a TOML document as one multi-line string.
fn parse_auto(content: &str, origin: &str) -> Result<Value, ParseError> {
    let parsers: [fn(&str) -> Option<Value>; 3] = [
        |c| parse_json(c).ok(),
        |c| parse_yaml(c).ok(),
        |c| parse_toml(c).ok(),
    ];

    let mut fallback = None;
    for parse in parsers {
        match parse(content) {
            Some(value @ Value::Nested(_)) => return Ok(value),
            Some(value) => {
                fallback.get_or_insert(value);
            }
            None => {}
        }
    }
    fallback.ok_or_else(|| ParseError::unknown_format(origin))
}

/// Parses a JSON string into a [`Value`].
///
/// ```
/// use gendiff::parser::parse_json;
///
/// let value = parse_json(r#"{"host": "hexlet.io", "timeout": 50}"#).unwrap();
/// assert!(value.is_nested());
/// ```
pub fn parse_json(content: &str) -> Result<Value, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    Ok(json_to_value(value))
}

/// Parses a YAML string into a [`Value`].
pub fn parse_yaml(content: &str) -> Result<Value, serde_yaml::Error> {
    let value: serde_yaml::Value = serde_yaml::from_str(content)?;
    Ok(yaml_to_value(value))
}

/// Parses a TOML document into a [`Value`]. A TOML document is always a table.
pub fn parse_toml(content: &str) -> Result<Value, toml::de::Error> {
    let table: toml::Table = toml::from_str(content)?;
    Ok(toml_to_value(toml::Value::Table(table)))
}

/// Arrays become objects keyed by element index. When the diff sorts keys, these
/// index keys are ordered numerically (see `diff::compare_keys`).
fn indexed(items: impl IntoIterator<Item = Value>) -> Value {
    Value::Nested(
        items
            .into_iter()
            .enumerate()
            .map(|(i, item)| (i.to_string(), item))
            .collect(),
    )
}

pub(crate) fn json_to_value(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::null(),
        serde_json::Value::Bool(b) => Value::bool(b),
        serde_json::Value::Number(n) => {
            // Only fails for arbitrary-precision numbers, which are not enabled
            Value::number(n.as_f64().unwrap_or(0.0))
        }
        serde_json::Value::String(s) => Value::string(s),
        serde_json::Value::Array(arr) => indexed(arr.into_iter().map(json_to_value)),
        serde_json::Value::Object(obj) => {
            Value::Nested(obj.into_iter().map(|(k, v)| (k, json_to_value(v))).collect())
        }
    }
}

/// Non-string keys are stringified; tagged values are evaluated through their tag.
fn yaml_to_value(value: serde_yaml::Value) -> Value {
    match value {
        serde_yaml::Value::Null => Value::null(),
        serde_yaml::Value::Bool(b) => Value::bool(b),
        serde_yaml::Value::Number(n) => {
            if let Some(f) = n.as_f64() {
                Value::number(f)
            } else if let Some(i) = n.as_i64() {
                Value::number(i as f64)
            } else if let Some(u) = n.as_u64() {
                Value::number(u as f64)
            } else {
                Value::number(0.0)
            }
        }
        serde_yaml::Value::String(s) => Value::string(s),
        serde_yaml::Value::Sequence(seq) => indexed(seq.into_iter().map(yaml_to_value)),
        serde_yaml::Value::Mapping(map) => Value::Nested(
            map.into_iter()
                .map(|(k, v)| {
                    let key = match k {
                        serde_yaml::Value::String(s) => s,
                        serde_yaml::Value::Number(n) => n.to_string(),
                        serde_yaml::Value::Bool(b) => b.to_string(),
                        serde_yaml::Value::Null => "null".to_string(),
                        other => format!("{:?}", other),
                    };
                    (key, yaml_to_value(v))
                })
                .collect(),
        ),
        serde_yaml::Value::Tagged(tagged) => yaml_to_value(tagged.value),
    }
}

fn toml_to_value(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::string(s),
        toml::Value::Integer(i) => Value::number(i as f64),
        toml::Value::Float(f) => Value::number(f),
        toml::Value::Boolean(b) => Value::bool(b),
        toml::Value::Datetime(dt) => Value::string(dt.to_string()),
        toml::Value::Array(arr) => indexed(arr.into_iter().map(toml_to_value)),
        toml::Value::Table(table) => Value::Nested(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_value(v)))
                .collect(),
        ),
    }
}
