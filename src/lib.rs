//! gendiff - compare configuration files and render the difference as a tree.
//!
//! This library loads two structured documents (JSON, YAML, TOML), computes a diff tree
//! that keeps their nesting, and renders it in the "stylish" format: the same tree with
//! each key marked as added (`+`), removed (`-`) or kept.
//!
//! # Example
//!
//! ```no_run
//! use gendiff::{compute_diff, format_diff, parse_file, DiffConfig, OutputFormat};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let old = parse_file(Path::new("file1.json"))?;
//! let new = parse_file(Path::new("file2.json"))?;
//!
//! let diff = compute_diff(&old, &new, &DiffConfig::default());
//!
//! let output = format_diff(&diff, &OutputFormat::Stylish)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod diff;
pub mod error;
pub mod output;
pub mod parser;
pub mod stylish;
pub mod tree;
pub mod value;

// Re-export commonly used types for convenience
pub use diff::{compute_diff, has_changes, DiffConfig, DiffNode, DiffStats, NodeStatus};
pub use error::{GendiffError, OutputError, ParseError, TreeError};
pub use output::{format_diff, OutputFormat};
pub use parser::{parse_content, parse_file, parse_json, parse_toml, parse_yaml, FormatHint};
pub use tree::parse_tree;
pub use value::{PlainObject, Scalar, Value};

/// Parses two files and renders their diff in one step.
///
/// # Errors
///
/// Returns a `GendiffError` if either file fails to parse or the output cannot be
/// serialized.
pub fn gendiff(
    file1: &std::path::Path,
    file2: &std::path::Path,
    config: &DiffConfig,
    format: &OutputFormat,
) -> Result<String, GendiffError> {
    let old = parse_file(file1)?;
    let new = parse_file(file2)?;
    let diff = compute_diff(&old, &new, config);
    Ok(format_diff(&diff, format)?)
}
