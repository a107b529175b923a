//! Integration tests for the gendiff CLI tool.
//!
//! These tests run the binary end to end against the files in `tests/fixtures`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::{Builder, NamedTempFile};

/// Helper to create a Command for the gendiff binary
fn gendiff() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("gendiff"))
}

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn yaml_file(content: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(".yml").tempfile().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn test_nested_json_stylish() {
    gendiff()
        .arg("tests/fixtures/file1.json")
        .arg("tests/fixtures/file2.json")
        .assert()
        .code(1)
        .stdout(fixture("nested_expected.txt"));
}

#[test]
fn test_nested_yaml_stylish() {
    gendiff()
        .arg("tests/fixtures/file1.yml")
        .arg("tests/fixtures/file2.yml")
        .assert()
        .code(1)
        .stdout(fixture("nested_expected.txt"));
}

#[test]
fn test_flat_toml_stylish() {
    gendiff()
        .arg("tests/fixtures/flat1.toml")
        .arg("tests/fixtures/flat2.toml")
        .assert()
        .code(1)
        .stdout(fixture("flat_expected.txt"));
}

#[test]
fn test_same_content_exit_0() {
    gendiff()
        .arg("tests/fixtures/file1.json")
        .arg("tests/fixtures/file1.yml")
        .assert()
        .success()
        .code(0)
        .stdout(predicate::str::contains("+ ").not())
        .stdout(predicate::str::contains("- ").not());
}

#[test]
fn test_file_not_found_exit_2() {
    gendiff()
        .arg("tests/fixtures/nonexistent.json")
        .arg("tests/fixtures/file1.json")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_json_output_format() {
    gendiff()
        .arg("tests/fixtures/flat1.toml")
        .arg("tests/fixtures/flat2.toml")
        .arg("--format=json")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"status\": \"changed\""))
        .stdout(predicate::str::contains("\"oldValue\": 50,"))
        .stdout(predicate::str::contains("50.0").not());
}

#[test]
fn test_non_finite_number_stylish() {
    let old = yaml_file("limit: .inf\n");
    let new = yaml_file("limit: .nan\n");
    gendiff()
        .arg(old.path())
        .arg(new.path())
        .assert()
        .code(1)
        .stdout("{\n  - limit: Infinity\n  + limit: NaN\n}\n");
}

#[test]
fn test_non_finite_number_json_exit_2() {
    let old = yaml_file("limit: 1\n");
    let new = yaml_file("limit: -.inf\n");
    gendiff()
        .arg(old.path())
        .arg(new.path())
        .arg("--format=json")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("limit"));
}

#[test]
fn test_no_sort_keeps_source_order() {
    gendiff()
        .arg("tests/fixtures/flat1.toml")
        .arg("tests/fixtures/flat2.toml")
        .arg("--no-sort")
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("{\n    host: hexlet.io\n  - timeout: 50"));
}

#[test]
fn test_render_tree() {
    gendiff()
        .arg("--tree")
        .arg("tests/fixtures/tree_valid.json")
        .assert()
        .success()
        .stdout("{\n  + a: 1\n  - b: 2\n}\n");
}

#[test]
fn test_render_tree_invalid_status() {
    gendiff()
        .arg("--tree")
        .arg("tests/fixtures/tree_invalid.json")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid node status 'moved'"));
}

#[test]
fn test_missing_second_file() {
    gendiff()
        .arg("tests/fixtures/file1.json")
        .assert()
        .failure();
}
