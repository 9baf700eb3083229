//! Integration tests for the `tagjson` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the binary end to
//! end: default input path, file and stdin input, file output, output
//! formatting, strict mode, and failure exit codes.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};

/// Helper: directory holding the JSON fixtures.
fn fixtures_dir() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures")
}

/// Helper: path to a named fixture.
fn fixture(name: &str) -> String {
    format!("{}/{}", fixtures_dir(), name)
}

/// Helper: parse CLI stdout as JSON.
fn stdout_json(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("stdout must be valid JSON")
}

// ─────────────────────────────────────────────────────────────────────────────
// Input sources
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn default_input_is_input_json_in_working_dir() {
    let output = Command::cargo_bin("tagjson")
        .unwrap()
        .current_dir(fixtures_dir())
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output.stdout),
        json!([
            {"number_1": 1.5},
            {"string_1": "784498"},
            {"string_2": 1405544146}
        ])
    );
}

#[test]
fn explicit_file_argument() {
    let output = Command::cargo_bin("tagjson")
        .unwrap()
        .arg(fixture("mixed.json"))
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output.stdout),
        json!([
            {"name": "Alice"},
            {"age": 30},
            {"active": true},
            {"tags": ["a", 1]},
            {"meta": {"S": "x", "BOOL": true}}
        ])
    );
}

#[test]
fn dash_reads_stdin() {
    Command::cargo_bin("tagjson")
        .unwrap()
        .args(["-", "--compact"])
        .write_stdin(r#"{"name":{"S":" Bob "}}"#)
        .assert()
        .success()
        .stdout(predicate::str::diff("[{\"name\":\"Bob\"}]\n"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Output
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn pretty_output_by_default() {
    Command::cargo_bin("tagjson")
        .unwrap()
        .arg("-")
        .write_stdin(r#"{"a":{"N":"1"}}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("[\n  {\n    \"a\": 1\n  }\n]"));
}

#[test]
fn empty_result_is_empty_array() {
    Command::cargo_bin("tagjson")
        .unwrap()
        .args(["-", "--compact"])
        .write_stdin(r#"{"a":{"N":"x"},"b":{"S":"  "}}"#)
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"));
}

#[test]
fn output_file() {
    let dir = std::env::temp_dir().join(format!("tagjson-cli-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let out_path = dir.join("plain.json");

    Command::cargo_bin("tagjson")
        .unwrap()
        .arg(fixture("mixed.json"))
        .arg("-o")
        .arg(&out_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(&out_path).unwrap();
    assert!(content.ends_with("]\n"), "file output should end with a newline");
    let written: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(written.as_array().unwrap().len(), 5);
    assert_eq!(written[0], json!({"name": "Alice"}));

    let _ = std::fs::remove_dir_all(&dir);
}

// ─────────────────────────────────────────────────────────────────────────────
// Strictness
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn mismatched_payload_is_dropped_by_default() {
    let output = Command::cargo_bin("tagjson")
        .unwrap()
        .arg(fixture("mismatch.json"))
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output.stdout), json!([{"label": "ok"}]));
}

#[test]
fn strict_mode_fails_on_mismatched_payload() {
    Command::cargo_bin("tagjson")
        .unwrap()
        .args([fixture("mismatch.json").as_str(), "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to transform"))
        .stderr(predicate::str::contains("payload of tag N must be a string"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Failures
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn missing_file_fails() {
    Command::cargo_bin("tagjson")
        .unwrap()
        .arg("/nonexistent/path/tagged.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn missing_default_input_fails() {
    let dir = std::env::temp_dir().join(format!("tagjson-empty-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    Command::cargo_bin("tagjson")
        .unwrap()
        .current_dir(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("input.json"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn invalid_json_fails() {
    Command::cargo_bin("tagjson")
        .unwrap()
        .arg("-")
        .write_stdin("this is not valid json {{{")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse JSON"));
}

#[test]
fn compact_file_output_matches_stdout() {
    let dir = std::env::temp_dir().join(format!("tagjson-compact-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let out_path = dir.join("plain.json");
    let input = r#"{"a":{"N":"1"}}"#;

    let stdout = Command::cargo_bin("tagjson")
        .unwrap()
        .args(["-", "--compact"])
        .write_stdin(input)
        .output()
        .unwrap()
        .stdout;
    Command::cargo_bin("tagjson")
        .unwrap()
        .args(["-", "--compact", "-o"])
        .arg(&out_path)
        .write_stdin(input)
        .assert()
        .success();

    assert_eq!(std::fs::read(&out_path).unwrap(), stdout);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn null_document_is_empty_array() {
    Command::cargo_bin("tagjson")
        .unwrap()
        .args(["-", "--compact"])
        .write_stdin("null")
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"));
}

#[test]
fn non_object_document_fails() {
    Command::cargo_bin("tagjson")
        .unwrap()
        .arg("-")
        .write_stdin(r#"[{"S":"a"}]"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected a JSON object"));
}

#[test]
fn logs_go_to_stderr() {
    let output = Command::cargo_bin("tagjson")
        .unwrap()
        .args(["-", "--compact", "-v"])
        .env_remove("RUST_LOG")
        .write_stdin(r#"{"a":{"S":"x"}}"#)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output.stdout), json!([{"a": "x"}]));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("converted document"), "stderr: {stderr}");
}

#[test]
fn help_lists_options() {
    Command::cargo_bin("tagjson")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--strict"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("input.json"));
}
