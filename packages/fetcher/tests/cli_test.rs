//! End-to-end CLI tests using saved API response fixtures.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[allow(clippy::expect_used)]
fn mekorot() -> Command {
    Command::cargo_bin("mekorot").expect("binary should build")
}

#[test]
fn test_resolve_renders_labeled_range() {
    mekorot()
        .arg("resolve")
        .arg(fixture("genesis_range.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Genesis 1:1-3"))
        .stdout(predicate::str::contains(
            "1 In the beginning God created the heaven and the earth.",
        ))
        .stdout(predicate::str::contains("3 And God said: Let there be light."));
}

#[test]
fn test_resolve_strips_markup() {
    mekorot()
        .arg("resolve")
        .arg(fixture("genesis_range.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("<i>").not());
}

#[test]
fn test_resolve_section_spanning_labels() {
    mekorot()
        .arg("resolve")
        .arg(fixture("psalms_span.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("1:2 But his delight"))
        .stdout(predicate::str::contains("2:1 Why are the nations"))
        .stdout(predicate::str::contains("2:2 The kings of the earth"));
}

#[test]
fn test_resolve_hebrew_flag() {
    mekorot()
        .arg("resolve")
        .arg(fixture("genesis_range.json"))
        .arg("--hebrew")
        .assert()
        .success()
        .stdout(predicate::str::contains("בְּרֵאשִׁית"))
        .stdout(predicate::str::contains("In the beginning").not());
}

#[test]
fn test_resolve_json_output() {
    let output = mekorot()
        .arg("resolve")
        .arg(fixture("genesis_range.json"))
        .arg("--json")
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let segments: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    let segments = segments.as_array().expect("array of segments");
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0]["label"], "1");
    assert_eq!(segments[2]["label"], "3");
}

#[test]
fn test_resolve_empty_payload_shows_placeholder() {
    mekorot()
        .arg("resolve")
        .arg(fixture("empty_response.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("…"));
}

#[test]
fn test_resolve_missing_file_fails() {
    mekorot()
        .arg("resolve")
        .arg("no-such-file.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_show_rejects_unusable_input() {
    mekorot()
        .arg("show")
        .arg("line one\nline two")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid citation"));
}
