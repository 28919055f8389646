// Integration tests for the cohort-standing CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes, stdout/stderr output, and side effects.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the cohort-standing binary.
fn standing() -> Command {
    Command::cargo_bin("cohort-standing").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    standing()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cohort-standing"));
}

#[test]
fn cli_help_flag() {
    standing()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Student cohort scoring"));
}

#[test]
fn rank_requires_input() {
    standing()
        .arg("rank")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn rank_rejects_zero_day_window() {
    standing()
        .args(["rank", "cohort.json", "--since-days", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--since-days"));
}

#[test]
fn verbose_and_quiet_conflict() {
    standing()
        .args(["-v", "-q", "policy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn missing_input_exits_with_runtime_failure() {
    let dir = tempfile::TempDir::new().expect("temp dir should be created");
    standing()
        .arg("rank")
        .arg(dir.path().join("absent.json"))
        .arg("--root")
        .arg(dir.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("input file not found"));
}

#[test]
fn rank_accepts_window_longer_than_the_calendar() {
    let dir = tempfile::TempDir::new().expect("temp dir should be created");
    let input = dir.path().join("cohort.json");
    std::fs::write(
        &input,
        r#"{ "cohort": [ { "student_id": "s1", "progress": 50 } ] }"#,
    )
    .expect("input should write");

    standing()
        .arg("rank")
        .arg(&input)
        .args(["--since-days", "4000000000", "--root"])
        .arg(dir.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("| 1 | s1 | 15 | 50 | at_risk |"));
}
