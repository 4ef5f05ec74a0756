//! End-to-end tests for the storied binary

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use storied::backlog::testing::samples;

fn storied() -> Command {
    cargo_bin_cmd!("storied")
}

#[test]
fn test_parse_prints_json_by_default() {
    let output = storied()
        .arg("parse")
        .arg(samples::path("000-single-story.txt"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["groups"][0]["key"], "Backlog");
    assert_eq!(value["groups"][0]["entries"][0]["who"], "user");
    assert_eq!(value["groups"][0]["entries"][0]["type"], "story");
}

#[test]
fn test_parse_with_format_flag() {
    storied()
        .args(["parse", "--format", "treeviz"])
        .arg(samples::path("010-sprints.txt"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("⧉ 2 groups\n"))
        .stdout(predicate::str::contains("✗ #bug Preview crashes on empty boards [2]"));
}

#[test]
fn test_diagnostics_go_to_stderr() {
    storied()
        .args(["--format", "tag", "parse"])
        .arg(samples::path("020-ungrouped.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("<group key=\"Roadmap\">"))
        .stderr(predicate::str::contains(
            "error [ungrouped-story]: Ungrouped story found at line 1",
        ))
        .stderr(predicate::str::contains(
            "error [ungrouped-bug]: Ungrouped bug found at line 3",
        ));
}

#[test]
fn test_strict_mode_fails_on_errors() {
    storied()
        .args(["parse", "--strict"])
        .arg(samples::path("020-ungrouped.txt"))
        .assert()
        .code(2);

    storied()
        .args(["parse", "--strict"])
        .arg(samples::path("010-sprints.txt"))
        .assert()
        .success();
}

#[test]
fn test_config_file_sets_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("storied.toml");
    fs::write(
        &config,
        "[output]\nformat = \"treeviz\"\n\n[treeviz]\nshow_line_numbers = true\nlabel_width = 50\n",
    )
    .unwrap();

    storied()
        .arg("parse")
        .arg("--config")
        .arg(&config)
        .arg(samples::path("000-single-story.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("03 └─ § Backlog"));
}

#[test]
fn test_missing_file_is_reported() {
    storied()
        .args(["parse", "does-not-exist.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Source not found"));
}

#[test]
fn test_unknown_format_is_reported() {
    storied()
        .args(["parse", "--format", "csv"])
        .arg(samples::path("000-single-story.txt"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("csv"));
}

#[test]
fn test_formats_lists_registry() {
    storied()
        .arg("formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("treeviz"))
        .stdout(predicate::str::contains("tag"))
        .stdout(predicate::str::contains("yaml"));
}
