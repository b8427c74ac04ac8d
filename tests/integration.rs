// Integration tests for the gh-analysis CLI.
//
// These invoke the binary with assert_cmd and stop before any network
// access: argument errors, the repository limit, and config failures.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Binary isolated from the caller's config files and log filter.
fn gh_analysis(home: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gh-analysis"));
    cmd.env("HOME", home.path())
        .env_remove("RUST_LOG")
        .current_dir(home.path());
    cmd
}

#[test]
fn cli_version_flag() {
    let home = TempDir::new().expect("temp dir should be created");
    gh_analysis(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gh-analysis"));
}

#[test]
fn cli_help_flag() {
    let home = TempDir::new().expect("temp dir should be created");
    gh_analysis(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("unused declared dependencies"));
}

#[test]
fn analyze_help_lists_original_option_names() {
    let home = TempDir::new().expect("temp dir should be created");
    gh_analysis(&home)
        .args(["analyze", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--num_to_search"))
        .stdout(predicate::str::contains("--github_access_token"));
}

#[test]
fn analyze_requires_count_and_token() {
    let home = TempDir::new().expect("temp dir should be created");
    gh_analysis(&home)
        .arg("analyze")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));

    gh_analysis(&home)
        .args(["analyze", "-n", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--github_access_token"));
}

#[test]
fn analyze_rejects_non_numeric_count() {
    let home = TempDir::new().expect("temp dir should be created");
    gh_analysis(&home)
        .args(["analyze", "-n", "lots", "-g", "token"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn analyze_above_limit_logs_error_and_prints_nothing() {
    let home = TempDir::new().expect("temp dir should be created");
    gh_analysis(&home)
        .args(["analyze", "-n", "26", "-g", "token"])
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("The limit is 25"));
}

#[test]
fn analyze_above_limit_still_logs_when_quiet() {
    let home = TempDir::new().expect("temp dir should be created");
    gh_analysis(&home)
        .args(["-q", "analyze", "--num_to_search", "100", "--github_access_token", "t"])
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("The limit is 25"));
}

#[test]
fn analyze_accepts_negative_count() {
    let home = TempDir::new().expect("temp dir should be created");
    gh_analysis(&home)
        .args(["analyze", "-n", "-1", "-g", "token", "--config", "absent.toml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("file not found"))
        .stderr(predicate::str::contains("unexpected argument").not());
}

#[test]
fn analyze_with_missing_config_file_fails() {
    let home = TempDir::new().expect("temp dir should be created");
    gh_analysis(&home)
        .args(["analyze", "-n", "25", "-g", "token", "--config", "absent.toml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn analyze_with_malformed_working_dir_config_fails() {
    let home = TempDir::new().expect("temp dir should be created");
    fs::write(home.path().join("gh-analysis.toml"), "[trending]\nsince = \"hourly\"\n")
        .expect("config should write");

    gh_analysis(&home)
        .args(["analyze", "-n", "1", "-g", "token"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("error:"));
}
