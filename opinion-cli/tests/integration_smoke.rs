//! Smoke tests to verify command wiring (no database needed)

use assert_cmd::Command;
use predicates::prelude::*;

fn opinion_api() -> Command {
    let mut cmd = Command::cargo_bin("opinion-api").unwrap();
    // Keep a developer's local config out of the way
    cmd.env_remove("OPINION_CONFIG");
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    opinion_api()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("ping"))
        .stdout(predicate::str::contains("routes"));
}

#[test]
fn test_serve_help() {
    opinion_api()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--database-url"));
}

#[test]
fn test_routes_json() {
    opinion_api()
        .args(["routes", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"/comentarios\""))
        .stdout(predicate::str::contains("Opinion API"));
}

#[test]
fn test_routes_table() {
    opinion_api()
        .arg("routes")
        .assert()
        .success()
        .stdout(predicate::str::contains("GET /fuentes"));
}

#[test]
fn test_completions_bash() {
    opinion_api()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("opinion-api"));
}

#[test]
fn test_missing_config_file_fails() {
    opinion_api()
        .args(["ping", "--config", "/nonexistent/opinion-api.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}
