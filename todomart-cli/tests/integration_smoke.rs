//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("todomart").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--database-url"));
}

#[test]
fn test_routes_lists_table() {
    let mut cmd = Command::cargo_bin("todomart").unwrap();
    cmd.arg("routes");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("/categories"))
        .stdout(predicate::str::contains("/buyers/{id}"))
        .stdout(predicate::str::contains("PATCH"));
}

#[test]
fn test_unknown_subcommand_fails() {
    let mut cmd = Command::cargo_bin("todomart").unwrap();
    cmd.arg("seed");

    cmd.assert().failure();
}

#[test]
fn test_debug_flag_initializes_tracing() {
    let mut cmd = Command::cargo_bin("todomart").unwrap();
    cmd.arg("--debug").arg("routes");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("GET"));
}
