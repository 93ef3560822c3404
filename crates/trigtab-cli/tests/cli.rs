//! Argument handling tests for the trigtab binary.
//!
//! These run the real binary but never reach a database: they stop at
//! argument parsing.

use assert_cmd::Command;
use predicates::prelude::*;

fn trigtab() -> Command {
    let mut cmd = Command::cargo_bin("trigtab").unwrap();
    cmd.env_remove("TRIGTAB_DATABASE_USER");
    cmd.env_remove("TRIGTAB_DATABASE_PASSWD");
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    trigtab()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("tables")
                .and(predicate::str::contains("fetch"))
                .and(predicate::str::contains("plot")),
        );
}

#[test]
fn test_missing_credentials_is_a_usage_error() {
    trigtab()
        .arg("tables")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--user"));
}

#[test]
fn test_fetch_requires_a_table() {
    trigtab()
        .args(["--user", "u", "--passwd", "p", "fetch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("<TABLE>"));
}

#[test]
fn test_plot_requires_axes() {
    trigtab()
        .args(["--user", "u", "--passwd", "p", "plot", "glitches"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--x").and(predicate::str::contains("--y")));
}

#[test]
fn test_help_does_not_leak_env_values() {
    trigtab()
        .env("TRIGTAB_DATABASE_PASSWD", "hunter2")
        .args(["fetch", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hunter2").not());
}
