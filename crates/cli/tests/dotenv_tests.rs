//! Integration tests for `.env` handling.
//!
//! Invariants:
//! - An invalid `.env` fails the run before anything else.
//! - Error messages never echo `.env` contents.
//! - `DOTENV_DISABLED=1` skips a malformed `.env`.

mod common;

use common::clear_zvirt_env;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_invalid_dotenv_causes_failure() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".env"), "INVALID_LINE_WITHOUT_EQUALS").unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("zvirt-report");
    cmd.current_dir(temp_dir.path());
    clear_zvirt_env(&mut cmd);
    cmd.env_remove("DOTENV_DISABLED");

    cmd.arg("report.xlsx")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(".env"));
}

#[test]
fn test_invalid_dotenv_does_not_leak_secrets() {
    let temp_dir = TempDir::new().unwrap();
    let secret_value = "supersecret_zvirt_password_12345";
    fs::write(
        temp_dir.path().join(".env"),
        format!("ZVIRT_PASSWORD={}\nINVALID_LINE", secret_value),
    )
    .unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("zvirt-report");
    cmd.current_dir(temp_dir.path());
    clear_zvirt_env(&mut cmd);
    cmd.env_remove("DOTENV_DISABLED");

    cmd.arg("report.xlsx")
        .assert()
        .failure()
        .stderr(predicate::str::contains(secret_value).not())
        .stdout(predicate::str::contains(secret_value).not());
}

#[test]
fn test_dotenv_disabled_skips_invalid_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".env"), "INVALID_LINE_WITHOUT_EQUALS").unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("zvirt-report");
    cmd.current_dir(temp_dir.path());
    clear_zvirt_env(&mut cmd);
    cmd.env("DOTENV_DISABLED", "1");

    // Gets past .env loading and fails on the missing host instead.
    cmd.arg("report.xlsx")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(".env").not())
        .stderr(predicate::str::contains("ZVIRT_HOST"));
}
