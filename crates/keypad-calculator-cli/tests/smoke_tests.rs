//! Smoke tests for the kcalc CLI
//!
//! These tests run the real binary end to end.

#![allow(deprecated)] // Allow deprecated Command::cargo_bin until assert_cmd is updated
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command for the kcalc binary with a clean environment
fn kcalc() -> Command {
    let mut cmd = Command::cargo_bin("kcalc").expect("kcalc binary should exist");
    cmd.env_remove("KCALC_CONFIG")
        .env_remove("RUST_LOG")
        .arg("--color")
        .arg("never");
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    kcalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.3.0"));
}

#[test]
fn test_help_flag() {
    kcalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("press"))
        .stdout(predicate::str::contains("repl"))
        .stdout(predicate::str::contains("keypad"));
}

#[test]
fn test_no_subcommand_fails() {
    kcalc().assert().failure();
}

// ============================================================================
// press
// ============================================================================

#[test]
fn test_press_chained_expression() {
    kcalc()
        .args(["press", "3", "+", "4", "x", "2", "="])
        .assert()
        .success()
        .stdout("14\n");
}

#[test]
fn test_press_divide_by_zero() {
    kcalc()
        .args(["press", "5", "/", "0", "="])
        .assert()
        .success()
        .stdout("∞\n");
}

#[test]
fn test_press_grouped_display() {
    kcalc()
        .args(["press", "1234.5"])
        .assert()
        .success()
        .stdout("1,234.5\n");
}

#[test]
fn test_press_subtract_key() {
    kcalc()
        .args(["press", "9", "-", "2", "="])
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn test_press_pending_operation() {
    kcalc()
        .args(["press", "8", "÷"])
        .assert()
        .success()
        .stdout("8 ÷\n\n");
}

#[test]
fn test_press_steps() {
    kcalc()
        .args(["press", "--steps", "2", "AC"])
        .assert()
        .success()
        .stdout("[2]\t\t2\n[AC]\t\t\n\n");
}

#[test]
fn test_press_unknown_key_fails() {
    kcalc()
        .args(["press", "2", "%"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key"));
}

#[test]
fn test_press_json() {
    let output = kcalc()
        .args(["press", "-f", "json", "1000", "+"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["display"]["previous"], "1,000 +");
    assert_eq!(json["display"]["current"], "");
    assert_eq!(json["state"]["previous_operand"], "1000");
    assert_eq!(json["state"]["operation"], "+");
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_thousands_separator_flag() {
    kcalc()
        .args(["--thousands-separator", " ", "press", "1000000"])
        .assert()
        .success()
        .stdout("1 000 000\n");
}

#[test]
fn test_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("kcalc.json");
    fs::write(&path, r#"{"thousands_separator": "_"}"#).unwrap();

    kcalc()
        .arg("--config")
        .arg(&path)
        .args(["press", "123456"])
        .assert()
        .success()
        .stdout("123_456\n");
}

#[test]
fn test_config_from_environment() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("kcalc.json");
    fs::write(&path, r#"{"thousands_separator": ""}"#).unwrap();

    kcalc()
        .env("KCALC_CONFIG", &path)
        .args(["press", "123456"])
        .assert()
        .success()
        .stdout("123456\n");
}

#[test]
fn test_invalid_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("kcalc.json");
    fs::write(&path, r#"{"decimal_places": 2}"#).unwrap();

    kcalc()
        .arg("--config")
        .arg(&path)
        .args(["press", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

// ============================================================================
// repl and keypad
// ============================================================================

#[test]
fn test_repl_session() {
    kcalc()
        .args(["repl", "--no-prompt"])
        .write_stdin("6 x\n7 =\n?\nquit\n")
        .assert()
        .success()
        .stdout("6 *\n\n42\nerror: Unknown key: \"?\"\n");
}

#[test]
fn test_quiet_repl_prints_results_only() {
    kcalc()
        .args(["-q", "repl"])
        .write_stdin("2 x 3 =\n")
        .assert()
        .success()
        .stdout("6\n");
}

#[test]
fn test_keypad_layout() {
    kcalc()
        .arg("keypad")
        .assert()
        .success()
        .stdout(predicate::str::contains("[   AC    ] [DEL] [ ÷ ]"))
        .stdout(predicate::str::contains("[ 7 ] [ 8 ] [ 9 ] [ - ]"));
}
