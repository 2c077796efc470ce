//! Binary-level tests for the tomo CLI.
//!
//! Only paths that never reach the interactive terminal are exercised here;
//! the countdown and menu loops are covered by unit tests on their state.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tomo(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tomo").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn test_help_describes_the_timer() {
    let home = TempDir::new().unwrap();
    tomo(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pomodoro"))
        .stdout(predicate::str::contains("--short-break"));
}

#[test]
fn test_zero_cycles_is_rejected_before_the_timer_starts() {
    let home = TempDir::new().unwrap();
    tomo(&home)
        .args(["--work", "1m", "--short-break", "1m", "--cycles", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cycle count must be at least 1"));
}

#[test]
fn test_malformed_duration_is_rejected() {
    let home = TempDir::new().unwrap();
    tomo(&home)
        .args(["--work", "soon", "--short-break", "5m"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid work duration"));
}

#[test]
fn test_completions_are_generated() {
    let home = TempDir::new().unwrap();
    tomo(&home)
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tomo"));
}

#[test]
fn test_broken_config_file_fails_with_context() {
    let home = TempDir::new().unwrap();
    let root = home.path().join(".tomo");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(root.join("config.yaml"), "timer: [broken\n").unwrap();

    tomo(&home)
        .args(["--work", "1m", "--short-break", "1m"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}
