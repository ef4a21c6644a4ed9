//! CLI surface tests
//!
//! Runs the compiled binary against a scratch data directory selected with
//! RECEIPT_CLI_DATA_DIR, so nothing touches the real config.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn receipt_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("receipt").unwrap();
    cmd.env("RECEIPT_CLI_DATA_DIR", dir.path());
    cmd
}

#[test]
fn bare_invocation_points_at_the_wizard() {
    let dir = TempDir::new().unwrap();
    receipt_cmd(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("receipt tui"));
}

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    receipt_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tui"))
        .stdout(predicate::str::contains("recognize"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn init_creates_the_data_directory_and_settings() {
    let dir = TempDir::new().unwrap();
    let base = dir.path().join("receipts");

    let mut cmd = Command::cargo_bin("receipt").unwrap();
    cmd.env("RECEIPT_CLI_DATA_DIR", &base)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));

    assert!(base.join("config.json").exists());
}

#[test]
fn config_reports_paths_and_settings() {
    let dir = TempDir::new().unwrap();
    receipt_cmd(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data directory"))
        .stdout(predicate::str::contains("Session log"))
        .stdout(predicate::str::contains("Currency symbol: $"))
        .stdout(predicate::str::contains("tesseract"));
}

#[test]
fn config_honors_saved_settings() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"currency_symbol": "€", "ocr_command": "my-ocr"}"#,
    )
    .unwrap();

    receipt_cmd(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol: €"))
        .stdout(predicate::str::contains("my-ocr"));
}

#[test]
fn recognize_fails_cleanly_for_a_missing_image() {
    let dir = TempDir::new().unwrap();
    receipt_cmd(&dir)
        .arg("recognize")
        .arg(dir.path().join("no-such-photo.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
