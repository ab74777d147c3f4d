//! CLI integration tests
//!
//! Each test points MOTORLOT_DATA_DIR at its own temp directory so drafts
//! never leak between tests.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn motorlot(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("motorlot").unwrap();
    cmd.env("MOTORLOT_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn test_config_shows_paths() {
    let data_dir = TempDir::new().unwrap();

    motorlot(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Base directory"))
        .stdout(predicate::str::contains("(not configured)"));
}

#[test]
fn test_empty_draft_show() {
    let data_dir = TempDir::new().unwrap();

    motorlot(&data_dir)
        .args(["draft", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Location: (not set)"))
        .stdout(predicate::str::contains("0 item(s)"));
}

#[test]
fn test_location_persists_across_invocations() {
    let data_dir = TempDir::new().unwrap();

    motorlot(&data_dir)
        .args(["location", "set", "Dubai", "--neighborhood", "Marina"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marina, Dubai"));

    motorlot(&data_dir)
        .args(["draft", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Location: Marina, Dubai"));
}

#[test]
fn test_details_merge_across_invocations() {
    let data_dir = TempDir::new().unwrap();

    motorlot(&data_dir)
        .args(["details", "set", "--make", "Toyota", "--year", "2019"])
        .assert()
        .success();

    motorlot(&data_dir)
        .args(["details", "set", "--model", "Corolla"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2019 Toyota Corolla"));
}

#[test]
fn test_details_invalid_enum_rejected() {
    let data_dir = TempDir::new().unwrap();

    motorlot(&data_dir)
        .args(["details", "set", "--transmission", "warp-drive"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid transmission"));
}

#[test]
fn test_contact_description_clamped() {
    let data_dir = TempDir::new().unwrap();
    let long_description = "x".repeat(2000);

    motorlot(&data_dir)
        .args(["contact", "set", "--description", &long_description])
        .assert()
        .success();

    // The exported record carries the clamped description.
    let output = motorlot(&data_dir)
        .args(["draft", "export"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let description = json["contact"]["description"].as_str().unwrap();
    assert_eq!(description.chars().count(), 1000);
}

#[test]
fn test_media_is_session_scoped() {
    let data_dir = TempDir::new().unwrap();
    let photo = data_dir.path().join("front.jpg");
    std::fs::write(&photo, "jpeg bytes").unwrap();

    motorlot(&data_dir)
        .args(["media", "add"])
        .arg(&photo)
        .assert()
        .success()
        .stdout(predicate::str::contains("Attached 1 file(s)"));

    // A fresh invocation starts with empty media: raw file handles are
    // never restored from the draft record.
    motorlot(&data_dir)
        .args(["media", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No media attached"));
}

#[test]
fn test_draft_clear_erases_record() {
    let data_dir = TempDir::new().unwrap();

    motorlot(&data_dir)
        .args(["location", "set", "Dubai"])
        .assert()
        .success();

    motorlot(&data_dir)
        .args(["draft", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Draft cleared"));

    motorlot(&data_dir)
        .args(["draft", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Location: (not set)"));
}

#[test]
fn test_publish_without_backend_fails() {
    let data_dir = TempDir::new().unwrap();

    motorlot(&data_dir)
        .arg("publish")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No listings backend configured"));
}

#[test]
fn test_draft_export_yaml() {
    let data_dir = TempDir::new().unwrap();

    motorlot(&data_dir)
        .args(["location", "set", "Sharjah"])
        .assert()
        .success();

    motorlot(&data_dir)
        .args(["draft", "export", "--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("city: Sharjah"));
}
