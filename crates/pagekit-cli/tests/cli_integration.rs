//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! They test the "wiring" between the CLI and the core library.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a CLI command with a temporary data directory
fn cli_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pagekit").expect("Failed to find pagekit binary");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

// ============================================================================
// Render Command Tests
// ============================================================================

#[test]
fn test_render_shell_to_stdout() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains(r#"id="main-content""#))
        .stdout(predicate::str::contains("localStorage.getItem(\"theme\")"))
        .stdout(predicate::str::contains("Loading local preferences"))
        .stdout(predicate::str::contains("Preferences loaded on this device.").not());
}

#[test]
fn test_render_with_light_theme() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["render", "--theme", "light"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"<html lang="en" class="light">"#));
}

#[test]
fn test_render_rejects_unknown_theme() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["render", "--theme", "blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unrecognized theme"));
}

#[test]
fn test_render_to_file() {
    let data_dir = TempDir::new().unwrap();
    let out = data_dir.path().join("index.html");

    cli_cmd(&data_dir)
        .args(["render", "--title", "Docs", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("<title>Docs</title>"));
}

// ============================================================================
// Theme Command Tests
// ============================================================================

#[test]
fn test_theme_get_defaults_to_dark() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["theme", "get"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dark (default)"));
}

#[test]
fn test_theme_set_then_get() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["theme", "set", "light"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme set to light"));

    cli_cmd(&data_dir)
        .args(["theme", "get"])
        .assert()
        .success()
        .stdout(predicate::str::diff("light\n"));
}

#[test]
fn test_theme_toggle_round_trip() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme set to light"));

    cli_cmd(&data_dir)
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme set to dark"));
}

#[test]
fn test_theme_reset() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["theme", "set", "light"])
        .assert()
        .success();

    cli_cmd(&data_dir)
        .args(["theme", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme preference cleared"));

    cli_cmd(&data_dir)
        .args(["theme", "get"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dark (default)"));
}

#[test]
fn test_theme_set_invalid() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["theme", "set", "blue"])
        .assert()
        .failure();
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_config_prints_defaults() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""storage_key": "theme""#))
        .stdout(predicate::str::contains(r#""target_id": "main-content""#));
}

#[test]
fn test_config_file_changes_storage_key() {
    let data_dir = TempDir::new().unwrap();
    let config_path = data_dir.path().join("pagekit.json");
    std::fs::write(&config_path, r#"{"theme": {"storage_key": "site-theme"}}"#).unwrap();

    cli_cmd(&data_dir)
        .arg("--config")
        .arg(&config_path)
        .args(["theme", "set", "light"])
        .assert()
        .success();

    // The default key was never written
    cli_cmd(&data_dir)
        .args(["theme", "get"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dark (default)"));

    cli_cmd(&data_dir)
        .arg("--config")
        .arg(&config_path)
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::contains("localStorage.getItem(\"site-theme\")"));
}

#[test]
fn test_missing_config_file_fails() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["--config", "/nonexistent/pagekit.json", "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}
