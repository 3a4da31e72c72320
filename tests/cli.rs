use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary config directory
fn temp_config_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".user-admin").join("config.json")
}

const BINARY_NAME: &str = "user-admin";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"));
}

#[test]
/// Setting a backend override should create the config file.
fn set_backend_creates_config_file() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);

    // Ensure the file does not exist initially
    assert!(!config_path.exists());

    // Run the command
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("set-backend")
        .arg("http://localhost:5000")
        .env("HOME", tmp.path()) // simulate different $HOME
        .assert()
        .success()
        .stdout(contains("Backend set to http://localhost:5000"));

    // Confirm the file was created and records the override
    assert!(config_path.exists());
    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("http://localhost:5000"));
}

#[test]
/// Clearing the backend override should drop it from the config file.
fn clear_backend_removes_override() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, r#"{"base_url":"http://stale.example"}"#).unwrap();

    // Run the command
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("clear-backend")
        .env("HOME", tmp.path()) // simulate different $HOME
        .assert()
        .success()
        .stdout(contains("Clearing backend override"));

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(!contents.contains("stale.example"));
}

#[test]
/// Unknown subcommands should fail with a usage error.
fn cli_rejects_unknown_subcommand() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("frobnicate");
    cmd.assert().failure();
}

#[test]
#[ignore] // This involves network calls against the configured backend.
fn list_prints_users() {
    let tmp = temp_config_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("list")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("NAME"));
}
