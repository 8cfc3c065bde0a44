//! Integration tests for the daylog binary

use std::path::Path;
use std::process::{Command, Output};

use chrono::Utc;
use serde_json::Value;
use tempfile::TempDir;

/// Run daylog with an isolated config lookup and no colors
fn run_daylog(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_daylog"))
        .env("DAYLOG_CONFIG", home.join("missing.yaml"))
        .env("XDG_CONFIG_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute daylog")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_emit_writes_console_and_file() {
    let temp = TempDir::new().unwrap();
    let log_dir = temp.path().join("logs");
    let log_dir_arg = log_dir.to_string_lossy().to_string();

    let output = run_daylog(
        temp.path(),
        &["--log-dir", &log_dir_arg, "emit", "warn", "disk", r#"{"free_mb": 12}"#],
    );
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let today = Utc::now().format("%Y-%m-%d").to_string();
    let content = std::fs::read_to_string(log_dir.join(format!("{}.log", today))).unwrap();
    let record: Value = serde_json::from_str(content.trim_end()).unwrap();
    assert_eq!(record["level"], "warn");
    assert_eq!(record["messages"], serde_json::json!(["disk", {"free_mb": 12}]));

    assert_eq!(stdout(&output).trim_end(), content.trim_end());
}

#[test]
fn test_emit_below_level_is_silent() {
    let temp = TempDir::new().unwrap();
    let log_dir = temp.path().join("logs");
    let log_dir_arg = log_dir.to_string_lossy().to_string();

    let output = run_daylog(temp.path(), &["--log-dir", &log_dir_arg, "emit", "debug", "noise"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "");

    let entries: Vec<_> = std::fs::read_dir(&log_dir).unwrap().collect();
    assert!(entries.is_empty());
}

#[test]
fn test_plain_console_only() {
    let temp = TempDir::new().unwrap();
    let log_dir = temp.path().join("never-created");
    let log_dir_arg = log_dir.to_string_lossy().to_string();

    let output = run_daylog(
        temp.path(),
        &["--log-dir", &log_dir_arg, "--no-file", "--plain", "emit", "info", "hello", "world"],
    );
    assert!(output.status.success());
    assert!(stdout(&output).trim_end().ends_with("[INFO]: hello world"));
    assert!(!log_dir.exists());
}

#[test]
fn test_path_command() {
    let temp = TempDir::new().unwrap();
    let log_dir_arg = temp.path().join("logs").to_string_lossy().to_string();

    let output = run_daylog(temp.path(), &["--log-dir", &log_dir_arg, "path", "--date", "2026-07-04"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim_end(), format!("{}/2026-07-04.log", log_dir_arg));
}

#[test]
fn test_config_file_and_flag_layering() {
    let temp = TempDir::new().unwrap();
    let options_path = temp.path().join("opts.yaml");
    std::fs::write(&options_path, "level: debug\nprettyPrint: true\n").unwrap();
    let options_arg = options_path.to_string_lossy().to_string();

    let output = run_daylog(temp.path(), &["-c", &options_arg, "--single-line", "config", "-o", "json"]);
    assert!(output.status.success());

    let config: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(config["level"], "debug");
    assert_eq!(config["prettyPrint"], true);
    assert_eq!(config["singleLine"], true);
}

#[test]
fn test_missing_config_file_fails() {
    let temp = TempDir::new().unwrap();
    let output = run_daylog(temp.path(), &["-c", "/nonexistent/daylog.yaml", "config"]);
    assert!(!output.status.success());
}
