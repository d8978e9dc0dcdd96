//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use mathsheet::config::Config;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the mathsheet binary (set by cargo at compile time)
pub fn mathsheet_bin() -> &'static str {
    env!("CARGO_BIN_EXE_mathsheet")
}

/// Creates an empty, isolated config directory.
pub fn temp_config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Creates an isolated config directory holding `config`.
pub fn temp_config_with(config: &Config) -> TempDir {
    let dir = temp_config_dir();
    config
        .save_to(&dir.path().join("config.toml"))
        .expect("Failed to write config");
    dir
}

/// Runs mathsheet with `args`, reading configuration from `config_dir` only.
pub fn run_isolated(args: &[&str], config_dir: &Path) -> Output {
    Command::new(mathsheet_bin())
        .env("MATHSHEET_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Parses stdout as JSON.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_str(&stdout(output)).expect("Should parse JSON output")
}
