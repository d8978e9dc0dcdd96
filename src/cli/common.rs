//! Shared CLI result and exit code handling.

use crate::constants::APP_BINARY_NAME;
use crate::error::WorksheetError;
use std::fmt;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Invalid input (category, range, count, overflow, config values)
    ValidationError = 1,
    /// File system or serialization failure
    IoError = 2,
}

/// Error returned by CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code the process should end with
    pub code: ExitCode,
    /// Message printed to stderr
    pub message: String,
    /// Follow-up suggestion printed after the message
    pub hint: Option<String>,
}

impl CliError {
    /// Creates a validation error (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::ValidationError,
            message: message.into(),
            hint: None,
        }
    }

    /// Creates an I/O error (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::IoError,
            message: message.into(),
            hint: None,
        }
    }

    /// Maps a configuration load failure: unreadable files are I/O errors,
    /// files that fail to parse or validate are validation errors.
    pub fn config_load(err: &anyhow::Error) -> Self {
        let message = format!("Failed to load configuration: {err:#}");
        if err.chain().any(|cause| cause.is::<std::io::Error>()) {
            Self::io(message)
        } else {
            Self::validation(message)
        }
    }

    /// Attaches a follow-up suggestion.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Numeric exit code.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.code as i32
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<WorksheetError> for CliError {
    fn from(err: WorksheetError) -> Self {
        let cli_err = Self::validation(err.to_string());
        match err {
            WorksheetError::InvalidCategory(_) => cli_err.with_hint(format!(
                "Run `{APP_BINARY_NAME} categories` to see the available categories."
            )),
            _ => cli_err,
        }
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}
