//! CLI command handlers for MathSheet.
//!
//! This module provides headless, scriptable access to worksheet generation
//! for printing, automation and testing.

pub mod categories;
pub mod common;
pub mod config;
pub mod decompose;
pub mod generate;

// Re-export types used by main.rs and tests
pub use categories::CategoriesArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use decompose::DecomposeArgs;
pub use generate::GenerateArgs;
