//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use crate::constants::{APP_DIR_NAME, CONFIG_DIR_ENV};
use crate::models::Category;
use crate::services::worksheet::{DEFAULT_EXERCISE_COUNT, DEFAULT_MAX_EXERCISES};
use crate::services::WorksheetRequest;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Worksheet defaults used when a request leaves a value out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorksheetConfig {
    /// Category used when none is given
    #[serde(default = "default_category")]
    pub category: Category,
    /// Number of exercises per worksheet
    #[serde(default = "default_count")]
    pub count: usize,
    /// Fill in the answer rows
    #[serde(default = "default_show_solution")]
    pub show_solution: bool,
    /// Largest number of exercises a single request may ask for
    #[serde(default = "default_max_count")]
    pub max_count: usize,
}

const fn default_category() -> Category {
    Category::TensByTens
}

const fn default_count() -> usize {
    DEFAULT_EXERCISE_COUNT
}

const fn default_show_solution() -> bool {
    true
}

const fn default_max_count() -> usize {
    DEFAULT_MAX_EXERCISES
}

impl Default for WorksheetConfig {
    fn default() -> Self {
        Self {
            category: default_category(),
            count: default_count(),
            show_solution: default_show_solution(),
            max_count: default_max_count(),
        }
    }
}

impl WorksheetConfig {
    /// Builds a request from these defaults, overridden by any given value.
    #[must_use]
    pub fn request(
        &self,
        category: Option<Category>,
        count: Option<usize>,
        seed: Option<u64>,
        show_solution: Option<bool>,
    ) -> WorksheetRequest {
        WorksheetRequest {
            category: category.unwrap_or(self.category),
            count: count.unwrap_or(self.count),
            seed,
            show_solution: show_solution.unwrap_or(self.show_solution),
            max_count: self.max_count,
        }
    }
}

/// Web server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    3001
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/MathSheet/config.toml`
/// - macOS: `~/Library/Application Support/MathSheet/config.toml`
/// - Windows: `%APPDATA%\MathSheet\config.toml`
///
/// The directory can be overridden with the `MATHSHEET_CONFIG_DIR`
/// environment variable.
///
/// # Validation
///
/// - `count` must be between 1 and `max_count`
/// - `max_count` must be at least 1
/// - `host` must not be empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Worksheet defaults
    #[serde(default)]
    pub worksheet: WorksheetConfig,
    /// Web server settings
    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    ///
    /// Uses `MATHSHEET_CONFIG_DIR` when set, otherwise the platform config
    /// directory joined with `MathSheet`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from a specific file.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to a specific file.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        let worksheet = &self.worksheet;

        if worksheet.max_count == 0 {
            anyhow::bail!("worksheet.max_count must be at least 1");
        }

        if worksheet.count == 0 || worksheet.count > worksheet.max_count {
            anyhow::bail!(
                "worksheet.count must be between 1 and {} (got {})",
                worksheet.max_count,
                worksheet.count
            );
        }

        if self.server.host.trim().is_empty() {
            anyhow::bail!("server.host cannot be empty");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.worksheet.category, Category::TensByTens);
        assert_eq!(config.worksheet.count, 10);
        assert!(config.worksheet.show_solution);
        assert_eq!(config.worksheet.max_count, 200);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3001);
    }

    #[test]
    fn test_config_validate() {
        let mut config = Config::new();
        assert!(config.validate().is_ok());

        config.worksheet.count = 0;
        assert!(config.validate().is_err());

        config.worksheet.count = 201;
        assert!(config.validate().is_err());

        config.worksheet.count = 10;
        config.server.host = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.worksheet.category = Category::HundredsByTens;
        config.worksheet.count = 24;
        config.worksheet.show_solution = false;
        config.server.port = 8080;

        config.save_to(&config_file).unwrap();
        assert!(config_file.exists());
        assert!(!config_file.with_extension("toml.tmp").exists());

        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[worksheet]\ncategory = \"units-by-tens\"\n").unwrap();

        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded.worksheet.category, Category::UnitsByTens);
        assert_eq!(loaded.worksheet.count, 10);
        assert_eq!(loaded.server, ServerConfig::default());
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        fs::write(&config_file, "[worksheet]\ncategory = \"fractions\"\n").unwrap();
        assert!(Config::load_from(&config_file).is_err());

        fs::write(&config_file, "[worksheet]\ncount = 0\n").unwrap();
        assert!(Config::load_from(&config_file).is_err());
    }

    #[test]
    fn test_request_overrides() {
        let config = WorksheetConfig::default();

        let req = config.request(None, None, None, None);
        assert_eq!(req.category, Category::TensByTens);
        assert_eq!(req.count, 10);
        assert!(req.show_solution);

        let req = config.request(Some(Category::UnitsByUnits), Some(3), Some(9), Some(false));
        assert_eq!(req.category, Category::UnitsByUnits);
        assert_eq!(req.count, 3);
        assert_eq!(req.seed, Some(9));
        assert!(!req.show_solution);
        assert_eq!(req.max_count, 200);
    }
}
