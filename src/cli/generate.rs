//! Generate command: build a worksheet and print or save it.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::export::{self, ExportFormat};
use crate::models::Category;
use crate::services::build_worksheet;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Generate a multiplication worksheet
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Category (e.g. tens-by-tens, TExTE); defaults to the configured one
    #[arg(short, long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Number of exercises; defaults to the configured count
    #[arg(short = 'n', long, value_name = "N")]
    pub count: Option<usize>,

    /// Seed for a reproducible worksheet
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Leave steps and product blank
    #[arg(long, conflicts_with = "solutions")]
    pub blank: bool,

    /// Fill in steps and product
    #[arg(long)]
    pub solutions: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Text)]
    pub format: ExportFormat,

    /// Write to a file instead of stdout (use "auto" for worksheet_[category]_[date].[ext])
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load().map_err(|e| CliError::config_load(&e))?;

        let category = self
            .category
            .as_deref()
            .map(str::parse::<Category>)
            .transpose()?;

        let show_solution = if self.blank {
            Some(false)
        } else if self.solutions {
            Some(true)
        } else {
            None
        };

        let request = config
            .worksheet
            .request(category, self.count, self.seed, show_solution);
        let worksheet = build_worksheet(&request)?;

        let content = export::export(&worksheet, self.format)
            .map_err(|e| CliError::io(format!("Failed to render worksheet: {e}")))?;

        match self.output_path(request.category) {
            Some(path) => {
                fs::write(&path, content)
                    .map_err(|e| CliError::io(format!("Failed to write output file: {e}")))?;
                eprintln!("✓ Wrote worksheet to: {}", path.display());
            }
            None => print!("{content}"),
        }

        Ok(())
    }

    /// Output path: user-specified, auto-generated for "auto", or stdout.
    fn output_path(&self, category: Category) -> Option<PathBuf> {
        let path = self.output.as_ref()?;
        if path.as_os_str() != "auto" {
            return Some(path.clone());
        }

        // Auto-generate filename: worksheet_[category]_[date].[ext]
        let date = chrono::Local::now().format("%Y-%m-%d");
        Some(PathBuf::from(format!(
            "worksheet_{}_{}.{}",
            category.id().replace('-', "_"),
            date,
            self.format.extension()
        )))
    }
}
