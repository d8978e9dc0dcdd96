//! Worksheet export in text, markdown, HTML and JSON.

pub mod html;
pub mod markdown;
pub mod text_renderer;

pub use html::render_page;
pub use markdown::export_to_markdown;
pub use text_renderer::{render_exercise, render_worksheet};

use crate::services::Worksheet;
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format of an exported worksheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Box-drawing grids
    #[default]
    Text,
    /// Markdown with fenced grids
    Markdown,
    /// Print-friendly HTML page
    Html,
    /// Worksheet as JSON
    Json,
}

impl ExportFormat {
    /// File extension for the format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Markdown => "md",
            Self::Html => "html",
            Self::Json => "json",
        }
    }
}

/// Renders a worksheet in the given format.
pub fn export(worksheet: &Worksheet, format: ExportFormat) -> Result<String> {
    Ok(match format {
        ExportFormat::Text => render_worksheet(worksheet),
        ExportFormat::Markdown => export_to_markdown(worksheet),
        ExportFormat::Html => render_page(worksheet),
        ExportFormat::Json => {
            serde_json::to_string_pretty(worksheet).context("Failed to serialize worksheet")?
        }
    })
}
