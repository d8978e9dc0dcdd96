//! Categories command: list exercise categories and their ranges.

use crate::cli::common::{print_json, CliResult};
use crate::models::{select_range, Category};
use clap::Args;
use serde::Serialize;

/// List exercise categories and their multiplier ranges
#[derive(Debug, Clone, Args)]
pub struct CategoriesArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// JSON response types
#[derive(Debug, Serialize)]
struct CategoryItem {
    id: &'static str,
    code: &'static str,
    label: &'static str,
    min_first: u64,
    max_first: u64,
    min_second: u64,
    max_second: u64,
}

#[derive(Debug, Serialize)]
struct ListCategoriesResponse {
    categories: Vec<CategoryItem>,
    count: usize,
}

impl CategoriesArgs {
    /// Execute the categories command
    pub fn execute(&self) -> CliResult<()> {
        let categories: Vec<CategoryItem> = Category::all()
            .iter()
            .map(|category| {
                let range = select_range(*category);
                CategoryItem {
                    id: category.id(),
                    code: category.code(),
                    label: category.label(),
                    min_first: range.min_first,
                    max_first: range.max_first,
                    min_second: range.min_second,
                    max_second: range.max_second,
                }
            })
            .collect();

        if self.json {
            let count = categories.len();
            return print_json(&ListCategoriesResponse { categories, count });
        }

        println!("{:<22} {:<8} {:<20} Range", "ID", "Code", "Label");
        for item in &categories {
            println!(
                "{:<22} {:<8} {:<20} {}-{} x {}-{}",
                item.id,
                item.code,
                item.label,
                item.min_first,
                item.max_first,
                item.min_second,
                item.max_second
            );
        }

        Ok(())
    }
}
