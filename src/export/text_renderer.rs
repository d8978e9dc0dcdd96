//! Box-drawing renderer for worksheets.
//!
//! Draws each exercise as the paper layout of a long multiplication, with
//! the ones column on the right.

use crate::services::layout::place_value_headers;
use crate::services::{DigitGrid, ExerciseSheet, Worksheet};
use std::fmt::Write as _;

/// Inner width of one cell; wide enough for the two-letter column labels.
const CELL_WIDTH: usize = 4;

/// Width of the operator gutter left of the grid ("× ", "+ ").
const GUTTER: &str = "  ";

/// Renders a single exercise as a Unicode grid.
///
/// # Example
///
/// ```text
///   ┌────┬────┬────┐
///   │    │    │    │
///   ├────┼────┼────┤
///   │ H  │ T  │ E  │
///   ├────┼────┼────┤
///   │    │ 2  │ 3  │
/// × │    │ 1  │ 4  │
///   ├────┼────┼────┤
///   │    │ 9  │ 2  │
/// + │ 2  │ 3  │ 0  │
///   ╞════╪════╪════╡
///   │ 3  │ 2  │ 2  │
///   └────┴────┴────┘
/// ```
pub fn render_exercise(sheet: &ExerciseSheet) -> String {
    let columns = sheet.columns;
    let mut output = String::new();

    // Help row for carries, always empty
    output.push_str(&border(columns, '┌', '┬', '┐', '─'));
    output.push_str(&grid_row(GUTTER, &DigitGrid::blank(columns)));
    output.push_str(&border(columns, '├', '┼', '┤', '─'));

    // Place-value headers, most significant first
    let headers: Vec<String> = place_value_headers(columns)
        .into_iter()
        .rev()
        .map(str::to_string)
        .collect();
    output.push_str(&cell_row(GUTTER, &headers));
    output.push_str(&border(columns, '├', '┼', '┤', '─'));

    output.push_str(&grid_row(GUTTER, &sheet.first_row));
    output.push_str(&grid_row("× ", &sheet.second_row));

    if !sheet.step_rows.is_empty() {
        output.push_str(&border(columns, '├', '┼', '┤', '─'));
        for (index, step) in sheet.step_rows.iter().enumerate() {
            let gutter = if index == 0 { GUTTER } else { "+ " };
            output.push_str(&grid_row(gutter, step));
        }
    }

    output.push_str(&border(columns, '╞', '╪', '╡', '═'));
    output.push_str(&grid_row(GUTTER, &sheet.product_row));
    output.push_str(&border(columns, '└', '┴', '┘', '─'));

    output
}

/// Renders every exercise of a worksheet, numbered, separated by blank lines.
pub fn render_worksheet(worksheet: &Worksheet) -> String {
    let mut output = String::new();

    let _ = writeln!(
        output,
        "{} ({}) - {} exercises",
        worksheet.category.label(),
        worksheet.category.code(),
        worksheet.exercises.len()
    );
    if let Some(seed) = worksheet.seed {
        let _ = writeln!(output, "Seed: {seed}");
    }

    for (index, sheet) in worksheet.exercises.iter().enumerate() {
        output.push('\n');
        let _ = writeln!(output, "{}. {}", index + 1, sheet.exercise);
        output.push_str(&render_exercise(sheet));
    }

    output
}

/// Draws a horizontal rule across `columns` cells.
fn border(columns: usize, left: char, mid: char, right: char, fill: char) -> String {
    let segment: String = std::iter::repeat(fill).take(CELL_WIDTH).collect();
    let segments = vec![segment; columns];
    format!(
        "{GUTTER}{left}{}{right}\n",
        segments.join(&mid.to_string())
    )
}

/// Draws a row of digit cells in reading order.
fn grid_row(gutter: &str, grid: &DigitGrid) -> String {
    let cells: Vec<String> = grid
        .left_to_right()
        .map(|cell| cell.map(String::from).unwrap_or_default())
        .collect();
    cell_row(gutter, &cells)
}

/// Draws a row of already ordered cell texts.
fn cell_row(gutter: &str, cells: &[String]) -> String {
    let body: Vec<String> = cells
        .iter()
        .map(|text| format!(" {:<width$}", text, width = CELL_WIDTH - 1))
        .collect();
    format!("{gutter}│{}│\n", body.join("│"))
}
