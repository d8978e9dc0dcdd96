//! Markdown worksheet export.

use crate::export::text_renderer::render_exercise;
use crate::services::Worksheet;
use std::fmt::Write as _;

/// Generates a markdown document with one fenced grid per exercise.
pub fn export_to_markdown(worksheet: &Worksheet) -> String {
    let mut output = String::new();
    let range = &worksheet.range;

    output.push_str("# Multiplication Worksheet\n\n");
    let _ = writeln!(
        output,
        "**Category:** {} ({})  ",
        worksheet.category.label(),
        worksheet.category.code()
    );
    let _ = writeln!(
        output,
        "**Range:** {}-{} x {}-{}  ",
        range.min_first, range.max_first, range.min_second, range.max_second
    );
    let _ = writeln!(
        output,
        "**Answers:** {}",
        if worksheet.show_solution { "shown" } else { "blank" }
    );
    if let Some(seed) = worksheet.seed {
        let _ = writeln!(output, "**Seed:** {seed}");
    }
    output.push('\n');

    for (index, sheet) in worksheet.exercises.iter().enumerate() {
        let _ = writeln!(output, "## Exercise {}: {}\n", index + 1, sheet.exercise);
        output.push_str("```text\n");
        output.push_str(&render_exercise(sheet));
        output.push_str("```\n\n");
    }

    output
}
