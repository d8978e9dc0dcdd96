//! Print-friendly HTML worksheet page.
//!
//! The page carries a category form (hidden when printing) followed by one
//! card per exercise. Grids are written most-significant column first, so no
//! right-to-left tricks are needed in the stylesheet.

use crate::models::Category;
use crate::services::layout::{column_color, place_value_headers};
use crate::services::{DigitGrid, ExerciseSheet, Worksheet};
use std::fmt::Write as _;

/// Path the page links its stylesheet from.
pub const STYLESHEET_PATH: &str = "/assets/worksheet.css";

/// Renders a complete HTML document for a worksheet.
pub fn render_page(worksheet: &Worksheet) -> String {
    let mut output = String::new();

    output.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    output.push_str("<meta charset=\"utf-8\">\n");
    output.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(
        output,
        "<title>Multiplication worksheet - {}</title>",
        worksheet.category.label()
    );
    let _ = writeln!(output, "<link rel=\"stylesheet\" href=\"{STYLESHEET_PATH}\">");
    output.push_str("</head>\n<body>\n");

    output.push_str(&render_form(worksheet));

    output.push_str("<main class=\"worksheet\">\n");
    for sheet in &worksheet.exercises {
        output.push_str(&render_card(sheet));
    }
    output.push_str("</main>\n</body>\n</html>\n");

    output
}

/// Category selection form, hidden on print.
fn render_form(worksheet: &Worksheet) -> String {
    let mut output = String::new();

    output.push_str("<form class=\"config print-hidden\" method=\"get\" action=\"/worksheet\">\n");
    output.push_str("<ul class=\"categories\">\n");
    for category in Category::all() {
        let checked = if *category == worksheet.category {
            " checked"
        } else {
            ""
        };
        let _ = writeln!(
            output,
            "<li><input type=\"radio\" id=\"{code}\" name=\"category\" value=\"{id}\"{checked}>\
             <label for=\"{code}\">{label} ({code})</label></li>",
            code = category.code(),
            id = category.id(),
            label = category.label(),
        );
    }
    output.push_str("</ul>\n");

    let _ = writeln!(
        output,
        "<label>Exercises <input type=\"number\" name=\"count\" min=\"0\" value=\"{}\"></label>",
        worksheet.exercises.len()
    );

    let (shown, blank) = if worksheet.show_solution {
        (" selected", "")
    } else {
        ("", " selected")
    };
    let _ = writeln!(
        output,
        "<select name=\"show_solution\">\
         <option value=\"true\"{shown}>With answers</option>\
         <option value=\"false\"{blank}>Blank</option></select>"
    );

    output.push_str("<button type=\"submit\">Generate</button>\n</form>\n");
    output
}

/// One exercise card.
fn render_card(sheet: &ExerciseSheet) -> String {
    let columns = sheet.columns;
    let mut output = String::new();

    let _ = writeln!(
        output,
        "<section class=\"card\" data-exercise=\"{}\">",
        sheet.exercise
    );

    output.push_str(&grid_div(columns, "help", &help_cells(columns)));
    output.push_str(&grid_div(columns, "headers", &header_cells(columns)));
    output.push_str(&grid_div(columns, "operand", &digit_cells(&sheet.first_row, false)));
    output.push_str("<div class=\"operator\">&times;</div>\n");
    output.push_str(&grid_div(columns, "operand", &digit_cells(&sheet.second_row, false)));

    if !sheet.step_rows.is_empty() {
        output.push_str(&grid_div(columns, "rule", ""));
        for (index, step) in sheet.step_rows.iter().enumerate() {
            if index > 0 {
                output.push_str("<div class=\"operator\">+</div>\n");
            }
            output.push_str(&grid_div(columns, "answer", &digit_cells(step, true)));
        }
    }

    output.push_str(&grid_div(columns, "rule double", ""));
    output.push_str(&grid_div(
        columns,
        "answer",
        &digit_cells(&sheet.product_row, true),
    ));
    output.push_str("</section>\n");

    output
}

fn grid_div(columns: usize, class: &str, cells: &str) -> String {
    format!("<div class=\"grid cols-{columns} {class}\">{cells}</div>\n")
}

/// Colour class of the cell at reading position `position`.
fn color_class(columns: usize, position: usize) -> String {
    column_color(columns - 1 - position)
        .map(|color| format!(" col-{color}"))
        .unwrap_or_default()
}

fn help_cells(columns: usize) -> String {
    (0..columns)
        .map(|_| "<span class=\"cell help\"><input type=\"text\" inputmode=\"numeric\" maxlength=\"1\"></span>")
        .collect()
}

fn header_cells(columns: usize) -> String {
    place_value_headers(columns)
        .into_iter()
        .rev()
        .enumerate()
        .map(|(position, label)| {
            format!(
                "<span class=\"cell header{}\">{label}</span>",
                color_class(columns, position)
            )
        })
        .collect()
}

/// Digit cells; answer cells are inputs so they can be filled in on screen.
fn digit_cells(grid: &DigitGrid, answer: bool) -> String {
    let columns = grid.columns();
    grid.left_to_right()
        .enumerate()
        .map(|(position, cell)| {
            let digit = cell.map(String::from).unwrap_or_default();
            let color = color_class(columns, position);
            if answer {
                format!(
                    "<span class=\"cell{color}\"><input type=\"text\" inputmode=\"numeric\" \
                     maxlength=\"1\" value=\"{digit}\"></span>"
                )
            } else {
                format!("<span class=\"cell{color}\">{digit}</span>")
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Exercise;
    use crate::services::{build_worksheet, WorksheetRequest};

    #[test]
    fn test_render_page_structure() {
        let worksheet = build_worksheet(&WorksheetRequest {
            category: Category::HundredsByTens,
            count: 4,
            seed: Some(2),
            ..WorksheetRequest::default()
        })
        .unwrap();

        let html = render_page(&worksheet);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(STYLESHEET_PATH));
        assert_eq!(html.matches("<section class=\"card\"").count(), 4);
        assert!(html.contains("value=\"hundreds-by-tens\" checked"));
        assert_eq!(html.matches("type=\"radio\"").count(), 5);
        assert!(html.contains("<option value=\"true\" selected>"));
    }

    #[test]
    fn test_form_count_matches_rendered_exercises() {
        let worksheet = build_worksheet(&WorksheetRequest {
            count: 0,
            seed: Some(1),
            ..WorksheetRequest::default()
        })
        .unwrap();

        let html = render_page(&worksheet);

        assert!(html.contains("name=\"count\" min=\"0\" value=\"0\""));
        assert_eq!(html.matches("<section class=\"card\"").count(), 0);
    }

    #[test]
    fn test_card_cells() {
        let sheet = ExerciseSheet::new(Exercise::new(23, 14), true).unwrap();
        let card = render_card(&sheet);

        assert!(card.contains("data-exercise=\"23 x 14\""));
        assert!(card.contains("<span class=\"cell header col-blue\">H</span>"));
        assert!(card.contains("<span class=\"cell header col-yellow\">E</span>"));
        assert!(card.contains("<span class=\"cell col-yellow\">3</span>"));
        assert!(card.contains("value=\"2\""));
        assert_eq!(card.matches("class=\"operator\">+<").count(), 1);
    }

    #[test]
    fn test_blank_card_has_empty_inputs() {
        let sheet = ExerciseSheet::new(Exercise::new(23, 14), false).unwrap();
        let card = render_card(&sheet);

        assert!(!card.contains("value=\"9\""));
        assert!(!card.contains("value=\"3\""));
        assert!(card.contains("value=\"\""));
    }
}
