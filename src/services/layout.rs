//! Digit grids for the long multiplication layout.
//!
//! Every row of an exercise (multiplicands, steps, product) is written into
//! the same number of columns. Cells are indexed ones-first, so cell 0 is the
//! rightmost box on paper.

use crate::models::{digit_count, Exercise, StepSolution};
use serde::{Deserialize, Serialize};

/// Place-value column labels, ones first: units, tens, hundreds, thousands,
/// ten-thousands, hundred-thousands, millions.
pub const PLACE_VALUE_LABELS: [&str; 7] = ["E", "T", "H", "D", "TD", "HD", "M"];

/// Column colours, ones first. Columns past the fifth are uncoloured.
pub const COLUMN_COLORS: [&str; 5] = ["yellow", "green", "blue", "cyan", "fuchsia"];

/// Fixed-width row of single-digit cells, ones digit first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitGrid {
    cells: Vec<Option<char>>,
}

impl DigitGrid {
    /// Lays `digits` out into `columns` cells.
    ///
    /// Missing high-order columns stay blank. Digits beyond `columns` are
    /// dropped from the most-significant end.
    #[must_use]
    pub fn new(digits: &str, columns: usize) -> Self {
        let mut cells: Vec<Option<char>> = digits.chars().rev().take(columns).map(Some).collect();
        cells.resize(columns, None);
        Self { cells }
    }

    /// A grid with every cell blank.
    #[must_use]
    pub fn blank(columns: usize) -> Self {
        Self {
            cells: vec![None; columns],
        }
    }

    /// Cells ones-first.
    #[must_use]
    pub fn cells(&self) -> &[Option<char>] {
        &self.cells
    }

    /// Number of columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.cells.len()
    }

    /// Cells in reading order (most-significant column first).
    pub fn left_to_right(&self) -> impl Iterator<Item = Option<char>> + '_ {
        self.cells.iter().rev().copied()
    }

    /// Returns true when no cell holds a digit.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }
}

/// Lays a number out into `columns` cells.
#[must_use]
pub fn digit_grid(value: u64, columns: usize) -> DigitGrid {
    DigitGrid::new(&value.to_string(), columns)
}

/// Lays a step out into `columns` cells, placeholders as a run of zeros.
#[must_use]
pub fn step_grid(step: &StepSolution, columns: usize) -> DigitGrid {
    DigitGrid::new(&step.display(), columns)
}

/// Number of columns needed to write every row of an exercise.
///
/// The product decides the width; the value is widened if a multiplicand or
/// a placeholder step is wider than the product (e.g. a zero product).
#[must_use]
pub fn column_count(exercise: &Exercise, product: u64, steps: &[StepSolution]) -> usize {
    steps
        .iter()
        .map(StepSolution::width)
        .chain([
            digit_count(product),
            digit_count(exercise.first_multiplier),
            digit_count(exercise.second_multiplier),
        ])
        .max()
        .unwrap_or(1)
}

/// Header labels for `columns` columns, ones first. Columns with no label
/// are empty strings.
#[must_use]
pub fn place_value_headers(columns: usize) -> Vec<&'static str> {
    (0..columns)
        .map(|i| PLACE_VALUE_LABELS.get(i).copied().unwrap_or(""))
        .collect()
}

/// Colour of a column, ones first.
#[must_use]
pub fn column_color(index: usize) -> Option<&'static str> {
    COLUMN_COLORS.get(index).copied()
}

/// Step rows are only written when there is more than one step.
#[must_use]
pub fn show_steps(steps: &[StepSolution]) -> bool {
    steps.len() > 1
}
