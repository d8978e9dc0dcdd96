//! Worksheet assembly: category to printable exercise grids.

use crate::error::{Result, WorksheetError};
use crate::models::{select_range, Category, Exercise, MultiplierRange, StepSolution};
use crate::services::decomposer::decompose;
use crate::services::generator::{check_count, generate, worksheet_rng};
use crate::services::layout::{column_count, digit_grid, show_steps, step_grid, DigitGrid};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default number of exercises on a worksheet.
pub const DEFAULT_EXERCISE_COUNT: usize = 10;

/// Default upper limit on exercises per worksheet.
pub const DEFAULT_MAX_EXERCISES: usize = 200;

/// Parameters for one worksheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorksheetRequest {
    /// Category deciding the multiplier bounds
    pub category: Category,
    /// Number of exercises
    pub count: usize,
    /// Seed for a reproducible worksheet
    pub seed: Option<u64>,
    /// Fill in steps and product
    pub show_solution: bool,
    /// Largest accepted `count`
    pub max_count: usize,
}

impl Default for WorksheetRequest {
    fn default() -> Self {
        Self {
            category: Category::TensByTens,
            count: DEFAULT_EXERCISE_COUNT,
            seed: None,
            show_solution: true,
            max_count: DEFAULT_MAX_EXERCISES,
        }
    }
}

/// One exercise laid out for printing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseSheet {
    /// The multiplicands
    pub exercise: Exercise,
    /// Partial products, ones digit of the second multiplicand first
    pub steps: Vec<StepSolution>,
    /// Final product
    pub product: u64,
    /// Columns shared by every row
    pub columns: usize,
    /// Top row
    pub first_row: DigitGrid,
    /// Row under the multiplication sign
    pub second_row: DigitGrid,
    /// One row per step; empty when the exercise has a single step
    pub step_rows: Vec<DigitGrid>,
    /// Answer row
    pub product_row: DigitGrid,
}

impl ExerciseSheet {
    /// Lays out one exercise. Answer rows are blank unless `show_solution`.
    pub fn new(exercise: Exercise, show_solution: bool) -> Result<Self> {
        let first = exercise.first_multiplier;
        let second = exercise.second_multiplier;
        let product = exercise
            .checked_product()
            .ok_or(WorksheetError::Overflow { first, second })?;
        let steps = decompose(first, second)?;
        let columns = column_count(&exercise, product, &steps);

        let answer = |grid: DigitGrid| {
            if show_solution {
                grid
            } else {
                DigitGrid::blank(columns)
            }
        };

        let step_rows = if show_steps(&steps) {
            steps
                .iter()
                .map(|step| answer(step_grid(step, columns)))
                .collect()
        } else {
            Vec::new()
        };

        Ok(Self {
            exercise,
            product,
            columns,
            first_row: digit_grid(first, columns),
            second_row: digit_grid(second, columns),
            step_rows,
            product_row: answer(digit_grid(product, columns)),
            steps,
        })
    }
}

/// A complete worksheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worksheet {
    /// Category the exercises were drawn from
    pub category: Category,
    /// Bounds used for drawing
    pub range: MultiplierRange,
    /// Whether answer rows are filled in
    pub show_solution: bool,
    /// Seed, when the worksheet is reproducible
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Exercises in draw order
    pub exercises: Vec<ExerciseSheet>,
}

/// Builds a worksheet: select range, draw exercises, decompose, lay out.
///
/// # Errors
///
/// Fails on a count above `request.max_count` or an overflowing product.
/// No partial worksheet is returned.
pub fn build_worksheet(request: &WorksheetRequest) -> Result<Worksheet> {
    check_count(request.count, request.max_count)?;

    let range = select_range(request.category);
    let mut rng = worksheet_rng(request.seed);
    let exercises = generate(request.count, &range, &mut rng)?
        .into_iter()
        .map(|exercise| ExerciseSheet::new(exercise, request.show_solution))
        .collect::<Result<Vec<_>>>()?;

    debug!(
        category = %request.category,
        count = exercises.len(),
        seed = ?request.seed,
        "Built worksheet"
    );

    Ok(Worksheet {
        category: request.category,
        range,
        show_solution: request.show_solution,
        seed: request.seed,
        exercises,
    })
}
