//! Decompose command: show the partial products of one multiplication.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::error::WorksheetError;
use crate::export::render_exercise;
use crate::models::{Exercise, StepSolution};
use crate::services::{decompose, ExerciseSheet};
use clap::Args;
use serde::Serialize;

/// Show the long multiplication steps of FIRST x SECOND
#[derive(Debug, Clone, Args)]
pub struct DecomposeArgs {
    /// First multiplicand
    #[arg(value_name = "FIRST")]
    pub first: u64,

    /// Second multiplicand (one step per digit)
    #[arg(value_name = "SECOND")]
    pub second: u64,

    /// Draw the worksheet grid as well
    #[arg(long, conflicts_with = "json")]
    pub grid: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct DecomposeOutput {
    first: u64,
    second: u64,
    product: u64,
    steps: Vec<StepOutput>,
}

#[derive(Debug, Serialize)]
struct StepOutput {
    digit_position: usize,
    display: String,
    value: u64,
    placeholder: bool,
}

impl DecomposeArgs {
    /// Execute the decompose command
    pub fn execute(&self) -> CliResult<()> {
        let exercise = Exercise::new(self.first, self.second);
        let product = exercise.checked_product().ok_or_else(|| {
            CliError::from(WorksheetError::Overflow {
                first: self.first,
                second: self.second,
            })
        })?;
        let steps = decompose(self.first, self.second)?;

        if self.json {
            return print_json(&DecomposeOutput {
                first: self.first,
                second: self.second,
                product,
                steps: steps.iter().enumerate().map(step_output).collect(),
            });
        }

        println!("{exercise} = {product}");
        println!();
        for (position, step) in steps.iter().enumerate() {
            println!(
                "  step {}: {:>width$}",
                position + 1,
                step.display(),
                width = product.to_string().len()
            );
        }

        if self.grid {
            println!();
            print!("{}", render_exercise(&ExerciseSheet::new(exercise, true)?));
        }

        Ok(())
    }
}

fn step_output((digit_position, step): (usize, &StepSolution)) -> StepOutput {
    StepOutput {
        digit_position,
        display: step.display(),
        value: step.value(),
        placeholder: step.is_placeholder(),
    }
}
