//! Random exercise generation.

use crate::error::{Result, WorksheetError};
use crate::models::{Exercise, MultiplierRange};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Draws `count` exercises with both multiplicands uniform within `range`.
///
/// Each pair is drawn independently; duplicates are allowed and the output
/// order is the draw order.
///
/// # Errors
///
/// Returns [`WorksheetError::InvalidRange`] if a minimum exceeds its maximum.
pub fn generate(count: usize, range: &MultiplierRange, rng: &mut impl Rng) -> Result<Vec<Exercise>> {
    range.validate()?;

    let exercises: Vec<Exercise> = (0..count)
        .map(|_| {
            let first = rng.gen_range(range.min_first..=range.max_first);
            let second = rng.gen_range(range.min_second..=range.max_second);
            Exercise::new(first, second)
        })
        .collect();

    debug!(count, ?range, "Generated exercises");
    Ok(exercises)
}

/// Checks a requested exercise count against the worksheet maximum.
pub fn check_count(count: usize, max: usize) -> Result<()> {
    if count > max {
        return Err(WorksheetError::InvalidCount { count, max });
    }
    Ok(())
}

/// Creates the random source for one worksheet.
///
/// A seed makes the worksheet reproducible; without one the generator is
/// seeded from OS entropy.
#[must_use]
pub fn worksheet_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
