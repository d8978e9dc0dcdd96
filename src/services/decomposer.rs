//! Long multiplication split into partial products.

use crate::error::{Result, WorksheetError};
use crate::models::{digit_count, StepSolution};

/// Computes the partial products of `first x second`, one per digit of
/// `second`, least-significant digit first.
///
/// Each step is `first` times the digit, shifted left by the digit's
/// position. A zero step becomes a [`StepSolution::ZeroPlaceholder`] as wide
/// as `first`.
///
/// # Examples
///
/// ```
/// use mathsheet::models::StepSolution;
/// use mathsheet::services::decompose;
///
/// let steps = decompose(23, 14).unwrap();
/// assert_eq!(
///     steps,
///     vec![
///         StepSolution::Numeric { value: 92 },
///         StepSolution::Numeric { value: 230 },
///     ]
/// );
/// ```
///
/// # Errors
///
/// Returns [`WorksheetError::Overflow`] if a shifted partial product does not
/// fit in a `u64`.
pub fn decompose(first: u64, second: u64) -> Result<Vec<StepSolution>> {
    let overflow = || WorksheetError::Overflow { first, second };

    let digits = second.to_string();
    let placeholder_width = digit_count(first);

    digits
        .bytes()
        .rev()
        .enumerate()
        .map(|(zeros, byte)| {
            let digit = u64::from(byte - b'0');
            let step = first.checked_mul(digit).ok_or_else(overflow)?;

            if step == 0 {
                return Ok(StepSolution::ZeroPlaceholder {
                    width: placeholder_width,
                });
            }

            let shift = 10u64.checked_pow(zeros as u32).ok_or_else(overflow)?;
            let value = step.checked_mul(shift).ok_or_else(overflow)?;
            Ok(StepSolution::Numeric { value })
        })
        .collect()
}

/// Sums the numeric values of the steps (placeholders count as zero).
#[must_use]
pub fn steps_total(steps: &[StepSolution]) -> u64 {
    steps.iter().map(StepSolution::value).sum()
}
