//! Partial products of long multiplication.

use crate::models::exercise::digit_count;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One partial product of a long multiplication.
///
/// A zero partial product is written on the worksheet as a run of zeros as
/// wide as the first multiplicand, so it keeps the columns aligned. That run
/// is a display width, not a number, and is kept apart from real values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepSolution {
    /// Non-zero partial product, already shifted into its decimal position.
    Numeric {
        /// Shifted partial product
        value: u64,
    },
    /// Zero partial product shown as `width` zeros.
    ZeroPlaceholder {
        /// Number of zeros to print
        width: usize,
    },
}

impl StepSolution {
    /// Numeric value of the step; placeholders count as zero.
    #[must_use]
    pub const fn value(&self) -> u64 {
        match self {
            Self::Numeric { value } => *value,
            Self::ZeroPlaceholder { .. } => 0,
        }
    }

    /// Number of digit cells the step occupies.
    #[must_use]
    pub const fn width(&self) -> usize {
        match self {
            Self::Numeric { value } => digit_count(*value),
            Self::ZeroPlaceholder { width } => *width,
        }
    }

    /// Digits as written on the worksheet.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Numeric { value } => value.to_string(),
            Self::ZeroPlaceholder { width } => "0".repeat(*width),
        }
    }

    /// Returns true for the zero placeholder.
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::ZeroPlaceholder { .. })
    }
}

impl fmt::Display for StepSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}
