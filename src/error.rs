//! Error types for worksheet generation.

use thiserror::Error;

/// Errors raised while selecting ranges, generating exercises or
/// decomposing a multiplication into steps.
///
/// Every variant aborts the current worksheet; there are no partial results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorksheetError {
    /// The category tag is not one of the known categories.
    #[error("Invalid category: '{0}'")]
    InvalidCategory(String),

    /// A multiplier range whose minimum exceeds its maximum.
    #[error("Invalid range for {operand} multiplier: min {min} is greater than max {max}")]
    InvalidRange {
        /// Which operand the bounds belong to ("first" or "second").
        operand: &'static str,
        /// Lower bound supplied.
        min: u64,
        /// Upper bound supplied.
        max: u64,
    },

    /// More exercises requested than a worksheet allows.
    #[error("Invalid exercise count {count}: at most {max} exercises per worksheet")]
    InvalidCount {
        /// Requested count.
        count: usize,
        /// Configured maximum.
        max: usize,
    },

    /// A partial product does not fit in a `u64`.
    #[error("Multiplication {first} x {second} overflows")]
    Overflow {
        /// First multiplicand.
        first: u64,
        /// Second multiplicand.
        second: u64,
    },
}

/// Result alias for worksheet operations.
pub type Result<T> = std::result::Result<T, WorksheetError>;
