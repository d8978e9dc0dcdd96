//! A single multiplication exercise.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A pair of multiplicands drawn for one exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Number written on the top row
    pub first_multiplier: u64,
    /// Number whose digits produce the steps
    pub second_multiplier: u64,
}

impl Exercise {
    /// Creates a new exercise.
    #[must_use]
    pub const fn new(first_multiplier: u64, second_multiplier: u64) -> Self {
        Self {
            first_multiplier,
            second_multiplier,
        }
    }

    /// Returns the product, or `None` if it does not fit in a `u64`.
    #[must_use]
    pub const fn checked_product(&self) -> Option<u64> {
        self.first_multiplier.checked_mul(self.second_multiplier)
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.first_multiplier, self.second_multiplier)
    }
}

/// Number of decimal digits in `value` (`0` has one digit).
#[must_use]
pub const fn digit_count(value: u64) -> usize {
    if value == 0 {
        return 1;
    }
    value.ilog10() as usize + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(7), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(99), 2);
        assert_eq!(digit_count(105), 3);
        assert_eq!(digit_count(u64::MAX), 20);
    }

    #[test]
    fn test_checked_product() {
        assert_eq!(Exercise::new(23, 14).checked_product(), Some(322));
        assert_eq!(Exercise::new(u64::MAX, 2).checked_product(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Exercise::new(23, 14).to_string(), "23 x 14");
    }
}
