//! Exercise categories and their multiplier bounds.

use crate::error::{Result, WorksheetError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named digit-size pairing that decides the bounds of generated exercises.
///
/// # Parsing
///
/// Accepts, case-insensitively:
/// - the variant name (`TensByTens`)
/// - its kebab-case id (`tens-by-tens`)
/// - the worksheet short code (`TExTE`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Units x units (1-9 x 1-9)
    UnitsByUnits,
    /// Units x tens (1-9 x 10-90)
    UnitsByTens,
    /// Tens x tens (10-90 x 10-90)
    TensByTens,
    /// Hundreds x tens (100-900 x 10-90)
    HundredsByTens,
    /// Hundreds x hundreds (100-900 x 100-900)
    HundredsByHundreds,
}

impl Category {
    /// Returns all categories in worksheet form order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::UnitsByUnits,
            Self::UnitsByTens,
            Self::TensByTens,
            Self::HundredsByTens,
            Self::HundredsByHundreds,
        ]
    }

    /// Kebab-case identifier, used in URLs, config files and JSON.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::UnitsByUnits => "units-by-units",
            Self::UnitsByTens => "units-by-tens",
            Self::TensByTens => "tens-by-tens",
            Self::HundredsByTens => "hundreds-by-tens",
            Self::HundredsByHundreds => "hundreds-by-hundreds",
        }
    }

    /// Short code printed on the worksheet form (E = units, T = tens, H = hundreds).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::UnitsByUnits => "ExE",
            Self::UnitsByTens => "ExTE",
            Self::TensByTens => "TExTE",
            Self::HundredsByTens => "HTExTE",
            Self::HundredsByHundreds => "HTExHTE",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UnitsByUnits => "Units x units",
            Self::UnitsByTens => "Units x tens",
            Self::TensByTens => "Tens x tens",
            Self::HundredsByTens => "Hundreds x tens",
            Self::HundredsByHundreds => "Hundreds x hundreds",
        }
    }

    const fn variant_name(self) -> &'static str {
        match self {
            Self::UnitsByUnits => "UnitsByUnits",
            Self::UnitsByTens => "UnitsByTens",
            Self::TensByTens => "TensByTens",
            Self::HundredsByTens => "HundredsByTens",
            Self::HundredsByHundreds => "HundredsByHundreds",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = WorksheetError;

    fn from_str(s: &str) -> Result<Self> {
        let tag = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| {
                tag.eq_ignore_ascii_case(c.id())
                    || tag.eq_ignore_ascii_case(c.code())
                    || tag.eq_ignore_ascii_case(c.variant_name())
            })
            .ok_or_else(|| WorksheetError::InvalidCategory(s.to_string()))
    }
}

/// Inclusive bounds for both multiplicands.
///
/// # Validation
///
/// `min_first <= max_first` and `min_second <= max_second`. Ranges built with
/// [`MultiplierRange::new`] or [`select_range`] always hold; ranges
/// deserialized from callers are checked by [`MultiplierRange::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiplierRange {
    /// Smallest first multiplicand
    pub min_first: u64,
    /// Largest first multiplicand
    pub max_first: u64,
    /// Smallest second multiplicand
    pub min_second: u64,
    /// Largest second multiplicand
    pub max_second: u64,
}

impl MultiplierRange {
    /// Creates a validated range.
    ///
    /// # Errors
    ///
    /// Returns [`WorksheetError::InvalidRange`] when a minimum exceeds its maximum.
    pub fn new(min_first: u64, max_first: u64, min_second: u64, max_second: u64) -> Result<Self> {
        let range = Self {
            min_first,
            max_first,
            min_second,
            max_second,
        };
        range.validate()?;
        Ok(range)
    }

    /// Checks that both bound pairs are ordered.
    pub fn validate(&self) -> Result<()> {
        if self.min_first > self.max_first {
            return Err(WorksheetError::InvalidRange {
                operand: "first",
                min: self.min_first,
                max: self.max_first,
            });
        }
        if self.min_second > self.max_second {
            return Err(WorksheetError::InvalidRange {
                operand: "second",
                min: self.min_second,
                max: self.max_second,
            });
        }
        Ok(())
    }
}

/// Looks up the multiplier bounds of a category.
#[must_use]
pub const fn select_range(category: Category) -> MultiplierRange {
    let (min_first, max_first, min_second, max_second) = match category {
        Category::UnitsByUnits => (1, 9, 1, 9),
        Category::UnitsByTens => (1, 9, 10, 90),
        Category::TensByTens => (10, 90, 10, 90),
        Category::HundredsByTens => (100, 900, 10, 90),
        Category::HundredsByHundreds => (100, 900, 100, 900),
    };
    MultiplierRange {
        min_first,
        max_first,
        min_second,
        max_second,
    }
}

/// Parses a category tag and looks up its bounds.
///
/// # Errors
///
/// Returns [`WorksheetError::InvalidCategory`] for an unknown tag.
pub fn select_range_by_name(tag: &str) -> Result<MultiplierRange> {
    Ok(select_range(tag.parse()?))
}
