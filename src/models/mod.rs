//! Data models for categories, exercises and partial products.
//!
//! Models are plain values created per worksheet and never persisted.

pub mod category;
pub mod exercise;
pub mod step;

// Re-export all model types
pub use category::{select_range, select_range_by_name, Category, MultiplierRange};
pub use exercise::{digit_count, Exercise};
pub use step::StepSolution;
