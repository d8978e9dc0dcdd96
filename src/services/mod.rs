//! Service layer for worksheet logic.
//!
//! Generation, decomposition and layout are pure functions; `worksheet`
//! chains them for one request.

pub mod decomposer;
pub mod generator;
pub mod layout;
pub mod worksheet;

// Re-export commonly used types and functions
pub use decomposer::{decompose, steps_total};
pub use generator::{generate, worksheet_rng};
pub use layout::{digit_grid, DigitGrid};
pub use worksheet::{build_worksheet, ExerciseSheet, Worksheet, WorksheetRequest};
