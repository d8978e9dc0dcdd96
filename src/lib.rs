//! MathSheet Library
//!
//! Generates long-multiplication worksheets for primary-school practice:
//! picks multiplier ranges per category, draws random exercises, splits each
//! multiplication into partial products, and lays every row out as a grid
//! of single-digit cells ready to print.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
#[cfg(feature = "web")]
pub mod web;

pub use error::{Result, WorksheetError};
