//! Terminal output formatting
//!
//! Display utilities for game turns and results.

pub mod display;
pub mod formatters;

pub use display::{write_outcome, write_score, write_turn};
