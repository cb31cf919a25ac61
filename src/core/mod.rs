//! Core domain types for Wordle
//!
//! Words and per-letter hints. Pure and free of I/O, so everything here is
//! safe to share across threads.

mod hint;
mod word;

pub use hint::{Hints, LetterHint};
pub use word::{Word, WordError};
