//! Word lists for Wordle games
//!
//! Provides the embedded default list, file loading and the [`WordSource`]
//! seam the game engine draws secrets from.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, SourceError, WordSource};
pub use embedded::WORDS;
