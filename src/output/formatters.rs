//! Formatting utilities for terminal output

use crate::core::{Hints, LetterHint, Word};
use colored::{ColoredString, Colorize};

/// Paint one letter with its hint colour
#[must_use]
pub fn paint_letter(letter: char, hint: LetterHint) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase());
    match hint {
        LetterHint::Green => tile.black().on_green().bold(),
        LetterHint::Yellow => tile.black().on_yellow().bold(),
        LetterHint::Grey => tile.white().on_bright_black(),
    }
}

/// Render a guess as a row of coloured tiles
#[must_use]
pub fn tile_row(word: &Word, hints: &Hints) -> String {
    word.text()
        .chars()
        .zip(hints.as_slice())
        .map(|(letter, &hint)| paint_letter(letter, hint).to_string())
        .collect()
}

/// "guess" or "guesses"
#[must_use]
pub const fn guesses_label(count: usize) -> &'static str {
    if count == 1 { "guess" } else { "guesses" }
}
