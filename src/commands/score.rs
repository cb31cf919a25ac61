//! One-off scoring command
//!
//! Scores a single guess against a given secret without starting a game.

use crate::core::{Hints, Word};
use anyhow::{Context, Result};

/// Score `guess` against `secret`
///
/// Only the word format is checked; neither word has to be in a word list.
///
/// # Errors
///
/// Returns an error if either word is not a valid five-letter word.
pub fn score_guess(secret: &str, guess: &str) -> Result<(Word, Hints)> {
    let secret = Word::new(secret).with_context(|| format!("invalid secret {secret:?}"))?;
    let guess = Word::new(guess).with_context(|| format!("invalid guess {guess:?}"))?;
    let hints = Hints::score(&guess, &secret);
    Ok((guess, hints))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterHint::{Green, Grey, Yellow};

    #[test]
    fn scores_without_dictionary() {
        let (guess, hints) = score_guess("skill", "LULLS").unwrap();
        assert_eq!(guess.text(), "lulls");
        assert_eq!(hints.as_slice(), &[Yellow, Grey, Grey, Green, Yellow]);
    }

    #[test]
    fn rejects_malformed_words() {
        let err = score_guess("skil", "lulls").unwrap_err();
        assert!(err.to_string().contains("invalid secret"));
        assert!(score_guess("skill", "lul1s").is_err());
    }
}
