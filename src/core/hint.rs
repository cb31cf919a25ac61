//! Per-letter guess feedback
//!
//! Every guess is scored into one [`LetterHint`] per position:
//! - Green = letter in the correct position
//! - Yellow = letter in the secret, wrong position
//! - Grey = letter not creditable at this position

use super::Word;
use crate::config::WORD_LENGTH;
use serde::{Deserialize, Serialize};

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum LetterHint {
    Green,
    Yellow,
    Grey,
}

impl LetterHint {
    /// Emoji square used for terminal output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Grey => '⬜',
        }
    }
}

/// Feedback for a whole guess, one hint per letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hints([LetterHint; WORD_LENGTH]);

impl Hints {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([LetterHint::Green; WORD_LENGTH]);

    /// Score `guess` against `secret`
    ///
    /// A letter is credited (Green or Yellow) at most as many times across the
    /// guess as it occurs in the secret.
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches (greens) and remove them from the available pool
    /// 2. Second pass: Left to right, mark yellows while the pool still holds that letter
    /// 3. Everything left over is grey
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{Hints, LetterHint::*, Word};
    ///
    /// let guess = Word::new("hello").unwrap();
    /// let secret = Word::new("world").unwrap();
    ///
    /// // The green L at position 3 uses up the only L, so position 2 stays grey
    /// assert_eq!(
    ///     Hints::score(&guess, &secret).as_slice(),
    ///     &[Grey, Grey, Grey, Green, Yellow]
    /// );
    /// ```
    #[must_use]
    pub fn score(guess: &Word, secret: &Word) -> Self {
        let mut result = [LetterHint::Grey; WORD_LENGTH];
        let mut secret_available = secret.char_counts();

        // First pass: greens take priority over any yellow elsewhere
        let pairs = guess.chars().iter().zip(secret.chars());
        for (slot, (g, s)) in result.iter_mut().zip(pairs) {
            if g == s {
                *slot = LetterHint::Green;
                if let Some(count) = secret_available.get_mut(g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: spend the remaining budget left to right
        for (slot, letter) in result.iter_mut().zip(guess.chars()) {
            if *slot == LetterHint::Green {
                continue;
            }
            if let Some(count) = secret_available.get_mut(letter)
                && *count > 0
            {
                *slot = LetterHint::Yellow;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Check if every letter is green
    #[inline]
    #[must_use]
    pub fn is_full_match(&self) -> bool {
        *self == Self::PERFECT
    }

    /// The hints in position order
    #[inline]
    #[must_use]
    pub const fn as_slice(&self) -> &[LetterHint] {
        &self.0
    }

    /// Count how many positions carry `hint`
    #[must_use]
    pub fn count(&self, hint: LetterHint) -> usize {
        self.0.iter().filter(|&&h| h == hint).count()
    }

    /// Render as an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|h| h.emoji()).collect()
    }
}

impl From<[LetterHint; WORD_LENGTH]> for Hints {
    fn from(hints: [LetterHint; WORD_LENGTH]) -> Self {
        Self(hints)
    }
}
