//! Game rule constants
//!
//! Word length is fixed at compile time; the attempt budget defaults to the
//! classic six but can be chosen once at startup.

/// Number of letters in every secret and guess
pub const WORD_LENGTH: usize = 5;

/// Default number of guesses a player gets
pub const MAX_ATTEMPTS: usize = 6;

/// Rules consumed by the engine for every game it runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    pub max_attempts: usize,
}

impl GameRules {
    /// Rules with a custom attempt budget
    ///
    /// A budget of zero is raised to one so every game allows a guess.
    #[must_use]
    pub const fn with_max_attempts(max_attempts: usize) -> Self {
        Self {
            max_attempts: if max_attempts == 0 { 1 } else { max_attempts },
        }
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
        }
    }
}
