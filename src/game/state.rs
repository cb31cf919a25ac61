//! Game entity and its state transitions

use super::report::{StatusReport, TurnReport};
use super::GameError;
use crate::config::GameRules;
use crate::core::{Hints, Word};
use crate::wordlists::WordSource;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Where a game is in its lifecycle
///
/// Everything except `InPlay` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum GameStatus {
    InPlay,
    Won,
    Lost,
    Resigned,
}

impl GameStatus {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InPlay)
    }
}

/// One recorded guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Attempt {
    pub try_word: Word,
    pub is_valid_word: bool,
    #[serde(rename = "TryResult")]
    pub hints: Hints,
}

/// A single Wordle game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Game {
    id: String,
    status: GameStatus,
    secret_word: Word,
    attempts: Vec<Attempt>,
}

impl Game {
    /// A fresh game with no attempts
    #[must_use]
    pub fn new(id: impl Into<String>, secret_word: Word) -> Self {
        Self {
            id: id.into(),
            status: GameStatus::InPlay,
            secret_word,
            attempts: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn secret_word(&self) -> &Word {
        &self.secret_word
    }

    /// Recorded attempts, oldest first
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Score a guess and advance the game
    ///
    /// The attempt budget is checked before the status, so a `Lost` game
    /// reports `OutOfTurns` while `Won` and `Resigned` games report
    /// `GameFinished`.
    ///
    /// # Errors
    /// - `GameError::OutOfTurns` if the attempt budget is already spent. A
    ///   game still marked `InPlay` is moved to `Lost`.
    /// - `GameError::GameFinished` if the game already ended any other way.
    /// - `GameError::WordInvalid` if `try_word` has the wrong length or is
    ///   not in `words`. The guess is not trimmed first. Nothing is recorded.
    pub fn play(
        &mut self,
        try_word: &str,
        words: &impl WordSource,
        rules: &GameRules,
    ) -> Result<TurnReport, GameError> {
        if self.attempts.len() >= rules.max_attempts
            && matches!(self.status, GameStatus::InPlay | GameStatus::Lost)
        {
            self.status = GameStatus::Lost;
            return Err(GameError::OutOfTurns);
        }
        if self.status.is_finished() {
            return Err(GameError::GameFinished);
        }

        let try_word = validate_word(try_word, words).inspect_err(|err| {
            warn!(id = %self.id, error = %err, "guess rejected");
        })?;

        let hints = Hints::score(&try_word, &self.secret_word);
        let attempt = Attempt {
            try_word,
            is_valid_word: true,
            hints,
        };
        self.attempts.push(attempt.clone());

        if hints.is_full_match() {
            self.status = GameStatus::Won;
        } else if self.attempts.len() >= rules.max_attempts {
            self.status = GameStatus::Lost;
        }
        if self.status.is_finished() {
            info!(
                id = %self.id,
                status = %self.status,
                attempts = self.attempts.len(),
                "game over"
            );
        }

        Ok(TurnReport {
            status: self.status_report(),
            attempt,
        })
    }

    /// End the game early
    ///
    /// Always succeeds, even on a game that has already ended.
    pub fn resign(&mut self) -> StatusReport {
        self.status = GameStatus::Resigned;
        info!(id = %self.id, attempts = self.attempts.len(), "game resigned");
        self.status_report()
    }

    /// Summary of where the game stands
    #[must_use]
    pub fn status_report(&self) -> StatusReport {
        StatusReport {
            game_status: self.status,
            attempts_used: self.attempts.len(),
            winning_attempt: (self.status == GameStatus::Won).then_some(self.attempts.len()),
        }
    }

    /// Full JSON representation, secret included
    ///
    /// Falls back to `{}` if serialization fails.
    #[must_use]
    pub fn describe(&self) -> String {
        super::report::to_json_or_empty(self)
    }
}

/// Check length and dictionary membership, normalizing to lower case
pub(crate) fn validate_word(candidate: &str, words: &impl WordSource) -> Result<Word, GameError> {
    let word = Word::new(candidate)
        .map_err(|err| GameError::WordInvalid(format!("{candidate:?}: {err}")))?;

    if !words.is_word_valid(word.text()) {
        return Err(GameError::WordInvalid(format!(
            "{candidate:?} is not in the word list"
        )));
    }
    Ok(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterHint::{Green, Grey, Yellow};
    use crate::wordlists::Dictionary;

    fn words() -> Dictionary {
        Dictionary::from_words([
            "blank", "lulls", "lolly", "crane", "slate", "irate", "crate", "grate", "plant",
        ])
    }

    fn game(secret: &str) -> Game {
        Game::new("game-1", Word::new(secret).unwrap())
    }

    #[test]
    fn new_game_is_in_play() {
        let g = game("blank");
        assert_eq!(g.status(), GameStatus::InPlay);
        assert!(g.attempts().is_empty());
        assert_eq!(g.secret_word().text(), "blank");
    }

    #[test]
    fn exact_guess_wins() {
        let mut g = game("blank");
        let report = g.play("BLANK", &words(), &GameRules::default()).unwrap();

        assert_eq!(g.status(), GameStatus::Won);
        assert_eq!(report.status.game_status, GameStatus::Won);
        assert_eq!(report.status.winning_attempt, Some(1));
        assert!(report.attempt.hints.is_full_match());
        assert_eq!(report.attempt.try_word.text(), "blank");
        assert!(report.attempt.is_valid_word);
    }

    #[test]
    fn duplicate_letters_are_scored_against_stored_secret() {
        let mut g = game("lulls");
        let report = g.play("lolly", &words(), &GameRules::default()).unwrap();
        assert_eq!(
            report.attempt.hints.as_slice(),
            &[Green, Grey, Green, Green, Grey]
        );
        assert_eq!(g.status(), GameStatus::InPlay);
    }

    #[test]
    fn six_misses_lose_and_seventh_is_out_of_turns() {
        let mut g = game("blank");
        let words = words();
        let rules = GameRules::default();

        for i in 0..6 {
            let report = g.play("crane", &words, &rules).unwrap();
            assert_eq!(report.status.attempts_used, i + 1);
        }
        assert_eq!(g.status(), GameStatus::Lost);

        let err = g.play("crane", &words, &rules).unwrap_err();
        assert!(matches!(err, GameError::OutOfTurns));
        assert_eq!(g.attempts().len(), 6);
        assert_eq!(g.status(), GameStatus::Lost);
    }

    #[test]
    fn winning_on_last_turn_is_won_not_lost() {
        let mut g = game("blank");
        let words = words();
        let rules = GameRules::default();
        for _ in 0..5 {
            g.play("plant", &words, &rules).unwrap();
        }
        let report = g.play("blank", &words, &rules).unwrap();
        assert_eq!(g.status(), GameStatus::Won);
        assert_eq!(report.status.winning_attempt, Some(6));

        // A finished, won game reports finished rather than out of turns
        assert!(matches!(
            g.play("blank", &words, &rules),
            Err(GameError::GameFinished)
        ));
    }

    #[test]
    fn play_after_win_is_finished_without_mutation() {
        let mut g = game("blank");
        g.play("blank", &words(), &GameRules::default()).unwrap();
        let before = g.clone();

        let err = g.play("crane", &words(), &GameRules::default()).unwrap_err();
        assert!(matches!(err, GameError::GameFinished));
        assert_eq!(g, before);
    }

    #[test]
    fn wrong_length_guess_is_rejected_without_attempt() {
        let mut g = game("blank");
        let padded = ["  crane ", "crane\n", " crane", "\tcrane"];
        for guess in ["blan", "blanks", "", "bl4nk"].into_iter().chain(padded) {
            let err = g.play(guess, &words(), &GameRules::default()).unwrap_err();
            assert!(matches!(err, GameError::WordInvalid(_)), "{guess:?}");
        }
        assert!(g.attempts().is_empty());
        assert_eq!(g.status(), GameStatus::InPlay);
    }

    #[test]
    fn guess_that_fits_only_after_trimming_is_rejected() {
        let mut g = game("blank");
        let err = g
            .play("  crane ", &words(), &GameRules::default())
            .unwrap_err();
        assert!(matches!(err, GameError::WordInvalid(_)));
        assert!(g.attempts().is_empty());

        // The unpadded word is accepted as usual
        g.play("crane", &words(), &GameRules::default()).unwrap();
        assert_eq!(g.attempts().len(), 1);
    }

    #[test]
    fn unknown_word_is_rejected_without_attempt() {
        let mut g = game("blank");
        let err = g.play("xxxxx", &words(), &GameRules::default()).unwrap_err();
        assert!(matches!(err, GameError::WordInvalid(_)));
        assert!(g.attempts().is_empty());
    }

    #[test]
    fn resign_is_idempotent_and_overrides_terminal_status() {
        let mut g = game("blank");
        assert_eq!(g.resign().game_status, GameStatus::Resigned);
        assert_eq!(g.resign().game_status, GameStatus::Resigned);

        let mut won = game("blank");
        won.play("blank", &words(), &GameRules::default()).unwrap();
        let report = won.resign();
        assert_eq!(report.game_status, GameStatus::Resigned);
        assert_eq!(report.winning_attempt, None);
    }

    #[test]
    fn resigned_game_rejects_play() {
        let mut g = game("blank");
        g.resign();
        assert!(matches!(
            g.play("crane", &words(), &GameRules::default()),
            Err(GameError::GameFinished)
        ));
    }

    #[test]
    fn custom_attempt_budget() {
        let mut g = game("blank");
        let rules = GameRules::with_max_attempts(2);
        g.play("crane", &words(), &rules).unwrap();
        g.play("slate", &words(), &rules).unwrap();
        assert_eq!(g.status(), GameStatus::Lost);
    }

    #[test]
    fn yellow_hints_flow_through_play() {
        let mut g = game("crate");
        let report = g.play("irate", &words(), &GameRules::default()).unwrap();
        assert_eq!(
            report.attempt.hints.as_slice(),
            &[Grey, Green, Green, Green, Green]
        );

        let report = g.play("slate", &words(), &GameRules::default()).unwrap();
        assert_eq!(report.attempt.hints.count(Yellow), 0);
    }

    #[test]
    fn describe_includes_secret_and_attempts() {
        let mut g = game("blank");
        g.play("plant", &words(), &GameRules::default()).unwrap();

        let json: serde_json::Value = serde_json::from_str(&g.describe()).unwrap();
        assert_eq!(json["Id"], "game-1");
        assert_eq!(json["Status"], "InPlay");
        assert_eq!(json["SecretWord"], "blank");
        assert_eq!(json["Attempts"][0]["TryWord"], "plant");
        assert_eq!(json["Attempts"][0]["IsValidWord"], true);
        assert_eq!(
            json["Attempts"][0]["TryResult"],
            serde_json::json!(["Grey", "Green", "Green", "Green", "Grey"])
        );
    }

    #[test]
    fn game_deserializes_from_describe() {
        let mut g = game("blank");
        g.play("crane", &words(), &GameRules::default()).unwrap();
        let back: Game = serde_json::from_str(&g.describe()).unwrap();
        assert_eq!(back, g);
    }
}
