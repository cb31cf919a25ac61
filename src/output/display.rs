//! Display functions for game results

use super::formatters::{guesses_label, tile_row};
use crate::core::{Hints, Word};
use crate::game::{Game, GameStatus, TurnReport};
use colored::Colorize;
use std::io::{self, Write};

/// Print one scored turn: tiles, emoji and attempts used
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn write_turn(
    out: &mut impl Write,
    report: &TurnReport,
    max_attempts: usize,
) -> io::Result<()> {
    writeln!(
        out,
        "{}  {}  ({}/{})",
        tile_row(&report.attempt.try_word, &report.attempt.hints),
        report.attempt.hints.to_emoji(),
        report.status.attempts_used,
        max_attempts
    )
}

/// Print how a finished game ended, with its guess history
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn write_outcome(out: &mut impl Write, game: &Game) -> io::Result<()> {
    let used = game.attempts().len();
    let secret = game.secret_word().text().to_uppercase();

    writeln!(out, "\n{}", "═".repeat(40).bright_cyan())?;
    match game.status() {
        GameStatus::Won => writeln!(
            out,
            "{} Solved in {used} {}!",
            "🎉".bright_green(),
            guesses_label(used)
        )?,
        GameStatus::Lost => writeln!(out, "Out of turns. The word was {}", secret.bold())?,
        GameStatus::Resigned => writeln!(out, "Resigned. The word was {}", secret.bold())?,
        GameStatus::InPlay => writeln!(out, "Game still in play")?,
    }

    for (i, attempt) in game.attempts().iter().enumerate() {
        writeln!(
            out,
            "  {}. {} {}",
            (i + 1).to_string().bright_black(),
            attempt.try_word.text().to_uppercase(),
            attempt.hints.to_emoji()
        )?;
    }
    writeln!(out, "{}", "═".repeat(40).bright_cyan())
}

/// Print the hints for a single guess against a secret
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn write_score(out: &mut impl Write, guess: &Word, hints: &Hints) -> io::Result<()> {
    writeln!(out, "{}  {}", tile_row(guess, hints), hints.to_emoji())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameRules;
    use crate::wordlists::Dictionary;

    fn played(guesses: &[&str]) -> Game {
        let words = Dictionary::from_words(["blank", "plant", "crane"]);
        let mut game = Game::new("game-1", Word::new("blank").unwrap());
        for guess in guesses {
            game.play(guess, &words, &GameRules::default()).unwrap();
        }
        game
    }

    #[test]
    fn turn_line_shows_progress() {
        colored::control::set_override(false);
        let words = Dictionary::from_words(["blank", "plant"]);
        let mut game = Game::new("game-1", Word::new("blank").unwrap());
        let report = game.play("plant", &words, &GameRules::default()).unwrap();

        let mut out = Vec::new();
        write_turn(&mut out, &report, 6).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(" P  L  A  N  T "));
        assert!(text.contains("⬜🟩🟩🟩⬜"));
        assert!(text.trim_end().ends_with("(1/6)"));
    }

    #[test]
    fn outcome_for_win_lists_history() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        write_outcome(&mut out, &played(&["plant", "blank"])).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Solved in 2 guesses!"));
        assert!(text.contains("1. PLANT"));
        assert!(text.contains("2. BLANK 🟩🟩🟩🟩🟩"));
    }

    #[test]
    fn outcome_for_resign_reveals_secret() {
        colored::control::set_override(false);
        let mut game = played(&["crane"]);
        game.resign();
        let mut out = Vec::new();
        write_outcome(&mut out, &game).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("The word was BLANK"));
    }
}
