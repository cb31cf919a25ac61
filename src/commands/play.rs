//! Interactive play mode
//!
//! Text-based game loop: the player types guesses and sees hints after each.

use crate::config::WORD_LENGTH;
use crate::game::{Engine, GameError};
use crate::output::{write_outcome, write_turn};
use crate::wordlists::WordSource;
use anyhow::Result;
use std::io::{BufRead, Write};

/// Run interactive games until the player quits or input ends
///
/// Commands: `resign` ends the current game, `quit` resigns and exits.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if the
/// engine cannot create or store a game.
pub fn run_play<W: WordSource>(
    engine: &Engine<W>,
    secret: Option<&str>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let max_attempts = engine.rules().max_attempts;
    writeln!(out, "Guess the {WORD_LENGTH}-letter word in {max_attempts} tries.")?;
    writeln!(out, "Commands: 'resign' to give up, 'quit' to exit\n")?;

    let mut game = engine.create(secret)?;

    loop {
        let Some(line) = read_line(input, out, "Guess")? else {
            engine.resign(game.id())?;
            return Ok(());
        };

        match line.as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                engine.resign(game.id())?;
                writeln!(out, "\n👋 Thanks for playing!")?;
                return Ok(());
            }
            "resign" => {
                engine.resign(game.id())?;
            }
            guess => match engine.play(game.id(), guess) {
                Ok(report) => write_turn(out, &report, max_attempts)?,
                Err(GameError::WordInvalid(reason)) => {
                    writeln!(out, "❌ Not accepted: {reason}")?;
                    continue;
                }
                Err(GameError::OutOfTurns | GameError::GameFinished) => {}
                Err(err) => return Err(err.into()),
            },
        }

        let current = engine.retrieve(game.id())?;
        if !current.status().is_finished() {
            continue;
        }
        write_outcome(out, &current)?;

        // Only the first game uses a fixed secret
        match read_line(input, out, "Play again? (yes/no)")?.as_deref() {
            Some("yes" | "y") => {
                game = engine.create(None)?;
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            _ => {
                writeln!(out, "\n👋 Thanks for playing!")?;
                return Ok(());
            }
        }
    }
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line(
    input: &mut impl BufRead,
    out: &mut impl Write,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}
