//! Create a game and print its full description

use crate::game::Engine;
use crate::wordlists::WordSource;
use anyhow::Result;

/// Create a game and return its JSON description, secret included
///
/// # Errors
///
/// Returns an error if the secret is rejected or no word can be drawn.
pub fn new_game<W: WordSource>(engine: &Engine<W>, secret: Option<&str>) -> Result<String> {
    let game = engine.create(secret)?;
    Ok(game.describe())
}
