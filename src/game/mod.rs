//! Game lifecycle and the engine that runs it
//!
//! A [`Game`] moves from `InPlay` to exactly one terminal status (`Won`,
//! `Lost` or `Resigned`) and never back. The [`Engine`] wires games to a
//! [`WordSource`](crate::wordlists::WordSource) and a
//! [`GameStore`](crate::store::GameStore) so each guess can arrive as an
//! independent call.

mod engine;
mod report;
mod state;

pub use engine::Engine;
pub use report::{StatusReport, TurnReport};
pub use state::{Attempt, Game, GameStatus};

use crate::store::StoreError;
use crate::wordlists::SourceError;
use thiserror::Error;

/// Errors raised by game operations
#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid word: {0}")]
    WordInvalid(String),
    #[error("game is finished")]
    GameFinished,
    #[error("out of turns")]
    OutOfTurns,
    #[error("game {0} not found")]
    NotFound(String),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Source(#[from] SourceError),
}
