//! Game engine service
//!
//! Creates games, routes guesses to them and keeps the store current.
//! Every mutating call holds a per-game lock across load, mutate and save,
//! so two guesses for the same game cannot overwrite each other. Games with
//! different ids proceed in parallel.

use super::state::validate_word;
use super::{Game, GameError, StatusReport, TurnReport};
use crate::core::LetterHint;
use crate::config::GameRules;
use crate::store::GameStore;
use crate::wordlists::WordSource;
use parking_lot::{Mutex, MutexGuard};
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tracing::{debug, info};

/// Number of lock stripes guarding per-game mutations
const TURN_LOCK_STRIPES: usize = 64;

/// Runs Wordle games against a word source and a shared store
pub struct Engine<W> {
    store: Arc<GameStore<Game>>,
    words: W,
    rules: GameRules,
    turn_locks: Box<[Mutex<()>]>,
}

impl<W: WordSource> Engine<W> {
    /// Create an engine with the default rules
    #[must_use]
    pub fn new(store: Arc<GameStore<Game>>, words: W) -> Self {
        Self::with_rules(store, words, GameRules::default())
    }

    /// Create an engine with custom rules
    #[must_use]
    pub fn with_rules(store: Arc<GameStore<Game>>, words: W, rules: GameRules) -> Self {
        Self {
            store,
            words,
            rules,
            turn_locks: (0..TURN_LOCK_STRIPES).map(|_| Mutex::new(())).collect(),
        }
    }

    /// The store games are kept in
    #[must_use]
    pub const fn store(&self) -> &Arc<GameStore<Game>> {
        &self.store
    }

    #[must_use]
    pub const fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// Start a new game and save it
    ///
    /// With no secret (or an empty one) a random word is drawn from the word
    /// source. A supplied secret is used as given and must pass the same
    /// checks as a guess.
    ///
    /// # Errors
    /// - `GameError::WordInvalid` if the supplied secret is rejected
    /// - `GameError::Source` if no word can be drawn
    /// - `GameError::Store` if the game cannot be saved
    pub fn create(&self, secret_word: Option<&str>) -> Result<Game, GameError> {
        let secret = match secret_word.filter(|s| !s.is_empty()) {
            Some(word) => validate_word(word, &self.words)?,
            None => self.words.generate_word()?,
        };

        let game = Game::new(uuid::Uuid::new_v4().simple().to_string(), secret);
        self.store.save(game.id(), game.clone())?;

        info!(id = game.id(), "game created");
        Ok(game)
    }

    /// Load a game by id
    ///
    /// # Errors
    /// - `GameError::NotFound` if no game is stored under `id`
    /// - `GameError::Store` if `id` is empty
    pub fn retrieve(&self, id: &str) -> Result<Game, GameError> {
        self.store
            .load(id)?
            .ok_or_else(|| GameError::NotFound(id.to_string()))
    }

    /// Submit a guess for the game stored under `id`
    ///
    /// # Errors
    /// Anything [`Game::play`] rejects, plus `GameError::NotFound` and
    /// `GameError::Store` from loading and saving.
    pub fn play(&self, id: &str, try_word: &str) -> Result<TurnReport, GameError> {
        let _turn = self.turn_lock(id);
        let mut game = self.retrieve(id)?;

        match game.play(try_word, &self.words, &self.rules) {
            Ok(report) => {
                debug!(
                    id,
                    attempt = report.status.attempts_used,
                    hints = %report.attempt.hints.to_emoji(),
                    greens = report.attempt.hints.count(LetterHint::Green),
                    "turn scored"
                );
                self.store.save(id, game)?;
                Ok(report)
            }
            Err(GameError::OutOfTurns) => {
                // The game may have just been moved to Lost
                self.store.save(id, game)?;
                Err(GameError::OutOfTurns)
            }
            Err(err) => Err(err),
        }
    }

    /// Resign the game stored under `id`
    ///
    /// # Errors
    /// `GameError::NotFound` and `GameError::Store` from loading and saving.
    pub fn resign(&self, id: &str) -> Result<StatusReport, GameError> {
        let _turn = self.turn_lock(id);
        let mut game = self.retrieve(id)?;

        let report = game.resign();
        self.store.save(id, game)?;
        Ok(report)
    }

    /// Status summary for the game stored under `id`
    ///
    /// # Errors
    /// `GameError::NotFound` and `GameError::Store` from loading.
    pub fn status(&self, id: &str) -> Result<StatusReport, GameError> {
        Ok(self.retrieve(id)?.status_report())
    }

    /// Full JSON description of the game stored under `id`, secret included
    ///
    /// # Errors
    /// `GameError::NotFound` and `GameError::Store` from loading.
    pub fn describe(&self, id: &str) -> Result<String, GameError> {
        Ok(self.retrieve(id)?.describe())
    }

    fn turn_lock(&self, id: &str) -> MutexGuard<'_, ()> {
        let mut hasher = FxHasher::default();
        id.hash(&mut hasher);
        let stripe = (hasher.finish() as usize) % self.turn_locks.len();
        self.turn_locks[stripe].lock()
    }
}
