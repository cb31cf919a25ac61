//! Wordle Engine
//!
//! A single-player Wordle game engine: duplicate-aware scoring, a game
//! lifecycle state machine and a concurrency-safe in-memory game store.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use wordle_engine::game::{Engine, GameStatus};
//! use wordle_engine::store::GameStore;
//! use wordle_engine::wordlists::Dictionary;
//!
//! let engine = Engine::new(Arc::new(GameStore::new()), Dictionary::embedded());
//! let game = engine.create(Some("blank")).unwrap();
//!
//! let report = engine.play(game.id(), "plant").unwrap();
//! println!("{}", report.to_json());
//!
//! let report = engine.play(game.id(), "blank").unwrap();
//! assert_eq!(report.status.game_status, GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Rule constants
pub mod config;

// Word lists and the word source seam
pub mod wordlists;

// Keyed in-memory game store
pub mod store;

// Game lifecycle and engine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
