//! Command implementations

pub mod new_game;
pub mod play;
pub mod score;

pub use new_game::new_game;
pub use play::run_play;
pub use score::score_guess;
