//! Wordle Engine - CLI
//!
//! Play Wordle in the terminal, or score a single guess.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use wordle_engine::{
    commands::{new_game, run_play, score_guess},
    config::{GameRules, MAX_ATTEMPTS},
    game::Engine,
    output::write_score,
    store::GameStore,
    wordlists::Dictionary,
};

#[derive(Parser)]
#[command(
    name = "wordle_engine",
    about = "Play Wordle against a duplicate-aware scoring engine",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Guesses allowed per game
    #[arg(short, long, global = true, default_value_t = MAX_ATTEMPTS)]
    max_attempts: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default)
    Play {
        /// Secret word for the first game (default: random)
        #[arg(short, long)]
        secret: Option<String>,
    },

    /// Score one guess against a secret
    Score {
        /// The secret word
        secret: String,

        /// The guess to score
        guess: String,
    },

    /// Create a game and print its full JSON description
    New {
        /// Secret word (default: random)
        #[arg(short, long)]
        secret: Option<String>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let words = match cli.wordlist {
        Some(path) => Dictionary::from_file(path),
        None => Dictionary::embedded(),
    };
    words.initialize().context("loading word list")?;

    let rules = GameRules::with_max_attempts(cli.max_attempts);
    let engine = Engine::with_rules(Arc::new(GameStore::new()), words, rules);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { secret: None });

    match command {
        Commands::Play { secret } => {
            let mut input = io::stdin().lock();
            let mut out = io::stdout().lock();
            run_play(&engine, secret.as_deref(), &mut input, &mut out)
        }
        Commands::Score { secret, guess } => {
            let (guess, hints) = score_guess(&secret, &guess)?;
            write_score(&mut io::stdout().lock(), &guess, &hints)?;
            Ok(())
        }
        Commands::New { secret } => {
            println!("{}", new_game(&engine, secret.as_deref())?);
            Ok(())
        }
    }
}
