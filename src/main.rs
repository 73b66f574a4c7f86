//! Wordle Game - CLI
//!
//! Play Wordle in the terminal, in a full TUI or a plain stdin mode, against
//! the daily-word API or fully offline.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_game::{
    commands::{run_score, run_simple},
    core::{WORD_LEN, Word},
    interactive::{App, run_tui},
    session::{GameConfig, GameSession},
    words::{ApiSource, WordList, WordSource},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Play Wordle in the terminal (daily-word API with offline fallback)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Skip the word API entirely; play against the bundled list
    #[arg(long, global = true)]
    offline: bool,

    /// Force the target word (practice mode)
    #[arg(long, global = true)]
    word: Option<String>,

    /// Path to a custom word list (one 5-letter word per line)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Number of guesses before the game is lost
    #[arg(long, global = true, default_value = "6")]
    max_rounds: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain stdin mode (no TUI)
    Simple,

    /// Score a guess against an answer and exit
    Score {
        /// The guessed word
        guess: String,

        /// The answer to score against
        answer: String,
    },
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Score { guess, answer } => run_score(&guess, &answer),
        Commands::Play => {
            let (session, source, list, config) = bootstrap(&cli)?;
            let app = App::new(session, source, list, config);
            run_tui(app)
        }
        Commands::Simple => {
            let (session, source, _, _) = bootstrap(&cli)?;
            run_simple(session, source.as_ref())
        }
    }
}

/// Load the local word list from the `-w` flag or the bundled data
fn load_word_list(cli: &Cli) -> Result<WordList> {
    let list = match &cli.wordlist {
        Some(path) => WordList::from_file(path)
            .with_context(|| format!("failed to read word list {}", path.display()))?,
        None => WordList::bundled(),
    };

    if list.is_empty() {
        anyhow::bail!("word list contains no playable words");
    }

    Ok(list)
}

/// Build the session, word source, and fallback list from CLI flags
///
/// Target-word policy: a forced `--word` wins; otherwise ask the source and
/// fall back to a random local word on failure, so the session always starts
/// with a valid target.
fn bootstrap(cli: &Cli) -> Result<(GameSession, Box<dyn WordSource>, WordList, GameConfig)> {
    let list = load_word_list(cli)?;

    let source: Box<dyn WordSource> = if cli.offline {
        Box::new(list.clone())
    } else {
        Box::new(ApiSource::new()?)
    };

    let target = match &cli.word {
        Some(word) => Word::new(word.as_str())?,
        None => match source.target_word() {
            Ok(word) => word,
            Err(err) => {
                eprintln!("Word fetch failed ({err}); using a bundled word.");
                list.random_word()
                    .context("word list contains no playable words")?
            }
        },
    };

    let config = GameConfig {
        answer_length: WORD_LEN,
        max_rounds: cli.max_rounds,
    };
    let session = GameSession::new(target, config)?;

    Ok((session, source, list, config))
}
