//! Wordle Game
//!
//! A single-session word-guessing game: guess the hidden 5-letter word in
//! six tries. The core (scoring + session state machine) is pure and fully
//! decoupled from the word source and the terminal front ends.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{RoundScore, Word};
//!
//! let guess = Word::new("react").unwrap();
//! let answer = Word::new("crane").unwrap();
//!
//! let score = RoundScore::of(&guess, &answer);
//! assert!(!score.is_win());
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod session;

// Word sources (bundled list + remote API)
pub mod words;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
