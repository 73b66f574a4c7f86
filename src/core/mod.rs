//! Core domain types for the game
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod score;
mod word;

pub use score::{LetterScore, Outcome, RoundScore};
pub use word::{WORD_LEN, Word, WordError};
