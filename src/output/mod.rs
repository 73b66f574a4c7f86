//! Terminal output formatting
//!
//! Row formatters shared by the simple CLI mode and the one-shot score
//! command. The TUI renders tiles itself.

use crate::core::{Outcome, RoundScore};
use colored::Colorize;

/// Format a scored row as emoji squares
#[must_use]
pub fn score_emoji(score: &RoundScore) -> String {
    score
        .iter()
        .map(|cell| match cell.outcome {
            Outcome::Correct => '🟩',
            Outcome::Present => '🟨',
            Outcome::Absent => '⬜',
        })
        .collect()
}

/// Format a scored row as colored uppercase tiles
#[must_use]
pub fn score_colored(score: &RoundScore) -> String {
    score
        .iter()
        .map(|cell| {
            let tile = format!(" {} ", (cell.letter as char).to_ascii_uppercase());
            match cell.outcome {
                Outcome::Correct => tile.black().on_green().bold().to_string(),
                Outcome::Present => tile.black().on_yellow().bold().to_string(),
                Outcome::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}
