//! One-shot scoring command
//!
//! Scores a guess against an answer and prints the row, useful for checking
//! a position or sharing a result.

use crate::core::{RoundScore, Word};
use crate::output::{score_colored, score_emoji};
use anyhow::Result;

/// Score `guess` against `answer` and print the result
///
/// # Errors
///
/// Returns an error if either argument is not a valid 5-letter word.
pub fn run_score(guess: &str, answer: &str) -> Result<()> {
    let guess = Word::new(guess)?;
    let answer = Word::new(answer)?;
    let score = RoundScore::of(&guess, &answer);

    println!("{}", score_colored(&score));
    println!("{}", score_emoji(&score));

    if score.is_win() {
        println!("Exact match!");
    }

    Ok(())
}
