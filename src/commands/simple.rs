//! Simple interactive CLI mode
//!
//! Text-based play without the TUI: whole-word guesses typed one per line,
//! scored rows printed with colored tiles.

use crate::core::WORD_LEN;
use crate::output::{score_colored, score_emoji};
use crate::session::{GameSession, GameStatus, SessionEvent};
use crate::words::WordSource;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_simple(mut session: GameSession, source: &dyn WordSource) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Simple Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden {WORD_LEN}-letter word in {} tries.", session.max_rounds());
    println!("After each guess, tiles show how close you were:\n");
    println!("  🟩 green  - right letter, right spot");
    println!("  🟨 yellow - right letter, wrong spot");
    println!("  ⬜ gray   - letter not in the word\n");
    println!("Type 'quit' to exit.\n");

    while session.status() == GameStatus::InProgress {
        let prompt = format!("Guess {}/{}", session.round() + 1, session.max_rounds());
        let Some(input) = get_user_input(&prompt)? else {
            // stdin closed: leave cleanly instead of re-prompting forever
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };
        let input = input.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            guess if guess.len() == WORD_LEN && guess.chars().all(|c| c.is_ascii_alphabetic()) => {
                // A rejected row stays in the buffer; clear it before retyping
                while !session.current_guess().is_empty() {
                    session.backspace();
                }
                for ch in guess.chars() {
                    session.add_letter(ch);
                }

                let events = session.commit(source);
                print_events(&session, &events);
            }
            _ => {
                println!(
                    "❌ Guesses must be exactly {WORD_LEN} letters (a-z). Try again.\n"
                );
            }
        }
    }

    Ok(())
}

fn print_events(session: &GameSession, events: &[SessionEvent]) {
    for event in events {
        match event {
            SessionEvent::InvalidWord { .. } => {
                println!("❌ Not in the word list. Try another word.\n");
            }
            SessionEvent::RowScored { score, .. } => {
                println!("\n  {}   {}\n", score_colored(score), score_emoji(score));
            }
            SessionEvent::GameEnded { status, answer } => {
                if *status == GameStatus::Won {
                    print_win(session.round());
                } else {
                    println!(
                        "💀 Out of guesses! The word was {}.\n",
                        answer.text().to_uppercase().bright_white().bold()
                    );
                }
            }
            SessionEvent::CellUpdated { .. } | SessionEvent::LoadingChanged { .. } => {}
        }
    }
}

fn print_win(rounds: usize) {
    println!("{}", "═".repeat(62).bright_cyan());
    println!(
        "{}",
        "        🎉 ✨  Y O U   W I N !  ✨ 🎉        "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(62).bright_cyan());

    let performance = match rounds {
        1 => "🏆 Hole in one!",
        2 => "⭐ Excellent!",
        3 => "💫 Great!",
        4 => "✨ Good!",
        5 => "👍 Solved!",
        _ => "😅 Phew!",
    };
    println!(
        "\n  {} Got it in {} {}.\n",
        performance.bright_yellow().bold(),
        rounds.to_string().bright_cyan().bold(),
        if rounds == 1 { "guess" } else { "guesses" }
    );
}

/// Get user input with a prompt, `None` once stdin is closed
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    read_input(&mut io::stdin().lock())
}

/// Read one trimmed line, `None` on a zero-byte read (EOF)
fn read_input(reader: &mut impl BufRead) -> Result<Option<String>> {
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
