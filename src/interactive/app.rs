//! TUI application state and logic

use crate::session::{GameConfig, GameSession, GameStatus, SessionEvent};
use crate::words::{WordList, WordSource};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub session: GameSession,
    pub source: Box<dyn WordSource>,
    pub fallback: WordList,
    pub config: GameConfig,
    pub messages: Vec<Message>,
    pub loading: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(
        session: GameSession,
        source: Box<dyn WordSource>,
        fallback: WordList,
        config: GameConfig,
    ) -> Self {
        let mut app = Self {
            session,
            source,
            fallback,
            config,
            messages: Vec::new(),
            loading: false,
            should_quit: false,
        };
        app.add_message(
            "Type a 5-letter word and press Enter to guess.",
            MessageStyle::Info,
        );
        app.add_message("Esc quits.", MessageStyle::Info);
        app
    }

    /// Start a fresh game, fetching a new target with local fallback
    pub fn new_game(&mut self) {
        let target = self
            .source
            .target_word()
            .ok()
            .or_else(|| self.fallback.random_word());

        let Some(target) = target else {
            self.add_message("Could not pick a new word!", MessageStyle::Error);
            return;
        };

        match GameSession::new(target, self.config) {
            Ok(session) => {
                self.session = session;
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(err) => {
                self.add_message(&format!("Could not start game: {err}"), MessageStyle::Error);
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Fold session events into messages and the loading flag
    pub fn apply_events(&mut self, events: Vec<SessionEvent>) {
        for event in events {
            match event {
                SessionEvent::LoadingChanged { loading } => {
                    self.loading = loading;
                }
                SessionEvent::InvalidWord { .. } => {
                    self.add_message("Not in the word list!", MessageStyle::Error);
                }
                SessionEvent::GameEnded { status, answer } => {
                    if status == GameStatus::Won {
                        let celebration = match self.session.round() {
                            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                            3 => "✨ SPLENDID! Three guesses! ✨",
                            4 => "👏 GREAT JOB! Four guesses! 👏",
                            5 => "🎉 NICE WORK! Five guesses! 🎉",
                            _ => "😅 PHEW! Got it on the last try! 😅",
                        };
                        self.add_message(celebration, MessageStyle::Success);
                    } else {
                        self.add_message(
                            &format!("💀 The word was {}.", answer.text().to_uppercase()),
                            MessageStyle::Error,
                        );
                    }
                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                }
                SessionEvent::CellUpdated { .. } | SessionEvent::RowScored { .. } => {
                    // Board state is read straight from the session
                }
            }
        }
    }

    /// Whether the next Enter will start a validation round-trip
    ///
    /// Used by the event loop to paint the checking indicator before the
    /// blocking validation call inside `commit`.
    #[must_use]
    pub fn commit_ready(&self) -> bool {
        self.session.status() == GameStatus::InProgress
            && !self.session.is_pending()
            && self.session.current_guess().len() == self.config.answer_length
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Esc
            || (code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        if self.session.status() == GameStatus::InProgress {
            match code {
                KeyCode::Char(c) => {
                    let events = self.session.add_letter(c);
                    self.apply_events(events);
                }
                KeyCode::Backspace => {
                    let events = self.session.backspace();
                    self.apply_events(events);
                }
                KeyCode::Enter => {
                    let events = self.session.commit(self.source.as_ref());
                    self.apply_events(events);
                }
                _ => {}
            }
        } else {
            // Game over: letters are free for menu keys
            match code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            }
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}


fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            // Commit blocks on validation, so paint the checking indicator
            // now; the commit's own events clear the flag afterwards
            if key.code == KeyCode::Enter && app.commit_ready() {
                app.loading = true;
                terminal.draw(|f| super::rendering::ui(f, &app))?;
            }

            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
