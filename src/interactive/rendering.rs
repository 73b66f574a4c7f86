//! TUI rendering with ratatui
//!
//! Draws the guess board, message log, and status bar.

use super::app::{App, Message, MessageStyle};
use crate::core::{Outcome, WORD_LEN};
use crate::session::GameStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Board
            Constraint::Length(7), // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::with_capacity(app.session.max_rounds() * 2);

    for row in 0..app.session.max_rounds() {
        lines.push(board_row(app, row));
        lines.push(Line::default()); // spacing between rows
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn board_row(app: &App, row: usize) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LEN * 2);

    for col in 0..WORD_LEN {
        spans.push(cell_span(app, row, col));
        spans.push(Span::raw(" "));
    }
    spans.pop();

    Line::from(spans)
}

fn cell_span(app: &App, row: usize, col: usize) -> Span<'static> {
    // Scored row
    if let Some(score) = app.session.history().get(row) {
        let cell = score.cells()[col];
        let text = format!(" {} ", (cell.letter as char).to_ascii_uppercase());
        let style = match cell.outcome {
            Outcome::Correct => Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
            Outcome::Present => Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            Outcome::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        };
        return Span::styled(text, style);
    }

    // Row being typed
    if row == app.session.round() {
        if let Some(letter) = app.session.current_guess().as_bytes().get(col) {
            return Span::styled(
                format!(" {} ", (*letter as char).to_ascii_uppercase()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            );
        }
    }

    // Empty cell
    Span::styled(" · ", Style::default().fg(Color::DarkGray))
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app.messages.iter().map(message_item).collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn message_item(message: &Message) -> ListItem<'static> {
    let style = match message.style {
        MessageStyle::Info => Style::default().fg(Color::Gray),
        MessageStyle::Success => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        MessageStyle::Error => Style::default().fg(Color::Red),
    };
    ListItem::new(Line::from(Span::styled(message.text.clone(), style)))
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let status = match app.session.status() {
        GameStatus::InProgress if app.loading => "Checking word...".to_string(),
        GameStatus::InProgress => format!(
            "Round {}/{} — type letters, Enter commits, Backspace deletes",
            app.session.round() + 1,
            app.session.max_rounds()
        ),
        GameStatus::Won => "You won! n: new game, q: quit".to_string(),
        GameStatus::Lost => "Out of guesses. n: new game, q: quit".to_string(),
    };

    let bar = Paragraph::new(status)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(bar, area);
}
