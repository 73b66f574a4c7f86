//! Game session state machine
//!
//! A [`GameSession`] owns one game: the hidden answer, the round counter,
//! the in-progress guess buffer, the scored history, and the terminal
//! status. Input adapters drive it through three operations — `add_letter`,
//! `backspace`, `commit` — and render the [`SessionEvent`]s each returns.
//!
//! Invariants, checked by the tests below:
//! - `history.len() == round` after every operation
//! - the guess buffer never exceeds [`WORD_LEN`]
//! - once the status leaves `InProgress` every operation is a no-op

use crate::core::{RoundScore, WORD_LEN, Word};
use crate::words::WordSource;
use std::fmt;

/// Fixed per-session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Letters per word; must equal [`WORD_LEN`]
    pub answer_length: usize,
    /// Number of guesses before the game is lost
    pub max_rounds: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            answer_length: WORD_LEN,
            max_rounds: 6,
        }
    }
}

/// Session status: `InProgress` is initial, `Won`/`Lost` are terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Error type for session construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Configured answer length does not match the word type
    AnswerLength { expected: usize, got: usize },
    /// `max_rounds` must be at least 1
    NoRounds,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AnswerLength { expected, got } => {
                write!(f, "answer length must be {expected}, got {got}")
            }
            Self::NoRounds => write!(f, "max_rounds must be at least 1"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Render-ready event produced by a session operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A single cell changed: a typed letter, or `None` for a cleared cell
    CellUpdated {
        row: usize,
        col: usize,
        letter: Option<char>,
    },
    /// A row was committed and scored
    RowScored { row: usize, score: RoundScore },
    /// The word source rejected the current row's guess
    InvalidWord { row: usize },
    /// Terminal transition; `answer` is revealed to the player on a loss
    GameEnded { status: GameStatus, answer: Word },
    /// A validation round-trip started or finished
    LoadingChanged { loading: bool },
}

/// One game of guess-the-word
pub struct GameSession {
    answer: Word,
    config: GameConfig,
    round: usize,
    guess: String,
    history: Vec<RoundScore>,
    status: GameStatus,
    pending: bool,
}

impl GameSession {
    /// Start a session against `answer`
    ///
    /// # Errors
    /// Returns `SessionError` if the configured answer length disagrees with
    /// [`WORD_LEN`] or `max_rounds` is zero. The answer's own length is
    /// already guaranteed by [`Word`].
    pub fn new(answer: Word, config: GameConfig) -> Result<Self, SessionError> {
        if config.answer_length != WORD_LEN {
            return Err(SessionError::AnswerLength {
                expected: WORD_LEN,
                got: config.answer_length,
            });
        }
        if config.max_rounds == 0 {
            return Err(SessionError::NoRounds);
        }

        Ok(Self {
            answer,
            config,
            round: 0,
            guess: String::with_capacity(WORD_LEN),
            history: Vec::with_capacity(config.max_rounds),
            status: GameStatus::InProgress,
            pending: false,
        })
    }

    /// Current status
    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Zero-based index of the row being typed into
    #[inline]
    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }

    /// Total rounds allowed
    #[inline]
    #[must_use]
    pub const fn max_rounds(&self) -> usize {
        self.config.max_rounds
    }

    /// Letters typed into the current row so far
    #[inline]
    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.guess
    }

    /// Scored rows, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[RoundScore] {
        &self.history
    }

    /// Whether a commit's validation round-trip is outstanding
    #[inline]
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    fn accepts_input(&self) -> bool {
        self.status == GameStatus::InProgress && !self.pending
    }

    /// Type a letter into the current row
    ///
    /// Ignored unless the game is in progress, no commit is pending, and
    /// `ch` is a single ASCII letter. Case is normalized. When the row is
    /// already full the last cell is overwritten; the row never grows past
    /// [`WORD_LEN`].
    pub fn add_letter(&mut self, ch: char) -> Vec<SessionEvent> {
        if !self.accepts_input() || !ch.is_ascii_alphabetic() {
            return Vec::new();
        }

        let letter = ch.to_ascii_lowercase();
        if self.guess.len() < WORD_LEN {
            self.guess.push(letter);
        } else {
            self.guess.pop();
            self.guess.push(letter);
        }

        vec![SessionEvent::CellUpdated {
            row: self.round,
            col: self.guess.len() - 1,
            letter: Some(letter),
        }]
    }

    /// Remove the last letter of the current row
    ///
    /// Ignored unless the game is in progress, no commit is pending, and
    /// the row is non-empty.
    pub fn backspace(&mut self) -> Vec<SessionEvent> {
        if !self.accepts_input() || self.guess.is_empty() {
            return Vec::new();
        }

        self.guess.pop();

        vec![SessionEvent::CellUpdated {
            row: self.round,
            col: self.guess.len(),
            letter: None,
        }]
    }

    /// Commit the current row: validate, score, and advance
    ///
    /// Ignored unless the game is in progress, no commit is pending, and the
    /// row is full. The word source's verdict decides what happens next:
    ///
    /// - rejected: the row is flagged invalid and stays editable
    /// - source error: the guess is treated as valid (fail-open policy,
    ///   inherited deliberately from the original game)
    /// - accepted: the row is scored and appended to history; a fully
    ///   correct row wins, exhausting `max_rounds` loses, anything else
    ///   stays in progress
    ///
    /// The validation round-trip is bracketed by `LoadingChanged` events and
    /// guarded by the pending flag, so input arriving mid-validation is
    /// dropped rather than corrupting the row.
    pub fn commit(&mut self, source: &dyn WordSource) -> Vec<SessionEvent> {
        if !self.accepts_input() || self.guess.len() != WORD_LEN {
            return Vec::new();
        }

        // Guess buffer only ever holds validated letters
        let Ok(word) = Word::new(self.guess.as_str()) else {
            return Vec::new();
        };

        let mut events = Vec::new();

        self.pending = true;
        events.push(SessionEvent::LoadingChanged { loading: true });

        let valid = source.validate(&word).unwrap_or(true);

        self.pending = false;
        events.push(SessionEvent::LoadingChanged { loading: false });

        if !valid {
            events.push(SessionEvent::InvalidWord { row: self.round });
            return events;
        }

        let score = RoundScore::of(&word, &self.answer);
        self.history.push(score);
        self.round += 1;
        self.guess.clear();

        events.push(SessionEvent::RowScored {
            row: self.round - 1,
            score,
        });

        if score.is_win() {
            self.status = GameStatus::Won;
        } else if self.round == self.config.max_rounds {
            self.status = GameStatus::Lost;
        }

        if self.status != GameStatus::InProgress {
            events.push(SessionEvent::GameEnded {
                status: self.status,
                answer: self.answer.clone(),
            });
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Outcome;
    use crate::words::SourceError;

    /// Word source test double with a scripted verdict
    struct MockSource {
        verdict: Result<bool, ()>,
    }

    impl MockSource {
        fn accepting() -> Self {
            Self { verdict: Ok(true) }
        }

        fn rejecting() -> Self {
            Self { verdict: Ok(false) }
        }

        fn failing() -> Self {
            Self { verdict: Err(()) }
        }
    }

    impl WordSource for MockSource {
        fn target_word(&self) -> Result<Word, SourceError> {
            Err(SourceError::EmptyList)
        }

        fn validate(&self, _word: &Word) -> Result<bool, SourceError> {
            self.verdict
                .map_err(|()| SourceError::Transport("mock failure".to_string()))
        }
    }

    fn session(answer: &str) -> GameSession {
        GameSession::new(Word::new(answer).unwrap(), GameConfig::default()).unwrap()
    }

    fn type_word(session: &mut GameSession, word: &str) {
        for ch in word.chars() {
            session.add_letter(ch);
        }
    }

    fn assert_invariants(session: &GameSession) {
        assert_eq!(session.history().len(), session.round());
        assert!(session.current_guess().len() <= WORD_LEN);
    }

    #[test]
    fn construction_rejects_bad_answer_length() {
        let config = GameConfig {
            answer_length: 6,
            max_rounds: 6,
        };
        let result = GameSession::new(Word::new("crane").unwrap(), config);

        assert_eq!(
            result.err(),
            Some(SessionError::AnswerLength {
                expected: 5,
                got: 6
            })
        );
    }

    #[test]
    fn construction_rejects_zero_rounds() {
        let config = GameConfig {
            answer_length: 5,
            max_rounds: 0,
        };
        let result = GameSession::new(Word::new("crane").unwrap(), config);

        assert_eq!(result.err(), Some(SessionError::NoRounds));
    }

    #[test]
    fn add_letter_fills_row_in_order() {
        let mut session = session("crane");

        let events = session.add_letter('R');
        assert_eq!(
            events,
            vec![SessionEvent::CellUpdated {
                row: 0,
                col: 0,
                letter: Some('r'),
            }]
        );

        session.add_letter('e');
        assert_eq!(session.current_guess(), "re");
        assert_invariants(&session);
    }

    #[test]
    fn add_letter_ignores_non_letters() {
        let mut session = session("crane");

        assert!(session.add_letter('1').is_empty());
        assert!(session.add_letter(' ').is_empty());
        assert!(session.add_letter('é').is_empty());
        assert_eq!(session.current_guess(), "");
    }

    #[test]
    fn full_row_overwrites_last_cell() {
        let mut session = session("crane");
        type_word(&mut session, "slate");
        assert_eq!(session.current_guess(), "slate");

        let events = session.add_letter('x');
        assert_eq!(session.current_guess(), "slatx");
        assert_eq!(
            events,
            vec![SessionEvent::CellUpdated {
                row: 0,
                col: 4,
                letter: Some('x'),
            }]
        );
        assert_invariants(&session);
    }

    #[test]
    fn backspace_clears_last_cell() {
        let mut session = session("crane");
        type_word(&mut session, "sla");

        let events = session.backspace();
        assert_eq!(session.current_guess(), "sl");
        assert_eq!(
            events,
            vec![SessionEvent::CellUpdated {
                row: 0,
                col: 2,
                letter: None,
            }]
        );
    }

    #[test]
    fn backspace_on_empty_row_is_noop() {
        let mut session = session("crane");
        assert!(session.backspace().is_empty());
    }

    #[test]
    fn commit_requires_full_row() {
        let mut session = session("crane");
        type_word(&mut session, "sla");

        assert!(session.commit(&MockSource::accepting()).is_empty());
        assert_eq!(session.round(), 0);
    }

    #[test]
    fn commit_scores_and_advances() {
        let mut session = session("crane");
        type_word(&mut session, "slate");

        let events = session.commit(&MockSource::accepting());

        assert_eq!(session.round(), 1);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.current_guess(), "");
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_invariants(&session);

        // Loading bracket around the scored row
        assert_eq!(
            events[0],
            SessionEvent::LoadingChanged { loading: true }
        );
        assert_eq!(
            events[1],
            SessionEvent::LoadingChanged { loading: false }
        );
        assert!(matches!(events[2], SessionEvent::RowScored { row: 0, .. }));
    }

    #[test]
    fn rejected_word_leaves_row_editable() {
        let mut session = session("crane");
        type_word(&mut session, "zzzzz");

        let events = session.commit(&MockSource::rejecting());

        assert!(events.contains(&SessionEvent::InvalidWord { row: 0 }));
        assert_eq!(session.round(), 0);
        assert_eq!(session.current_guess(), "zzzzz");
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_invariants(&session);

        // Player may keep editing the same row
        session.backspace();
        session.add_letter('a');
        assert_eq!(session.current_guess(), "zzzza");
    }

    #[test]
    fn source_error_fails_open() {
        let mut session = session("crane");
        type_word(&mut session, "slate");

        let events = session.commit(&MockSource::failing());

        // Treated as valid: the row is scored and the game advances
        assert_eq!(session.round(), 1);
        assert!(matches!(events[2], SessionEvent::RowScored { row: 0, .. }));
    }

    #[test]
    fn winning_guess_ends_game() {
        let mut session = session("crane");
        type_word(&mut session, "crane");

        let events = session.commit(&MockSource::accepting());

        assert_eq!(session.status(), GameStatus::Won);
        let ended = events.iter().find_map(|ev| match ev {
            SessionEvent::GameEnded { status, answer } => Some((*status, answer.clone())),
            _ => None,
        });
        assert_eq!(
            ended,
            Some((GameStatus::Won, Word::new("crane").unwrap()))
        );
    }

    #[test]
    fn exhausting_rounds_loses_and_reveals_answer() {
        let mut session = session("crane");
        let source = MockSource::accepting();

        for _ in 0..6 {
            assert_eq!(session.status(), GameStatus::InProgress);
            type_word(&mut session, "slate");
            session.commit(&source);
            assert_invariants(&session);
        }

        assert_eq!(session.status(), GameStatus::Lost);
        assert_eq!(session.round(), 6);
        assert_eq!(session.history().len(), 6);
    }

    #[test]
    fn lost_game_signal_carries_target_word() {
        let mut session = session("crane");
        let source = MockSource::accepting();
        let mut last_events = Vec::new();

        for _ in 0..6 {
            type_word(&mut session, "slate");
            last_events = session.commit(&source);
        }

        let ended = last_events.iter().find_map(|ev| match ev {
            SessionEvent::GameEnded { status, answer } => Some((*status, answer.text().to_string())),
            _ => None,
        });
        assert_eq!(ended, Some((GameStatus::Lost, "crane".to_string())));
    }

    #[test]
    fn terminal_state_freezes_session() {
        let mut session = session("crane");
        type_word(&mut session, "crane");
        session.commit(&MockSource::accepting());
        assert_eq!(session.status(), GameStatus::Won);

        // Every further operation is a silent no-op
        assert!(session.add_letter('a').is_empty());
        assert!(session.backspace().is_empty());
        type_word(&mut session, "slate");
        assert!(session.commit(&MockSource::accepting()).is_empty());

        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.round(), 1);
        assert_eq!(session.current_guess(), "");
        assert_invariants(&session);
    }

    #[test]
    fn win_on_final_round_is_won_not_lost() {
        let mut session = session("crane");
        let source = MockSource::accepting();

        for _ in 0..5 {
            type_word(&mut session, "slate");
            session.commit(&source);
        }
        type_word(&mut session, "crane");
        session.commit(&source);

        assert_eq!(session.status(), GameStatus::Won);
    }

    #[test]
    fn scored_row_outcomes_reach_history() {
        let mut session = session("crane");
        type_word(&mut session, "react");
        session.commit(&MockSource::accepting());

        let outcomes = session.history()[0].cells().map(|c| c.outcome);
        assert_eq!(
            outcomes,
            [
                Outcome::Present,
                Outcome::Present,
                Outcome::Correct,
                Outcome::Present,
                Outcome::Absent,
            ]
        );
    }

    #[test]
    fn pending_flag_resolves_after_commit() {
        let mut session = session("crane");
        type_word(&mut session, "slate");
        session.commit(&MockSource::accepting());

        // The validation round-trip always completes before new input
        assert!(!session.is_pending());
        assert_eq!(session.add_letter('a').len(), 1);
    }
}
