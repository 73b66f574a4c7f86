//! Word sources
//!
//! A [`WordSource`] supplies the hidden target word and validates submitted
//! guesses. Two implementations are provided: the bundled/local [`WordList`]
//! and the remote [`ApiSource`] backed by the daily-word API.

mod api;
mod embedded;

pub use api::{ApiSource, DEFAULT_BASE_URL};
pub use embedded::{WORDS, WORDS_COUNT, WordList};

use crate::core::{Word, WordError};
use std::fmt;

/// Capability the game session uses to obtain and validate words
pub trait WordSource {
    /// Fetch the target word for a new session
    ///
    /// # Errors
    /// Returns `SourceError` if the word cannot be obtained. Callers
    /// bootstrapping a session are expected to fall back to a local list;
    /// the session itself only ever sees a valid [`Word`].
    fn target_word(&self) -> Result<Word, SourceError>;

    /// Whether `word` is an accepted guess
    ///
    /// # Errors
    /// Returns `SourceError` on transport or decode failure. The session
    /// treats an error as "accepted" (fail-open).
    fn validate(&self, word: &Word) -> Result<bool, SourceError>;
}

/// Error type for word-source failures
#[derive(Debug)]
pub enum SourceError {
    /// Network, HTTP status, or response decode failure
    Transport(String),
    /// The service answered with something that is not a playable word
    BadWord(WordError),
    /// The local list has no words to draw from
    EmptyList,
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "word service unavailable: {msg}"),
            Self::BadWord(err) => write!(f, "word service returned an unplayable word: {err}"),
            Self::EmptyList => write!(f, "word list is empty"),
        }
    }
}

impl std::error::Error for SourceError {}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<WordError> for SourceError {
    fn from(err: WordError) -> Self {
        Self::BadWord(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_error_display() {
        let err = SourceError::Transport("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));

        let err = SourceError::BadWord(WordError::InvalidLength(3));
        assert!(err.to_string().contains("unplayable"));

        assert_eq!(SourceError::EmptyList.to_string(), "word list is empty");
    }

    #[test]
    fn word_error_converts() {
        let err: SourceError = WordError::NonAscii.into();
        assert!(matches!(err, SourceError::BadWord(WordError::NonAscii)));
    }
}
