//! Bundled word list
//!
//! The list is generated at build time from `data/words.txt` and serves two
//! jobs: offline play (target selection + guess validation) and the fallback
//! target when the word API is unreachable.

use super::{SourceError, WordSource};
use crate::core::Word;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

include!(concat!(env!("OUT_DIR"), "/words.rs"));

/// An in-memory word list usable as a [`WordSource`]
///
/// Target words are drawn uniformly at random; validation is membership.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl WordList {
    /// Build a list from pre-validated words
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let index = words.iter().map(|w| w.text().to_string()).collect();
        Self { words, index }
    }

    /// Build the list bundled into the binary
    #[must_use]
    pub fn bundled() -> Self {
        Self::from_texts(WORDS.iter().copied())
    }

    /// Load a list from a file, one word per line
    ///
    /// Blank lines and invalid entries are skipped.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read or opened.
    ///
    /// # Examples
    /// ```no_run
    /// use wordle_game::words::WordList;
    ///
    /// let list = WordList::from_file("data/words.txt").unwrap();
    /// println!("Loaded {} words", list.len());
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_texts(content.lines()))
    }

    /// Build a list from raw strings, keeping only valid words
    fn from_texts<'a>(texts: impl IntoIterator<Item = &'a str>) -> Self {
        let words = texts
            .into_iter()
            .filter_map(|text| {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Word::new(trimmed).ok()
                }
            })
            .collect();
        Self::new(words)
    }

    /// Number of words in the list
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether `word` is in the list
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word.text())
    }

    /// Pick a uniformly random word, `None` if the list is empty
    #[must_use]
    pub fn random_word(&self) -> Option<Word> {
        self.words.choose(&mut rand::rng()).cloned()
    }
}

impl WordSource for WordList {
    fn target_word(&self) -> Result<Word, SourceError> {
        self.random_word().ok_or(SourceError::EmptyList)
    }

    fn validate(&self, word: &Word) -> Result<bool, SourceError> {
        Ok(self.contains(word))
    }
}
