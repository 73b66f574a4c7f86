//! Remote word API
//!
//! Blocking client for the daily-word service:
//! - `GET /word-of-the-day` returns the target word
//! - `POST /validate-word` checks whether a guess is a real word
//!
//! Failures surface as [`SourceError::Transport`]; the session applies its
//! fail-open policy on top.

use super::{SourceError, WordSource};
use crate::core::Word;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

/// Production endpoint of the word service
pub const DEFAULT_BASE_URL: &str = "https://words.dev-apis.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// [`WordSource`] backed by the remote word API
#[derive(Debug)]
pub struct ApiSource {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct WordOfTheDay {
    word: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Validation {
    valid_word: bool,
}

impl ApiSource {
    /// Create a client against the production endpoint
    ///
    /// # Errors
    /// Returns `SourceError::Transport` if the HTTP client cannot be built
    /// (TLS backend initialization failure).
    pub fn new() -> Result<Self, SourceError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a custom endpoint
    ///
    /// # Errors
    /// Returns `SourceError::Transport` if the HTTP client cannot be built.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, SourceError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

impl WordSource for ApiSource {
    fn target_word(&self) -> Result<Word, SourceError> {
        let response: WordOfTheDay = self
            .client
            .get(format!("{}/word-of-the-day", self.base_url))
            .send()?
            .error_for_status()?
            .json()?;

        Ok(Word::new(response.word.trim())?)
    }

    fn validate(&self, word: &Word) -> Result<bool, SourceError> {
        let response: Validation = self
            .client
            .post(format!("{}/validate-word", self.base_url))
            .json(&serde_json::json!({ "word": word.text() }))
            .send()?
            .error_for_status()?
            .json()?;

        Ok(response.valid_word)
    }
}
