//! Common types and utilities shared across Topicline crates.
//!
//! This crate defines the shared error type, the externally visible
//! [`SelectionResult`], and observability helpers used throughout the
//! Topicline workspace. It stays dependency-light so the text core can
//! depend on it without pulling in the network stack.
//!
//! # Overview
//!
//! - [`SelectionResult`]: One `(title, sentence)` draw from a page
//! - [`observability`]: Centralised tracing/logging initialisation
//! - [`TopiclineError`] and [`Result`]: Shared error handling
//!
//! # Examples
//!
//! ```rust
//! use topicline_common::SelectionResult;
//!
//! let picked = SelectionResult::new("Page", "A sentence about the page.");
//! let line = serde_json::to_string(&picked).unwrap();
//! assert_eq!(line, r#"{"title":"Page","sentence":"A sentence about the page."}"#);
//! ```
use serde::{Deserialize, Serialize};

pub mod observability;

/// One draw of the sentence picker: the page title and a topical sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionResult {
    pub title: String,
    pub sentence: String,
}

impl SelectionResult {
    pub fn new(title: impl Into<String>, sentence: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sentence: sentence.into(),
        }
    }
}

/// Error types used across the Topicline system.
///
/// Sentences rejected by the ASCII filter are not errors; they are simply
/// skipped by the pipeline.
#[derive(thiserror::Error, Debug)]
pub enum TopiclineError {
    /// No content words survived filtering, so no significance threshold exists.
    #[error("Empty corpus: no words left to compute a significance threshold")]
    EmptyCorpus,

    /// No sentence contains any topic word.
    #[error("No candidate sentences: no sentence contains a topic word")]
    NoCandidateSentences,

    /// The tokenizer could not be initialised.
    #[error("Tokenizer unavailable: {0}")]
    TokenizerUnavailable(String),

    /// Configuration was incomplete or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Fetching or extracting the source page failed.
    #[error("Source error: {0}")]
    Source(#[from] anyhow::Error),
}

/// Convenient alias for results that use [`TopiclineError`].
pub type Result<T> = std::result::Result<T, TopiclineError>;
