//! Error taxonomy for corpus loading, graph building and path queries

use super::word::WordError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the ladder core
///
/// Apart from unreadable word lists these are deterministic input-validation
/// failures; none are worth retrying.
#[derive(Debug, Error)]
pub enum LadderError {
    /// Malformed construction parameters, such as a zero word length
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A word list could not be read
    #[error("cannot read word list {}", path.display())]
    WordList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Corpus has no words where a non-trivial graph was expected
    #[error("corpus is empty: no words of length {word_length} were loaded")]
    EmptyCorpus { word_length: usize },

    /// Query word length does not match the graph's word length
    #[error("word '{word}' has length {actual}, but the graph holds words of length {expected}")]
    LengthMismatch {
        word: String,
        expected: usize,
        actual: usize,
    },

    /// Query word absent from the graph's node set
    #[error("word '{0}' is not in the graph")]
    UnknownWord(String),

    /// Query text is not a well-formed word
    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    /// Persisted graph could not be written or read back
    #[error("graph persistence failed: {0}")]
    Persist(#[from] PersistError),
}

/// Errors from serializing or reloading a graph
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("graph I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("graph JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported graph format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("graph file holds a {found} graph, expected {expected}")]
    ModeMismatch {
        found: &'static str,
        expected: &'static str,
    },

    #[error("malformed graph: {0}")]
    Malformed(String),
}

pub type Result<T, E = LadderError> = std::result::Result<T, E>;
