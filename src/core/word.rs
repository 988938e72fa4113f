//! Ladder word representation
//!
//! A Word is a non-empty run of lowercase ASCII letters. Graphs are built over
//! words of one fixed length, so length checks against a graph or corpus happen
//! at those boundaries rather than here.

use std::fmt;
use thiserror::Error;

/// The fixed alphabet candidate substitutions are drawn from.
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// A lowercase word used as a graph node
///
/// Ordering is lexicographic by text, which is the order nodes and edges are
/// reported in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: Box<str>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must not be empty")]
    Empty,
    #[error("word '{0}' must contain only lowercase letters a-z")]
    InvalidCharacters(String),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Uppercase input is rejected, not normalized.
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains anything outside `a`-`z`.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("cat").unwrap();
    /// assert_eq!(word.text(), "cat");
    ///
    /// assert!(Word::new("Cat").is_err());
    /// assert!(Word::new("c4t").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters(text));
        }

        Ok(Self {
            text: text.into_boxed_str(),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word; present for clippy's `len_without_is_empty`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.as_bytes()[position]
    }

    /// Return a copy of this word with `position` replaced by `letter`
    ///
    /// `letter` must be one of [`ALPHABET`]; the result stays a valid word.
    #[must_use]
    pub fn with_letter(&self, position: usize, letter: u8) -> Self {
        debug_assert!(letter.is_ascii_lowercase());
        let text: String = self
            .text
            .char_indices()
            .map(|(i, ch)| if i == position { char::from(letter) } else { ch })
            .collect();
        Self {
            text: text.into_boxed_str(),
        }
    }

    /// Enumerate every one-letter substitution of this word over [`ALPHABET`]
    ///
    /// Yields `len * 25` words, position-major then alphabetical.
    pub fn substitutions(&self) -> impl Iterator<Item = Self> + '_ {
        (0..self.len()).flat_map(move |position| {
            let current = self.char_at(position);
            ALPHABET
                .iter()
                .copied()
                .filter(move |&letter| letter != current)
                .map(move |letter| self.with_letter(position, letter))
        })
    }

    /// Number of positions at which two words differ
    ///
    /// Returns `None` when the lengths differ.
    #[must_use]
    pub fn hamming_distance(&self, other: &Self) -> Option<usize> {
        if self.len() != other.len() {
            return None;
        }
        Some(
            self.as_bytes()
                .iter()
                .zip(other.as_bytes())
                .filter(|(a, b)| a != b)
                .count(),
        )
    }

    /// True when the words differ in exactly one position
    #[inline]
    #[must_use]
    pub fn is_adjacent(&self, other: &Self) -> bool {
        self.hamming_distance(other) == Some(1)
    }

    /// Position of the single differing letter between two adjacent words
    #[must_use]
    pub fn changed_position(&self, other: &Self) -> Option<usize> {
        if !self.is_adjacent(other) {
            return None;
        }
        self.as_bytes()
            .iter()
            .zip(other.as_bytes())
            .position(|(a, b)| a != b)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
