//! Word corpus
//!
//! An immutable, deduplicated set of same-length lowercase words. Every graph
//! is derived from one corpus and must be rebuilt if the corpus changes.

pub mod loader;

use crate::core::{LadderError, Result, Word};
use rustc_hash::FxHashSet;
use tracing::debug;

/// A deduplicated set of words that all have length `word_length`
///
/// Words are kept sorted for reproducible iteration, with a hash set alongside
/// for O(1) membership checks during graph construction.
#[derive(Debug, Clone)]
pub struct Corpus {
    word_length: usize,
    words: Vec<Word>,
    lookup: FxHashSet<Word>,
}

impl Corpus {
    /// Build a corpus from raw entries
    ///
    /// Entries are trimmed, then dropped if they are not exactly `word_length`
    /// letters or contain anything outside `a`-`z`. Duplicates collapse. No
    /// matching entries yields an empty corpus, not an error.
    ///
    /// # Errors
    /// Returns `LadderError::InvalidInput` if `word_length` is zero.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::corpus::Corpus;
    ///
    /// let corpus = Corpus::load(["cat", "cot", "Cat", "cats", "cat"], 3).unwrap();
    /// assert_eq!(corpus.len(), 2);
    /// ```
    pub fn load<I, S>(source: I, word_length: usize) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if word_length == 0 {
            return Err(LadderError::InvalidInput(
                "word length must be positive".to_string(),
            ));
        }

        let mut lookup = FxHashSet::default();
        let mut rejected = 0_usize;

        for entry in source {
            let trimmed = entry.as_ref().trim();
            if trimmed.len() != word_length {
                rejected += 1;
                continue;
            }
            match Word::new(trimmed) {
                Ok(word) => {
                    lookup.insert(word);
                }
                Err(_) => rejected += 1,
            }
        }

        let mut words: Vec<Word> = lookup.iter().cloned().collect();
        words.sort_unstable();

        debug!(
            word_length,
            accepted = words.len(),
            rejected,
            "loaded corpus"
        );

        Ok(Self {
            word_length,
            words,
            lookup,
        })
    }

    /// Length shared by every word in the corpus
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Words in lexicographic order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// O(1) average membership test
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.lookup.contains(word)
    }

    /// Membership test by text, without constructing a `Word` for malformed input
    #[must_use]
    pub fn contains_str(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|word| self.lookup.contains(&word))
    }
}
