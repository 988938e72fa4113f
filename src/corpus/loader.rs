//! Word list loading utilities
//!
//! Reads a filtered word list (one word per line) from disk into a [`Corpus`].

use super::Corpus;
use crate::core::{LadderError, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// Load a corpus of `word_length`-letter words from a file
///
/// Blank lines are skipped; every other line goes through [`Corpus::load`].
///
/// # Errors
///
/// Returns `LadderError::WordList` (carrying the I/O error) if the file cannot
/// be read, or `InvalidInput` for a zero word length.
///
/// # Examples
/// ```no_run
/// use word_ladder::corpus::loader::load_from_file;
///
/// let corpus = load_from_file("data/en_len03.txt", 3).unwrap();
/// println!("Loaded {} words", corpus.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> Result<Corpus> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LadderError::WordList {
        path: path.to_path_buf(),
        source,
    })?;

    let corpus = corpus_from_text(&content, word_length)?;
    info!(
        path = %path.display(),
        words = corpus.len(),
        word_length,
        "loaded word list"
    );
    Ok(corpus)
}

/// Parse newline-separated text into a corpus
///
/// # Errors
///
/// Returns `InvalidInput` for a zero word length.
pub fn corpus_from_text(content: &str, word_length: usize) -> Result<Corpus> {
    Corpus::load(
        content.lines().filter(|line| !line.trim().is_empty()),
        word_length,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn corpus_from_text_skips_blank_lines() {
        let corpus = corpus_from_text("cat\n\ncot\n   \ndog\n", 3).unwrap();
        assert_eq!(corpus.len(), 3);
    }

    #[test]
    fn corpus_from_text_skips_invalid() {
        let corpus = corpus_from_text("cat\ntoolong\nab\nDog\ncot", 3).unwrap();
        let texts: Vec<&str> = corpus.words().iter().map(|w| w.text()).collect();
        assert_eq!(texts, vec!["cat", "cot"]);
    }

    #[test]
    fn load_from_file_reads_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "aal\naam\nzzz\nAbc").unwrap();

        let corpus = load_from_file(file.path(), 3).unwrap();
        assert_eq!(corpus.len(), 3);
        assert!(corpus.contains_str("zzz"));
    }

    #[test]
    fn load_from_missing_file_fails() {
        let result = load_from_file("/definitely/not/here.txt", 3);
        let Err(LadderError::WordList { path, source }) = result else {
            panic!("expected a word list error");
        };
        assert_eq!(path, Path::new("/definitely/not/here.txt"));
        assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
    }
}
