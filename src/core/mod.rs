//! Core domain types for word ladders
//!
//! Words, the error taxonomy, and nothing that touches I/O.

mod error;
mod word;

pub use error::{LadderError, PersistError, Result};
pub use word::{ALPHABET, Word, WordError};
