//! Formatting utilities for terminal output

use crate::core::Word;

/// Join a ladder into a single line: `cat → cot → dot`
#[must_use]
pub fn ladder_line(path: &[Word]) -> String {
    path.iter()
        .map(Word::text)
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Split `next` around the letter that changed from `previous`
///
/// Returns `(before, changed, after)`; `changed` is empty when the words are
/// not neighbors.
#[must_use]
pub fn split_change<'a>(previous: &Word, next: &'a Word) -> (&'a str, &'a str, &'a str) {
    let text = next.text();
    match previous.changed_position(next) {
        Some(pos) => (&text[..pos], &text[pos..=pos], &text[pos + 1..]),
        None => (text, "", ""),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
