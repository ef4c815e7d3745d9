//! Sentence splitting for pull-quote candidate generation.

use regex::{Matches, Regex};
use std::sync::LazyLock;

/// A sentence boundary: closing punctuation, whitespace, then a capital.
///
/// The `regex` crate has no lookaround, so the match covers all three parts;
/// the split lands after the punctuation and the capital opens the next
/// sentence.
static BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]\s+[A-Z]").unwrap());

/// Splits text into sentence-like units.
///
/// This is a heuristic boundary, not grammatical parsing: a period followed
/// by whitespace and an upper-case letter ends a sentence. Fragments are
/// trimmed and empty ones dropped; text without any boundary comes back
/// whole. The iterator is lazy and finite, and calling this again restarts
/// from the top.
///
/// # Example
///
/// ```rust
/// use folio_core::split_sentences;
///
/// let sentences: Vec<&str> = split_sentences("First point. Second point! Is that all?").collect();
/// assert_eq!(sentences, vec!["First point.", "Second point!", "Is that all?"]);
/// ```
pub fn split_sentences(text: &str) -> Sentences<'_> {
    Sentences { text, boundaries: BOUNDARY.find_iter(text), start: 0, tail_done: false }
}

/// Lazy iterator over the sentences of a block of text.
///
/// Created by [`split_sentences`]. Yields trimmed subslices of the input.
pub struct Sentences<'t> {
    text: &'t str,
    boundaries: Matches<'static, 't>,
    start: usize,
    tail_done: bool,
}

impl<'t> Iterator for Sentences<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<&'t str> {
        while !self.tail_done {
            match self.boundaries.next() {
                Some(boundary) => {
                    // the punctuation mark and the capital are both one byte
                    let end = boundary.start() + 1;
                    let sentence = self.text[self.start..end].trim();
                    self.start = boundary.end() - 1;
                    if !sentence.is_empty() {
                        return Some(sentence);
                    }
                }
                None => {
                    self.tail_done = true;
                    let tail = self.text[self.start..].trim();
                    if !tail.is_empty() {
                        return Some(tail);
                    }
                }
            }
        }

        None
    }
}
