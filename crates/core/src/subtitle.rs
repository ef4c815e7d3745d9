//! Subtitle (deck/standfirst) detection.
//!
//! Publications label their deck inconsistently; detection first chases a
//! small class-name vocabulary, then falls back to treating an early,
//! summary-sized paragraph as the deck.

use crate::parse::Document;

/// Class-name fragments that mark an explicit subtitle element, in priority
/// order.
const SUBTITLE_CLASSES: &[&str] = &["subtitle", "deck", "standfirst", "dek", "subheadline", "excerpt"];

/// Explicit subtitle elements shorter than this are ignored.
const MIN_SUBTITLE_CHARS: usize = 30;

/// Fallback paragraphs qualify with a length strictly inside this range.
const FALLBACK_MIN_CHARS: usize = 80;
const FALLBACK_MAX_CHARS: usize = 300;

/// How many leading paragraphs the fallback examines.
const FALLBACK_PARAGRAPHS: usize = 2;

/// Finds a subtitle/deck string for the article header.
///
/// First match wins, in order:
///
/// 1. For each vocabulary word, the first element in document order with a
///    class token containing that word (case-insensitive). Its trimmed text
///    is accepted when non-empty, different from the title, and longer than
///    30 characters.
/// 2. The first of the first two paragraphs whose trimmed text differs from
///    the title and is strictly between 80 and 300 characters long.
///
/// Returns `None` when neither produces a candidate; a missing subtitle is
/// not an error. The traversal is purely read-only.
pub fn extract_subtitle(doc: &Document, title: &str) -> Option<String> {
    let classed = doc.select("[class]").unwrap_or_default();

    for class_name in SUBTITLE_CLASSES {
        for element in &classed {
            let Some(classes) = element.attr("class") else { continue };
            let matched = classes
                .split_whitespace()
                .any(|token| token.to_lowercase().contains(class_name));
            if !matched {
                continue;
            }

            let text = element.text();
            let text = text.trim();
            if !text.is_empty() && text != title && text.chars().count() > MIN_SUBTITLE_CHARS {
                return Some(text.to_string());
            }

            // only the first matching element counts for each vocabulary word
            break;
        }
    }

    for paragraph in doc.paragraphs().iter().take(FALLBACK_PARAGRAPHS) {
        let text = paragraph.text();
        let text = text.trim();
        let len = text.chars().count();
        if text != title && len > FALLBACK_MIN_CHARS && len < FALLBACK_MAX_CHARS {
            return Some(text.to_string());
        }
    }

    None
}
