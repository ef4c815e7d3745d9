//! Pull-quote candidate scoring and spacing-constrained selection.
//!
//! Sentences are scored by a fixed table of language-pattern heuristics and
//! a handful of shape rules (length, questions, quotation marks, link
//! noise). Selection is greedy: best score first, skipping anything that
//! would land within eight paragraphs of an already-accepted quote. The
//! constants here are part of the observable contract and are not meant to
//! be re-derived.

use regex::Regex;
use serde::Serialize;
use std::cmp::Ordering;

use crate::parse::Document;
use crate::sentences::split_sentences;

/// Minimum words for a usable pull quote.
pub const MIN_QUOTE_WORDS: usize = 8;

/// Maximum words for a usable pull quote.
pub const MAX_QUOTE_WORDS: usize = 35;

/// Minimum distance, in paragraph indices, between two selected quotes.
pub const MIN_QUOTE_SPACING: usize = 8;

/// Leading paragraphs never mined for quotes, so the lede can breathe.
const LEDE_PARAGRAPHS: usize = 2;

/// Paragraphs shorter than this (trimmed chars) are skipped outright.
const MIN_PARAGRAPH_CHARS: usize = 50;

/// Phrase patterns that mark a sentence as quotable, with their weights.
///
/// Kept as a data table so a locale can swap patterns without touching the
/// scoring algorithm.
const QUOTE_INDICATORS: &[(&str, f64)] = &[
    (r"(?i)\bthe most\b", 1.5),
    (r"(?i)\bwhat (this|it) (means|implies|suggests)\b", 1.5),
    (r"(?i)\bthe (real|true|key|fundamental)\b", 1.5),
    (r"(?i)\b(striking|remarkable|surprising|fascinating)\b", 1.5),
    (r"(?i)\b(ultimately|fundamentally|essentially)\b", 1.5),
    (r"(?i)\bit('s| is) (not|clear|important|worth)\b", 1.5),
    (r"(?i)\bthe question is\b", 1.5),
    (r"(?i)\bif you (think|believe|consider)\b", 1.5),
    (r"(?i)\bthis is (why|how|what)\b", 1.5),
    (r"(?i)\bthe (problem|answer|solution|truth) is\b", 1.5),
];

/// Weak connectives that make a poor opening word for a standalone quote.
const WEAK_OPENERS: &[&str] = &["but ", "and ", "so ", "however,", "also "];

/// A scored pull-quote candidate.
///
/// Only the selected subset survives into
/// [`AnalyzedContent`](crate::AnalyzedContent); the rest are transient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PullQuoteCandidate {
    /// The sentence text, trimmed.
    pub text: String,
    /// Quality score; anything at or below zero never becomes a candidate.
    pub score: f64,
    /// Ordinal of the source paragraph among `<p>` elements only.
    pub paragraph_index: usize,
}

/// Scores sentences and selects a spaced set of pull quotes.
///
/// Construction compiles the indicator patterns once; reuse the selector
/// across articles rather than rebuilding it per call.
///
/// # Example
///
/// ```rust
/// use folio_core::{Document, PullQuoteSelector};
///
/// let doc = Document::parse("<p>Lede.</p><p>Second.</p>").unwrap();
/// let quotes = PullQuoteSelector::new().select(&doc, 3);
/// assert!(quotes.is_empty());
/// ```
pub struct PullQuoteSelector {
    indicators: Vec<(Regex, f64)>,
    numbers: Regex,
}

impl PullQuoteSelector {
    /// Creates a selector with the built-in indicator table.
    pub fn new() -> Self {
        let indicators = QUOTE_INDICATORS
            .iter()
            .map(|(pattern, weight)| (Regex::new(pattern).unwrap(), *weight))
            .collect();

        Self { indicators, numbers: Regex::new(r"\d+").unwrap() }
    }

    /// Selects up to `num_quotes` pull quotes from the document.
    ///
    /// Candidates come from paragraphs after the lede (index ≥ 2) with at
    /// least 50 characters of text, one candidate per positively-scoring
    /// sentence. Selection greedily takes the highest scores while keeping
    /// every accepted pair at least [`MIN_QUOTE_SPACING`] paragraphs apart,
    /// then orders the result by position in the article.
    ///
    /// Returns fewer than `num_quotes` quotes when not enough qualifying,
    /// sufficiently-spaced candidates exist; that is not an error. A
    /// `num_quotes` of 0 disables selection.
    pub fn select(&self, doc: &Document, num_quotes: usize) -> Vec<PullQuoteCandidate> {
        let mut candidates = Vec::new();

        for (index, paragraph) in doc.paragraphs().iter().enumerate() {
            if index < LEDE_PARAGRAPHS {
                continue;
            }

            let text = paragraph.text();
            let text = text.trim();
            if text.chars().count() < MIN_PARAGRAPH_CHARS {
                continue;
            }

            for sentence in split_sentences(text) {
                let score = self.score_sentence(sentence);
                if score > 0.0 {
                    candidates.push(PullQuoteCandidate {
                        text: sentence.to_string(),
                        score,
                        paragraph_index: index,
                    });
                }
            }
        }

        select_spaced(candidates, num_quotes)
    }

    /// Scores a single sentence's suitability as a pull quote.
    ///
    /// Deterministic and pure; a score of 0 means rejected.
    pub fn score_sentence(&self, sentence: &str) -> f64 {
        let word_count = sentence.split_whitespace().count();
        if word_count < MIN_QUOTE_WORDS || word_count > MAX_QUOTE_WORDS {
            return 0.0;
        }

        let mut score = 0.0;

        // medium-length quotes sit best on the page
        if (12..=25).contains(&word_count) {
            score += 2.0;
        } else if (10..=30).contains(&word_count) {
            score += 1.0;
        }

        for (pattern, weight) in &self.indicators {
            if pattern.is_match(sentence) {
                score += weight;
            }
        }

        if sentence.ends_with('?') {
            score += 1.0;
        }

        if sentence.contains('"') {
            score += 0.5;
        }

        let lower = sentence.to_lowercase();
        if WEAK_OPENERS.iter().any(|opener| lower.starts_with(opener)) {
            score -= 0.5;
        }

        if self.numbers.find_iter(sentence).count() > 2 {
            score -= 1.0;
        }

        if lower.contains("http") || sentence.contains('@') {
            score -= 2.0;
        }

        score
    }
}

impl Default for PullQuoteSelector {
    fn default() -> Self {
        Self::new()
    }
}

/// Greedy spacing-constrained selection: sort by score, first fit wins.
///
/// The stable sort keeps discovery order among equal scores, and that
/// tie-break is observable behavior, so no optimal solver here.
fn select_spaced(mut candidates: Vec<PullQuoteCandidate>, num_quotes: usize) -> Vec<PullQuoteCandidate> {
    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    let mut selected: Vec<PullQuoteCandidate> = Vec::new();
    let mut used_positions: Vec<usize> = Vec::new();

    for candidate in candidates {
        if selected.len() >= num_quotes {
            break;
        }

        let too_close = used_positions
            .iter()
            .any(|&position| candidate.paragraph_index.abs_diff(position) < MIN_QUOTE_SPACING);
        if too_close {
            continue;
        }

        used_positions.push(candidate.paragraph_index);
        selected.push(candidate);
    }

    selected.sort_by_key(|candidate| candidate.paragraph_index);
    selected
}

/// Convenience wrapper: build a selector, select, done.
pub fn select_pull_quotes(doc: &Document, num_quotes: usize) -> Vec<PullQuoteCandidate> {
    PullQuoteSelector::new().select(doc, num_quotes)
}
