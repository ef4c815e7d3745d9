//! Content analysis: the one-shot pipeline from extracted article to
//! layout-ready structure.
//!
//! # Example
//!
//! ```rust
//! use folio_core::{ExtractedContent, analyze_content};
//!
//! let content = ExtractedContent {
//!     title: "A Headline".to_string(),
//!     html_content: "<p>Lede paragraph.</p><p>Second paragraph.</p>".to_string(),
//!     ..Default::default()
//! };
//!
//! let analyzed = analyze_content(content, 3).unwrap();
//! assert_eq!(analyzed.paragraph_count, 2);
//! ```

use serde::Serialize;

use crate::content::{ExtractedContent, ExtractedImage};
use crate::images::{ImagePlacement, plan_image_placements};
use crate::parse::Document;
use crate::quotes::{PullQuoteCandidate, PullQuoteSelector};
use crate::subtitle::extract_subtitle;
use crate::{FolioError, Result};

/// Default number of pull quotes to look for.
pub const DEFAULT_PULL_QUOTES: usize = 3;

/// Analyzed article content, ready for layout composition.
///
/// Carries every [`ExtractedContent`] field forward (moved, not copied)
/// together with the structural analysis: subtitle, selected pull quotes in
/// article order, the image placement plan, and the paragraph count that
/// serves as the shared coordinate system. A value object; nothing mutates
/// it after construction.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzedContent {
    /// Article headline.
    pub title: String,
    /// Original body markup, preserved untouched for the composer.
    pub html_content: String,
    /// Byline author, if any.
    pub author: Option<String>,
    /// Display-formatted publication date, if any.
    pub date: Option<String>,
    /// Category label shown above the headline, if any.
    pub kicker: Option<String>,
    /// Publication name for the footer credit.
    pub source_name: String,
    /// Canonical article URL for the footer credit link.
    pub source_url: String,
    /// Article images, in source order.
    pub images: Vec<ExtractedImage>,
    /// Approximate body word count.
    pub word_count: usize,
    /// Estimated reading time in minutes.
    pub reading_time_minutes: usize,
    /// Detected deck/standfirst, if any.
    pub subtitle: Option<String>,
    /// Selected pull quotes, ascending by paragraph index.
    pub pull_quotes: Vec<PullQuoteCandidate>,
    /// Planned image placements.
    pub image_placements: Vec<ImagePlacement>,
    /// Number of `<p>` elements in the body.
    pub paragraph_count: usize,
}

/// Analyzes extracted content for editorial layout.
///
/// Construction compiles the pull-quote patterns once; the analyzer itself
/// is stateless across calls and safe to reuse for independent articles.
pub struct ContentAnalyzer {
    selector: PullQuoteSelector,
}

impl ContentAnalyzer {
    /// Creates an analyzer with the built-in quote selector.
    pub fn new() -> Self {
        Self { selector: PullQuoteSelector::new() }
    }

    /// Analyzes extracted content and prepares it for layout.
    ///
    /// `num_quotes` is the desired pull-quote count; 0 disables quotes, and
    /// ending up with fewer than requested is normal. The input is consumed
    /// and its fields move into the result.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::NoContent`] when the body has no block-level
    /// elements at all — the one caller precondition this engine enforces.
    pub fn analyze(&self, content: ExtractedContent, num_quotes: usize) -> Result<AnalyzedContent> {
        let doc = Document::parse(&content.html_content)?;
        if doc.block_elements().is_empty() {
            return Err(FolioError::NoContent);
        }

        let subtitle = extract_subtitle(&doc, &content.title);
        let pull_quotes = self.selector.select(&doc, num_quotes);
        let paragraph_count = doc.paragraphs().len();
        let image_placements = plan_image_placements(&content.images, paragraph_count);

        Ok(AnalyzedContent {
            title: content.title,
            html_content: content.html_content,
            author: content.author,
            date: content.date,
            kicker: content.kicker,
            source_name: content.source_name,
            source_url: content.source_url,
            images: content.images,
            word_count: content.word_count,
            reading_time_minutes: content.reading_time_minutes,
            subtitle,
            pull_quotes,
            image_placements,
            paragraph_count,
        })
    }
}

impl Default for ContentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function: analyze with a freshly-built analyzer.
pub fn analyze_content(content: ExtractedContent, num_quotes: usize) -> Result<AnalyzedContent> {
    ContentAnalyzer::new().analyze(content, num_quotes)
}
