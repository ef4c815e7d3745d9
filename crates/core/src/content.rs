//! Input value types produced by the extraction collaborator.
//!
//! [`ExtractedContent`] is the opaque hand-off from whatever fetched and
//! cleaned the article upstream. The analysis pipeline consumes it by value,
//! never mutates it, and carries its fields forward into
//! [`AnalyzedContent`](crate::AnalyzedContent).

use serde::Serialize;

/// An extracted and processed article image.
///
/// The pixel data arrives as an already-encoded data URI; this core treats it
/// as an opaque renderable reference and never decodes it. Images are
/// immutable once extracted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtractedImage {
    /// Encoded image payload, ready to drop into an `img` src attribute.
    pub data_uri: String,
    /// Alternative text from the source markup.
    pub alt_text: String,
    /// Caption text from the source markup.
    pub caption: String,
    /// Pixel width.
    pub width: u32,
    /// Pixel height.
    pub height: u32,
}

impl ExtractedImage {
    /// Aspect ratio (width / height). A zero height reads as square.
    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0 {
            return 1.0;
        }
        f64::from(self.width) / f64::from(self.height)
    }

    /// Whether the image is wider than it is tall.
    ///
    /// Non-landscape images are the ones eligible for side-by-side pairing.
    pub fn is_landscape(&self) -> bool {
        self.aspect_ratio() > 1.0
    }
}

/// Extracted article content, as delivered by the extraction collaborator.
///
/// Produced once upstream, consumed once by
/// [`analyze_content`](crate::analyze_content). Failures on the extraction
/// side arrive as *data* — a shorter image list, a `None` author — never as
/// errors propagating into this core.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtractedContent {
    /// Article headline.
    pub title: String,
    /// Cleaned article body markup (block elements only).
    pub html_content: String,
    /// Byline author, when the extractor found one.
    pub author: Option<String>,
    /// Publication date, already formatted for display.
    pub date: Option<String>,
    /// Short category/topic label shown above the headline.
    pub kicker: Option<String>,
    /// Publication name used for the footer credit.
    pub source_name: String,
    /// Canonical article URL used for the footer credit link.
    pub source_url: String,
    /// Downloaded article images, in source order.
    pub images: Vec<ExtractedImage>,
    /// Approximate word count of the body text.
    pub word_count: usize,
    /// Estimated reading time at ~200 words per minute.
    pub reading_time_minutes: usize,
}
