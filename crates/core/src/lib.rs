pub mod analyze;
pub mod compose;
pub mod content;
pub mod error;
pub mod images;
pub mod parse;
pub mod quotes;
pub mod sentences;
pub mod subtitle;
pub mod tree;

pub use analyze::{AnalyzedContent, ContentAnalyzer, DEFAULT_PULL_QUOTES, analyze_content};
pub use compose::{
    ComposedDocument, LayoutComposer, LayoutOptions, LayoutOptionsBuilder, LayoutStyle, compose_article,
    compose_layout,
};
pub use content::{ExtractedContent, ExtractedImage};
pub use error::{FolioError, Result};
pub use images::{ImagePlacement, MIN_IMAGE_SPACING, PlacementKind, plan_image_placements};
pub use parse::{Document, Element};
pub use quotes::{
    MAX_QUOTE_WORDS, MIN_QUOTE_SPACING, MIN_QUOTE_WORDS, PullQuoteCandidate, PullQuoteSelector, select_pull_quotes,
};
pub use sentences::{Sentences, split_sentences};
pub use subtitle::extract_subtitle;
pub use tree::{ElementNode, Node};
