//! Error types for Folio operations.
//!
//! This module defines the main error type [`FolioError`] which represents
//! all possible errors that can occur during content analysis and layout
//! composition.
//!
//! # Example
//!
//! ```rust
//! use folio_core::{FolioError, Result};
//!
//! fn check_body(html: &str) -> Result<()> {
//!     if html.is_empty() {
//!         return Err(FolioError::NoContent);
//!     }
//!     // ... analysis logic
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Main error type for analysis and composition operations.
///
/// The engine is designed to degrade gracefully on malformed-but-parseable
/// input: a missing subtitle, an empty quote list, or an empty placement plan
/// are ordinary values, not errors. Only violated caller preconditions
/// surface here.
///
/// # Example
///
/// ```rust
/// use folio_core::{FolioError, ExtractedContent, analyze_content};
///
/// let content = ExtractedContent { html_content: "<div></div>".into(), ..Default::default() };
/// match analyze_content(content, 3) {
///     Ok(analyzed) => println!("{} paragraphs", analyzed.paragraph_count),
///     Err(FolioError::NoContent) => println!("nothing to lay out"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum FolioError {
    /// HTML parsing errors.
    ///
    /// Returned when HTML cannot be parsed, often due to malformed markup
    /// or invalid CSS selectors.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// The document contains no block-level structure at all.
    ///
    /// Analysis and composition both require at least one block element
    /// (paragraph, heading, list, blockquote or preformatted block). A
    /// document without any aborts the pipeline entirely; there is no
    /// partial output.
    #[error("Document has no block-level content to lay out")]
    NoContent,

    /// Unrecognized layout style name.
    ///
    /// Returned when parsing a style string that is neither `magazine` nor
    /// `minimal`. Unknown values are rejected at construction, not at the
    /// point of use.
    #[error("Unknown layout style: {0}")]
    InvalidStyle(String),

    /// Serialization errors from the JSON hand-off.
    #[error("Failed to serialize document: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Result type alias for FolioError.
///
/// This is a convenience alias for `std::result::Result<T, FolioError>`.
pub type Result<T> = std::result::Result<T, FolioError>;
