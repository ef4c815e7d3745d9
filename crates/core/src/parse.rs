//! HTML parsing and read-only DOM traversal.
//!
//! This module provides the [`Document`] and [`Element`] types for parsing
//! the extracted article body and walking its block-level structure using
//! CSS selectors. The parsed tree is treated as read-only everywhere: the
//! composer clones elements into fresh [`ElementNode`] values instead of
//! writing through references into it.
//!
//! # Example
//!
//! ```rust
//! use folio_core::Document;
//!
//! let html = r#"
//!     <h2>Section</h2>
//!     <p class="lede">First paragraph</p>
//!     <p>Second paragraph</p>
//! "#;
//!
//! let doc = Document::parse(html).unwrap();
//! assert_eq!(doc.paragraphs().len(), 2);
//! assert_eq!(doc.block_elements().len(), 3);
//! ```

use scraper::{Html, Selector};

use crate::tree::ElementNode;
use crate::{FolioError, Result};

/// Block-level tags the layout walk cares about, in one selector list.
///
/// `Html::select` visits matches in document order, which is the coordinate
/// system shared by the quote selector and the composer.
const BLOCK_SELECTOR: &str = "p, h1, h2, h3, h4, h5, h6, blockquote, ul, ol, figure, pre";

/// A parsed HTML document.
///
/// Wraps an article body and provides read-only queries over it. No method
/// on this type (or on [`Element`]) mutates the underlying tree.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// Malformed markup is handled by the underlying html5ever parser the
    /// same way a browser would; this never fails on odd input.
    ///
    /// # Example
    ///
    /// ```rust
    /// use folio_core::Document;
    ///
    /// let doc = Document::parse("<p>Hello</p>").unwrap();
    /// assert_eq!(doc.paragraphs().len(), 1);
    /// ```
    pub fn parse(html: &str) -> Result<Self> {
        let html = Html::parse_document(html);
        Ok(Self { html })
    }

    /// Gets the entire document back as a string.
    pub fn as_string(&self) -> String {
        self.html.html()
    }

    /// Selects elements using a CSS selector, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::HtmlParseError`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel =
            Selector::parse(selector).map_err(|e| FolioError::HtmlParseError(format!("Invalid selector: {}", e)))?;

        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// All block-level elements in document order.
    ///
    /// Nested matches are visited too: a `<p>` inside a `<blockquote>`
    /// appears both inside its parent's subtree and as its own entry.
    pub fn block_elements(&self) -> Vec<Element<'_>> {
        self.select(BLOCK_SELECTOR).unwrap_or_default()
    }

    /// All `<p>` elements in document order.
    ///
    /// The index into this list is the paragraph coordinate used by pull
    /// quotes and image placements.
    pub fn paragraphs(&self) -> Vec<Element<'_>> {
        self.select("p").unwrap_or_default()
    }
}

/// A read-only element in a parsed [`Document`].
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the text content of this element and its descendants.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the value of an attribute, if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.element.value().attr(name)
    }

    /// Gets the lowercase tag name.
    pub fn tag_name(&self) -> String {
        self.element.value().name().to_lowercase()
    }

    /// Deep-clones this element into an owned [`ElementNode`] subtree.
    ///
    /// Attributes, child elements and text runs are all copied; comments
    /// are dropped. The returned tree shares nothing with the source
    /// document.
    pub fn to_node(&self) -> ElementNode {
        clone_element(self.element)
    }
}

fn clone_element(el: scraper::ElementRef<'_>) -> ElementNode {
    let mut node = ElementNode::new(el.value().name().to_lowercase());
    for (name, value) in el.value().attrs() {
        node.set_attr(name, value);
    }

    for child in el.children() {
        match child.value() {
            scraper::Node::Text(t) => node.push_text(t.text.to_string()),
            scraper::Node::Element(_) => {
                if let Some(child_ref) = scraper::ElementRef::wrap(child) {
                    node.push(clone_element(child_ref));
                }
            }
            _ => {}
        }
    }

    node
}
