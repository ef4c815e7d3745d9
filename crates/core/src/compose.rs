//! Layout composition.
//!
//! This module provides the primary API for turning analyzed content into a
//! composed editorial document: a fresh `article` tree with a header, a body
//! interleaving cloned source blocks with figures and pull quotes, and an
//! optional source-credit footer. The main entry point is [`LayoutComposer`],
//! along with the convenience functions [`compose_layout`] and
//! [`compose_article`].
//!
//! Composition never mutates the source document; every emitted element is a
//! fresh clone, so composing twice from the same input yields structurally
//! equal trees.
//!
//! # Example
//!
//! ```rust
//! use folio_core::{ExtractedContent, LayoutOptions, compose_article};
//!
//! let content = ExtractedContent {
//!     title: "A Headline".to_string(),
//!     html_content: "<p>Lede paragraph with enough text.</p><p>Second.</p>".to_string(),
//!     ..Default::default()
//! };
//!
//! let document = compose_article(content, 3, &LayoutOptions::default()).unwrap();
//! assert!(document.to_html().starts_with("<article"));
//! ```

use serde::Serialize;
use std::collections::BTreeMap;
use std::str::FromStr;
use url::Url;

use crate::analyze::{AnalyzedContent, analyze_content};
use crate::content::ExtractedImage;
use crate::images::{ImagePlacement, PlacementKind};
use crate::parse::Document;
use crate::quotes::PullQuoteCandidate;
use crate::tree::ElementNode;
use crate::{FolioError, Result};

/// Glyph between byline fields.
const BYLINE_SEPARATOR: &str = " · ";

/// Alt text used when an image carries none of its own.
const FALLBACK_ALT_TEXT: &str = "Article image";

/// Visual style of the composed layout.
///
/// Styling itself is the renderer's concern; the style here only tags the
/// article root so the renderer can pick a stylesheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutStyle {
    /// Full editorial treatment.
    #[default]
    Magazine,
    /// Pared-back treatment.
    Minimal,
}

impl FromStr for LayoutStyle {
    type Err = FolioError;

    /// Parses a style name, case-insensitively.
    ///
    /// Unrecognized names are rejected here, at construction, rather than
    /// silently normalized at the point of use.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "magazine" => Ok(LayoutStyle::Magazine),
            "minimal" => Ok(LayoutStyle::Minimal),
            _ => Err(FolioError::InvalidStyle(s.to_string())),
        }
    }
}

/// Options for layout composition.
///
/// # Example
///
/// ```rust
/// use folio_core::{LayoutOptions, LayoutStyle};
///
/// let options = LayoutOptions::builder()
///     .style(LayoutStyle::Minimal)
///     .include_drop_cap(false)
///     .build();
/// assert!(options.include_images);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutOptions {
    /// Layout style marker (default: magazine).
    pub style: LayoutStyle,
    /// Whether planned figures are emitted at all (default: true).
    pub include_images: bool,
    /// Whether selected pull quotes are emitted (default: true).
    pub include_pull_quotes: bool,
    /// Whether the first paragraph gets a drop-cap marker (default: true).
    pub include_drop_cap: bool,
    /// Whether the source-credit footer is appended (default: true).
    pub include_header_footer: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            style: LayoutStyle::default(),
            include_images: true,
            include_pull_quotes: true,
            include_drop_cap: true,
            include_header_footer: true,
        }
    }
}

impl LayoutOptions {
    /// Creates a new builder for LayoutOptions.
    pub fn builder() -> LayoutOptionsBuilder {
        LayoutOptionsBuilder::new()
    }
}

/// Builder for [`LayoutOptions`].
///
/// Provides a fluent API over the defaults.
pub struct LayoutOptionsBuilder {
    options: LayoutOptions,
}

impl LayoutOptionsBuilder {
    /// Creates a builder with default values.
    pub fn new() -> Self {
        Self { options: LayoutOptions::default() }
    }

    /// Sets the layout style.
    pub fn style(mut self, value: LayoutStyle) -> Self {
        self.options.style = value;
        self
    }

    /// Sets whether figures are emitted.
    pub fn include_images(mut self, value: bool) -> Self {
        self.options.include_images = value;
        self
    }

    /// Sets whether pull quotes are emitted.
    pub fn include_pull_quotes(mut self, value: bool) -> Self {
        self.options.include_pull_quotes = value;
        self
    }

    /// Sets whether the opening paragraph gets a drop cap.
    pub fn include_drop_cap(mut self, value: bool) -> Self {
        self.options.include_drop_cap = value;
        self
    }

    /// Sets whether the footer is appended.
    pub fn include_header_footer(mut self, value: bool) -> Self {
        self.options.include_header_footer = value;
        self
    }

    /// Builds the options.
    pub fn build(self) -> LayoutOptions {
        self.options
    }
}

impl Default for LayoutOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The terminal artifact of this engine: the composed tree plus the options
/// that selected it.
///
/// Handed to the rendering collaborator unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComposedDocument {
    /// The `article` root element.
    pub root: ElementNode,
    /// The options the layout was composed with.
    pub options: LayoutOptions,
}

impl ComposedDocument {
    /// Serializes the composed tree to an HTML string.
    pub fn to_html(&self) -> String {
        self.root.to_html()
    }

    /// Serializes the composed document (tree and options) to JSON.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Figures destined for one paragraph position, pairs already resolved.
enum FigureEntry<'a> {
    Single(&'a ImagePlacement),
    Pair(&'a ImagePlacement, &'a ImagePlacement),
}

/// Composes editorial layouts from analyzed content.
///
/// # Example
///
/// ```rust
/// use folio_core::{ExtractedContent, LayoutComposer, LayoutOptions, analyze_content};
///
/// let content = ExtractedContent {
///     title: "A Headline".to_string(),
///     html_content: "<p>Lede.</p><p>More body text.</p>".to_string(),
///     ..Default::default()
/// };
/// let analyzed = analyze_content(content, 3).unwrap();
///
/// let composer = LayoutComposer::new(LayoutOptions::default());
/// let document = composer.compose(&analyzed).unwrap();
/// assert_eq!(document.root.tag, "article");
/// ```
pub struct LayoutComposer {
    options: LayoutOptions,
}

impl LayoutComposer {
    /// Creates a composer with the given options.
    pub fn new(options: LayoutOptions) -> Self {
        Self { options }
    }

    /// Gets the composer's options.
    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Composes the final document tree.
    ///
    /// The source markup inside `content` is parsed read-only; every element
    /// in the output is a fresh clone, so the input is reusable afterwards
    /// and two compositions of the same input are structurally equal.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::NoContent`] when the body markup holds no
    /// block-level elements; composition aborts entirely rather than
    /// producing a partial document.
    pub fn compose(&self, content: &AnalyzedContent) -> Result<ComposedDocument> {
        let doc = Document::parse(&content.html_content)?;
        let blocks = doc.block_elements();
        if blocks.is_empty() {
            return Err(FolioError::NoContent);
        }

        let mut root = ElementNode::with_class("article", "article");
        if self.options.style == LayoutStyle::Minimal {
            root.add_class("minimal");
        }

        root.push(self.build_header(content));
        root.push(self.build_body(content, &blocks));

        if self.options.include_header_footer {
            root.push(build_footer(content));
        }

        Ok(ComposedDocument { root, options: self.options.clone() })
    }

    /// Builds the article header: kicker, headline, deck, byline.
    fn build_header(&self, content: &AnalyzedContent) -> ElementNode {
        let mut header = ElementNode::with_class("header", "article-header");

        if let Some(kicker) = &content.kicker {
            let mut el = ElementNode::with_class("p", "kicker");
            el.push_text(kicker.as_str());
            header.push(el);
        }

        let mut headline = ElementNode::with_class("h1", "headline");
        headline.push_text(content.title.as_str());
        header.push(headline);

        if let Some(subtitle) = &content.subtitle {
            let mut deck = ElementNode::with_class("p", "deck");
            deck.push_text(subtitle.as_str());
            header.push(deck);
        }

        let mut parts: Vec<String> = Vec::new();
        if let Some(author) = &content.author {
            parts.push(format!("By {}", author));
        }
        if let Some(date) = &content.date {
            parts.push(date.clone());
        }
        if content.reading_time_minutes > 0 {
            parts.push(format!("{} min read", content.reading_time_minutes));
        }
        if !parts.is_empty() {
            let mut byline = ElementNode::with_class("div", "byline");
            byline.push_text(parts.join(BYLINE_SEPARATOR));
            header.push(byline);
        }

        header
    }

    /// Builds the article body: hero figure, then the cloned source blocks
    /// interleaved with planned figures and pull quotes.
    fn build_body(&self, content: &AnalyzedContent, blocks: &[crate::parse::Element<'_>]) -> ElementNode {
        let mut body = ElementNode::with_class("div", "article-body");

        let (hero, mut figure_groups) = group_placements(&content.image_placements);

        if self.options.include_images
            && let Some(hero) = hero
            && let Some(image) = content.images.get(hero.image_index)
        {
            body.push(build_figure(image, PlacementKind::Hero));
        }

        let mut pending_quotes: BTreeMap<usize, &PullQuoteCandidate> = content
            .pull_quotes
            .iter()
            .map(|quote| (quote.paragraph_index, quote))
            .collect();

        let mut paragraph_counter = 0usize;

        for element in blocks {
            let tag = element.tag_name();

            if tag == "p" && element.text().trim().is_empty() {
                continue;
            }

            // source figures are never copied; figures come from the plan
            if tag == "figure" {
                continue;
            }

            let mut node = element.to_node();

            if paragraph_counter == 0 && tag == "p" && self.options.include_drop_cap {
                node.add_class("drop-cap");
            }

            if matches!(tag.as_str(), "h1" | "h2" | "h3" | "h4" | "h5" | "h6") {
                node.add_class("section-heading");
            }

            if self.options.include_images
                && let Some(entries) = figure_groups.remove(&paragraph_counter)
            {
                for entry in entries {
                    push_figures(&mut body, &entry, content);
                }
            }

            body.push(node);

            if self.options.include_pull_quotes
                && let Some(quote) = pending_quotes.remove(&paragraph_counter)
            {
                body.push(build_pull_quote(quote));
            }

            if tag == "p" {
                paragraph_counter += 1;
            }
        }

        // placements the walk never reached still render, just trailing
        if self.options.include_images {
            for (_, entries) in figure_groups {
                for entry in entries {
                    push_figures(&mut body, &entry, content);
                }
            }
        }

        body
    }
}

/// Splits the plan into the hero and per-paragraph figure groups, resolving
/// each pair into a single entry keyed by its leading member.
fn group_placements(placements: &[ImagePlacement]) -> (Option<&ImagePlacement>, BTreeMap<usize, Vec<FigureEntry<'_>>>) {
    let mut hero = None;
    let mut groups: BTreeMap<usize, Vec<FigureEntry<'_>>> = BTreeMap::new();
    let mut consumed = vec![false; placements.len()];

    for (index, placement) in placements.iter().enumerate() {
        if consumed[index] {
            continue;
        }

        if placement.kind == PlacementKind::Hero {
            hero = Some(placement);
            continue;
        }

        let partner = placement
            .pair_with
            .and_then(|partner_index| placements.get(partner_index).map(|p| (partner_index, p)));

        let entry = match partner {
            Some((partner_index, partner)) if partner_index > index => {
                consumed[partner_index] = true;
                FigureEntry::Pair(placement, partner)
            }
            _ => FigureEntry::Single(placement),
        };

        groups.entry(placement.paragraph_index).or_default().push(entry);
    }

    (hero, groups)
}

fn push_figures(body: &mut ElementNode, entry: &FigureEntry<'_>, content: &AnalyzedContent) {
    match entry {
        FigureEntry::Single(placement) => {
            if let Some(image) = content.images.get(placement.image_index) {
                body.push(build_figure(image, placement.kind));
            }
        }
        FigureEntry::Pair(lead, partner) => {
            match (content.images.get(lead.image_index), content.images.get(partner.image_index)) {
                (Some(a), Some(b)) => body.push(build_figure_pair(a, b)),
                (Some(a), None) => body.push(build_figure(a, lead.kind)),
                (None, Some(b)) => body.push(build_figure(b, partner.kind)),
                (None, None) => {}
            }
        }
    }
}

/// Builds one figure: image plus an optional caption.
///
/// Caption text falls back to the alt text and is omitted entirely when both
/// are blank.
fn build_figure(image: &ExtractedImage, kind: PlacementKind) -> ElementNode {
    let mut figure = ElementNode::with_class("figure", format!("figure {}", kind.as_class()));

    let mut img = ElementNode::new("img");
    img.set_attr("src", image.data_uri.as_str());
    let alt = if image.alt_text.is_empty() { FALLBACK_ALT_TEXT } else { image.alt_text.as_str() };
    img.set_attr("alt", alt);
    figure.push(img);

    let caption = if image.caption.is_empty() { image.alt_text.as_str() } else { image.caption.as_str() };
    if !caption.trim().is_empty() {
        let mut figcaption = ElementNode::new("figcaption");
        figcaption.push_text(caption);
        figure.push(figcaption);
    }

    figure
}

/// Builds the side-by-side wrapper for a pair of figures.
fn build_figure_pair(a: &ExtractedImage, b: &ExtractedImage) -> ElementNode {
    let mut wrapper = ElementNode::with_class("div", "figure-pair");
    wrapper.push(build_figure(a, PlacementKind::Paired));
    wrapper.push(build_figure(b, PlacementKind::Paired));
    wrapper
}

fn build_pull_quote(quote: &PullQuoteCandidate) -> ElementNode {
    let mut aside = ElementNode::with_class("aside", "pull-quote");
    let mut blockquote = ElementNode::new("blockquote");
    blockquote.push_text(quote.text.as_str());
    aside.push(blockquote);
    aside
}

/// Builds the source-credit footer.
///
/// The credit links to the source URL when it parses; the link text is the
/// source name, or the URL host when the name is missing. With an
/// unparseable URL the credit degrades to plain text.
fn build_footer(content: &AnalyzedContent) -> ElementNode {
    let mut footer = ElementNode::with_class("footer", "article-footer");

    if content.source_name.is_empty() && content.source_url.is_empty() {
        return footer;
    }

    footer.push_text("Source: ");

    match Url::parse(&content.source_url) {
        Ok(parsed) => {
            let name = if content.source_name.is_empty() {
                parsed.host_str().unwrap_or(content.source_url.as_str()).to_string()
            } else {
                content.source_name.clone()
            };

            let mut link = ElementNode::new("a");
            link.set_attr("href", content.source_url.as_str());
            link.push_text(name);
            footer.push(link);
        }
        Err(_) => {
            let name =
                if content.source_name.is_empty() { content.source_url.as_str() } else { content.source_name.as_str() };
            footer.push_text(name);
        }
    }

    footer
}

/// Convenience function: compose with a one-off composer.
pub fn compose_layout(content: &AnalyzedContent, options: &LayoutOptions) -> Result<ComposedDocument> {
    LayoutComposer::new(options.clone()).compose(content)
}

/// Convenience function: run the whole pipeline, analysis then composition.
pub fn compose_article(
    content: crate::ExtractedContent, num_quotes: usize, options: &LayoutOptions,
) -> Result<ComposedDocument> {
    let analyzed = analyze_content(content, num_quotes)?;
    compose_layout(&analyzed, options)
}
