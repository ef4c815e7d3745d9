//! Owned document tree for composed layouts.
//!
//! The composer never writes through references into the parsed source
//! document; it builds its output from these value nodes instead. Structural
//! equality (`PartialEq`) is the equality that matters downstream — node
//! identity is deliberately not part of the model.

use serde::Serialize;

/// A node in a composed document tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    /// An element with a tag, attributes and children.
    Element(ElementNode),
    /// A run of character data.
    Text { text: String },
}

impl Node {
    /// Creates a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }

    /// Concatenated character data of this node and its descendants.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text { text } => text.clone(),
            Node::Element(el) => el.text_content(),
        }
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text { text } => out.push_str(&escape_text(text)),
            Node::Element(el) => el.write_html(out),
        }
    }
}

/// Elements serialized without a closing tag and never given children.
const VOID_TAGS: &[&str] = &["img", "br", "hr"];

/// An element node: tag name, ordered attributes, child nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementNode {
    /// Lowercase tag name.
    pub tag: String,
    /// Attributes in insertion order.
    pub attrs: Vec<(String, String)>,
    /// Child nodes in document order.
    pub children: Vec<Node>,
}

impl ElementNode {
    /// Creates an empty element.
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into(), attrs: Vec::new(), children: Vec::new() }
    }

    /// Creates an empty element carrying a class attribute.
    pub fn with_class(tag: impl Into<String>, class: impl Into<String>) -> Self {
        let mut el = Self::new(tag);
        el.set_attr("class", class);
        el
    }

    /// Gets an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Sets an attribute, replacing any existing value.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.attrs.iter_mut().find(|(key, _)| *key == name) {
            entry.1 = value;
        } else {
            self.attrs.push((name, value));
        }
    }

    /// Appends a class token, preserving any existing classes.
    pub fn add_class(&mut self, class: &str) {
        match self.attrs.iter_mut().find(|(key, _)| key == "class") {
            Some((_, value)) if !value.is_empty() => {
                value.push(' ');
                value.push_str(class);
            }
            Some((_, value)) => value.push_str(class),
            None => self.attrs.push(("class".to_string(), class.to_string())),
        }
    }

    /// Whether the class attribute contains the given token.
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|value| value.split_whitespace().any(|token| token == class))
            .unwrap_or(false)
    }

    /// Appends a child node.
    pub fn push(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Appends a text child.
    pub fn push_text(&mut self, text: impl Into<String>) {
        self.children.push(Node::text(text));
    }

    /// Concatenated character data of all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// Serializes this subtree to an HTML string.
    ///
    /// Text and attribute values are escaped; void elements (`img`, `br`,
    /// `hr`) are emitted without a closing tag.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }

        for child in &self.children {
            child.write_html(out);
        }

        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

impl From<ElementNode> for Node {
    fn from(el: ElementNode) -> Self {
        Node::Element(el)
    }
}

fn collect_text(children: &[Node], out: &mut String) {
    for child in children {
        match child {
            Node::Text { text } => out.push_str(text),
            Node::Element(el) => collect_text(&el.children, out),
        }
    }
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
