//! Typed node descriptions exchanged with the host.

use serde::{Deserialize, Serialize};

/// Open attribute map carried by a committed mention node.
///
/// The shape is entirely caller-defined; the core forwards it untouched.
pub type Attrs = serde_json::Map<String, serde_json::Value>;

/// A node the core asks the host to insert during a splice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeSpec {
    /// A mention node carrying caller-supplied result attributes.
    Mention(Attrs),
    /// A plain text node.
    Text(String),
}

impl NodeSpec {
    pub fn mention(attrs: Attrs) -> Self {
        Self::Mention(attrs)
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }
}

/// What the document reports for the node immediately following an offset.
///
/// When the offset falls inside a text node, `text` is the remainder of
/// that node's text from the offset onward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePeek {
    pub is_text: bool,
    pub text: String,
}

impl NodePeek {
    /// Whether this is a text node whose text begins with whitespace.
    pub fn starts_with_whitespace(&self) -> bool {
        self.is_text && self.text.chars().next().is_some_and(char::is_whitespace)
    }
}
