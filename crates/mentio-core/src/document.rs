//! Host document capabilities and a flat reference implementation.
//!
//! The suggestion core never touches the host's document tree directly. It
//! consumes two capabilities:
//!
//! - [`DocumentView`] - read side: flatten structured content to text (with a
//!   placeholder standing in for non-text nodes) and peek at the node after
//!   an offset.
//! - [`EditorHost`] - write side: apply a typed splice at an offset range and
//!   restore focus to the editing surface.
//!
//! [`FlatDocument`] implements both on top of a segment list and backs every
//! test in the workspace; hosts with a real document tree adapt their own
//! model instead.

use crate::error::{HostError, Result};
use crate::node::{Attrs, NodePeek, NodeSpec};
use crate::range::TextRange;

/// Read-side capability of the host document.
///
/// All offsets are byte offsets into the flattened text, where each
/// embedded non-text node occupies exactly one (single-byte) placeholder
/// character, so flattened offsets line up with document offsets.
pub trait DocumentView {
    /// Total length of the flattened document.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Offset of the start of the block enclosing `offset`, or 0 when the
    /// offset sits at the topmost structural level.
    fn block_start(&self, offset: usize) -> usize;

    /// Flatten `[from, to)` to text, substituting `placeholder` for every
    /// embedded non-text node.
    fn text_between(&self, from: usize, to: usize, placeholder: char) -> String;

    /// Peek at the node immediately following `offset`, or `None` at the
    /// end of the document.
    fn node_after(&self, offset: usize) -> Option<NodePeek>;
}

/// Write-side capability of the host editing surface.
pub trait EditorHost {
    /// Replace `range` with `nodes`, in order.
    fn splice(&mut self, range: TextRange, nodes: Vec<NodeSpec>) -> Result<()>;

    /// Return focus to the editing surface.
    fn focus(&mut self);
}

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Text(String),
    Mention(Attrs),
}

impl Segment {
    fn width(&self) -> usize {
        match self {
            Segment::Text(text) => text.len(),
            // One placeholder character in the flat coordinate space.
            Segment::Mention(_) => 1,
        }
    }
}

/// Segment-backed in-memory document implementing both host capabilities.
///
/// Blocks are newline-separated: `block_start` is the offset just past the
/// last newline before the cursor. Mentions flatten to one placeholder
/// character and can only be spliced out whole.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatDocument {
    segments: Vec<Segment>,
    focused: bool,
}

impl FlatDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        let mut doc = Self::new();
        doc.push_text(text);
        doc
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        if let Some(Segment::Text(last)) = self.segments.last_mut() {
            last.push_str(&text);
        } else {
            self.segments.push(Segment::Text(text));
        }
    }

    pub fn push_mention(&mut self, attrs: Attrs) {
        self.segments.push(Segment::Mention(attrs));
    }

    /// The whole document flattened with `placeholder` for mentions.
    pub fn text(&self, placeholder: char) -> String {
        self.text_between(0, self.len(), placeholder)
    }

    /// Attributes of every mention node, in document order.
    pub fn mentions(&self) -> Vec<&Attrs> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Mention(attrs) => Some(attrs),
                Segment::Text(_) => None,
            })
            .collect()
    }

    /// Whether the editing surface currently holds focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Segments overlapping `[from, to)`, clipped to the range. Mentions are
    /// atomic: a range overlapping a mention always covers it entirely.
    fn cut(&self, from: usize, to: usize) -> Vec<Segment> {
        let mut out = Vec::new();
        let mut offset = 0;
        for segment in &self.segments {
            let start = offset;
            let end = start + segment.width();
            offset = end;
            if end <= from || start >= to {
                continue;
            }
            match segment {
                Segment::Text(text) => {
                    let lo = from.max(start) - start;
                    let hi = to.min(end) - start;
                    out.push(Segment::Text(text[lo..hi].to_string()));
                }
                Segment::Mention(attrs) => out.push(Segment::Mention(attrs.clone())),
            }
        }
        out
    }

    fn normalize(segments: Vec<Segment>) -> Vec<Segment> {
        let mut out: Vec<Segment> = Vec::with_capacity(segments.len());
        for segment in segments {
            match segment {
                Segment::Text(text) if text.is_empty() => {}
                Segment::Text(text) => {
                    if let Some(Segment::Text(last)) = out.last_mut() {
                        last.push_str(&text);
                    } else {
                        out.push(Segment::Text(text));
                    }
                }
                mention => out.push(mention),
            }
        }
        out
    }
}

impl DocumentView for FlatDocument {
    fn len(&self) -> usize {
        self.segments.iter().map(Segment::width).sum()
    }

    fn block_start(&self, offset: usize) -> usize {
        let before = self.text_between(0, offset.min(self.len()), '\0');
        before.rfind('\n').map_or(0, |idx| idx + 1)
    }

    fn text_between(&self, from: usize, to: usize, placeholder: char) -> String {
        let mut out = String::new();
        let mut offset = 0;
        for segment in &self.segments {
            let start = offset;
            let end = start + segment.width();
            offset = end;
            if end <= from || start >= to {
                continue;
            }
            match segment {
                Segment::Text(text) => {
                    let lo = from.max(start) - start;
                    let hi = to.min(end) - start;
                    out.push_str(&text[lo..hi]);
                }
                Segment::Mention(_) => out.push(placeholder),
            }
        }
        out
    }

    fn node_after(&self, offset: usize) -> Option<NodePeek> {
        let mut start = 0;
        for segment in &self.segments {
            let end = start + segment.width();
            if offset < end {
                return Some(match segment {
                    Segment::Text(text) => NodePeek {
                        is_text: true,
                        text: text[offset - start..].to_string(),
                    },
                    Segment::Mention(_) => NodePeek {
                        is_text: false,
                        text: String::new(),
                    },
                });
            }
            start = end;
        }
        None
    }
}

impl EditorHost for FlatDocument {
    fn splice(&mut self, range: TextRange, nodes: Vec<NodeSpec>) -> Result<()> {
        let len = self.len();
        if range.to > len {
            return Err(HostError::OutOfBounds {
                offset: range.to,
                len,
            });
        }

        let mut segments = self.cut(0, range.from);
        for node in nodes {
            segments.push(match node {
                NodeSpec::Mention(attrs) => Segment::Mention(attrs),
                NodeSpec::Text(text) => Segment::Text(text),
            });
        }
        segments.extend(self.cut(range.to, len));
        self.segments = Self::normalize(segments);
        Ok(())
    }

    fn focus(&mut self) {
        self.focused = true;
    }
}
