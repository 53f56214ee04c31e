//! Half-open offset ranges in the document's flat text coordinate space.

use serde::{Deserialize, Serialize};

/// A half-open `[from, to)` byte range into the document's flattened text.
///
/// Offsets are measured in bytes of the flattened representation, where
/// every embedded non-text node counts as a single placeholder character.
/// The invariant `from <= to` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TextRange {
    pub from: usize,
    pub to: usize,
}

impl TextRange {
    /// Create a new range. `from` must not exceed `to`.
    pub fn new(from: usize, to: usize) -> Self {
        debug_assert!(from <= to, "range start {from} exceeds end {to}");
        Self { from, to }
    }

    /// An empty range positioned at `offset`.
    pub fn empty(offset: usize) -> Self {
        Self {
            from: offset,
            to: offset,
        }
    }

    pub fn len(&self) -> usize {
        self.to - self.from
    }

    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }

    /// Whether `offset` lies within `[from, to)`.
    pub fn contains(&self, offset: usize) -> bool {
        self.from <= offset && offset < self.to
    }

    /// Whether a cursor at `offset` sits inside the range for the purposes
    /// of trigger matching: strictly after the start and at-or-before the end.
    pub fn contains_cursor(&self, offset: usize) -> bool {
        self.from < offset && offset <= self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn len_and_empty() {
        let range = TextRange::new(3, 7);
        assert_eq!(range.len(), 4);
        assert!(!range.is_empty());
        assert!(TextRange::empty(5).is_empty());
    }

    #[test]
    fn contains_is_half_open() {
        let range = TextRange::new(2, 5);
        assert!(!range.contains(1));
        assert!(range.contains(2));
        assert!(range.contains(4));
        assert!(!range.contains(5));
    }

    #[test]
    fn cursor_containment_is_strict_at_start_and_inclusive_at_end() {
        let range = TextRange::new(2, 5);
        assert!(!range.contains_cursor(2));
        assert!(range.contains_cursor(3));
        assert!(range.contains_cursor(5));
        assert!(!range.contains_cursor(6));
    }
}
