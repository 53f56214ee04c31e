//! Trigger match scanning.
//!
//! The scanner is a pure function over the flattened text between the start
//! of the current block and the cursor. It has no state and no error path:
//! "no match" is a normal outcome, and false negatives are always preferred
//! over false positives (no session is safer than a wrong session).

use std::sync::LazyLock;

use mentio_core::TextRange;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A matched trigger span.
///
/// Immutable value object, recomputed on every evaluation. `range` holds
/// absolute document offsets; `text` is the full matched text including the
/// trigger character and `query` the text after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerMatch {
    pub range: TextRange,
    pub query: String,
    pub text: String,
}

/// Scanner configuration fixed across evaluations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerPattern {
    /// The character that begins a suggestable span.
    pub trigger: char,
    /// Single-byte stand-in for embedded non-text nodes in the flattened
    /// slice, so they cannot be mistaken for real characters.
    pub placeholder: char,
}

impl Default for TriggerPattern {
    fn default() -> Self {
        Self {
            trigger: '@',
            placeholder: '\0',
        }
    }
}

// Characters a query may consist of: letters including extended Latin
// diacritics, digits, quotes, parentheses, hyphen, and whitespace.
static ALLOWED_QUERY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[a-zA-ZÀ-ÖØ-öø-ÿ0-9'"()\-\s]*$"#).expect("valid regex")
});

// A query must not begin with a comma or whitespace.
static DISALLOWED_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[,\s]").expect("valid regex"));

/// Scan `slice` (the flattened text from block start to cursor) for the
/// trigger occurrence closest to the cursor.
///
/// `block_start` is the absolute offset of the slice's first byte and
/// `cursor` the absolute cursor offset; the match is accepted only if the
/// cursor lies strictly after the match start and at-or-before its end.
pub fn find_trigger_match(
    pattern: &TriggerPattern,
    slice: &str,
    block_start: usize,
    cursor: usize,
) -> Option<TriggerMatch> {
    let candidates = candidate_segments(pattern.trigger, slice);
    tracing::trace!(
        candidates = candidates.len(),
        block_start,
        cursor,
        "scanned trigger candidates"
    );
    // The last candidate is the one closest to the cursor.
    let &(start, mut end) = candidates.last()?;

    // The text after the trigger character must consist of allowed
    // characters and must not begin with a comma or whitespace.
    let after = &slice[start + pattern.trigger.len_utf8()..end];
    if !ALLOWED_QUERY_REGEX.is_match(after) {
        tracing::trace!(start, "rejected: query contains disallowed characters");
        return None;
    }
    if DISALLOWED_PREFIX_REGEX.is_match(after) {
        tracing::trace!(start, "rejected: query begins with comma or whitespace");
        return None;
    }

    // The trigger must be freestanding: preceded by whitespace, a
    // placeholder, or the start of the slice. The matching substrate has no
    // look-behind, so inspect the single preceding character instead.
    if let Some(preceding) = slice[..start].chars().next_back() {
        if !preceding.is_whitespace() && preceding != pattern.placeholder {
            tracing::trace!(start, "rejected: trigger embedded mid-word");
            return None;
        }
    }

    let mut text = slice[start..end].to_string();

    // Boundary whitespace right at the match end followed by another
    // trigger: widen by one character so two adjacent trigger sequences
    // separated by exactly one space do not bleed into each other.
    let mut rest = slice[end..].chars();
    if let (Some(ws), Some(next)) = (rest.next(), rest.next()) {
        if ws.is_whitespace() && next == pattern.trigger {
            text.push(ws);
            end += ws.len_utf8();
        }
    }

    let range = TextRange::new(block_start + start, block_start + end);
    if !range.contains_cursor(cursor) {
        tracing::trace!(?range, cursor, "rejected: cursor outside match");
        return None;
    }

    let query = text[pattern.trigger.len_utf8()..].to_string();
    tracing::trace!(?range, query = %query, "trigger match");
    Some(TriggerMatch { range, query, text })
}

/// Forward scan for candidate trigger segments.
///
/// Each candidate starts at a trigger character and runs until the first
/// position where a whitespace character is immediately followed by another
/// trigger, until a newline, or until the end of the slice. The next search
/// resumes at the previous candidate's end, so candidates never overlap.
/// This emulates the look-ahead `(?=\s<trigger>|$)` the regex engine does
/// not support.
fn candidate_segments(trigger: char, slice: &str) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    let mut search_from = 0;
    while let Some(found) = slice[search_from..].find(trigger) {
        let start = search_from + found;
        let body = &slice[start + trigger.len_utf8()..];
        let mut end = slice.len();
        let mut chars = body.char_indices().peekable();
        while let Some((idx, ch)) = chars.next() {
            let abs = start + trigger.len_utf8() + idx;
            if ch == '\n' {
                end = abs;
                break;
            }
            if ch.is_whitespace() {
                if let Some(&(_, next)) = chars.peek() {
                    if next == trigger {
                        end = abs;
                        break;
                    }
                }
            }
        }
        out.push((start, end));
        search_from = end;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn candidates_split_at_whitespace_before_trigger() {
        assert_eq!(candidate_segments('@', "@a @b"), vec![(0, 2), (3, 5)]);
    }

    #[test]
    fn candidates_stop_at_newline() {
        assert_eq!(candidate_segments('@', "@a\nxx"), vec![(0, 2)]);
    }

    #[test]
    fn candidate_spans_inner_whitespace() {
        // No second trigger, so the candidate runs to the end of the slice.
        assert_eq!(candidate_segments('@', "@john smith"), vec![(0, 11)]);
    }
}
