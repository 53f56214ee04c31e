//! Tests for the trigger match scanner

use mentio_core::{DocumentView, FlatDocument, TextRange};
use pretty_assertions::assert_eq;

use super::test_helpers::{attrs, scan};
use crate::{TriggerPattern, find_trigger_match};

#[test]
fn text_without_trigger_never_matches() {
    let doc = FlatDocument::from_text("hello world plain text");
    let pattern = TriggerPattern::default();
    for cursor in 0..=doc.len() {
        let slice = doc.text_between(0, cursor, pattern.placeholder);
        assert_eq!(find_trigger_match(&pattern, &slice, 0, cursor), None);
    }
}

#[test]
fn matches_query_directly_after_trigger() {
    let matched = scan("hello @bob^ ").expect("match");
    assert_eq!(matched.range, TextRange::new(6, 10));
    assert_eq!(matched.query, "bob");
    assert_eq!(matched.text, "@bob");
}

#[test]
fn query_may_span_whitespace() {
    let matched = scan("hello @bob smith^").expect("match");
    assert_eq!(matched.range, TextRange::new(6, 16));
    assert_eq!(matched.query, "bob smith");
}

#[test]
fn adjacent_triggers_do_not_bleed() {
    // Cursor right after @a; the match must not extend into @b.
    let matched = scan("@a^ @b").expect("match");
    assert_eq!(matched.range, TextRange::new(0, 2));
    assert_eq!(matched.text, "@a");
}

#[test]
fn trigger_closest_to_cursor_wins() {
    let matched = scan("@a @b^").expect("match");
    assert_eq!(matched.range, TextRange::new(3, 5));
    assert_eq!(matched.query, "b");
}

#[test]
fn embedded_trigger_is_rejected() {
    assert_eq!(scan("x@bob^"), None);
}

#[test]
fn trigger_after_placeholder_is_freestanding() {
    let mut doc = FlatDocument::new();
    doc.push_mention(attrs("prev"));
    doc.push_text("@bob");

    let pattern = TriggerPattern::default();
    let slice = doc.text_between(0, 5, pattern.placeholder);
    let matched = find_trigger_match(&pattern, &slice, 0, 5).expect("match");
    assert_eq!(matched.range, TextRange::new(1, 5));
    assert_eq!(matched.query, "bob");
}

#[test]
fn bare_trigger_activates_with_empty_query() {
    let matched = scan("hi @^").expect("match");
    assert_eq!(matched.range, TextRange::new(3, 4));
    assert_eq!(matched.query, "");
    assert_eq!(matched.text, "@");
}

#[test]
fn leading_comma_is_rejected() {
    assert_eq!(scan("hi @,b^"), None);
}

#[test]
fn leading_whitespace_is_rejected() {
    assert_eq!(scan("hi @ b^"), None);
}

#[test]
fn disallowed_query_character_is_rejected() {
    assert_eq!(scan("hi @b#c^"), None);
}

#[test]
fn extended_latin_queries_match() {
    let matched = scan("@josé^").expect("match");
    assert_eq!(matched.query, "josé");
    assert_eq!(matched.range, TextRange::new(0, 6));
}

#[test]
fn cursor_before_trigger_does_not_match() {
    assert_eq!(scan("hi ^@bob"), None);
}

#[test]
fn cursor_past_match_end_does_not_match() {
    // The candidate stops at the newline; the cursor is beyond it.
    assert_eq!(scan("@a\nxx^"), None);
}

#[test]
fn offsets_are_absolute_within_later_blocks() {
    let matched = scan("line one\n@bob^").expect("match");
    assert_eq!(matched.range, TextRange::new(9, 13));
    assert_eq!(matched.query, "bob");
}

#[test]
fn custom_trigger_character_is_honored() {
    let pattern = TriggerPattern {
        trigger: '#',
        placeholder: '\0',
    };
    let matched = find_trigger_match(&pattern, "note #tag", 0, 9).expect("match");
    assert_eq!(matched.range, TextRange::new(5, 9));
    assert_eq!(matched.query, "tag");
    assert_eq!(find_trigger_match(&pattern, "note @tag", 0, 9), None);
}
