//! Suggestion session state and transition classification.
//!
//! A [`Session`] is the state machine's current belief about an in-progress
//! trigger span. Exactly one exists per plugin instance; it is replaced
//! wholesale on every transaction, never mutated in place, so there is a
//! single writer and no torn state.

use mentio_core::TextRange;

use crate::decoration::DecorationId;
use crate::hooks::SessionProps;
use crate::scanner::TriggerMatch;

/// The state machine's record of whether a trigger span is being edited.
///
/// Invariants: `range.from <= range.to`; `decoration_id` is `Some` if and
/// only if `active`; a session is active only while the cursor sits strictly
/// inside a matched trigger span.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub active: bool,
    pub range: TextRange,
    pub query: String,
    pub text: String,
    /// Stable handle to the session's visual marker, generated when the
    /// session activates and retained until it deactivates.
    pub decoration_id: Option<DecorationId>,
}

impl Session {
    /// The inactive session every editor starts with.
    pub fn inactive() -> Self {
        Self::default()
    }

    pub(crate) fn activated(matched: TriggerMatch, decoration_id: DecorationId) -> Self {
        Self {
            active: true,
            range: matched.range,
            query: matched.query,
            text: matched.text,
            decoration_id: Some(decoration_id),
        }
    }

    /// Snapshot handed to lifecycle hooks; `None` while inactive.
    pub fn props(&self) -> Option<SessionProps> {
        let decoration_id = self.decoration_id?;
        self.active.then(|| SessionProps {
            range: self.range,
            query: self.query.clone(),
            text: self.text.clone(),
            decoration_id,
        })
    }
}

/// Selection state the host reports with every transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    /// Absolute cursor offset (the selection head).
    pub cursor: usize,
    /// Whether the selection is an empty, non-ranged cursor.
    pub collapsed: bool,
    /// Whether an input-method composition is in progress.
    pub composing: bool,
}

impl SelectionState {
    /// A collapsed cursor at `offset`.
    pub fn cursor_at(offset: usize) -> Self {
        Self {
            cursor: offset,
            collapsed: true,
            composing: false,
        }
    }

    /// A mid-composition selection at `offset`.
    pub fn composing_at(offset: usize) -> Self {
        Self {
            cursor: offset,
            collapsed: false,
            composing: true,
        }
    }

    /// A ranged (non-collapsed) selection with its head at `offset`.
    pub fn ranged_at(offset: usize) -> Self {
        Self {
            cursor: offset,
            collapsed: false,
            composing: false,
        }
    }
}

/// Classified change between the previous and the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Previous inactive, new active.
    Started,
    /// Both active but anchored at a different trigger occurrence; treated
    /// as an implicit exit of the old session plus a start of the new one.
    Moved,
    /// Previous active, new inactive.
    Stopped,
    /// Both active at the same occurrence with different query text.
    Changed,
    /// Nothing above applies; no lifecycle hook fires.
    None,
}

impl Transition {
    /// Classify in priority order: started, moved, stopped, changed, none.
    pub fn classify(prev: &Session, next: &Session) -> Self {
        match (prev.active, next.active) {
            (false, true) => Transition::Started,
            (true, true) if prev.range.from != next.range.from => Transition::Moved,
            (true, false) => Transition::Stopped,
            (true, true) if prev.query != next.query => Transition::Changed,
            _ => Transition::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn active(from: usize, query: &str) -> Session {
        Session::activated(
            TriggerMatch {
                range: TextRange::new(from, from + 1 + query.len()),
                query: query.to_string(),
                text: format!("@{query}"),
            },
            DecorationId::generate(),
        )
    }

    #[test]
    fn classification_priority() {
        let inactive = Session::inactive();
        let at_zero = active(0, "a");
        let at_zero_changed = active(0, "ab");
        let at_five = active(5, "a");

        assert_eq!(
            Transition::classify(&inactive, &at_zero),
            Transition::Started
        );
        assert_eq!(Transition::classify(&at_zero, &at_five), Transition::Moved);
        assert_eq!(
            Transition::classify(&at_zero, &inactive),
            Transition::Stopped
        );
        assert_eq!(
            Transition::classify(&at_zero, &at_zero_changed),
            Transition::Changed
        );
        assert_eq!(
            Transition::classify(&inactive, &inactive),
            Transition::None
        );
    }

    #[test]
    fn same_query_same_position_is_none() {
        let a = active(3, "bo");
        let b = active(3, "bo");
        assert_eq!(Transition::classify(&a, &b), Transition::None);
    }

    #[test]
    fn inactive_session_has_no_props() {
        assert_eq!(Session::inactive().props(), None);
        assert!(active(0, "x").props().is_some());
    }
}
