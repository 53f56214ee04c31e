//! Decoration projection for active sessions.
//!
//! While a session is active the plugin projects a content-inert marker over
//! its range, tagged with a stable identifier. External UI resolves the
//! marker's on-screen position through the handle's selector; the core never
//! renders anything itself.

use std::fmt;

use mentio_core::TextRange;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Process-locally unique identifier for one active session's marker.
///
/// Generated when a session activates and retained across query changes, so
/// external UI keeps a stable handle to the same marker while the user
/// types. No cryptographic requirement; collision resistance for the
/// lifetime of one session suffices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecorationId(Uuid);

impl DecorationId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for DecorationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Visually inert marker over the active trigger span.
///
/// Regenerated from the current session on every query; adds no content,
/// only an addressable tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    pub id: DecorationId,
    pub range: TextRange,
    /// Element tag the host should render the marker as.
    pub tag: String,
    /// CSS class applied to the marker element.
    pub class: String,
}

impl Decoration {
    pub fn handle(&self) -> DecorationHandle {
        DecorationHandle { id: self.id }
    }
}

/// Addressable handle external UI uses to locate the marker on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecorationHandle {
    pub id: DecorationId,
}

impl DecorationHandle {
    /// CSS selector for the marker element, e.g. to anchor a dropdown.
    pub fn selector(&self) -> String {
        format!("[data-decoration-id=\"{}\"]", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_per_generation() {
        assert_ne!(DecorationId::generate(), DecorationId::generate());
    }

    #[test]
    fn selector_embeds_the_id() {
        let id = DecorationId::generate();
        let handle = DecorationHandle { id };
        assert_eq!(handle.selector(), format!("[data-decoration-id=\"{id}\"]"));
    }
}
