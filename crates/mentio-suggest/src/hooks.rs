//! Lifecycle hooks fired at session transitions.
//!
//! Hooks fire synchronously inside the host's transaction callback and
//! their completion is never awaited: a newer `on_start`/`on_update`/
//! `on_exit` sequence implies any in-flight work for the previous one is
//! obsolete, and discarding stale results is the UI's responsibility. Hook
//! failures are not caught or suppressed here; they propagate to the host's
//! transaction-handling boundary.

use anyhow::Result;
use mentio_core::{Attrs, TextRange};

use crate::decoration::DecorationId;
use crate::scanner::TriggerMatch;

/// Snapshot of an active session handed to lifecycle hooks.
///
/// Carries the decoration id so the UI can locate the marker and the range
/// so the UI can commit a result through the plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProps {
    pub range: TextRange,
    pub query: String,
    pub text: String,
    pub decoration_id: DecorationId,
}

/// Veto predicate consulted before a candidate match may activate a
/// session. A veto is treated identically to "no match".
pub type AllowCallback = Box<dyn Fn(&TriggerMatch) -> bool + Send + Sync>;

/// Fired when a user directly activates an already-committed mention,
/// e.g. by clicking it.
pub type ActivationCallback = Box<dyn Fn(&Attrs) + Send + Sync>;

/// Host-normalized keyboard event, e.g. `"ArrowDown"`, `"Enter"`, `"Tab"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: String,
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl KeyEvent {
    pub fn key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            shift: false,
            ctrl: false,
            alt: false,
        }
    }
}

/// Lifecycle hook bundle implemented by the suggestion UI.
///
/// All methods default to no-ops so implementers only override what they
/// need. `on_key_down` is queried only while a session is active and
/// returns whether the keypress was consumed, letting a suggestion list
/// intercept navigation keys before the host's default handling.
pub trait SuggestionRenderer {
    fn on_start(&mut self, _props: &SessionProps) -> Result<()> {
        Ok(())
    }

    fn on_update(&mut self, _props: &SessionProps) -> Result<()> {
        Ok(())
    }

    fn on_exit(&mut self, _props: &SessionProps) -> Result<()> {
        Ok(())
    }

    fn on_key_down(&mut self, _event: &KeyEvent, _range: TextRange) -> bool {
        false
    }
}

/// Renderer for hosts that poll the plugin instead of reacting to hooks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRenderer;

impl SuggestionRenderer for NoopRenderer {}
