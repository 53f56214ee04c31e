//! The suggestion plugin: per-transaction session updates and hook dispatch.
//!
//! All work happens synchronously inside the host's per-transaction update
//! callback. The plugin owns its [`Session`] exclusively and replaces it
//! wholesale on every transaction; there is no background work and no
//! shared mutation.

use mentio_core::{Attrs, DocumentView, EditorHost};

use crate::commit::{self, CommitError, CommitResult};
use crate::decoration::{Decoration, DecorationHandle, DecorationId};
use crate::hooks::{ActivationCallback, AllowCallback, KeyEvent, SuggestionRenderer};
use crate::scanner::{self, TriggerPattern};
use crate::session::{SelectionState, Session, Transition};

/// Recognized plugin options.
pub struct SuggestionConfig {
    /// The character that begins a suggestable span.
    pub trigger: char,
    /// Single-byte stand-in for non-text nodes in flattened text.
    pub placeholder: char,
    /// Element tag the host should render the marker as.
    pub decoration_tag: String,
    /// CSS class applied to the marker element.
    pub decoration_class: String,
    /// Veto hook: may reject a candidate match before a session exists.
    pub allow: Option<AllowCallback>,
    /// Fired when a user directly activates a committed mention.
    pub on_activation: Option<ActivationCallback>,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            trigger: '@',
            placeholder: '\0',
            decoration_tag: "span".to_string(),
            decoration_class: "suggestion".to_string(),
            allow: None,
            on_activation: None,
        }
    }
}

impl SuggestionConfig {
    fn pattern(&self) -> TriggerPattern {
        TriggerPattern {
            trigger: self.trigger,
            placeholder: self.placeholder,
        }
    }
}

/// Per-editor suggestion state machine.
///
/// One instance exists per editor view. The host invokes [`apply`] once per
/// committed document/selection change; the plugin re-runs the scanner,
/// classifies the transition against the previous session, and fires the
/// renderer's lifecycle hooks.
///
/// [`apply`]: SuggestionPlugin::apply
pub struct SuggestionPlugin {
    config: SuggestionConfig,
    renderer: Box<dyn SuggestionRenderer>,
    session: Session,
}

impl SuggestionPlugin {
    /// Create a plugin with an inactive session.
    pub fn new(config: SuggestionConfig, renderer: Box<dyn SuggestionRenderer>) -> Self {
        Self {
            config,
            renderer,
            session: Session::inactive(),
        }
    }

    pub fn config(&self) -> &SuggestionConfig {
        &self.config
    }

    /// The current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Process one committed document/selection change.
    ///
    /// Replaces the session, then fires lifecycle hooks for the classified
    /// transition: `Started` fires `on_start`, `Changed` fires `on_update`,
    /// `Stopped` fires `on_exit`, and `Moved` fires `on_exit` with the old
    /// session's data followed by `on_start` with the new session's data.
    /// Hook errors propagate to the caller; the next transaction recomputes
    /// everything from current state, which is the recovery mechanism.
    pub fn apply(
        &mut self,
        doc: &dyn DocumentView,
        selection: &SelectionState,
    ) -> anyhow::Result<Transition> {
        let next = self.next_session(doc, selection);
        let transition = Transition::classify(&self.session, &next);
        let prev = std::mem::replace(&mut self.session, next);

        if transition != Transition::None {
            tracing::debug!(
                ?transition,
                range = ?self.session.range,
                query = %self.session.query,
                "session transition"
            );
        }

        match transition {
            Transition::Started => {
                if let Some(props) = self.session.props() {
                    self.renderer.on_start(&props)?;
                }
            }
            Transition::Changed => {
                if let Some(props) = self.session.props() {
                    self.renderer.on_update(&props)?;
                }
            }
            Transition::Stopped => {
                if let Some(props) = prev.props() {
                    self.renderer.on_exit(&props)?;
                }
            }
            Transition::Moved => {
                // An implicit exit of the old session, then an implicit
                // start of the new one, in that order.
                if let Some(props) = prev.props() {
                    self.renderer.on_exit(&props)?;
                }
                if let Some(props) = self.session.props() {
                    self.renderer.on_start(&props)?;
                }
            }
            Transition::None => {}
        }

        Ok(transition)
    }

    /// Re-run the scanner against the current document and selection.
    ///
    /// The scanner only runs for a collapsed cursor or while an input
    /// composition is in progress, so partially-composed characters still
    /// produce live matches before they are finalized.
    fn next_session(&self, doc: &dyn DocumentView, selection: &SelectionState) -> Session {
        if !selection.collapsed && !selection.composing {
            return Session::inactive();
        }

        let cursor = selection.cursor;
        let block_start = doc.block_start(cursor);
        let slice = doc.text_between(block_start, cursor, self.config.placeholder);
        let Some(matched) =
            scanner::find_trigger_match(&self.config.pattern(), &slice, block_start, cursor)
        else {
            return Session::inactive();
        };

        if let Some(allow) = &self.config.allow {
            if !allow(&matched) {
                tracing::trace!(range = ?matched.range, "activation vetoed");
                return Session::inactive();
            }
        }

        // The decoration id is the one field carried forward across
        // consecutive active states at the same occurrence; a move is an
        // implicit new session and gets a fresh id.
        let decoration_id = match self.session.decoration_id {
            Some(id) if self.session.active && self.session.range.from == matched.range.from => id,
            _ => DecorationId::generate(),
        };

        Session::activated(matched, decoration_id)
    }

    /// Project the active session's marker, or `None` while inactive.
    pub fn decoration(&self) -> Option<Decoration> {
        let id = self.session.decoration_id.filter(|_| self.session.active)?;
        Some(Decoration {
            id,
            range: self.session.range,
            tag: self.config.decoration_tag.clone(),
            class: self.config.decoration_class.clone(),
        })
    }

    /// Handle external UI uses to locate the marker, or `None` while
    /// inactive.
    pub fn decoration_handle(&self) -> Option<DecorationHandle> {
        self.decoration().map(|decoration| decoration.handle())
    }

    /// Offer a keypress to the suggestion UI. Returns whether it was
    /// consumed; always `false` while no session is active.
    pub fn handle_key_down(&mut self, event: &KeyEvent) -> bool {
        if !self.session.active {
            return false;
        }
        self.renderer.on_key_down(event, self.session.range)
    }

    /// Commit a chosen result into the current session's range.
    ///
    /// The session itself is left untouched; the host's next transaction
    /// (carrying the spliced document) deactivates it through [`apply`].
    ///
    /// [`apply`]: SuggestionPlugin::apply
    pub fn commit(
        &self,
        doc: &dyn DocumentView,
        host: &mut dyn EditorHost,
        attrs: Attrs,
    ) -> CommitResult<()> {
        if !self.session.active {
            return Err(CommitError::NoActiveSession);
        }
        commit::dispatch(doc, host, self.session.range, attrs)
    }

    /// Notify the plugin that a committed mention was directly activated
    /// (e.g. clicked).
    pub fn activate(&self, attrs: &Attrs) {
        if let Some(on_activation) = &self.config.on_activation {
            on_activation(attrs);
        }
    }
}
