//! Inline trigger suggestion core
//!
//! Detects an inline trigger pattern (e.g. `@query`) as the user types in a
//! structured text document, tracks the lifecycle of that detection across
//! edits, and exposes hooks so external UI can render suggestions and commit
//! a replacement. The pieces:
//!
//! - `scanner` - pure trigger-match scanning over the text before the cursor
//! - `session` - the session value and transition classification
//! - `plugin` - `SuggestionPlugin`, the per-transaction state machine
//! - `decoration` - stable markers anchoring external UI to the trigger span
//! - `commit` - replacement-span computation and the splice request
//! - `hooks` - the lifecycle hook bundle and activation/veto callbacks
//!
//! The host document model is abstracted behind the `mentio-core`
//! capabilities; see that crate for the boundary contract.

mod commit;
mod decoration;
mod hooks;
mod plugin;
mod scanner;
mod session;

#[cfg(test)]
mod tests;

pub use commit::{CommitError, CommitResult};
pub use decoration::{Decoration, DecorationHandle, DecorationId};
pub use hooks::{
    ActivationCallback, AllowCallback, KeyEvent, NoopRenderer, SessionProps, SuggestionRenderer,
};
pub use plugin::{SuggestionConfig, SuggestionPlugin};
pub use scanner::{TriggerMatch, TriggerPattern, find_trigger_match};
pub use session::{SelectionState, Session, Transition};
