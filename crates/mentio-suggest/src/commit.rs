//! Commit dispatch: replacing the active trigger span with a mention node.

use mentio_core::{Attrs, DocumentView, EditorHost, HostError, NodeSpec, TextRange};
use thiserror::Error;

/// Errors that can occur while committing a chosen result.
#[derive(Debug, Error)]
pub enum CommitError {
    /// Commit was requested without an active suggestion session.
    #[error("no active suggestion session to commit")]
    NoActiveSession,

    /// The host failed to apply the splice.
    #[error(transparent)]
    Host(#[from] HostError),
}

/// Result type alias for commit operations.
pub type CommitResult<T> = Result<T, CommitError>;

/// Replace `range` with the mention node plus a single trailing space.
///
/// If the node immediately following the range is a text node beginning
/// with whitespace, the replacement end is extended over that character so
/// the pre-existing space is consumed rather than duplicated. Either way,
/// exactly one whitespace character separates the inserted mention from
/// subsequent text. Focus returns to the editing surface after the splice.
pub(crate) fn dispatch(
    doc: &dyn DocumentView,
    host: &mut dyn EditorHost,
    range: TextRange,
    attrs: Attrs,
) -> CommitResult<()> {
    let mut to = range.to;
    if let Some(peek) = doc.node_after(to) {
        if peek.starts_with_whitespace() {
            // Absorb the following space instead of inserting a second one.
            to += peek.text.chars().next().map_or(1, char::len_utf8);
        }
    }

    tracing::debug!(from = range.from, to, "committing mention");
    host.splice(
        TextRange::new(range.from, to),
        vec![NodeSpec::mention(attrs), NodeSpec::text(" ")],
    )?;
    host.focus();
    Ok(())
}
