//! Error types for the document boundary.

use thiserror::Error;

/// Errors a host may report while servicing a splice request.
///
/// The suggestion core itself has no error path for scanning ("no match" is
/// a normal outcome); malformed offsets supplied by the host are a contract
/// violation on the host's side, not something the core defends against.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    /// A requested offset lies outside the document.
    #[error("offset {offset} out of bounds (document length {len})")]
    OutOfBounds { offset: usize, len: usize },

    /// The host refused or failed to apply the splice.
    #[error("splice rejected: {0}")]
    Splice(String),
}

/// Result type alias for host-boundary operations.
pub type Result<T> = std::result::Result<T, HostError>;
