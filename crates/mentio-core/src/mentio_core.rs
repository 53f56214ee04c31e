//! Mentio Core - document-model boundary for the suggestion engine
//!
//! This crate defines the contract between the suggestion core and whatever
//! document/editing framework hosts it:
//!
//! - `TextRange` - half-open offsets into the document's flat text coordinate space
//! - `NodeSpec` - the typed nodes a splice inserts
//! - `DocumentView` / `EditorHost` - the two consumed capabilities
//!   ("flatten structured content to text" and "apply a typed splice")
//! - `FlatDocument` - a segment-backed reference document for plain-text
//!   hosts and tests
//!
//! Any document model exposing these two capabilities can back the core.

mod document;
mod error;
mod node;
mod range;

pub use document::{DocumentView, EditorHost, FlatDocument};
pub use error::{HostError, Result};
pub use node::{Attrs, NodePeek, NodeSpec};
pub use range::TextRange;
