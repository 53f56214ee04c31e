//! Suggestion core tests
//!
//! Organized by category:
//! - test_helpers: Common fixtures (cursor-marker documents, recording renderer)
//! - test_trigger_detection: Tests for the trigger match scanner
//! - test_session_lifecycle: Tests for session transitions and hook dispatch
//! - test_decorations: Tests for marker projection and handles
//! - test_commit: Tests for commit dispatch and whitespace absorption


#[cfg(test)]
mod test_trigger_detection;
