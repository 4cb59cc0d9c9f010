//! Browser utilities.
//!
//! - [`dom`] - Window, hash, scroll and body helpers

pub mod dom;
