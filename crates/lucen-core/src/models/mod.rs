//! Data models for hub navigation.
//!
//! - [`Level`] - Depth in the content hierarchy
//! - [`NavState`] - Current navigation position (what the route encodes)
//! - [`World`], [`ContentRepository`] - Read-only content tree
//! - [`NavContext`] - Entities resolved from a [`NavState`]

mod context;
mod level;
mod nav_state;
mod world;

pub use context::NavContext;
pub use level::Level;
pub use nav_state::NavState;
pub use world::{ContentRepository, Field, MasterField, Mini, Module, World};
