//! UI components built with Leptos.
//!
//! - [`router`] - Hash routing and page layout (main entry point)
//! - [`header`] - Local nav: back button, breadcrumb, toolbar pills
//! - [`hub`] - Card grid for the current level
//! - [`footer`] - Global nav rail and its visibility binding
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod footer;
pub mod header;
pub mod hub;
pub mod icons;
pub mod router;

pub use router::AppRouter;
