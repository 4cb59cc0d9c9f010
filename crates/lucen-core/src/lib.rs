//! Navigation core for the Lucen hub.
//!
//! Keeps the visible view, the URL-embedded route and both navigation
//! surfaces consistent:
//! - [`route`] - Route codec between [`NavState`] and `kind|id|...` tokens
//! - [`navigation`] - [`NavigationController`], the single source of truth
//! - [`footer`] - Footer visibility policy driven by scroll/intersection signals
//! - [`view`] - View models for the local nav, card grid and global nav rail
//! - [`settings`] - Runtime configuration loaded from TOML
//!
//! Nothing here touches the DOM; the browser glue lives in the `lucen` binary.

pub mod error;
pub mod footer;
pub mod models;
pub mod navigation;
pub mod route;
pub mod settings;
pub mod view;

pub use error::{RouteError, SettingsError, WorldError};
pub use footer::{FooterMode, FooterPolicy, FooterVisibility};
pub use models::{
    ContentRepository, Field, Level, MasterField, Mini, Module, NavContext, NavState, World,
};
pub use navigation::{ChangeOrigin, NavChange, NavigationController};
pub use settings::Settings;
