//! Error types for the navigation core.
//!
//! - [`RouteError`] - Malformed route tokens (always recovered to the hub)
//! - [`WorldError`] - Content tree loading and validation
//! - [`SettingsError`] - Configuration parsing

use thiserror::Error;

use crate::models::Level;

/// Reasons a route token was rejected by the strict parser.
///
/// [`crate::route::decode`] never surfaces these; it falls back to the hub.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// First segment is not a known level tag
    #[error("unknown route kind: {0:?}")]
    UnknownKind(String),
    /// Fewer segments than the kind requires
    #[error("route kind `{kind}` needs {expected} segments, found {found}")]
    MissingSegments {
        kind: Level,
        expected: usize,
        found: usize,
    },
}

/// Content tree errors.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("invalid world data: {0}")]
    Json(#[from] serde_json::Error),
    /// Two siblings share an id
    #[error("duplicate id {id:?} in {scope}")]
    DuplicateId { scope: String, id: String },
    /// Id contains the route separator and could not be linked to
    #[error("id {id:?} in {scope} contains the route separator")]
    InvalidId { scope: String, id: String },
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid settings: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("hide threshold must be a finite, non-negative pixel distance (got {0})")]
    InvalidThreshold(f64),
}
