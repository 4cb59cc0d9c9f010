//! Application configuration.
//!
//! Centralizes UI constants and the assets embedded at compile time with
//! `include_str!`. Runtime-tunable behavior lives in `assets/lucen.toml`
//! and is parsed into [`Settings`].

use lucen_core::{Settings, World};

// =============================================================================
// Embedded Assets
// =============================================================================

/// Runtime settings (footer mode, nav toggles, theme).
pub const SETTINGS_TOML: &str = include_str!("../assets/lucen.toml");

/// Content tree shown by the hub.
pub const WORLD_JSON: &str = include_str!("../assets/world.json");

// =============================================================================
// Local Nav (header)
// =============================================================================

pub const HEADER_TITLE: &str = "Hub – Clarity Movement";

pub const HEADER_SUBTITLE: &str = "Multi-field skeleton • Local Nav within this universe";

// =============================================================================
// Global Nav (footer)
// =============================================================================

pub const FOOTER_TITLE: &str = "Global Nav – Lucen Hub";

pub const FOOTER_SUBTITLE: &str =
    "OS-level rail. Move between Hub, master fields, settings, modes and support.";

/// Element id of the bottom-of-content sentinel watched by the footer.
pub const FOOTER_SENTINEL_ID: &str = "lucen-footer-trigger";

/// Fraction of the sentinel that must be visible to count as intersecting.
pub const REVEAL_INTERSECTION_RATIO: f64 = 0.1;

pub const SUPPORT_NOTICE: &str = "Support and FAQ are not available yet.";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// Loading
// =============================================================================

/// Parse the embedded settings, falling back to defaults.
pub fn load_settings() -> Settings {
    Settings::from_toml(SETTINGS_TOML).unwrap_or_else(|err| {
        tracing::warn!(%err, "using default settings");
        Settings::default()
    })
}

/// Parse the embedded content tree, falling back to an empty hub.
pub fn load_world() -> World {
    World::from_json(WORLD_JSON).unwrap_or_else(|err| {
        tracing::error!(%err, "content tree failed to load");
        World::default()
    })
}
