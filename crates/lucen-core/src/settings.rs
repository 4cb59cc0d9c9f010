//! Runtime settings.
//!
//! Loaded from TOML; every key is optional and falls back to its default.
//!
//! ```toml
//! footer_mode = "reveal"   # interactive | reveal | static
//! hide_threshold = 80.0    # px of scroll-up that hides an interactive footer
//! theme = "rich-neutral"
//! show_donate = true
//! ```

use serde::Deserialize;

use crate::error::SettingsError;
use crate::footer::FooterMode;

/// Default scroll-up distance (px) that hides an interactive footer.
pub const DEFAULT_HIDE_THRESHOLD: f64 = 80.0;

/// Default donate link target.
pub const DEFAULT_DONATE_URL: &str = "https://www.educationalfreedom.uk/donate";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub footer_mode: FooterMode,
    pub hide_threshold: f64,
    /// Theme name applied to the document body
    pub theme: String,
    /// Breadcrumb label when nothing is resolved
    pub hub_label: String,
    pub show_master_fields: bool,
    pub show_settings: bool,
    pub show_modes: bool,
    pub show_support: bool,
    pub show_donate: bool,
    pub donate_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            footer_mode: FooterMode::default(),
            hide_threshold: DEFAULT_HIDE_THRESHOLD,
            theme: "rich-neutral".to_string(),
            hub_label: "Hub".to_string(),
            show_master_fields: true,
            show_settings: true,
            show_modes: true,
            show_support: true,
            show_donate: true,
            donate_url: DEFAULT_DONATE_URL.to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from TOML.
    pub fn from_toml(source: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(source)?;
        if !settings.hide_threshold.is_finite() || settings.hide_threshold < 0.0 {
            return Err(SettingsError::InvalidThreshold(settings.hide_threshold));
        }
        Ok(settings)
    }
}
