//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs. Failures are swallowed:
//! navigation must keep working even where an API is missing.

use web_sys::{ScrollBehavior, ScrollToOptions, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL hash without the '#' prefix, percent-decoded.
pub fn get_hash() -> String {
    let raw = window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
        .trim_start_matches('#')
        .to_string();

    match js_sys::decode_uri_component(&raw) {
        Ok(decoded) => decoded.into(),
        Err(_) => raw,
    }
}

/// Set the URL hash (adds to browser history).
///
/// The hash should include the '#' prefix.
pub fn set_hash(hash: &str) {
    if let Some(window) = window() {
        let _ = window.location().set_hash(hash);
    }
}

// =============================================================================
// Scrolling
// =============================================================================

/// Current vertical scroll offset in pixels (0 when unavailable).
pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Jump to the top of the page without animation.
pub fn scroll_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Instant);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

// =============================================================================
// Document
// =============================================================================

/// Set an attribute on `<body>` (used for the theme hook).
pub fn set_body_attribute(name: &str, value: &str) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.set_attribute(name, value);
    }
}

/// Show a blocking notice.
pub fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}
