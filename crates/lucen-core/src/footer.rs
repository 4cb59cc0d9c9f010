//! Footer visibility policy.
//!
//! Decides whether the global nav rail is shown, from two signals:
//! - whether a sentinel at the bottom of the content intersects the viewport
//! - the window scroll offset
//!
//! | Mode          | Behavior                                                       |
//! |---------------|----------------------------------------------------------------|
//! | `static`      | Always visible; no signals consumed                            |
//! | `reveal`      | Visible exactly while the sentinel intersects                  |
//! | `interactive` | Shown by intersection, hidden only after an intentional scroll-up of at least `hide_threshold` px |
//!
//! The policy is pure state; the browser binding owns the observers and
//! forwards their events here. It never reads or writes navigation state.

use std::fmt;

use serde::Deserialize;

use crate::settings::DEFAULT_HIDE_THRESHOLD;

/// Footer presentation mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterMode {
    Interactive,
    #[default]
    Reveal,
    Static,
}

impl FooterMode {
    /// Next mode in the cycle used by the mode switcher.
    pub fn next(self) -> Self {
        match self {
            Self::Interactive => Self::Reveal,
            Self::Reveal => Self::Static,
            Self::Static => Self::Interactive,
        }
    }

    /// Whether this mode consumes intersection events.
    pub fn observes_sentinel(self) -> bool {
        !matches!(self, Self::Static)
    }

    /// Whether this mode consumes scroll events.
    pub fn observes_scroll(self) -> bool {
        matches!(self, Self::Interactive)
    }
}

impl fmt::Display for FooterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Interactive => "interactive",
            Self::Reveal => "reveal",
            Self::Static => "static",
        })
    }
}

/// Snapshot of the footer's visibility state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FooterVisibility {
    pub visible: bool,
    pub mode: FooterMode,
    /// Last scroll offset seen
    pub last_scroll_y: f64,
    /// Anchor that the interactive hide distance is measured from
    pub last_reveal_scroll_y: f64,
}

impl FooterVisibility {
    fn initial(mode: FooterMode) -> Self {
        Self {
            visible: mode == FooterMode::Static,
            mode,
            last_scroll_y: 0.0,
            last_reveal_scroll_y: 0.0,
        }
    }
}

/// Event-driven footer visibility state machine.
#[derive(Clone, Debug)]
pub struct FooterPolicy {
    state: FooterVisibility,
    hide_threshold: f64,
    sentinel_present: bool,
}

impl FooterPolicy {
    /// Create a policy for `mode`.
    ///
    /// Without a sentinel, `reveal` and `interactive` stay hidden and ignore
    /// every signal; `static` is visible regardless. A threshold that is not a
    /// finite, non-negative distance is replaced by the default.
    pub fn new(mode: FooterMode, hide_threshold: f64, sentinel_present: bool) -> Self {
        let hide_threshold = if hide_threshold.is_finite() && hide_threshold >= 0.0 {
            hide_threshold
        } else {
            tracing::warn!(hide_threshold, "invalid hide threshold, using default");
            DEFAULT_HIDE_THRESHOLD
        };
        Self {
            state: FooterVisibility::initial(mode),
            hide_threshold,
            sentinel_present,
        }
    }

    pub fn state(&self) -> FooterVisibility {
        self.state
    }

    pub fn visible(&self) -> bool {
        self.state.visible
    }

    pub fn mode(&self) -> FooterMode {
        self.state.mode
    }

    /// Whether the policy reacts to signals at all.
    pub fn is_active(&self) -> bool {
        self.state.mode.observes_sentinel() && self.sentinel_present
    }

    /// Switch mode, discarding all scroll bookkeeping.
    ///
    /// Callers must tear down the previous mode's listeners before this and
    /// install the new mode's after it.
    pub fn configure(&mut self, mode: FooterMode) {
        tracing::debug!(from = %self.state.mode, to = %mode, "footer mode");
        self.state = FooterVisibility::initial(mode);
    }

    /// Record whether the sentinel exists; takes effect for later signals.
    pub fn set_sentinel_present(&mut self, present: bool) {
        self.sentinel_present = present;
        if !present && self.state.mode != FooterMode::Static {
            self.state.visible = false;
        }
    }

    /// Sentinel intersection changed. Returns the new visibility.
    pub fn on_intersection(&mut self, intersecting: bool, scroll_y: f64) -> bool {
        if !self.is_active() {
            return self.state.visible;
        }

        match self.state.mode {
            FooterMode::Static => {}
            FooterMode::Reveal => self.state.visible = intersecting,
            FooterMode::Interactive => {
                if intersecting {
                    self.state.visible = true;
                    self.state.last_reveal_scroll_y = scroll_y;
                }
            }
        }
        self.state.last_scroll_y = scroll_y;
        self.state.visible
    }

    /// Window scrolled to `scroll_y`. Returns the new visibility.
    ///
    /// In interactive mode a downward scroll while visible moves the hide
    /// anchor down with it, so only a continuous scroll-up of at least the
    /// threshold hides the footer.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        if !self.is_active() {
            return self.state.visible;
        }

        if self.state.mode == FooterMode::Interactive && self.state.visible {
            if scroll_y >= self.state.last_scroll_y {
                self.state.last_reveal_scroll_y = self.state.last_reveal_scroll_y.max(scroll_y);
            } else if self.state.last_reveal_scroll_y - scroll_y >= self.hide_threshold {
                self.state.visible = false;
            }
        }
        self.state.last_scroll_y = scroll_y;
        self.state.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f64 = 80.0;

    #[test]
    fn test_static_visible_immediately() {
        let policy = FooterPolicy::new(FooterMode::Static, THRESHOLD, true);
        assert!(policy.visible());
    }

    #[test]
    fn test_static_ignores_signals() {
        let mut policy = FooterPolicy::new(FooterMode::Static, THRESHOLD, false);
        assert!(policy.visible());
        assert!(policy.on_intersection(false, 0.0));
        assert!(policy.on_scroll(500.0));
        assert!(policy.on_scroll(0.0));
    }

    #[test]
    fn test_reveal_follows_intersection() {
        let mut policy = FooterPolicy::new(FooterMode::Reveal, THRESHOLD, true);
        assert!(!policy.visible());
        assert!(policy.on_intersection(true, 900.0));
        assert!(!policy.on_intersection(false, 850.0));
        assert!(policy.on_intersection(true, 900.0));
    }

    #[test]
    fn test_reveal_ignores_scroll_direction() {
        let mut policy = FooterPolicy::new(FooterMode::Reveal, THRESHOLD, true);
        policy.on_intersection(true, 900.0);
        assert!(policy.on_scroll(0.0));
    }

    #[test]
    fn test_interactive_hides_after_threshold() {
        let mut policy = FooterPolicy::new(FooterMode::Interactive, THRESHOLD, true);
        assert!(!policy.visible());

        assert!(policy.on_intersection(true, 1000.0));
        assert_eq!(policy.state().last_reveal_scroll_y, 1000.0);

        assert!(policy.on_scroll(970.0));
        assert!(policy.on_intersection(false, 970.0));
        assert!(policy.on_scroll(940.0));
        assert!(!policy.on_scroll(920.0));
    }

    #[test]
    fn test_interactive_downward_scroll_rearms() {
        let mut policy = FooterPolicy::new(FooterMode::Interactive, THRESHOLD, true);
        policy.on_intersection(true, 1000.0);
        policy.on_scroll(950.0);
        policy.on_scroll(1100.0);
        assert_eq!(policy.state().last_reveal_scroll_y, 1100.0);

        // distance is measured from 1100, not from the reveal point
        assert!(!policy.on_scroll(1000.0));
    }

    #[test]
    fn test_interactive_anchor_moves_with_downward_scroll() {
        let mut policy = FooterPolicy::new(FooterMode::Interactive, THRESHOLD, true);
        policy.on_intersection(true, 1000.0);
        policy.on_scroll(1050.0);
        assert!(policy.on_scroll(990.0));
        assert!(!policy.on_scroll(960.0));
    }

    #[test]
    fn test_interactive_reintersect_shows_again() {
        let mut policy = FooterPolicy::new(FooterMode::Interactive, THRESHOLD, true);
        policy.on_intersection(true, 1000.0);
        policy.on_scroll(800.0);
        assert!(!policy.visible());
        assert!(!policy.on_scroll(900.0));
        assert!(policy.on_intersection(true, 1000.0));
    }

    #[test]
    fn test_invalid_threshold_uses_default() {
        for threshold in [f64::NAN, f64::INFINITY, -5.0] {
            let mut policy = FooterPolicy::new(FooterMode::Interactive, threshold, true);
            policy.on_intersection(true, 1000.0);
            assert!(policy.on_scroll(1000.0 - DEFAULT_HIDE_THRESHOLD + 1.0));
            assert!(!policy.on_scroll(0.0), "threshold {threshold}");
        }
    }

    #[test]
    fn test_missing_sentinel_is_inert() {
        let mut policy = FooterPolicy::new(FooterMode::Reveal, THRESHOLD, false);
        assert!(!policy.is_active());
        assert!(!policy.on_intersection(true, 0.0));
        assert!(!policy.on_scroll(100.0));

        let mut policy = FooterPolicy::new(FooterMode::Interactive, THRESHOLD, false);
        assert!(!policy.on_intersection(true, 0.0));
    }

    #[test]
    fn test_configure_resets_state() {
        let mut policy = FooterPolicy::new(FooterMode::Interactive, THRESHOLD, true);
        policy.on_intersection(true, 1000.0);
        policy.on_scroll(1200.0);

        policy.configure(FooterMode::Reveal);
        let state = policy.state();
        assert_eq!(state.mode, FooterMode::Reveal);
        assert!(!state.visible);
        assert_eq!(state.last_scroll_y, 0.0);
        assert_eq!(state.last_reveal_scroll_y, 0.0);

        policy.configure(FooterMode::Static);
        assert!(policy.visible());
    }

    #[test]
    fn test_sentinel_loss_hides() {
        let mut policy = FooterPolicy::new(FooterMode::Reveal, THRESHOLD, true);
        policy.on_intersection(true, 0.0);
        policy.set_sentinel_present(false);
        assert!(!policy.visible());
    }

    #[test]
    fn test_mode_cycle() {
        assert_eq!(FooterMode::Interactive.next(), FooterMode::Reveal);
        assert_eq!(FooterMode::Reveal.next(), FooterMode::Static);
        assert_eq!(FooterMode::Static.next(), FooterMode::Interactive);
        assert!(FooterMode::Interactive.observes_scroll());
        assert!(!FooterMode::Reveal.observes_scroll());
        assert!(!FooterMode::Static.observes_sentinel());
    }
}
