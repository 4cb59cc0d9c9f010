//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight, LuHeart as Donate,
        LuHouse as Home, LuLayoutGrid as Grid, LuLifeBuoy as Support, LuSettings as Settings,
        LuSlidersHorizontal as Modes,
    };
}

mod bootstrap {
    pub use icondata::{
        BsChevronLeft as ChevronLeft, BsChevronRight as ChevronRight, BsGear as Settings,
        BsGrid as Grid, BsHeartFill as Donate, BsHouseFill as Home, BsLifePreserver as Support,
        BsSliders as Modes,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(HOME, Home);
themed_icon!(GRID, Grid);
themed_icon!(SETTINGS, Settings);
themed_icon!(MODES, Modes);
themed_icon!(SUPPORT, Support);
themed_icon!(DONATE, Donate);
