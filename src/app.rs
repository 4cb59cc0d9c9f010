//! Root application module.
//!
//! Contains the main App component, AppContext definition and the wiring
//! between the navigation controller and Leptos signals.

use std::sync::Arc;

use leptos::prelude::*;
use lucen_core::{FooterMode, NavState, NavigationController, Settings, World};

use crate::components::AppRouter;
use crate::config;
use crate::utils::dom;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed with
/// `use_context::<AppContext>()`.
///
/// # Architecture
///
/// - **Controller is the source of truth**: every move goes through
///   [`NavigationController`]; its change notifications mirror the new state
///   into the `state` signal, push the URL hash and reset the scroll.
/// - **Footer mode is independent**: it never reads or writes navigation state.
///
/// # Note
///
/// This struct is `Copy` because all fields are arena handles.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Navigation state machine (not `Send`, so held in local storage).
    pub nav: StoredValue<NavigationController<Arc<World>>, LocalStorage>,
    /// Current navigation state, for rendering.
    pub state: RwSignal<NavState>,
    /// Read-only content tree.
    pub world: StoredValue<Arc<World>>,
    pub settings: StoredValue<Settings>,
    /// Active footer visibility mode.
    pub footer_mode: RwSignal<FooterMode>,
}

impl AppContext {
    /// Creates the context positioned at the hub.
    pub fn new(world: World, settings: Settings) -> Self {
        let world = Arc::new(world);
        let state = RwSignal::new(NavState::Core);
        let footer_mode = RwSignal::new(settings.footer_mode);

        let mut nav = NavigationController::new(Arc::clone(&world));
        nav.subscribe(move |change| {
            if let Some(hash) = change.route_to_push()
                && hash.trim_start_matches('#') != dom::get_hash()
            {
                dom::set_hash(&hash);
            }
            if change.resets_scroll() {
                dom::scroll_to_top();
            }
            if !change.is_noop() {
                state.set(change.current.clone());
            }
        });

        Self {
            nav: StoredValue::new_local(nav),
            state,
            world: StoredValue::new(world),
            settings: StoredValue::new(settings),
            footer_mode,
        }
    }

    /// Jump to a target chosen in the UI.
    pub fn navigate(&self, target: NavState) {
        self.nav.update_value(|nav| {
            nav.go_to(target);
        });
    }

    /// Step one level toward the hub.
    pub fn ascend(&self) {
        self.nav.update_value(|nav| {
            nav.ascend_one();
        });
    }

    /// Adopt the route in the address bar without pushing it again.
    pub fn apply_hash(&self, hash: &str) {
        self.nav.update_value(|nav| {
            nav.apply_hash(hash);
        });
    }

    /// Advance the footer to its next visibility mode.
    pub fn cycle_footer_mode(&self) {
        self.footer_mode.update(|mode| *mode = mode.next());
    }
}

/// Root application component.
///
/// This component:
/// - Loads settings and the content tree from embedded assets
/// - Creates and provides the global AppContext
/// - Applies the configured theme to the document body
/// - Renders the router
#[component]
pub fn App() -> impl IntoView {
    let settings = config::load_settings();
    dom::set_body_attribute("data-theme", &settings.theme);

    let ctx = AppContext::new(config::load_world(), settings);
    provide_context(ctx);

    view! { <AppRouter /> }
}
