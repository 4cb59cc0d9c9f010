//! Application router component.
//!
//! Handles hash routing with native hashchange events (no leptos_router):
//! the `#kind|id|...` fragment is decoded by the navigation core.
//!
//! # Architecture
//!
//! - **Initial load**: a non-empty hash is applied as-is; otherwise the hub is
//!   entered as a user move, which writes `#core`.
//! - **hashchange events**: back/forward and edited links are applied without
//!   pushing a second history entry.
//! - **Layout is stable**: header, hub and footer stay mounted; only their
//!   contents follow the state signal.

use leptos::prelude::*;
use lucen_core::NavState;
use wasm_bindgen::prelude::Closure;

use super::footer::GlobalNav;
use super::header::LocalNav;
use super::hub::Hub;
use crate::app::AppContext;
use crate::config::FOOTER_SENTINEL_ID;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/router.module.css");

/// Main application router.
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let hash = dom::get_hash();
    if hash.is_empty() {
        ctx.navigate(NavState::Core);
    } else {
        ctx.apply_hash(&hash);
    }

    // Set up hashchange event listener (runs once on mount)
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            ctx.apply_hash(&dom::get_hash());
        }) as Box<dyn Fn()>);

        if let Some(window) = dom::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let sentinel = NodeRef::<leptos::html::Div>::new();

    view! {
        <div class=css::layout>
            <LocalNav />
            <main class=css::main>
                <Hub />
            </main>
            <div id=FOOTER_SENTINEL_ID class=css::sentinel node_ref=sentinel></div>
            <GlobalNav sentinel=sentinel />
        </div>
    }
}
