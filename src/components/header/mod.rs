//! Local nav (header) component.
//!
//! Contextual navigation for the current position: a back button that
//! ascends one level, the breadcrumb line and the toolbar pills.

use leptos::prelude::*;
use leptos_icons::Icon;
use lucen_core::view::{self, NavItem};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{HEADER_SUBTITLE, HEADER_TITLE};

stylance::import_crate_style!(css, "src/components/header/header.module.css");

/// Header with back button, breadcrumb and toolbar.
#[component]
pub fn LocalNav() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let hub_label = ctx.settings.with_value(|s| s.hub_label.clone());

    let model = Memo::new(move |_| {
        let state = ctx.state.get();
        ctx.world
            .with_value(|world| view::local_nav(world, &state, &hub_label))
    });

    view! {
        <header class=css::shell>
            <div class=css::header>
                <div class=css::topRow>
                    <Show when=move || model.with(|m| m.show_up)>
                        <button
                            type="button"
                            class=css::back
                            on:click=move |_| ctx.ascend()
                        >
                            <Icon icon=ic::CHEVRON_LEFT />
                            <span>"Back"</span>
                        </button>
                    </Show>
                    <div class=css::top>
                        <div class=css::title>{HEADER_TITLE}</div>
                        <div class=css::sub>{HEADER_SUBTITLE}</div>
                        <div class=css::pos>{move || model.with(|m| m.breadcrumb.to_string())}</div>
                    </div>
                </div>
                <nav class=css::toolbar>
                    {move || {
                        model
                            .get()
                            .items
                            .into_iter()
                            .map(|item| view! { <ToolbarPill item=item /> })
                            .collect_view()
                    }}
                </nav>
            </div>
        </header>
    }
}

/// Single toolbar pill bound to its navigation target.
#[component]
fn ToolbarPill(item: NavItem) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let NavItem {
        label,
        active,
        target,
    } = item;

    let class = if active {
        format!("{} {}", css::pill, css::pillActive)
    } else {
        css::pill.to_string()
    };

    view! {
        <button
            type="button"
            class=class
            on:click=move |_| ctx.navigate(target.clone())
        >
            {label}
        </button>
    }
}
