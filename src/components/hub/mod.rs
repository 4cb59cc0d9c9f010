//! Hub view component.
//!
//! Card grid for the current level. Module cards also list their
//! mini-modules as clickable rows.

use leptos::prelude::*;
use leptos_icons::Icon;
use lucen_core::view::{self, Card, MiniRow};

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/hub/hub.module.css");

/// Main content area.
#[component]
pub fn Hub() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let cards = Memo::new(move |_| {
        let state = ctx.state.get();
        ctx.world.with_value(|world| view::cards(world, &state))
    });

    view! {
        <div class=css::view>
            <div class=css::grid>
                {move || {
                    cards
                        .get()
                        .into_iter()
                        .map(|card| view! { <CardView card=card /> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn CardView(card: Card) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let Card {
        title,
        summary,
        meta,
        action_label,
        target,
        minis,
    } = card;

    view! {
        <article class=css::card>
            <div class=css::cardTitle>{title}</div>
            <div class=css::cardSummary>{summary}</div>
            <div class=css::cardMeta>{meta}</div>
            <button
                type="button"
                class=css::cardButton
                on:click=move |_| ctx.navigate(target.clone())
            >
                {action_label}
            </button>
            {(!minis.is_empty()).then(|| view! {
                <div class=css::miniList>
                    {minis
                        .into_iter()
                        .map(|row| view! { <MiniItem row=row /> })
                        .collect_view()}
                </div>
            })}
        </article>
    }
}

/// Clickable mini-module row.
#[component]
fn MiniItem(row: MiniRow) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let MiniRow { name, body, target } = row;

    view! {
        <div class=css::miniItem on:click=move |_| ctx.navigate(target.clone())>
            <div class=css::miniName>{name}</div>
            <div class=css::miniBody>{body}</div>
            <span class=css::miniChevron><Icon icon=ic::CHEVRON_RIGHT /></span>
        </div>
    }
}
