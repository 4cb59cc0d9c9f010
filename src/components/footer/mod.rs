//! Global nav (footer rail) component.
//!
//! OS-level rail with movement, system and external rows. Its visibility is
//! driven by [`reveal::FooterReveal`] according to the active footer mode.

mod reveal;

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;
use lucen_core::FooterMode;
use lucen_core::view::{self, FooterAction, FooterButton, RailEntry};

use self::reveal::FooterReveal;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{FOOTER_SUBTITLE, FOOTER_TITLE, SUPPORT_NOTICE};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/footer/footer.module.css");

/// Footer rail.
///
/// # Props
/// - `sentinel`: Bottom-of-content marker; the footer stays hidden in
///   reveal/interactive modes until it is mounted.
#[component]
pub fn GlobalNav(sentinel: NodeRef<leptos::html::Div>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let rows = ctx.settings.with_value(view::global_nav);

    let visible = RwSignal::new(false);
    let hide_threshold = ctx.settings.with_value(|s| s.hide_threshold);
    let reveal = StoredValue::new_local(FooterReveal::new(
        ctx.footer_mode.get_untracked(),
        hide_threshold,
        visible,
    ));

    // Re-bind whenever the mode changes or the sentinel mounts
    Effect::new(move || {
        let mode = ctx.footer_mode.get();
        let sentinel = sentinel.get().map(web_sys::Element::from);
        reveal.update_value(|r| r.configure(mode, sentinel));
    });

    let shell_class = move || {
        let mut class = css::shell.to_string();
        if visible.get() {
            class.push(' ');
            class.push_str(css::visible);
        }
        if ctx.footer_mode.get() == FooterMode::Static {
            class.push(' ');
            class.push_str(css::shellStatic);
        }
        class
    };

    view! {
        <footer class=shell_class>
            <div class=css::footer>
                <div class=css::title>{FOOTER_TITLE}</div>
                <div class=css::sub>{FOOTER_SUBTITLE}</div>
                <div class=css::rows>
                    {rows
                        .into_iter()
                        .filter(|row| !row.is_empty())
                        .map(|row| view! {
                            <div class=css::row>
                                {row
                                    .into_iter()
                                    .map(|button| view! { <RailButton button=button /> })
                                    .collect_view()}
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}

fn icon_for(entry: RailEntry) -> IconData {
    match entry {
        RailEntry::Hub => ic::HOME,
        RailEntry::MasterFields => ic::GRID,
        RailEntry::Settings => ic::SETTINGS,
        RailEntry::Modes => ic::MODES,
        RailEntry::Support => ic::SUPPORT,
        RailEntry::Donate => ic::DONATE,
    }
}

/// Single rail entry: a button, or an external link for donations.
#[component]
fn RailButton(button: FooterButton) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let FooterButton {
        entry,
        label,
        action,
    } = button;
    let icon = icon_for(entry);

    if let FooterAction::Link(href) = action {
        return view! {
            <a
                href=href
                target="_blank"
                rel="noopener noreferrer"
                class=format!("{} {}", css::link, css::donate)
            >
                <Icon icon=icon />
                <span>{label}</span>
            </a>
        }
        .into_any();
    }

    let on_click = move |_: leptos::ev::MouseEvent| match &action {
        FooterAction::Navigate(target) => ctx.navigate(target.clone()),
        FooterAction::CycleMode => ctx.cycle_footer_mode(),
        FooterAction::Settings => {
            let theme = ctx.settings.with_value(|s| s.theme.clone());
            let mode = ctx.footer_mode.get_untracked();
            dom::alert(&format!("Theme: {theme}\nFooter mode: {mode}"));
        }
        FooterAction::Support => dom::alert(SUPPORT_NOTICE),
        FooterAction::Link(_) => {}
    };

    view! {
        <button type="button" class=css::link on:click=on_click>
            <Icon icon=icon />
            <span>{label}</span>
        </button>
    }
    .into_any()
}
