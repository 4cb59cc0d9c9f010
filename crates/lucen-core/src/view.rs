//! View models for the navigation surfaces.
//!
//! Pure functions from the current state and its resolved context to plain
//! data the browser layer renders. Every navigable item carries the target
//! [`NavState`] it jumps to; the up affordance maps to `ascend_one`.
//!
//! When a state only partially resolves (dangling ids), the toolbar and
//! cards are built for the deepest resolved level while the breadcrumb still
//! reports the state's own level.

use std::fmt;

use crate::models::{ContentRepository, Level, NavContext, NavState};
use crate::settings::Settings;

/// Separator between ancestor names in the breadcrumb path.
pub const PATH_SEPARATOR: &str = " / ";

// =============================================================================
// Local nav (header)
// =============================================================================

/// Position line shown under the header title, e.g. `FIELD • Master / Field`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breadcrumb {
    pub level: Level,
    /// Resolved ancestor names joined, or the hub label when none resolved
    pub path: String,
}

impl fmt::Display for Breadcrumb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} • {}", self.level.label(), self.path)
    }
}

/// Toolbar pill.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: String,
    /// Marks the item matching the current selection
    pub active: bool,
    pub target: NavState,
}

impl NavItem {
    fn new(label: &str, active: bool, target: NavState) -> Self {
        Self {
            label: label.to_string(),
            active,
            target,
        }
    }
}

/// Everything the header renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalNav {
    pub breadcrumb: Breadcrumb,
    pub items: Vec<NavItem>,
    /// Whether the "Back" (ascend) button is shown
    pub show_up: bool,
}

/// Level the toolbar and cards are built for.
fn effective_level(state: &NavState, ctx: &NavContext<'_>) -> Level {
    state.level().min(ctx.depth())
}

pub fn breadcrumb(state: &NavState, ctx: &NavContext<'_>, hub_label: &str) -> Breadcrumb {
    let names = ctx.names();
    let path = if names.is_empty() {
        hub_label.to_string()
    } else {
        names.join(PATH_SEPARATOR)
    };
    Breadcrumb {
        level: state.level(),
        path,
    }
}

/// Toolbar items for the current position.
pub fn toolbar<R: ContentRepository + ?Sized>(
    repo: &R,
    state: &NavState,
    ctx: &NavContext<'_>,
    hub_label: &str,
) -> Vec<NavItem> {
    let mut items = Vec::new();

    match (effective_level(state, ctx), ctx.master, ctx.field) {
        (Level::Master, Some(master), _) => {
            items.push(NavItem::new(hub_label, false, NavState::Core));
            items.extend(master.fields.iter().map(|f| {
                NavItem::new(&f.name, false, NavState::field(&master.id, &f.id))
            }));
        }
        (Level::Field, Some(master), Some(field)) => {
            items.push(NavItem::new(&master.name, false, NavState::master(&master.id)));
            items.extend(field.modules.iter().map(|m| {
                NavItem::new(&m.name, false, NavState::module(&master.id, &field.id, &m.id))
            }));
        }
        (Level::Module | Level::Mini, Some(master), Some(field)) => {
            let current = ctx.module.map(|m| m.id.as_str());
            items.push(NavItem::new(
                &field.name,
                false,
                NavState::field(&master.id, &field.id),
            ));
            items.extend(field.modules.iter().map(|m| {
                NavItem::new(
                    &m.name,
                    current == Some(m.id.as_str()),
                    NavState::module(&master.id, &field.id, &m.id),
                )
            }));
        }
        _ => {
            items.extend(
                repo.master_fields()
                    .iter()
                    .map(|mf| NavItem::new(&mf.name, false, NavState::master(&mf.id))),
            );
        }
    }

    items
}

/// Header view model.
pub fn local_nav<R: ContentRepository + ?Sized>(
    repo: &R,
    state: &NavState,
    hub_label: &str,
) -> LocalNav {
    let ctx = NavContext::resolve(repo, state);
    LocalNav {
        breadcrumb: breadcrumb(state, &ctx, hub_label),
        items: toolbar(repo, state, &ctx, hub_label),
        show_up: !state.is_core(),
    }
}

// =============================================================================
// Main view (cards)
// =============================================================================

/// Clickable row inside a module card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MiniRow {
    pub name: String,
    pub body: String,
    pub target: NavState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub summary: String,
    pub meta: String,
    pub action_label: String,
    pub target: NavState,
    pub minis: Vec<MiniRow>,
}

/// Cards for the main area.
pub fn cards<R: ContentRepository + ?Sized>(repo: &R, state: &NavState) -> Vec<Card> {
    let ctx = NavContext::resolve(repo, state);

    match (
        effective_level(state, &ctx),
        ctx.master,
        ctx.field,
        ctx.module,
        ctx.mini,
    ) {
        (Level::Core, ..) => repo
            .master_fields()
            .iter()
            .map(|mf| Card {
                title: mf.name.clone(),
                summary: mf.short.clone(),
                meta: format!("Fields: {}", mf.fields.len()),
                action_label: "Open master field".to_string(),
                target: NavState::master(&mf.id),
                minis: Vec::new(),
            })
            .collect(),
        (Level::Master, Some(master), ..) => master
            .fields
            .iter()
            .map(|f| Card {
                title: f.name.clone(),
                summary: f.short.clone(),
                meta: format!("Modules: {}", f.modules.len()),
                action_label: "Open field".to_string(),
                target: NavState::field(&master.id, &f.id),
                minis: Vec::new(),
            })
            .collect(),
        (Level::Field, Some(master), Some(field), ..) => field
            .modules
            .iter()
            .map(|m| Card {
                title: m.name.clone(),
                summary: m.short.clone(),
                meta: format!("Mini modules: {}", m.minis.len()),
                action_label: "Open module".to_string(),
                target: NavState::module(&master.id, &field.id, &m.id),
                minis: Vec::new(),
            })
            .collect(),
        (Level::Module, Some(master), Some(field), Some(module), _) => vec![Card {
            title: module.name.clone(),
            summary: module.short.clone(),
            meta: format!("Mini modules: {}", module.minis.len()),
            action_label: "Back to field".to_string(),
            target: NavState::field(&master.id, &field.id),
            minis: module
                .minis
                .iter()
                .map(|mm| MiniRow {
                    name: mm.name.clone(),
                    body: mm.body.clone(),
                    target: NavState::mini(&master.id, &field.id, &module.id, &mm.id),
                })
                .collect(),
        }],
        (Level::Mini, Some(master), Some(field), Some(module), Some(mini)) => vec![Card {
            title: mini.name.clone(),
            summary: mini.body.clone(),
            meta: format!("{} • {} • {}", master.name, field.name, module.name),
            action_label: "Back to module".to_string(),
            target: NavState::module(&master.id, &field.id, &module.id),
            minis: Vec::new(),
        }],
        _ => Vec::new(),
    }
}

// =============================================================================
// Global nav (footer rail)
// =============================================================================

/// What a footer button does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FooterAction {
    /// Navigate to the given state
    Navigate(NavState),
    /// Show the settings notice
    Settings,
    /// Cycle the footer mode
    CycleMode,
    /// Show the support notice
    Support,
    /// External link, opened in a new tab
    Link(String),
}

/// Identity of a footer button, for styling and icons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RailEntry {
    Hub,
    MasterFields,
    Settings,
    Modes,
    Support,
    Donate,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FooterButton {
    pub entry: RailEntry,
    pub label: String,
    pub action: FooterAction,
}

/// Footer rows: movement, system control, external.
///
/// Rows whose buttons are all disabled come back empty; the renderer skips them.
pub fn global_nav(settings: &Settings) -> [Vec<FooterButton>; 3] {
    let button = |entry, label: &str, action| FooterButton {
        entry,
        label: label.to_string(),
        action,
    };
    let hub = || FooterAction::Navigate(NavState::Core);

    let mut movement = vec![button(RailEntry::Hub, "Hub", hub())];
    if settings.show_master_fields {
        movement.push(button(RailEntry::MasterFields, "Master Fields", hub()));
    }

    let mut system = Vec::new();
    if settings.show_settings {
        system.push(button(RailEntry::Settings, "Settings", FooterAction::Settings));
    }
    if settings.show_modes {
        system.push(button(RailEntry::Modes, "Modes", FooterAction::CycleMode));
    }

    let mut external = Vec::new();
    if settings.show_support {
        external.push(button(RailEntry::Support, "Support", FooterAction::Support));
    }
    if settings.show_donate {
        let donate = FooterAction::Link(settings.donate_url.clone());
        external.push(button(RailEntry::Donate, "Donate", donate));
    }

    [movement, system, external]
}
