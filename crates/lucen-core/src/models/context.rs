//! Context resolution: looking up the entities a [`NavState`] names.

use super::{ContentRepository, Field, Level, MasterField, Mini, Module, NavState};

/// Entities resolved from a [`NavState`].
///
/// Each lookup short-circuits on a missing ancestor, so a dangling id
/// degrades to the deepest ancestor that still exists instead of failing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavContext<'a> {
    pub master: Option<&'a MasterField>,
    pub field: Option<&'a Field>,
    pub module: Option<&'a Module>,
    pub mini: Option<&'a Mini>,
}

impl<'a> NavContext<'a> {
    pub fn resolve<R: ContentRepository + ?Sized>(repo: &'a R, state: &NavState) -> Self {
        let master = state.master_id().and_then(|id| repo.master(id));
        let field = master.zip(state.field_id()).and_then(|(m, id)| m.field(id));
        let module = field.zip(state.module_id()).and_then(|(f, id)| f.module(id));
        let mini = module.zip(state.mini_id()).and_then(|(m, id)| m.mini(id));

        Self {
            master,
            field,
            module,
            mini,
        }
    }

    /// Deepest level whose entity resolved (`Core` when nothing did).
    pub fn depth(&self) -> Level {
        if self.mini.is_some() {
            Level::Mini
        } else if self.module.is_some() {
            Level::Module
        } else if self.field.is_some() {
            Level::Field
        } else if self.master.is_some() {
            Level::Master
        } else {
            Level::Core
        }
    }

    /// Names of the resolved entities, root first.
    pub fn names(&self) -> Vec<&'a str> {
        [
            self.master.map(|m| m.name.as_str()),
            self.field.map(|f| f.name.as_str()),
            self.module.map(|m| m.name.as_str()),
            self.mini.map(|m| m.name.as_str()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.master.is_none()
    }
}
