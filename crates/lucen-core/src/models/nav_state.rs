//! Navigation state.

use super::Level;

/// Current position in the hierarchy.
///
/// Each variant carries exactly the ids its level requires, so a state can
/// never hold a deeper id without its ancestors, nor a stray id below its
/// level. States are replaced wholesale on every transition.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum NavState {
    /// Hub: no ids
    #[default]
    Core,
    /// Inside a master field
    Master { master: String },
    /// Inside a field
    Field { master: String, field: String },
    /// Inside a module
    Module {
        master: String,
        field: String,
        module: String,
    },
    /// Viewing a mini-module
    Mini {
        master: String,
        field: String,
        module: String,
        mini: String,
    },
}

impl NavState {
    pub fn master(master: impl Into<String>) -> Self {
        Self::Master {
            master: master.into(),
        }
    }

    pub fn field(master: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Field {
            master: master.into(),
            field: field.into(),
        }
    }

    pub fn module(
        master: impl Into<String>,
        field: impl Into<String>,
        module: impl Into<String>,
    ) -> Self {
        Self::Module {
            master: master.into(),
            field: field.into(),
            module: module.into(),
        }
    }

    pub fn mini(
        master: impl Into<String>,
        field: impl Into<String>,
        module: impl Into<String>,
        mini: impl Into<String>,
    ) -> Self {
        Self::Mini {
            master: master.into(),
            field: field.into(),
            module: module.into(),
            mini: mini.into(),
        }
    }

    /// Build a state from the ids of a path, root first.
    ///
    /// The level is the number of ids given; more than four ids is `None`.
    pub fn from_ids<S: AsRef<str>>(ids: &[S]) -> Option<Self> {
        let id = |i: usize| ids[i].as_ref().to_string();
        match ids.len() {
            0 => Some(Self::Core),
            1 => Some(Self::master(id(0))),
            2 => Some(Self::field(id(0), id(1))),
            3 => Some(Self::module(id(0), id(1), id(2))),
            4 => Some(Self::mini(id(0), id(1), id(2), id(3))),
            _ => None,
        }
    }

    pub fn level(&self) -> Level {
        match self {
            Self::Core => Level::Core,
            Self::Master { .. } => Level::Master,
            Self::Field { .. } => Level::Field,
            Self::Module { .. } => Level::Module,
            Self::Mini { .. } => Level::Mini,
        }
    }

    pub fn master_id(&self) -> Option<&str> {
        match self {
            Self::Core => None,
            Self::Master { master }
            | Self::Field { master, .. }
            | Self::Module { master, .. }
            | Self::Mini { master, .. } => Some(master),
        }
    }

    pub fn field_id(&self) -> Option<&str> {
        match self {
            Self::Field { field, .. } | Self::Module { field, .. } | Self::Mini { field, .. } => {
                Some(field)
            }
            _ => None,
        }
    }

    pub fn module_id(&self) -> Option<&str> {
        match self {
            Self::Module { module, .. } | Self::Mini { module, .. } => Some(module),
            _ => None,
        }
    }

    pub fn mini_id(&self) -> Option<&str> {
        match self {
            Self::Mini { mini, .. } => Some(mini),
            _ => None,
        }
    }

    /// Ids held by this state, root first. Length equals the level depth.
    pub fn ids(&self) -> Vec<&str> {
        [
            self.master_id(),
            self.field_id(),
            self.module_id(),
            self.mini_id(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    pub fn is_core(&self) -> bool {
        matches!(self, Self::Core)
    }

    /// State one level toward the root, dropping only the deepest id.
    ///
    /// `Core` has no parent and is returned unchanged.
    pub fn parent(&self) -> Self {
        let depth = self.level().parent().map_or(0, Level::depth);
        Self::from_ids(&self.ids()[..depth]).unwrap_or_default()
    }
}
