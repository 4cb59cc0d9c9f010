//! Hierarchy levels.

use std::fmt;

/// Depth in the content hierarchy, ordered root first.
///
/// `Core` is the hub (depth 0); `Mini` is the deepest level (depth 4).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Hub listing all master fields
    #[default]
    Core,
    /// A master field
    Master,
    /// A field within a master field
    Field,
    /// A module within a field
    Module,
    /// A mini-module within a module
    Mini,
}

impl Level {
    /// All levels in depth order.
    pub const ALL: [Level; 5] = [
        Level::Core,
        Level::Master,
        Level::Field,
        Level::Module,
        Level::Mini,
    ];

    /// Tree depth (0 for `Core`, 4 for `Mini`).
    pub const fn depth(self) -> usize {
        match self {
            Self::Core => 0,
            Self::Master => 1,
            Self::Field => 2,
            Self::Module => 3,
            Self::Mini => 4,
        }
    }

    /// Level at the given depth, if any.
    pub fn from_depth(depth: usize) -> Option<Self> {
        Self::ALL.get(depth).copied()
    }

    /// Kind tag used as the first route segment.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Master => "master",
            Self::Field => "field",
            Self::Module => "module",
            Self::Mini => "mini",
        }
    }

    /// Parse a route kind tag. Tags are case-sensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.tag() == tag)
    }

    /// Number of route segments a token of this kind needs (tag included).
    pub const fn segment_count(self) -> usize {
        self.depth() + 1
    }

    /// One step toward the root; `None` at `Core`.
    pub fn parent(self) -> Option<Self> {
        self.depth().checked_sub(1).and_then(Self::from_depth)
    }

    /// Upper-case label shown in the breadcrumb (e.g. `FIELD`).
    pub fn label(self) -> String {
        self.tag().to_uppercase()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
