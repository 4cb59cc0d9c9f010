//! Content repository: the read-only four-level content tree.
//!
//! The tree is owned elsewhere and never mutated by navigation. [`World`]
//! is the in-memory implementation, loaded from JSON:
//!
//! ```json
//! { "masterFields": [ { "id": "mf", "name": "...", "short": "...", "fields": [ ... ] } ] }
//! ```

use std::collections::HashSet;
use std::rc::Rc;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::WorldError;
use crate::route::SEPARATOR;

// =============================================================================
// Entities
// =============================================================================

/// Top-level grouping of fields.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MasterField {
    pub id: String,
    pub name: String,
    /// One-line summary shown on cards
    pub short: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Field {
    pub id: String,
    pub name: String,
    pub short: String,
    #[serde(default)]
    pub modules: Vec<Module>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Module {
    pub id: String,
    pub name: String,
    pub short: String,
    #[serde(default)]
    pub minis: Vec<Mini>,
}

/// Leaf content item.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Mini {
    pub id: String,
    pub name: String,
    pub body: String,
}

impl MasterField {
    pub fn field(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }
}

impl Field {
    pub fn module(&self, id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == id)
    }
}

impl Module {
    pub fn mini(&self, id: &str) -> Option<&Mini> {
        self.minis.iter().find(|m| m.id == id)
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Synchronously queryable content tree.
///
/// Lookups at deeper levels go through the entity helpers
/// ([`MasterField::field`], [`Field::module`], [`Module::mini`]).
pub trait ContentRepository {
    /// Master fields in display order.
    fn master_fields(&self) -> &[MasterField];

    fn master(&self, id: &str) -> Option<&MasterField> {
        self.master_fields().iter().find(|m| m.id == id)
    }
}

impl<T: ContentRepository + ?Sized> ContentRepository for &T {
    fn master_fields(&self) -> &[MasterField] {
        (**self).master_fields()
    }
}

impl<T: ContentRepository + ?Sized> ContentRepository for Rc<T> {
    fn master_fields(&self) -> &[MasterField] {
        (**self).master_fields()
    }
}

impl<T: ContentRepository + ?Sized> ContentRepository for Arc<T> {
    fn master_fields(&self) -> &[MasterField] {
        (**self).master_fields()
    }
}

/// In-memory content tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct World {
    #[serde(default)]
    pub master_fields: Vec<MasterField>,
}

impl World {
    /// Parse and validate a world from JSON.
    pub fn from_json(json: &str) -> Result<Self, WorldError> {
        let world: Self = serde_json::from_str(json)?;
        world.validate()?;
        Ok(world)
    }

    /// Check that every children list has unique, routable ids.
    pub fn validate(&self) -> Result<(), WorldError> {
        check_ids("master fields", self.master_fields.iter().map(|m| &m.id))?;
        for master in &self.master_fields {
            check_ids(&master.id, master.fields.iter().map(|f| &f.id))?;
            for field in &master.fields {
                check_ids(&field.id, field.modules.iter().map(|m| &m.id))?;
                for module in &field.modules {
                    check_ids(&module.id, module.minis.iter().map(|m| &m.id))?;
                }
            }
        }
        Ok(())
    }
}

impl ContentRepository for World {
    fn master_fields(&self) -> &[MasterField] {
        &self.master_fields
    }
}

/// Ids become route segments, so they must not contain the separator.
fn check_ids<'a>(scope: &str, ids: impl Iterator<Item = &'a String>) -> Result<(), WorldError> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.contains(SEPARATOR) {
            return Err(WorldError::InvalidId {
                scope: scope.to_string(),
                id: id.clone(),
            });
        }
        if !seen.insert(id) {
            return Err(WorldError::DuplicateId {
                scope: scope.to_string(),
                id: id.clone(),
            });
        }
    }
    Ok(())
}
