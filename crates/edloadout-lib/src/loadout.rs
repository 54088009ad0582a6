//! Normalized loadout types produced by every importer.

use serde::{Deserialize, Serialize};

use crate::blueprint::BlueprintEntry;

/// A single engineered module slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub module: String,
    pub blueprint: String,
    pub grade: u8,
    pub uuid: String,
}

impl From<&BlueprintEntry> for Component {
    fn from(entry: &BlueprintEntry) -> Self {
        Self {
            module: entry.module_type.clone(),
            blueprint: entry.name.clone(),
            grade: entry.grade,
            uuid: entry.uuid.clone(),
        }
    }
}

/// One parsed ship fit: hull type plus the engineered components, in the
/// order the source document listed them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loadout {
    pub name: String,
    pub ship: String,
    pub components: Vec<Component>,
}

impl Loadout {
    /// Create a loadout without components.
    pub fn new(name: impl Into<String>, ship: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ship: ship.into(),
            components: Vec::new(),
        }
    }

    /// Returns true if no engineered component was resolved.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
