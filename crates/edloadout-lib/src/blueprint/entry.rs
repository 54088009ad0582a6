//! Blueprint catalog rows.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Lowest engineering grade a blueprint can have.
pub const MIN_GRADE: u8 = 1;
/// Highest engineering grade a blueprint can have.
pub const MAX_GRADE: u8 = 5;

/// One known blueprint at one grade.
///
/// `code` is the in-game blueprint identifier used by SLEF exports; `uuid`
/// identifies the blueprint/grade pair in Coriolis exports and engineer data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlueprintEntry {
    #[serde(rename = "type")]
    pub module_type: String,
    pub name: String,
    pub code: String,
    pub grade: u8,
    pub uuid: String,
}

impl BlueprintEntry {
    /// Validate an entry for correctness.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            (self.module_type.as_str(), "type"),
            (self.name.as_str(), "name"),
            (self.code.as_str(), "code"),
            (self.uuid.as_str(), "uuid"),
        ];

        for (value, field) in fields {
            if value.trim().is_empty() {
                return Err(Error::CatalogValidation {
                    message: format!("blueprint {field} must not be empty"),
                });
            }
        }

        if !(MIN_GRADE..=MAX_GRADE).contains(&self.grade) {
            return Err(Error::CatalogValidation {
                message: format!(
                    "grade {} of blueprint '{}' is outside {MIN_GRADE}..={MAX_GRADE}",
                    self.grade, self.name
                ),
            });
        }

        Ok(())
    }
}
