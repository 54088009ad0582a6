// Test-only helpers for `edloadout-lib` unit tests
use crate::blueprint::BlueprintEntry;

/// Build a catalog entry without going through CSV.
pub fn entry(module_type: &str, name: &str, code: &str, grade: u8, uuid: &str) -> BlueprintEntry {
    BlueprintEntry {
        module_type: module_type.to_string(),
        name: name.to_string(),
        code: code.to_string(),
        grade,
        uuid: uuid.to_string(),
    }
}
