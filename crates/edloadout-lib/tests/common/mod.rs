//! Common test utilities and fixture helpers.

use std::fs;
use std::path::PathBuf;

use edloadout_lib::{BlueprintCatalog, BlueprintEntry, EngineerRoster};

/// Path to fixtures directory used by tests (catalog, engineers, exports).
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Read a fixture file to a string.
#[allow(dead_code)]
pub fn fixture_text(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).expect("fixture readable")
}

/// Load the checked-in blueprint catalog.
pub fn fixture_catalog() -> BlueprintCatalog {
    BlueprintCatalog::from_path(&fixtures_dir().join("blueprints.csv"))
        .expect("load fixture blueprints.csv")
}

/// Load the checked-in engineer roster.
#[allow(dead_code)]
pub fn fixture_roster() -> EngineerRoster {
    EngineerRoster::from_path(&fixtures_dir().join("engineers.json"))
        .expect("load fixture engineers.json")
}

/// Look up the fixture catalog entry for a blueprint at a grade.
#[allow(dead_code)]
pub fn catalog_entry(
    catalog: &BlueprintCatalog,
    module_type: &str,
    name: &str,
    grade: u8,
) -> BlueprintEntry {
    catalog
        .find_by_type_and_name(module_type, name, grade)
        .expect("blueprint present in fixture catalog")
        .clone()
}
