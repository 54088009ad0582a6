//! Check command handler for a single engineer and blueprint.

use anyhow::{Context, Result};

use edloadout_lib::{is_blueprint_available, BlueprintCatalog, Component, EngineerRoster};

/// Handle the check subcommand.
///
/// The uuid must be known to the catalog so the result can name the blueprint.
/// With a grade the uuid is resolved the way Coriolis slots are, so a uuid
/// shared across grades still reports the requested grade. Without one the
/// first catalog row carrying the uuid is used.
pub fn handle_check(
    catalog: &BlueprintCatalog,
    roster: &EngineerRoster,
    engineer: &str,
    uuid: &str,
    grade: Option<u8>,
) -> Result<()> {
    let engineer = roster.require(engineer)?;
    let entry = match grade {
        Some(grade) => catalog
            .resolve_uuid(uuid, grade)
            .with_context(|| format!("blueprint {uuid} at grade {grade} is not in the catalog"))?,
        None => catalog
            .find_by_uuid(uuid)
            .with_context(|| format!("blueprint {uuid} is not in the catalog"))?,
    };
    let component = Component::from(entry);

    let verdict = if is_blueprint_available(engineer, &component) {
        "available"
    } else {
        "unavailable"
    };
    println!(
        "{verdict}: {} for {}: {} G{}",
        engineer.name, component.module, component.blueprint, component.grade
    );
    Ok(())
}
