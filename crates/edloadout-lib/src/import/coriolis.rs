//! Coriolis export importer.
//!
//! A Coriolis export is an object `{name, ship, components}` where
//! `components` maps a module group (`standard`, `hardpoints`, ...) to its
//! slots. Groups are either objects keyed by slot name or arrays of slots.
//! An engineered slot carries `blueprint: {grade, grades: {"<grade>": {uuid}}}`.
//! Only invalid JSON text fails; any field of the wrong shape reads as empty.

use serde_json::Value;
use tracing::debug;

use crate::blueprint::BlueprintCatalog;
use crate::error::Result;
use crate::loadout::Loadout;

/// Parse a Coriolis export into a [`Loadout`].
///
/// Slots are visited in document order. Slots without a blueprint, with a
/// malformed blueprint, or whose blueprint the catalog cannot resolve are
/// skipped.
pub fn parse_coriolis(json: &str, catalog: &BlueprintCatalog) -> Result<Loadout> {
    let document: Value = serde_json::from_str(json)?;
    let mut loadout = Loadout::new(text_field(&document, "name"), text_field(&document, "ship"));

    let groups = document.get("components").and_then(Value::as_object);
    for (group, slots) in groups.into_iter().flatten() {
        for slot in group_slots(slots) {
            let Some(blueprint) = slot.as_object().and_then(|s| s.get("blueprint")) else {
                continue;
            };

            let Some((uuid, grade)) = blueprint_reference(blueprint) else {
                debug!(group = %group, "skipping slot with malformed blueprint");
                continue;
            };

            match catalog.resolve_uuid(uuid, grade) {
                Some(entry) => loadout.components.push(entry.into()),
                None => debug!(
                    group = %group,
                    uuid,
                    grade,
                    "skipping blueprint missing from catalog"
                ),
            }
        }
    }

    Ok(loadout)
}

fn text_field(document: &Value, key: &str) -> String {
    document
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn group_slots(group: &Value) -> Vec<&Value> {
    match group {
        Value::Object(slots) => slots.values().collect(),
        Value::Array(slots) => slots.iter().collect(),
        _ => Vec::new(),
    }
}

/// Extract `(grades[grade].uuid, grade)` from a Coriolis blueprint object.
fn blueprint_reference(blueprint: &Value) -> Option<(&str, u8)> {
    let grade = u8::try_from(blueprint.get("grade")?.as_u64()?).ok()?;
    let uuid = blueprint
        .get("grades")?
        .get(grade.to_string())?
        .get("uuid")?
        .as_str()?;
    Some((uuid, grade))
}
