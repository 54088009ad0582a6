//! SLEF export importer.
//!
//! An SLEF document is an array whose first element wraps a journal
//! `Loadout` event under `data`. Ship and module identifiers are journal
//! names and are translated through [`crate::tables`] before catalog lookup.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::blueprint::BlueprintCatalog;
use crate::error::{Error, Result};
use crate::loadout::Loadout;
use crate::tables::{module_type, ship_type};

#[derive(Debug, Deserialize)]
struct SlefEntry {
    data: SlefData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SlefData {
    ship: String,
    #[serde(default)]
    ship_name: String,
    #[serde(default)]
    modules: Vec<SlefModule>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SlefModule {
    item: String,
    #[serde(default)]
    engineering: Option<Value>,
}

/// Parse an SLEF export into a [`Loadout`].
///
/// Unengineered modules produce nothing. An unknown ship identifier, or an
/// unknown identifier on an engineered module, aborts the parse; engineered
/// modules with an unusable engineering record, or whose blueprint is not in
/// the catalog, are skipped.
pub fn parse_slef(json: &str, catalog: &BlueprintCatalog) -> Result<Loadout> {
    let mut documents: Vec<Value> = serde_json::from_str(json)?;
    if documents.is_empty() {
        return Err(Error::EmptySlefDocument);
    }
    let SlefEntry { data } = serde_json::from_value(documents.swap_remove(0))?;

    let mut loadout = Loadout::new(data.ship_name, ship_type(&data.ship)?);

    for module in &data.modules {
        let Some(engineering) = &module.engineering else {
            continue;
        };

        let kind = module_type(&module.item)?;
        let Some((code, level)) = engineering_reference(engineering) else {
            debug!(item = %module.item, "skipping module with malformed engineering");
            continue;
        };

        match catalog.find_by_code(code, kind, level) {
            Some(entry) => loadout.components.push(entry.into()),
            None => debug!(
                item = %module.item,
                blueprint = code,
                level,
                "skipping blueprint missing from catalog"
            ),
        }
    }

    Ok(loadout)
}

/// Extract `(BlueprintName, Level)` from a journal engineering record.
fn engineering_reference(engineering: &Value) -> Option<(&str, u8)> {
    let code = engineering.get("BlueprintName")?.as_str()?;
    let level = u8::try_from(engineering.get("Level")?.as_u64()?).ok()?;
    Some((code, level))
}
