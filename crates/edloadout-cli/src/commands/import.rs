//! Import command handler for parsing third-party loadout exports.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use edloadout_cli::output::OutputFormat;
use edloadout_lib::{parse_loadout, BlueprintCatalog, Loadout, LoadoutFormat};

/// Handle the import subcommand.
pub fn handle_import(
    catalog: &BlueprintCatalog,
    file: &Path,
    format: Option<LoadoutFormat>,
    output: OutputFormat,
) -> Result<()> {
    let loadout = read_loadout(catalog, file, format)?;
    output.render_loadout(&loadout)
}

/// Read and parse a loadout export, detecting its format when not given.
pub fn read_loadout(
    catalog: &BlueprintCatalog,
    file: &Path,
    format: Option<LoadoutFormat>,
) -> Result<Loadout> {
    let json = fs::read_to_string(file)
        .with_context(|| format!("failed to read loadout from {}", file.display()))?;

    let format = match format {
        Some(format) => format,
        None => LoadoutFormat::detect(&json)
            .with_context(|| format!("failed to detect loadout format of {}", file.display()))?,
    };

    let loadout = parse_loadout(format, &json, catalog)
        .with_context(|| format!("failed to parse {} loadout {}", format, file.display()))?;

    info!(
        format = %format,
        ship = %loadout.ship,
        components = loadout.components.len(),
        "imported loadout"
    );
    Ok(loadout)
}
