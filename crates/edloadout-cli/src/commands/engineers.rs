//! Engineers command handler: which engineers can apply each component.

use std::path::Path;

use anyhow::Result;

use edloadout_cli::output::OutputFormat;
use edloadout_lib::{AvailabilityReport, BlueprintCatalog, EngineerRoster, LoadoutFormat};

use super::import::read_loadout;

/// Handle the engineers subcommand.
pub fn handle_engineers(
    catalog: &BlueprintCatalog,
    roster: &EngineerRoster,
    file: &Path,
    format: Option<LoadoutFormat>,
    output: OutputFormat,
) -> Result<()> {
    let loadout = read_loadout(catalog, file, format)?;
    let report = AvailabilityReport::build(&loadout, roster);
    output.render_availability(&report)
}
