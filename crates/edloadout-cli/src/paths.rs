//! Reference data discovery.
//!
//! The blueprint catalog and engineer roster are looked up in the following
//! order:
//! 1. Explicit path passed on the command line
//! 2. Environment variable (`EDLOADOUT_BLUEPRINTS` / `EDLOADOUT_ENGINEERS`)
//! 3. The platform data directory
//! 4. Checked-in fixtures (only in debug builds)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing::debug;

use edloadout_lib::{BlueprintCatalog, EngineerRoster};

/// A reference data file the CLI needs at runtime.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceFile {
    pub label: &'static str,
    pub env_var: &'static str,
    pub file_name: &'static str,
}

pub const BLUEPRINT_CATALOG: ReferenceFile = ReferenceFile {
    label: "blueprint catalog",
    env_var: "EDLOADOUT_BLUEPRINTS",
    file_name: "blueprints.csv",
};

pub const ENGINEER_ROSTER: ReferenceFile = ReferenceFile {
    label: "engineer roster",
    env_var: "EDLOADOUT_ENGINEERS",
    file_name: "engineers.json",
};

impl ReferenceFile {
    /// Candidate locations after the explicit path, in lookup order.
    pub fn candidates(&self) -> Vec<PathBuf> {
        let mut candidates = Vec::new();

        if let Some(env_path) = std::env::var_os(self.env_var) {
            candidates.push(PathBuf::from(env_path));
        }

        if let Some(dirs) = ProjectDirs::from("com", "edloadout", "edloadout") {
            candidates.push(dirs.data_dir().join(self.file_name));
        }

        if cfg!(debug_assertions) {
            candidates.push(
                PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                    .join("../../docs/fixtures")
                    .join(self.file_name),
            );
        }

        candidates
    }

    /// Resolve the file to load. An explicit path is returned as-is so that
    /// a missing file is reported against the path the user gave.
    pub fn resolve(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }

        let path = self
            .candidates()
            .into_iter()
            .find(|p| p.exists())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "{} not found; set {} or pass the path explicitly",
                    self.label,
                    self.env_var
                )
            })?;
        debug!(path = %path.display(), "resolved {}", self.label);
        Ok(path)
    }
}

/// Load the blueprint catalog.
pub fn load_catalog(explicit: Option<&Path>) -> Result<BlueprintCatalog> {
    let path = BLUEPRINT_CATALOG.resolve(explicit)?;
    BlueprintCatalog::from_path(&path)
        .with_context(|| format!("failed to load blueprint catalog from {}", path.display()))
}

/// Load the engineer roster.
pub fn load_roster(explicit: Option<&Path>) -> Result<EngineerRoster> {
    let path = ENGINEER_ROSTER.resolve(explicit)?;
    EngineerRoster::from_path(&path)
        .with_context(|| format!("failed to load engineer roster from {}", path.display()))
}
