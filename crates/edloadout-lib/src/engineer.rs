//! Engineer reference data and blueprint availability checks.

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::loadout::Component;

/// Minimum similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;
/// Maximum number of suggestions attached to an unknown engineer error.
const MAX_SUGGESTIONS: usize = 3;

/// An NPC crafter and the blueprint uuids they can apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engineer {
    pub name: String,
    #[serde(default)]
    pub blueprints: BTreeSet<String>,
}

impl Engineer {
    pub fn new<I, S>(name: impl Into<String>, blueprints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            blueprints: blueprints.into_iter().map(Into::into).collect(),
        }
    }
}

/// Returns true if `engineer` knows the blueprint/grade pair of `component`.
pub fn is_blueprint_available(engineer: &Engineer, component: &Component) -> bool {
    engineer.blueprints.contains(&component.uuid)
}

/// Engineers loaded from reference data, in file order.
#[derive(Debug, Clone, Default)]
pub struct EngineerRoster {
    engineers: Vec<Engineer>,
    source: Option<PathBuf>,
}

impl EngineerRoster {
    /// Load an engineer roster from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path).map_err(|source| Error::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let mut roster = Self::from_reader(file)?;
        roster.source = Some(path.to_path_buf());
        info!(
            path = %path.display(),
            engineers = roster.len(),
            "loaded engineer roster"
        );
        Ok(roster)
    }

    /// Load an engineer roster from a reader holding a JSON array.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let engineers: Vec<Engineer> = serde_json::from_reader(reader)?;
        Self::from_engineers(engineers)
    }

    /// Build a roster from in-memory engineers, rejecting duplicate names.
    pub fn from_engineers(engineers: Vec<Engineer>) -> Result<Self> {
        let mut seen = HashSet::new();
        for engineer in &engineers {
            if engineer.name.trim().is_empty() {
                return Err(Error::EngineerValidation {
                    message: "engineer name must not be empty".to_string(),
                });
            }
            let key = normalize_name(&engineer.name);
            if !seen.insert(key.clone()) {
                return Err(Error::DuplicateEngineer { name: key });
            }
        }

        Ok(Self {
            engineers,
            source: None,
        })
    }

    /// Get an engineer by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Engineer> {
        let key = normalize_name(name);
        self.engineers
            .iter()
            .find(|e| normalize_name(&e.name) == key)
    }

    /// Get an engineer by name, failing with suggestions when absent.
    pub fn require(&self, name: &str) -> Result<&Engineer> {
        self.get(name).ok_or_else(|| Error::UnknownEngineer {
            name: name.to_string(),
            suggestions: self.fuzzy_matches(name, MAX_SUGGESTIONS),
        })
    }

    /// Engineer names most similar to `name`, best match first.
    pub fn fuzzy_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let key = normalize_name(name);
        let mut scored: Vec<(f64, &str)> = self
            .engineers
            .iter()
            .map(|e| {
                (
                    strsim::jaro_winkler(&key, &normalize_name(&e.name)),
                    e.name.as_str(),
                )
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, n)| n.to_string())
            .collect()
    }

    /// Engineers able to apply `component`, in roster order.
    pub fn available_for(&self, component: &Component) -> Vec<&Engineer> {
        self.engineers
            .iter()
            .filter(|e| is_blueprint_available(e, component))
            .collect()
    }

    /// All engineers in roster order.
    pub fn engineers(&self) -> &[Engineer] {
        &self.engineers
    }

    pub fn len(&self) -> usize {
        self.engineers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engineers.is_empty()
    }

    /// Get the source path if the roster was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// Normalize an engineer name for case-insensitive lookup.
fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
