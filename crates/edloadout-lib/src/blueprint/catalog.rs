//! Blueprint catalog loading and lookup.
//!
//! The catalog is loaded from a CSV file with `type,name,code,grade,uuid`
//! columns. Rows keep their file order and every lookup returns the first
//! matching row.

use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use tracing::info;

use crate::error::{Error, Result};

use super::entry::BlueprintEntry;

/// Ordered collection of every known blueprint/grade pair.
#[derive(Debug, Clone, Default)]
pub struct BlueprintCatalog {
    entries: Vec<BlueprintEntry>,
    source: Option<PathBuf>,
}

impl BlueprintCatalog {
    /// Load a blueprint catalog from a CSV file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path).map_err(|source| Error::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let mut catalog = Self::from_reader(file)?;
        catalog.source = Some(path.to_path_buf());
        info!(
            path = %path.display(),
            blueprints = catalog.len(),
            "loaded blueprint catalog"
        );
        Ok(catalog)
    }

    /// Load a blueprint catalog from a reader (e.g., file or in-memory buffer).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|err| Error::CatalogValidation {
                message: format!("failed to read catalog headers: {err}"),
            })?
            .clone();

        let normalize = |s: &str| {
            s.to_ascii_lowercase()
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
                .collect::<String>()
        };

        let normalized_headers: Vec<String> = headers.iter().map(&normalize).collect();

        let synonyms: &[(&str, &[&str])] = &[
            ("type", &["type", "module", "module_type", "moduletype"]),
            ("name", &["name", "blueprint", "blueprint_name", "blueprintname"]),
            ("code", &["code", "blueprint_code", "blueprintcode"]),
            ("grade", &["grade", "level"]),
            ("uuid", &["uuid", "id"]),
        ];

        let mut index_map: BTreeMap<&str, usize> = BTreeMap::new();
        for (canon, alts) in synonyms {
            if let Some(i) = alts
                .iter()
                .find_map(|alt| normalized_headers.iter().position(|h| h == alt))
            {
                index_map.insert(*canon, i);
            }
        }

        let missing: Vec<&str> = synonyms
            .iter()
            .map(|(canon, _)| *canon)
            .filter(|c| !index_map.contains_key(c))
            .collect();

        if !missing.is_empty() {
            return Err(Error::CatalogValidation {
                message: format!(
                    "catalog missing required columns: {}. Available: {}",
                    missing.join(", "),
                    headers.iter().collect::<Vec<_>>().join(", ")
                ),
            });
        }

        let mut entries = Vec::new();
        let mut row: usize = 1;
        for result in csv_reader.records() {
            row += 1;
            let record = result.map_err(|e| Error::CatalogValidation {
                message: e.to_string(),
            })?;

            let get = |field: &str| -> String {
                index_map
                    .get(field)
                    .and_then(|&i| record.get(i))
                    .unwrap_or_default()
                    .to_string()
            };

            let raw_grade = get("grade");
            let grade = raw_grade
                .parse::<u8>()
                .map_err(|e| Error::CatalogValidation {
                    message: format!("invalid grade '{raw_grade}' at row {row}: {e}"),
                })?;

            let entry = BlueprintEntry {
                module_type: get("type"),
                name: get("name"),
                code: get("code"),
                grade,
                uuid: get("uuid"),
            };

            entry.validate().map_err(|err| match err {
                Error::CatalogValidation { message } => Error::CatalogValidation {
                    message: format!("{message} at row {row}"),
                },
                other => other,
            })?;

            entries.push(entry);
        }

        Self::from_entries(entries)
    }

    /// Build a catalog from in-memory entries, keeping their order.
    ///
    /// Repeated `(uuid, grade)` pairs are kept; lookups see the first one.
    pub fn from_entries(entries: Vec<BlueprintEntry>) -> Result<Self> {
        for entry in &entries {
            entry.validate()?;
        }

        Ok(Self {
            entries,
            source: None,
        })
    }

    /// Stage one of Coriolis resolution: the entry with this exact uuid and grade.
    pub fn find_exact(&self, uuid: &str, grade: u8) -> Option<&BlueprintEntry> {
        self.entries.iter().find(|e| e.uuid == uuid && e.grade == grade)
    }

    /// The first entry carrying `uuid`, whatever its grade.
    pub fn find_by_uuid(&self, uuid: &str) -> Option<&BlueprintEntry> {
        self.entries.iter().find(|e| e.uuid == uuid)
    }

    /// The entry for a blueprint identified by module type and display name.
    pub fn find_by_type_and_name(
        &self,
        module_type: &str,
        name: &str,
        grade: u8,
    ) -> Option<&BlueprintEntry> {
        self.entries
            .iter()
            .find(|e| e.module_type == module_type && e.name == name && e.grade == grade)
    }

    /// Stage two of Coriolis resolution.
    ///
    /// Some exports reuse the uuid of one grade for every grade of a
    /// blueprint. Recover the blueprint's type and name from any entry with
    /// that uuid, then match by `(type, name, grade)`.
    pub fn find_by_uuid_family(&self, uuid: &str, grade: u8) -> Option<&BlueprintEntry> {
        let family = self.find_by_uuid(uuid)?;
        self.find_by_type_and_name(&family.module_type, &family.name, grade)
    }

    /// Resolve a Coriolis blueprint reference: exact match first, then the
    /// uuid-family fallback.
    pub fn resolve_uuid(&self, uuid: &str, grade: u8) -> Option<&BlueprintEntry> {
        self.find_exact(uuid, grade).or_else(|| self.find_by_uuid_family(uuid, grade))
    }

    /// Resolve an SLEF blueprint reference by in-game code, module type and grade.
    pub fn find_by_code(
        &self,
        code: &str,
        module_type: &str,
        grade: u8,
    ) -> Option<&BlueprintEntry> {
        self.entries
            .iter()
            .find(|e| e.code == code && e.module_type == module_type && e.grade == grade)
    }

    /// All entries in catalog order.
    pub fn entries(&self) -> &[BlueprintEntry] {
        &self.entries
    }

    /// Number of blueprint/grade pairs in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the source path if the catalog was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}
