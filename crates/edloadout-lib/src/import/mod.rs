//! Importers for third-party loadout exports.
//!
//! - [`coriolis`] - Coriolis ship builder exports (blueprints referenced by uuid)
//! - [`slef`] - SLEF exports (journal identifiers and blueprint codes)
//!
//! Both importers resolve engineered modules against a [`BlueprintCatalog`]
//! and silently drop modules whose blueprint is not in the catalog.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::blueprint::BlueprintCatalog;
use crate::error::{Error, Result};
use crate::loadout::Loadout;

pub mod coriolis;
pub mod slef;

pub use coriolis::parse_coriolis;
pub use slef::parse_slef;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadoutFormat {
    Coriolis,
    Slef,
}

impl LoadoutFormat {
    /// Guess the format from the shape of the document: SLEF exports are
    /// arrays, Coriolis exports are objects.
    pub fn detect(json: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(json)? {
            Value::Array(_) => Ok(LoadoutFormat::Slef),
            Value::Object(_) => Ok(LoadoutFormat::Coriolis),
            _ => Err(Error::UnrecognizedFormat),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LoadoutFormat::Coriolis => "Coriolis",
            LoadoutFormat::Slef => "SLEF",
        }
    }
}

impl fmt::Display for LoadoutFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LoadoutFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "coriolis" => Ok(LoadoutFormat::Coriolis),
            "slef" => Ok(LoadoutFormat::Slef),
            _ => Err(Error::UnknownFormat {
                name: s.to_string(),
            }),
        }
    }
}

/// Parse `json` with the importer for `format`.
pub fn parse_loadout(
    format: LoadoutFormat,
    json: &str,
    catalog: &BlueprintCatalog,
) -> Result<Loadout> {
    match format {
        LoadoutFormat::Coriolis => parse_coriolis(json, catalog),
        LoadoutFormat::Slef => parse_slef(json, catalog),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_format_from_top_level_shape() {
        assert_eq!(
            LoadoutFormat::detect(r#"[{"data": {}}]"#).unwrap(),
            LoadoutFormat::Slef
        );
        assert_eq!(
            LoadoutFormat::detect(r#"{"name": "x"}"#).unwrap(),
            LoadoutFormat::Coriolis
        );
        assert!(matches!(
            LoadoutFormat::detect("42"),
            Err(Error::UnrecognizedFormat)
        ));
        assert!(matches!(LoadoutFormat::detect("{"), Err(Error::Json(_))));
    }

    #[test]
    fn format_names_parse_case_insensitively() {
        assert_eq!("SLEF".parse::<LoadoutFormat>().unwrap(), LoadoutFormat::Slef);
        assert_eq!(
            "coriolis".parse::<LoadoutFormat>().unwrap(),
            LoadoutFormat::Coriolis
        );
        assert!("edsy".parse::<LoadoutFormat>().is_err());
    }
}
