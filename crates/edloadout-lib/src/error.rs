use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the loadout library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an SLEF ship identifier has no entry in the ship-type table.
    #[error("Unknown ship type: {value}")]
    UnknownShipType { value: String },

    /// Raised when an SLEF module identifier matches neither armour nor any
    /// module-type prefix.
    #[error("Unknown module type: {value}")]
    UnknownModuleType { value: String },

    /// Raised when an SLEF document is an empty array.
    #[error("SLEF document contains no loadout")]
    EmptySlefDocument,

    /// Raised when the top-level JSON value is neither an object nor an array.
    #[error("unrecognized loadout format; expected a Coriolis object or an SLEF array")]
    UnrecognizedFormat,

    /// Raised when a format name given by the caller is not supported.
    #[error("unknown loadout format: {name}; expected 'coriolis' or 'slef'")]
    UnknownFormat { name: String },

    /// Raised when blueprint catalog data fails validation.
    #[error("invalid blueprint catalog: {message}")]
    CatalogValidation { message: String },

    /// Raised when engineer reference data fails validation.
    #[error("invalid engineer data: {message}")]
    EngineerValidation { message: String },

    /// Raised when duplicate engineer names are encountered during roster load.
    #[error("duplicate engineer name encountered: {name}")]
    DuplicateEngineer { name: String },

    /// Raised when an engineer name could not be found in the roster.
    #[error("unknown engineer: {name}{}", format_suggestions(.suggestions))]
    UnknownEngineer {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a reference data file could not be read.
    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Wrapper for JSON parse failures.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
