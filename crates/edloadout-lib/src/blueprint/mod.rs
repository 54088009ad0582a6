//! Blueprint reference data and catalog lookups.
//!
//! - [`entry`] - A single blueprint/grade row
//! - [`catalog`] - Catalog loading and the lookup stages used by the importers

pub mod catalog;
pub mod entry;

pub use catalog::BlueprintCatalog;
pub use entry::{BlueprintEntry, MAX_GRADE, MIN_GRADE};
