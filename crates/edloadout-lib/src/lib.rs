//! Elite: Dangerous loadout library entry points.
//!
//! This crate normalizes ship loadouts exported by third-party fitting tools
//! (Coriolis, SLEF) into a single [`Loadout`] shape, resolving every engineered
//! module against a [`BlueprintCatalog`], and answers whether an [`Engineer`]
//! can apply a given blueprint. Higher-level consumers (the CLI) should only
//! depend on the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod blueprint;
pub mod engineer;
pub mod error;
pub mod import;
pub mod loadout;
pub mod output;
pub mod tables;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use blueprint::{BlueprintCatalog, BlueprintEntry};
pub use engineer::{is_blueprint_available, Engineer, EngineerRoster};
pub use error::{Error, Result};
pub use import::{parse_coriolis, parse_loadout, parse_slef, LoadoutFormat};
pub use loadout::{Component, Loadout};
pub use output::{render_loadout, AvailabilityReport, ComponentAvailability, LoadoutRenderMode};
pub use tables::{module_type, ship_type};
