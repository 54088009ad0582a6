//! Elite: Dangerous loadout CLI library.
//!
//! This crate provides the reference-data path resolution and output
//! formatting used by the `edloadout-cli` binary.

pub mod output;
pub mod paths;
