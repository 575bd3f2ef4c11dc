//! Per-language configuration.
//!
//! A language is a value, not a type: a [`LanguageProfile`] bundles a grammar
//! with the node-kind tables every operation is parameterised over.

pub mod builtin;
pub mod profile;
pub mod registry;

pub use profile::{LanguageProfile, NodeTables, ProfileDefinition, DEFAULT_DELIMITER};
pub use registry::{registry, ProfileRegistry};
