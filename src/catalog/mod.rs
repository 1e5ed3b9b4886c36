//! Translation catalog wiring.
//!
//! A catalog is a single locale file (for example `en.json`): one JSON object
//! whose top-level keys are UI sections and whose values are nested mappings
//! of message keys to strings. This module loads that document into memory,
//! exposes section-level access for the patch interpreter, and writes it back
//! in the same shape it was read.

pub mod document;

pub use document::Catalog;

/// Default relative path of the locale file patched by `patch-catalog`.
pub const DEFAULT_CATALOG_PATH: &str = "en.json";
