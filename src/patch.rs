//! Declarative patch entries and the interpreter that applies them.
//!
//! A [`PatchSet`] is an ordered list of `(section, op, payload)` entries.
//! [`apply_patch_set`] walks it in order against a loaded [`Catalog`]; later
//! entries see the effect of earlier ones. There is no rollback: when an
//! entry fails, the entries before it stay applied to the in-memory catalog
//! and the caller decides not to save.
//!
//! Patch sets are usually built in code (see [`crate::builtin`]) but can also
//! be read from a JSON file of the form
//! `[{"section": "...", "op": "merge" | "replace", "payload": {...}}]`.

use crate::catalog::Catalog;
use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    /// Set each payload key on an existing section, keeping all other keys.
    Merge,
    /// Substitute the whole section, creating it when absent.
    Replace,
}

impl PatchOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatchOp::Merge => "merge",
            PatchOp::Replace => "replace",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatchEntry {
    pub section: String,
    pub op: PatchOp,
    pub payload: Map<String, Value>,
}

impl PatchEntry {
    pub fn new(section: &str, op: PatchOp, payload: Value) -> Result<Self> {
        match payload {
            Value::Object(payload) => Ok(Self {
                section: section.to_string(),
                op,
                payload,
            }),
            _ => Err(CatalogError::InvalidPayload {
                section: section.to_string(),
            }),
        }
    }

    pub fn merge(section: &str, payload: Value) -> Result<Self> {
        Self::new(section, PatchOp::Merge, payload)
    }

    pub fn replace(section: &str, payload: Value) -> Result<Self> {
        Self::new(section, PatchOp::Replace, payload)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatchSet {
    entries: Vec<PatchEntry>,
}

impl PatchSet {
    pub fn new(entries: Vec<PatchEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[PatchEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::parse(Path::new("<inline>"), text)
    }

    /// Load a declarative patch file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| CatalogError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &text)
    }

    fn parse(path: &Path, text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|source| CatalogError::InvalidPatchFile {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Sections this set would create on `catalog`: replace targets that
    /// are not already present, deduplicated, in patch order.
    pub fn introduced_sections(&self, catalog: &Catalog) -> Vec<String> {
        let mut introduced: Vec<String> = Vec::new();
        for entry in &self.entries {
            if entry.op == PatchOp::Replace
                && !catalog.contains_section(&entry.section)
                && !introduced.contains(&entry.section)
            {
                introduced.push(entry.section.clone());
            }
        }
        introduced
    }
}

/// What a single entry did to its section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryOutcome {
    pub section: String,
    pub op: PatchOp,
    /// Keys that did not exist in the section before the entry.
    pub added: usize,
    /// Keys whose previous value was overwritten (merge only).
    pub overwritten: usize,
    /// Keys discarded by a replace.
    pub dropped: usize,
    /// Whether the entry introduced the section.
    pub created: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplySummary {
    pub outcomes: Vec<EntryOutcome>,
}

impl ApplySummary {
    pub fn created_sections(&self) -> impl Iterator<Item = &str> {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.created)
            .map(|outcome| outcome.section.as_str())
    }

    pub fn keys_written(&self) -> usize {
        self.outcomes
            .iter()
            .map(|outcome| outcome.added + outcome.overwritten)
            .sum()
    }
}

/// Apply every entry of `patches` to `catalog`, in order.
///
/// Stops at the first failing entry. Entries before it remain applied.
pub fn apply_patch_set(catalog: &mut Catalog, patches: &PatchSet) -> Result<ApplySummary> {
    let mut summary = ApplySummary::default();
    for (index, entry) in patches.entries().iter().enumerate() {
        let outcome = apply_entry(catalog, index, entry)?;
        debug!(
            index,
            section = %outcome.section,
            op = outcome.op.as_str(),
            added = outcome.added,
            overwritten = outcome.overwritten,
            dropped = outcome.dropped,
            created = outcome.created,
            "applied patch entry"
        );
        summary.outcomes.push(outcome);
    }
    Ok(summary)
}

fn apply_entry(catalog: &mut Catalog, index: usize, entry: &PatchEntry) -> Result<EntryOutcome> {
    match entry.op {
        PatchOp::Merge => merge_section(catalog, index, entry),
        PatchOp::Replace => Ok(replace_section(catalog, entry)),
    }
}

fn merge_section(catalog: &mut Catalog, index: usize, entry: &PatchEntry) -> Result<EntryOutcome> {
    let Some(existing) = catalog.section_mut(&entry.section) else {
        return Err(CatalogError::MissingSection {
            index,
            section: entry.section.clone(),
        });
    };
    let Value::Object(target) = existing else {
        return Err(CatalogError::SectionNotMapping {
            index,
            section: entry.section.clone(),
        });
    };

    let mut added = 0;
    let mut overwritten = 0;
    // Shallow: a nested mapping in the payload replaces the old value as a
    // whole.
    for (key, value) in &entry.payload {
        match target.insert(key.clone(), value.clone()) {
            Some(_) => overwritten += 1,
            None => added += 1,
        }
    }

    Ok(EntryOutcome {
        section: entry.section.clone(),
        op: PatchOp::Merge,
        added,
        overwritten,
        dropped: 0,
        created: false,
    })
}

fn replace_section(catalog: &mut Catalog, entry: &PatchEntry) -> EntryOutcome {
    let previous = catalog.set_section(&entry.section, entry.payload.clone());
    let dropped = match &previous {
        Some(Value::Object(old)) => old
            .keys()
            .filter(|key| !entry.payload.contains_key(key.as_str()))
            .count(),
        Some(_) | None => 0,
    };
    let added = match &previous {
        Some(Value::Object(old)) => entry
            .payload
            .keys()
            .filter(|key| !old.contains_key(key.as_str()))
            .count(),
        Some(_) | None => entry.payload.len(),
    };

    EntryOutcome {
        section: entry.section.clone(),
        op: PatchOp::Replace,
        added,
        overwritten: 0,
        dropped,
        created: previous.is_none(),
    }
}
