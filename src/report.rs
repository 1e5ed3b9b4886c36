//! Operator-facing summary of a patch run.

use crate::patch::ApplySummary;
use std::fmt;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatchReport {
    pub path: PathBuf,
    /// False for dry runs.
    pub written: bool,
    pub sections: Vec<String>,
    pub introduced: Vec<String>,
    pub entries_applied: usize,
    pub keys_written: usize,
}

impl PatchReport {
    pub fn new(path: PathBuf, written: bool, sections: Vec<String>, summary: &ApplySummary) -> Self {
        Self {
            path,
            written,
            sections,
            introduced: summary.created_sections().map(str::to_string).collect(),
            entries_applied: summary.outcomes.len(),
            keys_written: summary.keys_written(),
        }
    }
}

impl fmt::Display for PatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.written {
            writeln!(f, "Updated {}", self.path.display())?;
        } else {
            writeln!(f, "Dry run: {} left unchanged", self.path.display())?;
        }
        write!(f, "Top-level keys: [{}]", self.sections.join(", "))
    }
}
