#![recursion_limit = "512"]

pub mod builtin;
pub mod catalog;
pub mod error;
pub mod logging;
pub mod patch;
pub mod report;

pub use catalog::{Catalog, DEFAULT_CATALOG_PATH};
pub use error::{CatalogError, ErrorKind};
pub use patch::{ApplySummary, EntryOutcome, PatchEntry, PatchOp, PatchSet, apply_patch_set};
pub use report::PatchReport;

use std::path::PathBuf;
use tracing::{info, warn};

/// Inputs for one Load → Apply → Save run.
#[derive(Debug, Clone)]
pub struct PatchOptions {
    pub catalog_path: PathBuf,
    pub patches: PatchSet,
    /// Apply in memory and report, but leave the file alone.
    pub dry_run: bool,
}

impl PatchOptions {
    pub fn new(catalog_path: impl Into<PathBuf>, patches: PatchSet) -> Self {
        Self {
            catalog_path: catalog_path.into(),
            patches,
            dry_run: false,
        }
    }
}

/// Load the catalog, apply the patch set in order, and write it back.
///
/// Nothing is written unless every entry applied, so a failed run leaves the
/// file as it was.
pub fn run_patch(options: &PatchOptions) -> error::Result<PatchReport> {
    let path = &options.catalog_path;
    let mut catalog = Catalog::load(path)?;
    info!(
        path = %path.display(),
        sections = catalog.len(),
        entries = options.patches.len(),
        "applying patch set"
    );

    let summary = apply_patch_set(&mut catalog, &options.patches)?;
    for section in summary.created_sections() {
        info!(section, "introduced section");
    }

    if options.dry_run {
        warn!(path = %path.display(), "dry run, catalog not written");
    } else {
        catalog.save(path)?;
    }

    let sections = catalog.section_names().map(str::to_string).collect();
    Ok(PatchReport::new(
        path.clone(),
        !options.dry_run,
        sections,
        &summary,
    ))
}
