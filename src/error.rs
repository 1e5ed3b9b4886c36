//! Error taxonomy for the catalog patcher.
//!
//! Every variant is fatal. The binary surfaces the chain and exits; the
//! library never retries.

use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a [`CatalogError`], stable for callers that
/// match on the failure class rather than on variant payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Parse,
    MissingSection,
    InvalidPatch,
    Write,
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{} could not be read", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid JSON", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog {} must contain a JSON object at the top level", path.display())]
    NotAnObject { path: PathBuf },

    #[error("patch entry {index}: cannot merge into missing section '{section}'")]
    MissingSection { index: usize, section: String },

    #[error("patch entry {index}: section '{section}' is not an object and cannot be merged into")]
    SectionNotMapping { index: usize, section: String },

    #[error("payload for section '{section}' must be a JSON object")]
    InvalidPayload { section: String },

    #[error("patch file {} is invalid", path.display())]
    InvalidPatchFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write catalog {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::NotFound { .. } => ErrorKind::NotFound,
            CatalogError::Parse { .. } | CatalogError::NotAnObject { .. } => ErrorKind::Parse,
            CatalogError::MissingSection { .. } => ErrorKind::MissingSection,
            CatalogError::SectionNotMapping { .. }
            | CatalogError::InvalidPayload { .. }
            | CatalogError::InvalidPatchFile { .. } => ErrorKind::InvalidPatch,
            CatalogError::Write { .. } => ErrorKind::Write,
        }
    }
}

pub type Result<T, E = CatalogError> = std::result::Result<T, E>;
