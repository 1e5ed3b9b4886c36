#![allow(dead_code)]

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A scratch directory holding a single `en.json`.
pub struct ScratchCatalog {
    dir: TempDir,
    path: PathBuf,
}

impl ScratchCatalog {
    pub fn new(contents: &str) -> Result<Self> {
        let dir = TempDir::new().context("creating scratch dir")?;
        let path = dir.path().join("en.json");
        fs::write(&path, contents)
            .with_context(|| format!("writing fixture {}", path.display()))?;
        Ok(Self { dir, path })
    }

    pub fn from_fixture(name: &str) -> Result<Self> {
        let contents = fs::read_to_string(fixture_path(name))
            .with_context(|| format!("reading fixture {name}"))?;
        Self::new(&contents)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path).with_context(|| format!("reading {}", self.path.display()))
    }
}

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

pub fn patch_catalog_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_patch-catalog"))
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to spawn {:?}", cmd))?;
    Ok(output)
}
