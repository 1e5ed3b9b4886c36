//! Apply the translation patch set to a locale catalog.
//!
//! Usage:
//!   patch-catalog                      # patches ./en.json with the built-in set
//!   patch-catalog --catalog locales/en.json --dry-run
//!   patch-catalog --patches extra_keys.json

use anyhow::{Context, Result};
use clap::Parser;
use locpatch::{DEFAULT_CATALOG_PATH, PatchOptions, PatchSet, builtin, logging, run_patch};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "patch-catalog")]
#[command(about = "Merge new keys and replace sections in a translation catalog")]
struct Cli {
    /// Catalog file to patch in place.
    #[arg(long, default_value = DEFAULT_CATALOG_PATH)]
    catalog: PathBuf,
    /// Declarative patch file to apply instead of the built-in set.
    #[arg(long)]
    patches: Option<PathBuf>,
    /// Apply and report without writing the catalog.
    #[arg(long)]
    dry_run: bool,
    /// Log each applied entry.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let patches = match &cli.patches {
        Some(path) => PatchSet::from_path(path)
            .with_context(|| format!("loading patch file {}", path.display()))?,
        None => builtin::en_patch_set().context("building built-in patch set")?,
    };

    let mut options = PatchOptions::new(&cli.catalog, patches);
    options.dry_run = cli.dry_run;
    let report = run_patch(&options)
        .with_context(|| format!("patching {}", cli.catalog.display()))?;

    println!("{report}");
    Ok(())
}
