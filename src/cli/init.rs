//! Init command implementation.
//!
//! Generates a `pathmin.yaml` manifest listing the directories that hold
//! path lists.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{discover, Manifest, MANIFEST_FILENAME};
use crate::error::{PathminError, Result};
use crate::output::{display_path, plural, Printer};

/// Initialize a pathmin project by generating a pathmin.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to scan (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Default rounding precision to record
    #[arg(long, short)]
    pub precision: Option<u32>,

    /// Overwrite existing pathmin.yaml
    #[arg(long)]
    pub force: bool,
}

/// Directories (relative to `root`) that contain the given files.
fn source_dirs(root: &Path, files: &[PathBuf]) -> BTreeSet<String> {
    files
        .iter()
        .filter_map(|file| file.parent())
        .map(|parent| {
            let relative = parent.strip_prefix(root).unwrap_or(parent);
            if relative.as_os_str().is_empty() {
                ".".to_string()
            } else {
                format!("{}/", relative.display())
            }
        })
        .collect()
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(PathminError::Optimize {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    printer.status("Scanning", &display_path(&args.path));
    let discovery = discover(&args.path)?;
    let dirs = source_dirs(&discovery.root, &discovery.scan.files);

    // A single "." is the default and need not be listed
    let sources: Vec<String> = if dirs.len() == 1 && dirs.contains(".") {
        vec![]
    } else {
        dirs.iter().cloned().collect()
    };

    let manifest = Manifest {
        sources,
        precision: args.precision,
        ..Default::default()
    };

    fs::write(&manifest_path, manifest.to_yaml()?).map_err(|e| PathminError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    if !dirs.is_empty() {
        let listed: Vec<&str> = dirs.iter().map(|s| s.as_str()).collect();
        printer.info("Discovered", &listed.join(", "));
    }

    printer.status(
        "Created",
        &format!(
            "{} ({} found)",
            MANIFEST_FILENAME,
            plural(discovery.scan.total(), "path list", "path lists")
        ),
    );

    Ok(())
}
