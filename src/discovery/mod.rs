//! File discovery for pathmin projects.
//!
//! Finds `.paths` files either by convention (scan the whole directory) or
//! through the `sources` listed in a `pathmin.yaml` manifest.
//!
//! # Example
//!
//! ```ignore
//! use pathmin::discovery::discover;
//!
//! let result = discover("./icons")?;
//! println!("Found {} path lists", result.scan.total());
//!
//! for file in result.load()? {
//!     println!("{}: {} entries", file.name(), file.entries.len());
//! }
//! ```

mod loader;
mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use loader::{load_path_file, load_path_files, parse_path_list, PathFile};
pub use manifest::Manifest;
pub use scanner::{is_path_list, scan_directory, scan_sources, ScanResult, PATH_LIST_EXTENSION};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "pathmin.yaml";

/// Result of discovering path lists in a project.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default if no pathmin.yaml was found).
    pub manifest: Manifest,

    /// Whether a pathmin.yaml manifest was found.
    pub has_manifest: bool,

    /// Discovered files.
    pub scan: ScanResult,
}

impl DiscoveryResult {
    /// Read every discovered file.
    pub fn load(&self) -> Result<Vec<PathFile>> {
        load_path_files(&self.scan)
    }
}

/// Discover path lists in a project directory.
///
/// Uses the `sources` of `pathmin.yaml` when present, otherwise scans the
/// whole directory.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();

    let manifest_path = root.join(MANIFEST_FILENAME);
    let (manifest, has_manifest) = if manifest_path.exists() {
        (Manifest::load(&manifest_path)?, true)
    } else {
        (Manifest::default(), false)
    };

    let sources = manifest.effective_sources();
    let scan = scan_sources(&sources, &root, &manifest);

    tracing::debug!(root = %root.display(), files = scan.total(), has_manifest, "discovery finished");

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest,
        scan,
    })
}

/// Discover path lists from explicit files and directories.
///
/// Files are taken as given, whatever their extension; directories are
/// scanned for `.paths` files. No manifest is read.
pub fn discover_paths(paths: &[PathBuf]) -> Result<DiscoveryResult> {
    let manifest = Manifest::default();
    let mut scan = ScanResult::new();

    for path in paths {
        if path.is_dir() {
            scan.merge(scan_directory(path, &manifest));
        } else {
            scan.merge(ScanResult {
                files: vec![path.clone()],
            });
        }
    }

    let root = paths
        .first()
        .and_then(|p| p.parent())
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest: false,
        scan,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_discover_without_manifest() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("icons.paths"), "M0 0\n").unwrap();

        let result = discover(dir.path()).unwrap();

        assert!(!result.has_manifest);
        assert_eq!(result.scan.total(), 1);
        assert_eq!(result.load().unwrap()[0].entries.len(), 1);
    }

    #[test]
    fn test_discover_with_manifest_sources() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("icons")).unwrap();
        fs::create_dir(dir.path().join("drafts")).unwrap();
        fs::write(dir.path().join("icons/a.paths"), "M0 0\n").unwrap();
        fs::write(dir.path().join("drafts/b.paths"), "M0 0\n").unwrap();
        fs::write(
            dir.path().join(MANIFEST_FILENAME),
            "sources:\n  - icons/\nprecision: 2\n",
        )
        .unwrap();

        let result = discover(dir.path()).unwrap();

        assert!(result.has_manifest);
        assert_eq!(result.manifest.precision, Some(2));
        assert_eq!(result.scan.total(), 1);
        assert!(result.scan.files[0].ends_with("a.paths"));
    }

    #[test]
    fn test_discover_paths_mixed() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("icons")).unwrap();
        fs::write(dir.path().join("icons/a.paths"), "M0 0\n").unwrap();
        fs::write(dir.path().join("single.txt"), "M0 0\n").unwrap();

        let paths = vec![dir.path().join("icons"), dir.path().join("single.txt")];
        let result = discover_paths(&paths).unwrap();

        assert_eq!(result.scan.total(), 2);
        assert!(!result.has_manifest);
    }
}
