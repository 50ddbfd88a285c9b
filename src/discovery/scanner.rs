//! File system scanner for path list files.
//!
//! Recursively scans directories for `.paths` files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::manifest::Manifest;

/// File extension of path list files.
pub const PATH_LIST_EXTENSION: &str = "paths";

/// Files found by a scan, in walk order.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub files: Vec<PathBuf>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Merge another scan result into this one, skipping duplicates.
    pub fn merge(&mut self, other: ScanResult) {
        for file in other.files {
            if !self.files.contains(&file) {
                self.files.push(file);
            }
        }
    }
}

/// Whether a file is a path list (`*.paths`).
pub fn is_path_list(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(PATH_LIST_EXTENSION)
}

/// Scan a directory for path list files.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    if !root.exists() {
        return result;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if path.is_dir() || manifest.is_excluded(path) {
            continue;
        }

        if is_path_list(path) {
            tracing::trace!(path = %path.display(), "found path list");
            result.files.push(path.to_path_buf());
        }
    }

    result
}

/// Scan multiple source paths relative to `base_path`.
pub fn scan_sources(sources: &[String], base_path: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    for source in sources {
        let source_path = if Path::new(source).is_absolute() {
            PathBuf::from(source)
        } else {
            base_path.join(source)
        };

        result.merge(scan_directory(&source_path, manifest));
    }

    result
}
