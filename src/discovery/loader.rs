//! Path list loading.
//!
//! A path list holds one path data string per line. Blank lines and lines
//! starting with `#` are skipped; surrounding whitespace is not part of the
//! entry.

use std::path::{Path, PathBuf};

use crate::error::{PathminError, Result};
use crate::parser::span::{Span, Spanned};

use super::scanner::ScanResult;

/// A loaded path list file.
#[derive(Debug, Clone)]
pub struct PathFile {
    pub path: PathBuf,
    /// Full file contents, kept for diagnostics.
    pub source: String,
    /// Path data entries with their location in `source`.
    pub entries: Vec<Spanned<String>>,
}

impl PathFile {
    /// Build a path file from in-memory contents.
    pub fn from_source(path: impl Into<PathBuf>, source: String) -> Self {
        let entries = parse_path_list(&source);
        Self {
            path: path.into(),
            source,
            entries,
        }
    }

    /// File stem used to name outputs (`arrows.paths` -> `arrows`).
    pub fn name(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "paths".to_string())
    }
}

/// Split path list contents into spanned entries.
pub fn parse_path_list(source: &str) -> Vec<Spanned<String>> {
    let mut entries = Vec::new();
    let mut offset = 0;

    for line in source.split_inclusive('\n') {
        let content = line.trim_end_matches(['\n', '\r']);
        let trimmed = content.trim();

        if !trimmed.is_empty() && !trimmed.starts_with('#') {
            let start = offset + (content.len() - content.trim_start().len());
            let span = Span::from_offsets(source, start, start + trimmed.len());
            entries.push(Spanned::new(trimmed.to_string(), span));
        }

        offset += line.len();
    }

    entries
}

/// Read and split one path list file.
pub fn load_path_file(path: &Path) -> Result<PathFile> {
    let source = std::fs::read_to_string(path).map_err(|e| PathminError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read file: {}", e),
    })?;

    let file = PathFile::from_source(path, source);
    tracing::trace!(path = %path.display(), entries = file.entries.len(), "loaded path list");
    Ok(file)
}

/// Load every file of a scan.
pub fn load_path_files(scan: &ScanResult) -> Result<Vec<PathFile>> {
    scan.files.iter().map(|path| load_path_file(path)).collect()
}
