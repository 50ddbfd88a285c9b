//! Project manifest (pathmin.yaml) parsing.
//!
//! The manifest sets where path lists live, where optimized output goes and
//! the default serializer options.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PathminError, Result};
use crate::render::StringifyOptions;

/// Project manifest loaded from pathmin.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Source directories to scan for `.paths` files.
    /// Defaults to current directory if empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,

    /// Output directory for optimized path lists.
    pub output: PathBuf,

    /// Fractional digits to round coordinates to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,

    /// Fuse arc flags with neighbouring numbers.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub no_space_after_flags: bool,

    /// Patterns to exclude from discovery.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub excludes: Vec<String>,
}

fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            sources: vec![],
            output: default_output(),
            precision: None,
            no_space_after_flags: false,
            excludes: vec![],
        }
    }
}

impl Manifest {
    /// Load manifest from a pathmin.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PathminError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| PathminError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check pathmin.yaml syntax".to_string()),
        })
    }

    /// Serializer options described by the manifest.
    pub fn stringify_options(&self) -> StringifyOptions {
        StringifyOptions {
            precision: self.precision,
            disable_space_after_flags: self.no_space_after_flags,
        }
    }

    /// Render the manifest as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| PathminError::Parse {
            message: format!("Failed to encode manifest: {}", e),
            help: None,
        })
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.excludes
            .iter()
            .any(|pattern| matches_pattern(&path_str, pattern))
    }

    /// Get effective source paths, defaulting to current directory.
    pub fn effective_sources(&self) -> Vec<String> {
        if self.sources.is_empty() {
            vec![".".to_string()]
        } else {
            self.sources.clone()
        }
    }
}

/// Simple glob matching: `*.ext`, `dir/*`, `**/dir/*`, or a plain substring.
fn matches_pattern(path: &str, pattern: &str) -> bool {
    if let Some(suffix) = pattern.strip_prefix("**/") {
        if let Some(dir) = suffix.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", dir)) || path.contains(&format!("/{}/", dir));
        }
        return path.ends_with(suffix);
    }

    if let Some(suffix) = pattern.strip_prefix('*') {
        if !pattern.contains('/') {
            return path.ends_with(suffix);
        }
    }

    if let Some(prefix) = pattern.strip_suffix("/*") {
        return path.starts_with(&format!("{}/", prefix)) || path.contains(&format!("/{}/", prefix));
    }

    path.contains(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_manifest() {
        let manifest = Manifest::parse("output: build").unwrap();

        assert_eq!(manifest.output, PathBuf::from("build"));
        assert!(manifest.sources.is_empty());
        assert!(manifest.precision.is_none());
        assert!(!manifest.no_space_after_flags);
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r#"
sources:
  - icons/
  - glyphs/
output: dist/paths
precision: 3
no_space_after_flags: true
excludes:
  - "*.bak"
  - "**/vendor/*"
"#;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(manifest.sources, vec!["icons/", "glyphs/"]);
        assert_eq!(manifest.output, PathBuf::from("dist/paths"));
        assert_eq!(manifest.precision, Some(3));
        assert!(manifest.no_space_after_flags);
        assert_eq!(manifest.excludes, vec!["*.bak", "**/vendor/*"]);
    }

    #[test]
    fn test_parse_empty_manifest() {
        assert_eq!(Manifest::parse("").unwrap(), Manifest::default());
    }

    #[test]
    fn test_parse_invalid_manifest() {
        let err = Manifest::parse("precision: lots").unwrap_err();
        assert!(matches!(err, PathminError::Parse { .. }));
    }

    #[test]
    fn test_to_yaml_skips_defaults() {
        let manifest = Manifest {
            sources: vec!["icons/".to_string()],
            precision: Some(3),
            ..Default::default()
        };

        let yaml = manifest.to_yaml().unwrap();

        assert!(yaml.contains("icons/"));
        assert!(yaml.contains("precision: 3"));
        assert!(!yaml.contains("excludes"));
        assert!(!yaml.contains("no_space_after_flags"));
        assert_eq!(Manifest::parse(&yaml).unwrap(), manifest);
    }

    #[test]
    fn test_stringify_options() {
        let manifest = Manifest {
            precision: Some(2),
            no_space_after_flags: true,
            ..Default::default()
        };

        let options = manifest.stringify_options();

        assert_eq!(options.precision, Some(2));
        assert!(options.disable_space_after_flags);
    }

    #[test]
    fn test_effective_sources() {
        let mut manifest = Manifest::default();
        assert_eq!(manifest.effective_sources(), vec!["."]);

        manifest.sources = vec!["icons/".to_string()];
        assert_eq!(manifest.effective_sources(), vec!["icons/"]);
    }

    #[test]
    fn test_is_excluded() {
        let manifest = Manifest {
            excludes: vec![
                "*.bak".to_string(),
                "**/vendor/*".to_string(),
                "scratch".to_string(),
            ],
            ..Default::default()
        };

        assert!(manifest.is_excluded(Path::new("icons/old.bak")));
        assert!(manifest.is_excluded(Path::new("vendor/arrows.paths")));
        assert!(manifest.is_excluded(Path::new("lib/vendor/arrows.paths")));
        assert!(manifest.is_excluded(Path::new("scratch/test.paths")));
        assert!(!manifest.is_excluded(Path::new("icons/arrows.paths")));
    }
}
