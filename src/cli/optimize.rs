//! Optimize command implementation.
//!
//! Parses every entry of every path list and writes the minified strings to
//! the output directory, one file per input.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::discovery::{discover, discover_paths, load_path_file, DiscoveryResult, PathFile, PATH_LIST_EXTENSION};
use crate::error::{PathminError, Result};
use crate::output::{display_path, plural, savings, Printer};
use crate::parser::parse_path_data_with_outcome;
use crate::render::{stringify_path_data, StringifyOptions};

/// Minify path data from path list files or a literal string
#[derive(Args, Debug)]
pub struct OptimizeArgs {
    /// Path list files or directories (default: sources from pathmin.yaml)
    pub inputs: Vec<PathBuf>,

    /// Optimize this path data string and print the result
    #[arg(long, short, conflicts_with = "inputs")]
    pub data: Option<String>,

    /// Fractional digits to round coordinates to
    #[arg(long, short)]
    pub precision: Option<u32>,

    /// Fuse arc flags with neighbouring numbers (a20 60 45 0130 20)
    #[arg(long)]
    pub no_space_after_flags: bool,

    /// Output directory (default: manifest output, or dist)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Print optimized path data to stdout instead of writing files
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

impl OptimizeArgs {
    /// Command line flags layered over the manifest defaults.
    fn options(&self, discovery: Option<&DiscoveryResult>) -> StringifyOptions {
        let base = discovery
            .map(|d| d.manifest.stringify_options())
            .unwrap_or_default();

        StringifyOptions {
            precision: self.precision.or(base.precision),
            disable_space_after_flags: self.no_space_after_flags || base.disable_space_after_flags,
        }
    }
}

/// The optimized entries of one path list.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizedFile {
    pub lines: Vec<String>,
    /// Entries whose invalid tail was dropped.
    pub truncated: usize,
    /// Total entry bytes before optimizing.
    pub before: usize,
    /// Total entry bytes after optimizing.
    pub after: usize,
}

impl OptimizedFile {
    /// File contents: one entry per line with a trailing newline.
    pub fn contents(&self) -> String {
        let mut contents = self.lines.join("\n");
        if !contents.is_empty() {
            contents.push('\n');
        }
        contents
    }
}

/// Optimize every entry of a loaded path list.
pub fn optimize_file(file: &PathFile, options: &StringifyOptions) -> OptimizedFile {
    let mut result = OptimizedFile {
        lines: Vec::with_capacity(file.entries.len()),
        truncated: 0,
        before: 0,
        after: 0,
    };

    for entry in &file.entries {
        let outcome = parse_path_data_with_outcome(&entry.value);
        if !outcome.is_complete() {
            result.truncated += 1;
        }

        let line = stringify_path_data(&outcome.items, options);
        result.before += entry.value.len();
        result.after += line.len();
        result.lines.push(line);
    }

    result
}

pub fn run(args: OptimizeArgs, printer: &Printer) -> Result<()> {
    if let Some(data) = &args.data {
        let options = args.options(None);
        let outcome = parse_path_data_with_outcome(data);
        if let Some(stop) = outcome.stop {
            printer.warning("Truncated", &format!("{} at byte {}", stop.reason, stop.offset));
        }
        println!("{}", stringify_path_data(&outcome.items, &options));
        return Ok(());
    }

    let discovery = if args.inputs.is_empty() {
        discover(".")?
    } else {
        discover_paths(&args.inputs)?
    };

    if discovery.scan.is_empty() {
        return Err(PathminError::Optimize {
            message: "No path list files found".to_string(),
            help: Some(format!("Path lists use the .{} extension", PATH_LIST_EXTENSION)),
        });
    }

    let options = args.options(Some(&discovery));
    let output_dir = args.output.clone().unwrap_or_else(|| {
        if discovery.has_manifest {
            discovery.root.join(&discovery.manifest.output)
        } else {
            discovery.manifest.output.clone()
        }
    });

    if !args.stdout && !output_dir.exists() {
        fs::create_dir_all(&output_dir).map_err(|e| PathminError::Io {
            path: output_dir.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    tracing::debug!(?options, output = %output_dir.display(), "optimizing");

    let mut total_before = 0;
    let mut total_after = 0;

    for path in &discovery.scan.files {
        let file = load_path_file(path)?;
        let optimized = optimize_file(&file, &options);

        total_before += optimized.before;
        total_after += optimized.after;

        if optimized.truncated > 0 {
            printer.warning(
                "Truncated",
                &format!(
                    "{} in {} (run `pathmin validate` for details)",
                    plural(optimized.truncated, "entry", "entries"),
                    display_path(path)
                ),
            );
        }

        if args.stdout {
            print!("{}", optimized.contents());
            continue;
        }

        let output_path = output_dir.join(format!("{}.{}", file.name(), PATH_LIST_EXTENSION));
        fs::write(&output_path, optimized.contents()).map_err(|e| PathminError::Io {
            path: output_path.clone(),
            message: format!("Failed to write output: {}", e),
        })?;

        printer.status(
            "Optimized",
            &format!(
                "{} -> {} ({})",
                display_path(path),
                display_path(&output_path),
                plural(optimized.lines.len(), "entry", "entries")
            ),
        );
    }

    printer.info(
        "Finished",
        &format!(
            "{}, {}",
            plural(discovery.scan.total(), "file", "files"),
            savings(total_before, total_after)
        ),
    );

    Ok(())
}
