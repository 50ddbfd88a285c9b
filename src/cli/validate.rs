//! Validate command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::{discover, discover_paths, load_path_file};
use crate::error::{PathminError, Result};
use crate::output::{display_path, plural, Printer};
use crate::validation::{print_diagnostics, validate_path_file, ValidationResult};

/// Report path data that renderers would truncate
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path list files or directories (default: sources from pathmin.yaml)
    pub inputs: Vec<PathBuf>,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let discovery = if args.inputs.is_empty() {
        discover(".")?
    } else {
        discover_paths(&args.inputs)?
    };

    let mut total = ValidationResult::new();
    let mut entries = 0;

    for path in &discovery.scan.files {
        let file = load_path_file(path)?;
        entries += file.entries.len();

        let result = validate_path_file(&file);
        if !result.is_ok() {
            print_diagnostics(path, &result, printer);
        }
        total.merge(result);
    }

    let errors = total.error_count();
    let warnings = total.warning_count();
    let summary = format!(
        "{} in {} ({}, {})",
        plural(entries, "entry", "entries"),
        plural(discovery.scan.total(), "file", "files"),
        plural(errors, "error", "errors"),
        plural(warnings, "warning", "warnings")
    );

    if errors > 0 || (args.strict && warnings > 0) {
        printer.error("Failed", &summary);
        return Err(PathminError::Validation {
            message: format!("path data problems in {}", display_path(&discovery.root)),
            help: Some("Invalid tails are dropped by renderers and by `pathmin optimize`".to_string()),
        });
    }

    printer.status("Validated", &summary);
    Ok(())
}
