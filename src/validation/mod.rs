//! Validation for path data.
//!
//! Two entry points: [`validate_path_file`] checks the raw strings of a
//! path list, [`validate_items`] checks records handed over by other tools
//! (for example JSON edited outside pathmin) before they are serialized.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::discovery::PathFile;
use crate::output::{display_path, Printer};
use crate::types::PathItem;

/// Run the string checks against every entry of a path list.
pub fn validate_path_file(file: &PathFile) -> ValidationResult {
    let mut result = ValidationResult::new();

    for entry in &file.entries {
        result.merge(checks::check_truncation(entry));
    }

    result
}

/// Run the record checks against a command sequence.
pub fn validate_items(items: &[PathItem]) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_leading_moveto(items));
    result.merge(checks::check_arity(items));
    result.merge(checks::check_arc_flags(items));

    result
}

/// Print diagnostics for one file to stderr.
pub fn print_diagnostics(file: &std::path::Path, result: &ValidationResult, printer: &Printer) {
    let path = display_path(file);

    for d in result.iter() {
        let location = match d.span {
            Some(span) => format!("{}:{}", path, span.start),
            None => path.clone(),
        };
        let label = printer.severity(d.severity.as_str(), d.is_error());
        eprintln!("{}[{}]: {}", label, d.code, d.message);
        eprintln!("  {} {}", printer.dim("-->"), location);
        if let Some(help) = &d.help {
            eprintln!("  {} {}", printer.dim("help:"), help);
        }
    }
}
