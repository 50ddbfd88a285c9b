//! Terminal output formatting for the pathmin CLI.
//!
//! Cargo-style status lines with right-aligned coloured verbs on stderr.
//! Stdout carries only machine-readable output (path data, JSON).

use std::io::{self, IsTerminal, Write};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Terminal-aware status printer.
///
/// Colour is enabled when stderr is a terminal.
pub struct Printer {
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// A printer that never emits escape codes.
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// e.g. "  Optimizing icons.paths (12 entries)"
    pub fn status(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.print_line(CYAN, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.print_line(YELLOW, verb, message);
    }

    pub fn error(&self, verb: &str, message: &str) {
        self.print_line(RED, verb, message);
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    /// Format a diagnostic severity label with colour.
    pub fn severity(&self, label: &str, is_error: bool) -> String {
        let color = if is_error { RED } else { YELLOW };
        self.paint(&format!("{BOLD}{color}"), label)
    }

    fn paint(&self, codes: &str, text: &str) -> String {
        if self.color {
            format!("{codes}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        if self.color {
            let _ = writeln!(stderr, "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}");
        } else {
            let _ = writeln!(stderr, "{verb:>VERB_WIDTH$} {message}");
        }
    }
}

/// Pluralize a count: `plural(1, "entry", "entries")` -> "1 entry".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Describe a size change: "1200 -> 900 bytes (25.0% smaller)".
pub fn savings(before: usize, after: usize) -> String {
    if before == 0 {
        return format!("{} -> {} bytes", before, after);
    }

    let ratio = (before as f64 - after as f64) / before as f64 * 100.0;
    if ratio >= 0.0 {
        format!("{} -> {} bytes ({:.1}% smaller)", before, after, ratio)
    } else {
        format!("{} -> {} bytes ({:.1}% larger)", before, after, -ratio)
    }
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &std::path::Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "entry", "entries"), "1 entry");
        assert_eq!(plural(0, "entry", "entries"), "0 entries");
        assert_eq!(plural(3, "file", "files"), "3 files");
    }

    #[test]
    fn test_savings() {
        assert_eq!(savings(200, 150), "200 -> 150 bytes (25.0% smaller)");
        assert_eq!(savings(100, 110), "100 -> 110 bytes (10.0% larger)");
        assert_eq!(savings(0, 0), "0 -> 0 bytes");
    }

    #[test]
    fn test_plain_printer_has_no_escapes() {
        let printer = Printer::plain();
        assert_eq!(printer.dim("-->"), "-->");
        assert_eq!(printer.severity("error", true), "error");
    }

    #[test]
    fn test_display_path_absolute() {
        let p = std::path::Path::new("/nonexistent/path/to/icons.paths");
        assert_eq!(display_path(p), "/nonexistent/path/to/icons.paths");
    }
}
