//! Diagnostics produced by the path data checks.

use std::fmt;

use crate::parser::span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One finding about a path data entry or record sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Stable code such as `pathmin::validate::truncated`.
    pub code: &'static str,
    pub message: String,
    pub help: Option<String>,
    /// Location in the path list file; absent for records read from JSON.
    pub span: Option<Span>,
}

impl Diagnostic {
    pub fn error(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, code, message.into())
    }

    pub fn warning(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, code, message.into())
    }

    fn new(severity: Severity, code: &'static str, message: String) -> Self {
        Self {
            severity,
            code,
            message,
            help: None,
            span: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)
    }
}

/// Diagnostics gathered over one or more checks, in the order found.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn has_warnings(&self) -> bool {
        self.warning_count() > 0
    }

    pub fn error_count(&self) -> usize {
        self.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.iter().filter(|d| !d.is_error()).count()
    }

    /// No diagnostics of any severity.
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn merge(&mut self, other: ValidationResult) {
        self.extend(other.diagnostics);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }
}

impl Extend<Diagnostic> for ValidationResult {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        self.diagnostics.extend(iter);
    }
}

impl FromIterator<Diagnostic> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = Diagnostic>>(iter: I) -> Self {
        Self {
            diagnostics: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::span::Location;

    #[test]
    fn test_empty_result() {
        let result = ValidationResult::new();
        assert!(result.is_ok());
        assert!(!result.has_errors());
        assert_eq!(result.error_count(), 0);
        assert_eq!(result.warning_count(), 0);
    }

    #[test]
    fn test_counts_by_severity() {
        let result: ValidationResult = [
            Diagnostic::error("pathmin::test", "broken"),
            Diagnostic::warning("pathmin::test", "odd"),
            Diagnostic::warning("pathmin::test", "odder"),
        ]
        .into_iter()
        .collect();

        assert!(result.has_errors());
        assert!(result.has_warnings());
        assert_eq!(result.error_count(), 1);
        assert_eq!(result.warning_count(), 2);
    }

    #[test]
    fn test_merge_keeps_order() {
        let mut a = ValidationResult::new();
        a.push(Diagnostic::error("pathmin::a", "error a"));

        let mut b = ValidationResult::new();
        b.push(Diagnostic::warning("pathmin::b", "warning b"));

        a.merge(b);
        let codes: Vec<_> = a.iter().map(|d| d.code).collect();
        assert_eq!(codes, vec!["pathmin::a", "pathmin::b"]);
    }

    #[test]
    fn test_builders() {
        let span = Span::new(Location::new(3, 1, 4), Location::new(4, 1, 5));
        let d = Diagnostic::error("pathmin::test", "bad flag")
            .with_help("Use 0 or 1")
            .with_span(span);

        assert_eq!(d.help.as_deref(), Some("Use 0 or 1"));
        assert_eq!(d.span, Some(span));
        assert_eq!(d.to_string(), "error[pathmin::test]: bad flag");
    }
}
