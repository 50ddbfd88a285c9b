//! Individual validation checks.

use crate::parser::span::Spanned;
use crate::parser::{parse_path_data_with_outcome, StopReason};
use crate::types::PathItem;

use super::warning::{Diagnostic, ValidationResult};

/// Check that a path data entry parses to the end.
pub fn check_truncation(entry: &Spanned<String>) -> ValidationResult {
    let mut result = ValidationResult::new();
    let outcome = parse_path_data_with_outcome(&entry.value);

    match outcome.stop {
        Some(stop) => {
            let span = entry.span.sub_span(&entry.value, stop.offset, 1);
            let kept = outcome.items.len();
            let mut diagnostic = Diagnostic::error(
                "pathmin::validate::truncated",
                format!(
                    "{} at {}; only {} command(s) before it are kept",
                    stop.reason, span.start, kept
                ),
            )
            .with_span(span);
            if let Some(help) = help_for(stop.reason) {
                diagnostic = diagnostic.with_help(help);
            }
            result.push(diagnostic);
        }
        None if outcome.items.is_empty() => {
            result.push(
                Diagnostic::warning(
                    "pathmin::validate::empty",
                    format!("path data at {} draws nothing", entry.span.start),
                )
                .with_span(entry.span),
            );
        }
        None => {}
    }

    result
}

fn help_for(reason: StopReason) -> Option<&'static str> {
    match reason {
        StopReason::MissingMoveto | StopReason::ArgumentsBeforeCommand => {
            Some("Start the path with an M or m command")
        }
        StopReason::DoubleComma | StopReason::MisplacedComma | StopReason::CommaBeforeCommand => {
            Some("Commas may only separate two arguments")
        }
        StopReason::IncompleteArguments | StopReason::UnexpectedEnd => {
            Some("Check the argument count of the previous command")
        }
        StopReason::SignedArcRadius => Some("Arc radii are written without + or -"),
        StopReason::InvalidArcFlag => Some("Arc flags are a single 0 or 1"),
        StopReason::UnexpectedArgument | StopReason::InvalidNumber => None,
    }
}

/// Check that a sequence starts with a moveto.
pub fn check_leading_moveto(items: &[PathItem]) -> ValidationResult {
    let mut result = ValidationResult::new();

    if let Some(first) = items.first() {
        if !first.command.is_moveto() {
            result.push(
                Diagnostic::error(
                    "pathmin::validate::leading-moveto",
                    format!("path data starts with {} instead of a moveto", first.command),
                )
                .with_help("Insert an M command before it"),
            );
        }
    }

    result
}

/// Check every record's argument count against its command.
pub fn check_arity(items: &[PathItem]) -> ValidationResult {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| !item.has_valid_arity())
        .map(|(index, item)| {
            Diagnostic::error(
                "pathmin::validate::arity",
                format!(
                    "record {} ({}) has {} argument(s), expected a multiple of {}",
                    index,
                    item.command,
                    item.args.len(),
                    item.command.arity()
                ),
            )
        })
        .collect()
}

/// Check that arc flag arguments are 0 or 1.
pub fn check_arc_flags(items: &[PathItem]) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (index, item) in items.iter().enumerate().filter(|(_, i)| i.command.is_arc()) {
        let flags = item.args.iter().enumerate().filter(|(position, value)| {
            matches!(position % 7, 3 | 4) && **value != 0.0 && **value != 1.0
        });

        result.extend(flags.map(|(position, value)| {
            Diagnostic::error(
                "pathmin::validate::arc-flag",
                format!(
                    "record {} ({}) has flag value {} at argument {}",
                    index, item.command, value, position
                ),
            )
        }));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::span::Span;
    use crate::types::Command;

    fn entry(text: &str) -> Spanned<String> {
        Spanned::new(text.to_string(), Span::from_offsets(text, 0, text.len()))
    }

    #[test]
    fn test_truncation_clean() {
        assert!(check_truncation(&entry("M0 0L1 1z")).is_ok());
    }

    #[test]
    fn test_truncation_reported_with_span() {
        let result = check_truncation(&entry("M0 0A5,5,0,2,1,10,10"));

        let d = result.iter().next().unwrap();
        assert_eq!(d.code, "pathmin::validate::truncated");
        assert_eq!(d.span.unwrap().start.offset, 11);
        assert_eq!(d.help.as_deref(), Some("Arc flags are a single 0 or 1"));
        assert!(d.message.contains("only 1 command(s)"));
    }

    #[test]
    fn test_empty_entry_warns() {
        let result = check_truncation(&entry("   "));
        assert!(result.has_warnings());
        assert!(!result.has_errors());
    }

    #[test]
    fn test_leading_moveto() {
        let items = vec![PathItem::new(Command::LineTo, vec![1.0, 1.0])];
        assert!(check_leading_moveto(&items).has_errors());
        assert!(check_leading_moveto(&[]).is_ok());
    }

    #[test]
    fn test_arity() {
        let items = vec![
            PathItem::new(Command::MoveTo, vec![0.0, 0.0]),
            PathItem::new(Command::CurveTo, vec![1.0, 2.0, 3.0]),
            PathItem::new(Command::ClosePath, vec![]),
        ];

        let result = check_arity(&items);

        assert_eq!(result.error_count(), 1);
        assert!(result.iter().next().unwrap().message.starts_with("record 1 (C)"));
    }

    #[test]
    fn test_arc_flags() {
        let items = vec![
            PathItem::new(Command::MoveTo, vec![0.0, 0.0]),
            PathItem::new(
                Command::ArcRel,
                vec![1.0, 1.0, 0.0, 0.0, 1.0, 2.0, 2.0, 1.0, 1.0, 0.0, 2.0, 0.5, 3.0, 3.0],
            ),
        ];

        let result = check_arc_flags(&items);

        assert_eq!(result.error_count(), 2);
    }
}
