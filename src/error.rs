use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::parser::{Stop, StopReason};

/// Errors from the file, manifest and command line layers.
///
/// The parser and serializer never fail: a truncated parse is reported
/// through [`ParseOutcome`](crate::parser::ParseOutcome) and only turned
/// into an error here when a caller asks for strict input.
#[derive(Error, Diagnostic, Debug)]
pub enum PathminError {
    #[error(transparent)]
    #[diagnostic(code(pathmin::io))]
    IoError(#[from] std::io::Error),

    #[error("{}: {message}", .path.display())]
    #[diagnostic(code(pathmin::io))]
    Io { path: PathBuf, message: String },

    #[error("{message}")]
    #[diagnostic(code(pathmin::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("path data truncated: {reason}")]
    #[diagnostic(code(pathmin::truncated))]
    Truncated {
        reason: StopReason,
        #[source_code]
        source_code: NamedSource<String>,
        #[label("parsing stops here")]
        at: SourceSpan,
        #[help]
        help: Option<String>,
    },

    #[error("{message}")]
    #[diagnostic(code(pathmin::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("{message}")]
    #[diagnostic(code(pathmin::optimize))]
    Optimize {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl PathminError {
    /// Point at the character where parsing of `source` stopped.
    pub fn truncated(name: &str, source: &str, stop: Stop) -> Self {
        // UnexpectedEnd sits one past the input, which miette renders as an
        // empty label at the end of the line
        let len = source[stop.offset..]
            .chars()
            .next()
            .map_or(0, char::len_utf8);
        let kept = source[..stop.offset].trim_end();

        PathminError::Truncated {
            reason: stop.reason,
            source_code: NamedSource::new(name, source.to_string()),
            at: (stop.offset, len).into(),
            help: Some(format!("only `{}` is kept", kept)),
        }
    }
}

pub type Result<T> = std::result::Result<T, PathminError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_points_at_stop() {
        let stop = Stop {
            offset: 4,
            reason: StopReason::InvalidArcFlag,
        };

        let err = PathminError::truncated("<data>", "M0 02", stop);

        assert_eq!(err.to_string(), "path data truncated: arc flag must be 0 or 1");
        match err {
            PathminError::Truncated { at, help, .. } => {
                assert_eq!(at.offset(), 4);
                assert_eq!(at.len(), 1);
                assert_eq!(help.as_deref(), Some("only `M0 0` is kept"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_truncated_label_spans_multibyte_character() {
        let source = "M0 0 \u{2212}5";
        let outcome = crate::parser::parse_path_data_with_outcome(source);

        match PathminError::truncated("<data>", source, outcome.stop.unwrap()) {
            PathminError::Truncated { at, reason, .. } => {
                assert_eq!(reason, StopReason::InvalidNumber);
                assert_eq!(at.offset(), 5);
                assert_eq!(at.len(), 3);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_truncated_at_end_of_input() {
        let stop = Stop {
            offset: 6,
            reason: StopReason::UnexpectedEnd,
        };

        match PathminError::truncated("<data>", "M0 0 1", stop) {
            PathminError::Truncated { at, .. } => assert_eq!(at.len(), 0),
            other => panic!("unexpected {:?}", other),
        }
    }
}
