//! Path data parser.
//!
//! Parses the SVG path mini-language into a sequence of [`PathItem`]s.
//! The parser never fails: on the first invalid construct it stops and
//! keeps every record completed so far, the way browsers render the valid
//! prefix of a broken path. [`parse_path_data_with_outcome`] additionally
//! reports where and why scanning stopped.

use std::fmt;

use crate::types::{Command, PathData, PathItem};

use super::number::read_number;

/// Why the parser stopped before the end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The first command is not a moveto.
    MissingMoveto,
    /// A number appeared before any command letter.
    ArgumentsBeforeCommand,
    /// Two commas in a row.
    DoubleComma,
    /// A comma where no argument precedes it.
    MisplacedComma,
    /// A comma directly before a command letter.
    CommaBeforeCommand,
    /// A command letter while the previous command still waits for arguments.
    IncompleteArguments,
    /// An argument after a command that takes none.
    UnexpectedArgument,
    /// A character that does not start a valid number.
    InvalidNumber,
    /// An arc radius written with an explicit sign.
    SignedArcRadius,
    /// An arc flag other than `0` or `1`.
    InvalidArcFlag,
    /// Input ended in the middle of an argument list.
    UnexpectedEnd,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            StopReason::MissingMoveto => "path data must start with a moveto command",
            StopReason::ArgumentsBeforeCommand => "argument before any command",
            StopReason::DoubleComma => "two consecutive commas",
            StopReason::MisplacedComma => "comma without a preceding argument",
            StopReason::CommaBeforeCommand => "comma before a command letter",
            StopReason::IncompleteArguments => "command started before previous arguments were complete",
            StopReason::UnexpectedArgument => "argument after a command that takes none",
            StopReason::InvalidNumber => "invalid number",
            StopReason::SignedArcRadius => "arc radius must not carry a sign",
            StopReason::InvalidArcFlag => "arc flag must be 0 or 1",
            StopReason::UnexpectedEnd => "unexpected end of path data",
        };
        f.write_str(message)
    }
}

/// Where and why parsing stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stop {
    /// Byte offset of the offending character (input length for `UnexpectedEnd`).
    pub offset: usize,
    pub reason: StopReason,
}

impl Stop {
    fn new(offset: usize, reason: StopReason) -> Self {
        Self { offset, reason }
    }
}

/// The records parsed from a string plus the truncation point, if any.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParseOutcome {
    pub items: PathData,
    pub stop: Option<Stop>,
}

impl ParseOutcome {
    /// Whether the whole input was consumed without error.
    pub fn is_complete(&self) -> bool {
        self.stop.is_none()
    }
}

/// Parse path data, keeping the longest valid prefix.
pub fn parse_path_data(text: &str) -> PathData {
    parse_path_data_with_outcome(text).items
}

/// Parse path data and report where scanning stopped.
pub fn parse_path_data_with_outcome(text: &str) -> ParseOutcome {
    let mut scanner = Scanner::new(text);
    let stop = scanner.run().err();

    if let Some(stop) = stop {
        tracing::debug!(
            offset = stop.offset,
            reason = %stop.reason,
            records = scanner.items.len(),
            "path data truncated"
        );
    }

    ParseOutcome {
        items: scanner.items,
        stop,
    }
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Single-pass cursor over the input.
struct Scanner<'a> {
    text: &'a str,
    items: PathData,
    command: Option<Command>,
    args: Vec<f64>,
    can_have_comma: bool,
    had_comma: bool,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            items: Vec::new(),
            command: None,
            args: Vec::new(),
            can_have_comma: false,
            had_comma: false,
        }
    }

    fn run(&mut self) -> Result<(), Stop> {
        let bytes = self.text.as_bytes();
        let mut cursor = 0;

        while let Some(&byte) = bytes.get(cursor) {
            let c = byte as char;

            if is_whitespace(c) {
                cursor += 1;
                continue;
            }

            if c == ',' && self.can_have_comma {
                if self.had_comma {
                    return Err(Stop::new(cursor, StopReason::DoubleComma));
                }
                self.had_comma = true;
                cursor += 1;
                continue;
            }

            if let Some(command) = Command::from_char(c) {
                self.start_command(command, cursor)?;
                cursor += 1;
                continue;
            }

            cursor = self.read_argument(c, cursor)?;
        }

        if !self.args.is_empty() || self.had_comma {
            return Err(Stop::new(bytes.len(), StopReason::UnexpectedEnd));
        }

        Ok(())
    }

    fn start_command(&mut self, command: Command, cursor: usize) -> Result<(), Stop> {
        if self.had_comma {
            return Err(Stop::new(cursor, StopReason::CommaBeforeCommand));
        }

        match self.command {
            None if !command.is_moveto() => {
                return Err(Stop::new(cursor, StopReason::MissingMoveto));
            }
            Some(_) if !self.args.is_empty() => {
                return Err(Stop::new(cursor, StopReason::IncompleteArguments));
            }
            _ => {}
        }

        self.command = Some(command);
        self.args.clear();
        self.can_have_comma = false;

        if command.arity() == 0 {
            self.items.push(PathItem::new(command, Vec::new()));
        }

        Ok(())
    }

    /// Read one argument for the active command, returning the next cursor.
    fn read_argument(&mut self, c: char, cursor: usize) -> Result<usize, Stop> {
        let Some(command) = self.command else {
            let reason = if c == ',' {
                StopReason::MisplacedComma
            } else {
                StopReason::ArgumentsBeforeCommand
            };
            return Err(Stop::new(cursor, reason));
        };

        if c == ',' {
            return Err(Stop::new(cursor, StopReason::MisplacedComma));
        }

        if command.arity() == 0 {
            return Err(Stop::new(cursor, StopReason::UnexpectedArgument));
        }

        let (value, next) = if command.is_arc() {
            self.read_arc_argument(c, cursor)?
        } else {
            read_number(self.text, cursor).ok_or(Stop::new(cursor, StopReason::InvalidNumber))?
        };

        self.args.push(value);
        self.can_have_comma = true;
        self.had_comma = false;

        if self.args.len() == command.arity() {
            let args = std::mem::take(&mut self.args);
            self.items.push(PathItem::new(command, args));
            self.command = Some(command.implicit_successor());
        }

        Ok(next)
    }

    /// Arc arguments: unsigned radii, rotation, two single-digit flags, endpoint.
    fn read_arc_argument(&self, c: char, cursor: usize) -> Result<(f64, usize), Stop> {
        match self.args.len() {
            0 | 1 if c == '+' || c == '-' => Err(Stop::new(cursor, StopReason::SignedArcRadius)),
            3 | 4 => match c {
                '0' => Ok((0.0, cursor + 1)),
                '1' => Ok((1.0, cursor + 1)),
                _ => Err(Stop::new(cursor, StopReason::InvalidArcFlag)),
            },
            _ => read_number(self.text, cursor).ok_or(Stop::new(cursor, StopReason::InvalidNumber)),
        }
    }
}
