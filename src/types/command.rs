//! Path command codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PathminError, Result};

/// One of the twenty path data command letters.
///
/// Upper case letters use absolute coordinates, lower case letters are
/// relative to the current point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "char", try_from = "char")]
pub enum Command {
    MoveTo,
    MoveToRel,
    ClosePath,
    ClosePathRel,
    LineTo,
    LineToRel,
    Horizontal,
    HorizontalRel,
    Vertical,
    VerticalRel,
    CurveTo,
    CurveToRel,
    SmoothCurveTo,
    SmoothCurveToRel,
    Quadratic,
    QuadraticRel,
    SmoothQuadratic,
    SmoothQuadraticRel,
    Arc,
    ArcRel,
}

impl Command {
    /// All commands in letter order `M m Z z L l H h V v C c S s Q q T t A a`.
    pub const ALL: [Command; 20] = [
        Command::MoveTo,
        Command::MoveToRel,
        Command::ClosePath,
        Command::ClosePathRel,
        Command::LineTo,
        Command::LineToRel,
        Command::Horizontal,
        Command::HorizontalRel,
        Command::Vertical,
        Command::VerticalRel,
        Command::CurveTo,
        Command::CurveToRel,
        Command::SmoothCurveTo,
        Command::SmoothCurveToRel,
        Command::Quadratic,
        Command::QuadraticRel,
        Command::SmoothQuadratic,
        Command::SmoothQuadraticRel,
        Command::Arc,
        Command::ArcRel,
    ];

    /// Look up the command for a letter.
    pub fn from_char(c: char) -> Option<Self> {
        let command = match c {
            'M' => Command::MoveTo,
            'm' => Command::MoveToRel,
            'Z' => Command::ClosePath,
            'z' => Command::ClosePathRel,
            'L' => Command::LineTo,
            'l' => Command::LineToRel,
            'H' => Command::Horizontal,
            'h' => Command::HorizontalRel,
            'V' => Command::Vertical,
            'v' => Command::VerticalRel,
            'C' => Command::CurveTo,
            'c' => Command::CurveToRel,
            'S' => Command::SmoothCurveTo,
            's' => Command::SmoothCurveToRel,
            'Q' => Command::Quadratic,
            'q' => Command::QuadraticRel,
            'T' => Command::SmoothQuadratic,
            't' => Command::SmoothQuadraticRel,
            'A' => Command::Arc,
            'a' => Command::ArcRel,
            _ => return None,
        };
        Some(command)
    }

    /// The letter for this command.
    pub const fn as_char(self) -> char {
        match self {
            Command::MoveTo => 'M',
            Command::MoveToRel => 'm',
            Command::ClosePath => 'Z',
            Command::ClosePathRel => 'z',
            Command::LineTo => 'L',
            Command::LineToRel => 'l',
            Command::Horizontal => 'H',
            Command::HorizontalRel => 'h',
            Command::Vertical => 'V',
            Command::VerticalRel => 'v',
            Command::CurveTo => 'C',
            Command::CurveToRel => 'c',
            Command::SmoothCurveTo => 'S',
            Command::SmoothCurveToRel => 's',
            Command::Quadratic => 'Q',
            Command::QuadraticRel => 'q',
            Command::SmoothQuadratic => 'T',
            Command::SmoothQuadraticRel => 't',
            Command::Arc => 'A',
            Command::ArcRel => 'a',
        }
    }

    /// Number of arguments one record of this command carries.
    pub const fn arity(self) -> usize {
        match self {
            Command::ClosePath | Command::ClosePathRel => 0,
            Command::Horizontal
            | Command::HorizontalRel
            | Command::Vertical
            | Command::VerticalRel => 1,
            Command::MoveTo
            | Command::MoveToRel
            | Command::LineTo
            | Command::LineToRel
            | Command::SmoothQuadratic
            | Command::SmoothQuadraticRel => 2,
            Command::SmoothCurveTo
            | Command::SmoothCurveToRel
            | Command::Quadratic
            | Command::QuadraticRel => 4,
            Command::CurveTo | Command::CurveToRel => 6,
            Command::Arc | Command::ArcRel => 7,
        }
    }

    /// Whether the command uses relative coordinates.
    pub fn is_relative(self) -> bool {
        self.as_char().is_ascii_lowercase()
    }

    pub fn is_moveto(self) -> bool {
        matches!(self, Command::MoveTo | Command::MoveToRel)
    }

    pub fn is_arc(self) -> bool {
        matches!(self, Command::Arc | Command::ArcRel)
    }

    /// The command that extra argument groups after this one stand for.
    ///
    /// Coordinate pairs following a moveto are implicit linetos of the same
    /// polarity; every other command simply repeats.
    pub fn implicit_successor(self) -> Self {
        match self {
            Command::MoveTo => Command::LineTo,
            Command::MoveToRel => Command::LineToRel,
            other => other,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl From<Command> for char {
    fn from(command: Command) -> Self {
        command.as_char()
    }
}

impl TryFrom<char> for Command {
    type Error = PathminError;

    fn try_from(c: char) -> Result<Self> {
        Command::from_char(c).ok_or_else(|| PathminError::Parse {
            message: format!("Unknown path command: {:?}", c),
            help: Some("Use one of M m Z z L l H h V v C c S s Q q T t A a".to_string()),
        })
    }
}

impl FromStr for Command {
    type Err = PathminError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Command::try_from(c),
            _ => Err(PathminError::Parse {
                message: format!("Invalid path command: {:?}", s),
                help: Some("A command is a single letter".to_string()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_round_trip() {
        for command in Command::ALL {
            assert_eq!(Command::from_char(command.as_char()), Some(command));
        }
    }

    #[test]
    fn test_unknown_letter() {
        assert_eq!(Command::from_char('X'), None);
        assert_eq!(Command::from_char('e'), None);
        assert_eq!(Command::from_char(','), None);
    }

    #[test]
    fn test_arity_table() {
        let expected = [
            ('M', 2),
            ('m', 2),
            ('Z', 0),
            ('z', 0),
            ('L', 2),
            ('l', 2),
            ('H', 1),
            ('h', 1),
            ('V', 1),
            ('v', 1),
            ('C', 6),
            ('c', 6),
            ('S', 4),
            ('s', 4),
            ('Q', 4),
            ('q', 4),
            ('T', 2),
            ('t', 2),
            ('A', 7),
            ('a', 7),
        ];

        for (letter, arity) in expected {
            let command = Command::from_char(letter).unwrap();
            assert_eq!(command.arity(), arity, "arity of {}", letter);
        }
    }

    #[test]
    fn test_relative() {
        assert!(Command::MoveToRel.is_relative());
        assert!(Command::ArcRel.is_relative());
        assert!(!Command::MoveTo.is_relative());
        assert!(!Command::ClosePath.is_relative());
    }

    #[test]
    fn test_implicit_successor() {
        assert_eq!(Command::MoveTo.implicit_successor(), Command::LineTo);
        assert_eq!(Command::MoveToRel.implicit_successor(), Command::LineToRel);
        assert_eq!(Command::CurveTo.implicit_successor(), Command::CurveTo);
        assert_eq!(Command::ClosePath.implicit_successor(), Command::ClosePath);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("A".parse::<Command>().unwrap(), Command::Arc);
        assert_eq!(" q ".parse::<Command>().unwrap(), Command::QuadraticRel);
        assert!("".parse::<Command>().is_err());
        assert!("ML".parse::<Command>().is_err());
        assert!("x".parse::<Command>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Command::SmoothCurveToRel.to_string(), "s");
        assert_eq!(Command::Vertical.to_string(), "V");
    }

    #[test]
    fn test_serde_as_letter() {
        let json = serde_json::to_string(&Command::CurveToRel).unwrap();
        assert_eq!(json, "\"c\"");

        let command: Command = serde_json::from_str("\"H\"").unwrap();
        assert_eq!(command, Command::Horizontal);

        assert!(serde_json::from_str::<Command>("\"K\"").is_err());
    }
}
