//! Command records.

use serde::{Deserialize, Serialize};

use super::command::Command;

/// One parsed path instruction: a command letter and its numeric arguments.
///
/// Records produced by the parser always carry exactly `command.arity()`
/// arguments. Rewrite rules may fuse several same-letter records into one,
/// in which case the argument count is a multiple of the arity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    pub command: Command,
    #[serde(default)]
    pub args: Vec<f64>,
}

/// An ordered path data sequence. Order is the drawing order.
pub type PathData = Vec<PathItem>;

impl PathItem {
    pub fn new(command: Command, args: Vec<f64>) -> Self {
        Self { command, args }
    }

    /// Check that the argument count fits the command.
    ///
    /// Zero-arity commands must carry no arguments; every other command
    /// needs a non-empty whole number of argument groups.
    pub fn has_valid_arity(&self) -> bool {
        let arity = self.command.arity();
        if arity == 0 {
            self.args.is_empty()
        } else {
            !self.args.is_empty() && self.args.len() % arity == 0
        }
    }
}
