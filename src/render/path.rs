//! Path data serializer.
//!
//! Writes a sequence of [`PathItem`]s back to the shortest text the path
//! grammar accepts: repeated command letters are dropped, separators are
//! only emitted where two numbers would otherwise run together, and numbers
//! use their most compact spelling.

use serde::{Deserialize, Serialize};

use crate::types::{Command, PathItem};

use super::number::round_and_format;

/// Formatting options for [`stringify_path_data`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringifyOptions {
    /// Fractional digits to round to. `None` keeps full precision.
    pub precision: Option<u32>,
    /// Fuse arc flags with their neighbours (`a20 60 45 0130 20`).
    ///
    /// Browsers accept this, many other consumers do not.
    pub disable_space_after_flags: bool,
}

impl StringifyOptions {
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn without_flag_spacing(mut self) -> Self {
        self.disable_space_after_flags = true;
        self
    }
}

/// Serialize path data to its minimal textual form.
pub fn stringify_path_data(items: &[PathItem], options: &StringifyOptions) -> String {
    let mut result = String::new();

    for item in merge_runs(items) {
        result.push(item.command.as_char());
        result.push_str(&stringify_args(item.command, &item.args, options));
    }

    result
}

/// Fuse records whose command letter need not be repeated.
///
/// Same-letter neighbours merge into one record, except movetos (a second
/// moveto starts a new subpath) and closepaths (which carry no arguments to
/// merge). A moveto absorbs the linetos of the same polarity that follow
/// it, since extra pairs after a moveto are implicit linetos.
pub fn merge_runs(items: &[PathItem]) -> Vec<PathItem> {
    let mut iter = items.iter();
    let Some(first) = iter.next() else {
        return Vec::new();
    };

    let mut pending = first.clone();
    let mut merged = Vec::new();
    for item in iter {
        debug_assert!(item.has_valid_arity(), "invalid arity for {}", item.command);

        if absorbs(pending.command, item.command) {
            pending.args.extend_from_slice(&item.args);
        } else {
            merged.push(std::mem::replace(&mut pending, item.clone()));
        }
    }
    merged.push(pending);

    merged
}

fn absorbs(pending: Command, next: Command) -> bool {
    match (pending, next) {
        (Command::MoveTo, Command::LineTo) | (Command::MoveToRel, Command::LineToRel) => true,
        _ => pending == next && !pending.is_moveto() && pending.arity() > 0,
    }
}

/// Serialize the arguments of one record.
pub fn stringify_args(command: Command, args: &[f64], options: &StringifyOptions) -> String {
    let mut result = String::new();
    let mut previous = 0.0_f64;

    for (i, &arg) in args.iter().enumerate() {
        let (text, rounded) = round_and_format(arg, options.precision);

        let fused_flag =
            options.disable_space_after_flags && command.is_arc() && matches!(i % 7, 4 | 5);
        // `.5.5` reads back as two numbers once the first has a fraction
        let packed_fraction =
            previous.fract() != 0.0 && !text.starts_with(|c: char| c.is_ascii_digit());

        if !(fused_flag || i == 0 || rounded < 0.0 || packed_fraction) {
            result.push(' ');
        }
        result.push_str(&text);
        previous = rounded;
    }

    result
}
