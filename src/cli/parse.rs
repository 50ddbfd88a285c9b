//! Parse command implementation.
//!
//! Prints the command records of a path data string as JSON, the format
//! `pathmin stringify` reads back.

use clap::Args;

use crate::error::{PathminError, Result};
use crate::output::{plural, Printer};
use crate::parser::parse_path_data_with_outcome;
use crate::types::PathItem;

/// Print the command records of a path data string as JSON
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Path data to parse
    pub data: String,

    /// Emit compact single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// Fail instead of printing the valid prefix when parsing stops early
    #[arg(long)]
    pub strict: bool,
}

/// Serialize records to JSON.
pub fn to_json(items: &[PathItem], compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(items)
    } else {
        serde_json::to_string_pretty(items)
    };

    json.map_err(|e| PathminError::Parse {
        message: format!("Failed to encode records: {}", e),
        help: None,
    })
}

pub fn run(args: ParseArgs, printer: &Printer) -> Result<()> {
    let outcome = parse_path_data_with_outcome(&args.data);

    if let Some(stop) = outcome.stop {
        if args.strict {
            return Err(PathminError::truncated("<data>", &args.data, stop));
        }
        printer.warning(
            "Truncated",
            &format!(
                "{} at byte {}, kept {}",
                stop.reason,
                stop.offset,
                plural(outcome.items.len(), "command", "commands")
            ),
        );
    }

    println!("{}", to_json(&outcome.items, args.compact)?);
    Ok(())
}
