//! Stringify command implementation.
//!
//! Reads JSON command records (as printed by `pathmin parse`, possibly
//! edited by other tools) and prints minimal path data.

use std::io::Read;
use std::path::PathBuf;

use clap::Args;

use crate::error::{PathminError, Result};
use crate::output::{plural, Printer};
use crate::render::{stringify_path_data, StringifyOptions};
use crate::types::PathItem;
use crate::validation::{print_diagnostics, validate_items};

/// Serialize JSON command records to minimal path data
#[derive(Args, Debug)]
pub struct StringifyArgs {
    /// JSON file with an array of records (default: stdin)
    pub file: Option<PathBuf>,

    /// Fractional digits to round coordinates to
    #[arg(long, short)]
    pub precision: Option<u32>,

    /// Fuse arc flags with neighbouring numbers
    #[arg(long)]
    pub no_space_after_flags: bool,
}

/// Decode a JSON array of records.
pub fn from_json(json: &str) -> Result<Vec<PathItem>> {
    serde_json::from_str(json).map_err(|e| PathminError::Parse {
        message: format!("Invalid path records: {}", e),
        help: Some(r#"Expected an array like [{"command":"M","args":[0,0]}]"#.to_string()),
    })
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => {
            std::fs::read_to_string(path).map_err(|e| PathminError::Io {
                path: path.clone(),
                message: format!("Failed to read file: {}", e),
            })
        }
        _ => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

pub fn run(args: StringifyArgs, printer: &Printer) -> Result<()> {
    let json = read_input(args.file.as_ref())?;
    let items = from_json(&json)?;

    let result = validate_items(&items);
    if result.has_errors() {
        let source = args.file.clone().unwrap_or_else(|| PathBuf::from("<stdin>"));
        print_diagnostics(&source, &result, printer);
        return Err(PathminError::Validation {
            message: format!(
                "{} in path records",
                plural(result.error_count(), "error", "errors")
            ),
            help: Some("Each record needs a whole number of argument groups".to_string()),
        });
    }

    let options = StringifyOptions {
        precision: args.precision,
        disable_space_after_flags: args.no_space_after_flags,
    };
    println!("{}", stringify_path_data(&items, &options));
    Ok(())
}
