//! pathmin - SVG path data parser and minifier
//!
//! Parses the compact path mini-language used by vector graphics documents
//! into command records and writes records back as the shortest text that
//! renders the same.
//!
//! ```
//! use pathmin::{optimize_path_data, StringifyOptions};
//!
//! let options = StringifyOptions::default().with_precision(2);
//! assert_eq!(optimize_path_data("M 0,0 L 10,0 L 10,10.004 z", &options), "M0 0 10 0 10 10z");
//! ```

pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod render;
pub mod types;
pub mod validation;

pub use discovery::{discover, discover_paths, DiscoveryResult, Manifest, PathFile, ScanResult};
pub use error::{PathminError, Result};
pub use parser::{parse_path_data, parse_path_data_with_outcome, ParseOutcome, Stop, StopReason};
pub use render::{stringify_path_data, StringifyOptions};
pub use types::{Command, PathData, PathItem};
pub use validation::{validate_items, validate_path_file, Diagnostic, Severity, ValidationResult};

/// Parse `text` and serialize it again in minimal form.
///
/// Anything after the first syntax error is dropped, as a renderer would.
pub fn optimize_path_data(text: &str, options: &StringifyOptions) -> String {
    stringify_path_data(&parse_path_data(text), options)
}
